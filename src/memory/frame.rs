use crate::common::types::{PageNum, ProcessId, Timestamp};

/// A (process, page) pair resident in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub pid: ProcessId,
    pub page: PageNum,
}

/// One physical page slot.
///
/// A free frame has no occupant and all metadata reset to zero; the
/// timestamps and reference count are only meaningful while occupied.
#[derive(Debug, Clone)]
pub struct Frame {
    pub occupant: Option<Occupant>,
    /// When the occupant was loaded (FIFO victim key).
    pub brought_at: Timestamp,
    /// Most recent access (LRU victim key).
    pub last_referenced: Timestamp,
    /// Accesses since load (LFU/MFU victim key).
    pub ref_count: u32,
}

impl Frame {
    pub(crate) fn empty() -> Self {
        Self {
            occupant: None,
            brought_at: 0,
            last_referenced: 0,
            ref_count: 0,
        }
    }

    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    pub(crate) fn load(&mut self, pid: ProcessId, page: PageNum, now: Timestamp) {
        self.occupant = Some(Occupant { pid, page });
        self.brought_at = now;
        self.last_referenced = now;
        self.ref_count = 1;
    }

    pub(crate) fn touch(&mut self, now: Timestamp) {
        self.last_referenced = now;
        self.ref_count += 1;
    }

    pub(crate) fn clear(&mut self) {
        *self = Frame::empty();
    }
}
