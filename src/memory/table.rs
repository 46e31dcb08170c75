use crate::common::types::{process_label, FrameId, PageNum, ProcessId, Timestamp};
use crate::memory::frame::Frame;

/// Fixed-capacity pool of physical frames.
///
/// The table holds all frame state and nothing else: victim selection lives
/// in `memory::policy` and call ordering (allocate before evict, admission
/// gate before first load) is the caller's responsibility.
pub struct FrameTable {
    frames: Vec<Frame>,
}

impl FrameTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: vec![Frame::empty(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, id: FrameId) -> &Frame {
        &self.frames[id as usize]
    }

    /// Frames in table order, paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (FrameId, &Frame)> {
        self.frames
            .iter()
            .enumerate()
            .map(|(i, f)| (i as FrameId, f))
    }

    pub fn free_frame_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_free()).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.frames.len() - self.free_frame_count()
    }

    /// Short-circuiting check for the admission gate.
    pub fn has_at_least_n_free(&self, n: usize) -> bool {
        let mut remaining = n;
        for frame in &self.frames {
            if remaining == 0 {
                return true;
            }
            if frame.is_free() {
                remaining -= 1;
            }
        }
        remaining == 0
    }

    /// Frame currently holding `(pid, page)`, if resident. Absence is not
    /// an error; it is how the driver detects a page fault.
    pub fn find_frame(&self, pid: ProcessId, page: PageNum) -> Option<FrameId> {
        self.iter()
            .find(|(_, f)| f.occupant.is_some_and(|o| o.pid == pid && o.page == page))
            .map(|(id, _)| id)
    }

    /// First free frame in table order, if any.
    pub fn allocate_free_frame(&self) -> Option<FrameId> {
        self.iter().find(|(_, f)| f.is_free()).map(|(id, _)| id)
    }

    /// Install `(pid, page)` into `frame`. Overwrites unconditionally; the
    /// caller must pass a frame known to be free or freshly vacated.
    pub fn load(&mut self, frame: FrameId, pid: ProcessId, page: PageNum, now: Timestamp) {
        self.frames[frame as usize].load(pid, page, now);
    }

    /// Record a hit on an occupied frame.
    pub fn touch(&mut self, frame: FrameId, now: Timestamp) {
        self.frames[frame as usize].touch(now);
    }

    /// Reset a frame to the free state.
    pub fn vacate(&mut self, frame: FrameId) {
        self.frames[frame as usize].clear();
    }

    /// Free every frame owned by `pid`. Idempotent; a pid owning no frames
    /// is a no-op. Returns the number of frames freed.
    pub fn release(&mut self, pid: ProcessId) -> usize {
        let mut freed = 0;
        for frame in &mut self.frames {
            if frame.occupant.is_some_and(|o| o.pid == pid) {
                frame.clear();
                freed += 1;
            }
        }
        freed
    }

    /// Diagnostic projection: occupant label per frame in table order, `.`
    /// for free frames. Not a correctness surface.
    pub fn memory_map(&self) -> String {
        self.frames
            .iter()
            .map(|f| match f.occupant {
                Some(o) => process_label(o.pid),
                None => ".".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
