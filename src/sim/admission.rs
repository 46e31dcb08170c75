use crate::common::types::{FrameId, Timestamp};
use crate::memory::table::FrameTable;
use crate::sim::process::Process;

/// Admission gate for newly-arrived processes.
///
/// A process is only given its first frame while at least
/// `free_frame_threshold` frames are free, so a nearly-full pool is not
/// thrashed by fresh arrivals.
pub struct AdmissionController {
    free_frame_threshold: usize,
}

impl AdmissionController {
    pub fn new(free_frame_threshold: usize) -> Self {
        Self {
            free_frame_threshold,
        }
    }

    /// Admit `proc` by loading its first page into a free frame. Returns
    /// the loaded frame, or `None` if the free-frame gate refused.
    pub fn try_admit(
        &self,
        table: &mut FrameTable,
        proc: &Process,
        now: Timestamp,
    ) -> Option<FrameId> {
        if !table.has_at_least_n_free(self.free_frame_threshold) {
            return None;
        }
        let frame = table.allocate_free_frame()?;
        table.load(frame, proc.id, proc.current_page, now);
        Some(frame)
    }
}
