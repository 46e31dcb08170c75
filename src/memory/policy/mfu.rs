use crate::common::types::FrameId;
use crate::memory::table::FrameTable;

use super::EvictionPolicy;

/// Most-frequently-used: evict the frame with the largest reference count
/// since load. Ties go to the first such frame in table order.
pub struct MfuPolicy;

impl EvictionPolicy for MfuPolicy {
    fn select_victim(&mut self, table: &FrameTable) -> Option<FrameId> {
        let mut victim: Option<(FrameId, u32)> = None;
        for (id, frame) in table.iter() {
            if frame.is_free() {
                continue;
            }
            match victim {
                Some((_, best)) if frame.ref_count <= best => {}
                _ => victim = Some((id, frame.ref_count)),
            }
        }
        victim.map(|(id, _)| id)
    }
}
