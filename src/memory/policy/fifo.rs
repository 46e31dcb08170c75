use crate::common::types::{FrameId, Timestamp};
use crate::memory::table::FrameTable;

use super::EvictionPolicy;

/// First-in-first-out: evict the frame whose occupant was loaded earliest.
/// Ties go to the first such frame in table order.
pub struct FifoPolicy;

impl EvictionPolicy for FifoPolicy {
    fn select_victim(&mut self, table: &FrameTable) -> Option<FrameId> {
        let mut victim: Option<(FrameId, Timestamp)> = None;
        for (id, frame) in table.iter() {
            if frame.is_free() {
                continue;
            }
            match victim {
                Some((_, best)) if frame.brought_at >= best => {}
                _ => victim = Some((id, frame.brought_at)),
            }
        }
        victim.map(|(id, _)| id)
    }
}
