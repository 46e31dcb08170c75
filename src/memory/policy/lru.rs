use crate::common::types::{FrameId, Timestamp};
use crate::memory::table::FrameTable;

use super::EvictionPolicy;

/// Least-recently-used: evict the frame with the oldest access timestamp.
/// Ties go to the first such frame in table order.
pub struct LruPolicy;

impl EvictionPolicy for LruPolicy {
    fn select_victim(&mut self, table: &FrameTable) -> Option<FrameId> {
        let mut victim: Option<(FrameId, Timestamp)> = None;
        for (id, frame) in table.iter() {
            if frame.is_free() {
                continue;
            }
            match victim {
                Some((_, best)) if frame.last_referenced >= best => {}
                _ => victim = Some((id, frame.last_referenced)),
            }
        }
        victim.map(|(id, _)| id)
    }
}
