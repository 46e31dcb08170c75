use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::common::types::FrameId;
use crate::memory::table::FrameTable;

use super::EvictionPolicy;

/// Uniform-random choice among occupied frames. Seeded so runs are
/// reproducible.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl EvictionPolicy for RandomPolicy {
    fn select_victim(&mut self, table: &FrameTable) -> Option<FrameId> {
        let occupied: Vec<FrameId> = table
            .iter()
            .filter(|(_, f)| !f.is_free())
            .map(|(id, _)| id)
            .collect();
        occupied.choose(&mut self.rng).copied()
    }
}
