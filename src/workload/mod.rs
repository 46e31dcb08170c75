use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::common::types::{PageNum, ProcessId, Tick};
use crate::sim::process::Process;

/// Page-count ceilings processes are drawn from.
pub const PAGE_CEILINGS: [PageNum; 4] = [5, 11, 17, 31];

/// Arrival times are drawn from `0..ARRIVAL_WINDOW`.
pub const ARRIVAL_WINDOW: Tick = 60;

/// Service times are drawn from `1..=MAX_SERVICE`.
pub const MAX_SERVICE: Tick = 5;

/// Generate `count` random processes, sorted by arrival time. Stable sort:
/// processes arriving at the same tick keep their generation order.
pub fn generate(count: usize, seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut procs: Vec<Process> = (0..count)
        .map(|i| {
            let arrival = rng.gen_range(0..ARRIVAL_WINDOW);
            let service = rng.gen_range(1..=MAX_SERVICE);
            let ceiling = PAGE_CEILINGS
                .choose(&mut rng)
                .copied()
                .unwrap_or(PAGE_CEILINGS[0]);
            Process::new(i as ProcessId, arrival, service, ceiling)
        })
        .collect();
    procs.sort_by_key(|p| p.arrival);
    procs
}
