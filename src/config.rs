use crate::common::types::{Tick, Timestamp};

/// Tunable parameters for one simulation run.
///
/// The defaults reproduce the reference workload: 100 physical frames,
/// 60 ticks of simulated time, 10 reference sub-steps per tick, admission
/// gated on 4 free frames, and a 70% locality bias in page references.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of physical frames in the pool.
    pub frame_count: usize,
    /// Length of the run in ticks.
    pub total_duration: Tick,
    /// Reference opportunities per resident process within one tick.
    pub refs_per_tick: u32,
    /// Minimum free frames required before a new arrival is admitted.
    pub admission_free_frames: usize,
    /// Probability that the next page reference stays within one page of
    /// the current one.
    pub locality_bias: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_count: 100,
            total_duration: 60,
            refs_per_tick: 10,
            admission_free_frames: 4,
            locality_bias: 0.7,
        }
    }
}

impl SimConfig {
    /// Fine-grained timestamp for sub-step `k` of tick `t`.
    pub fn timestamp(&self, t: Tick, k: u32) -> Timestamp {
        t as Timestamp * self.refs_per_tick as Timestamp + k as Timestamp
    }
}
