use serde::Serialize;

/// Counters collected over one simulation run.
///
/// `swaps` counts every frame load: initial admissions, replacement loads,
/// and execution-phase reloads. Processes still resident when the run ends
/// are not counted in `completed`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RunStats {
    pub swaps: u64,
    pub hits: u64,
    pub misses: u64,
    pub completed: u64,
}

impl RunStats {
    /// `hits / (hits + misses)`, or `0.0` when no references occurred.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
