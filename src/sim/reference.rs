use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::types::PageNum;

/// Locality-biased next-page generator.
///
/// With probability `locality_bias` the next page is within one of the
/// current page; otherwise it is drawn uniformly from the process's page
/// range, resampled until it lands outside the `current ± 1` band. The
/// split is what separates the policies' hit ratios: mostly sequential
/// access with occasional long jumps.
pub struct ReferenceGenerator {
    rng: StdRng,
    locality_bias: f64,
}

impl ReferenceGenerator {
    pub fn new(seed: u64, locality_bias: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            locality_bias,
        }
    }

    /// Next page for a process at `current` with pages `0..ceiling`.
    pub fn next_page(&mut self, current: PageNum, ceiling: PageNum) -> PageNum {
        debug_assert!(ceiling > 0);
        // A ceiling of 3 or less cannot satisfy the exclusion band, so the
        // far-jump resample loop would never terminate; fall back to the
        // local step. Unreachable with the reference workload (ceiling >= 5).
        if ceiling <= 3 || self.rng.gen_bool(self.locality_bias) {
            let step = self.rng.gen_range(0..3) as i64 - 1;
            let next = (current as i64 + step).clamp(0, ceiling as i64 - 1);
            next as PageNum
        } else {
            loop {
                let candidate = self.rng.gen_range(0..ceiling);
                if candidate.abs_diff(current) > 1 {
                    return candidate;
                }
            }
        }
    }
}
