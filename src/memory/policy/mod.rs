use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::common::types::FrameId;
use crate::memory::error::FrameTableError;
use crate::memory::table::FrameTable;

mod fifo;
mod lfu;
mod lru;
mod mfu;
mod random;

pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;
pub use mfu::MfuPolicy;
pub use random::RandomPolicy;

/// Page-replacement policy the simulation driver is parameterized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Lfu,
    Mfu,
    Random,
}

impl PolicyKind {
    pub fn all() -> [PolicyKind; 5] {
        [
            PolicyKind::Fifo,
            PolicyKind::Lru,
            PolicyKind::Lfu,
            PolicyKind::Mfu,
            PolicyKind::Random,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Lfu => "LFU",
            PolicyKind::Mfu => "MFU",
            PolicyKind::Random => "Random",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Victim selection over occupied frames.
///
/// Policies only pick; they never mutate the table. The shared vacate step
/// lives in [`evict_one`] so all five variants keep one contract.
pub trait EvictionPolicy {
    /// Pick one occupied frame to reclaim, or `None` if the policy declines.
    fn select_victim(&mut self, table: &FrameTable) -> Option<FrameId>;
}

pub fn create_policy(kind: PolicyKind, seed: u64) -> Box<dyn EvictionPolicy> {
    match kind {
        PolicyKind::Fifo => Box::new(FifoPolicy),
        PolicyKind::Lru => Box::new(LruPolicy),
        PolicyKind::Lfu => Box::new(LfuPolicy),
        PolicyKind::Mfu => Box::new(MfuPolicy),
        PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
    }
}

/// Select exactly one occupied frame and vacate it.
///
/// Invoking this on an all-free table is a protocol violation (eviction is
/// only reached after `allocate_free_frame` failed) and is fatal. A policy
/// declining to pick while frames are occupied yields `Ok(None)`; the caller
/// treats that reference as stalled.
pub fn evict_one(
    table: &mut FrameTable,
    policy: &mut dyn EvictionPolicy,
) -> Result<Option<FrameId>, FrameTableError> {
    if table.occupied_count() == 0 {
        return Err(FrameTableError::NoOccupiedFrames);
    }
    match policy.select_victim(table) {
        Some(victim) => {
            table.vacate(victim);
            Ok(Some(victim))
        }
        None => Ok(None),
    }
}
