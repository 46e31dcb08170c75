// Demand-paged virtual memory simulator

pub mod common;
pub mod config;
pub mod memory;
pub mod sim;
pub mod workload;

// Re-export key items for convenient access
pub use config::SimConfig;
pub use memory::policy::{create_policy, evict_one, EvictionPolicy, PolicyKind};
pub use memory::{Frame, FrameTable, FrameTableError, Occupant};
pub use sim::driver::Simulation;
pub use sim::error::SimError;
pub use sim::process::{Process, ReadyQueue};
pub use sim::stats::RunStats;
