pub mod admission;
pub mod driver;
pub mod error;
pub mod process;
pub mod reference;
pub mod stats;

pub use admission::AdmissionController;
pub use driver::Simulation;
pub use error::SimError;
pub use process::{Process, ReadyQueue};
pub use reference::ReferenceGenerator;
pub use stats::RunStats;
