pub mod error;
pub mod frame;
pub mod policy;
pub mod table;

pub use error::FrameTableError;
pub use frame::{Frame, Occupant};
pub use table::FrameTable;
