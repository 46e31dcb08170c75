use thiserror::Error;

use crate::memory::error::FrameTableError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid workload: {0}")]
    InvalidWorkload(String),
    #[error("frame table error: {0}")]
    FrameTable(#[from] FrameTableError),
}
