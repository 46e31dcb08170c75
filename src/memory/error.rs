use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FrameTableError {
    #[error("eviction requested but no frame is occupied")]
    NoOccupiedFrames,
}
