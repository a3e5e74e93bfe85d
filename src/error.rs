use std::collections::TryReserveError;

use thiserror::Error;

use crate::{Dimensions, Location};

/// Errors produced by the simulation engine.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Both sides of the board must be at least one cell long.
    #[error("invalid dimensions: height {height}, width {width}")]
    InvalidDimensions { height: usize, width: usize },

    /// A location lies outside the board.
    #[error("location {location} is outside of the {dimensions} board")]
    OutOfBounds {
        location: Location,
        dimensions: Dimensions,
    },

    /// The board (or a clone of it) could not be allocated.
    #[error("unable to allocate board: {0}")]
    Allocation(#[from] TryReserveError),

    /// The streaming task did not finish normally.
    #[error("streaming task aborted: {0}")]
    StreamAborted(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
