//! Error types for Parkbook Core

use crate::limits::ValidationError;
use crate::park::ParkId;
use crate::visitor::VisitorId;
use thiserror::Error;

/// Result type alias using Parkbook's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Parkbook error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The handle's index is past the end of the visitor arena. Handles are
    /// untagged indices, so one taken from another `World` is only caught
    /// when it is out of range here.
    #[error("Visitor not found: {0}")]
    VisitorNotFound(VisitorId),

    /// The handle's index is past the end of the park arena
    #[error("Park not found: {0}")]
    ParkNotFound(ParkId),
}

impl Error {
    /// Whether this error came from a length/format check
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
