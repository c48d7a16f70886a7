//! Error types for route planning input validation.

use thiserror::Error;

/// Errors raised while validating route inputs.
///
/// Only inputs that must be valid up front produce these: the starting
/// point, the departure time, and per-store fields checked at the request
/// boundary. Infeasibility during optimization is never an error; it is
/// reported through the `UNREACHABLE` status on the store itself.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid coordinates: {text:?}")]
    InvalidCoordinates { text: String },

    #[error("invalid time of day: {text:?}")]
    InvalidTime { text: String },

    #[error("invalid store at index {index}: {reason}")]
    InvalidStore { index: usize, reason: String },
}
