use thiserror::Error;

use crate::models::thermal::solar_oven::core::{ValidationError, sweep::SweepError};

/// Errors that can occur while serving a surface request.
///
/// The session's current surface is left untouched by any of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// The requested configuration is invalid; no simulation was run.
    #[error("invalid configuration")]
    Validation(#[from] ValidationError),

    /// The sweep failed.
    #[error("surface generation failed")]
    Sweep(#[from] SweepError),
}
