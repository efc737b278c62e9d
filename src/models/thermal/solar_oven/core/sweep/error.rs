use thiserror::Error;
use uom::si::f64::Length;

use super::RangeError;
use crate::models::thermal::solar_oven::core::EvaluationError;

/// Errors that can occur while generating a performance surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// A sweep axis is malformed.
    #[error("invalid sweep range")]
    InvalidRange(#[from] RangeError),

    /// The grid has more cells than [`ResultSet::MAX_POINTS`](super::ResultSet::MAX_POINTS).
    #[error("grid of {rows}x{columns} cells exceeds the limit of {limit}")]
    TooManyCells {
        rows: usize,
        columns: usize,
        limit: usize,
    },

    /// The physical model could not evaluate one grid cell.
    ///
    /// The sweep fails as a whole; no partial surface is returned.
    #[error("model evaluation failed at cell {index} (h={h:?}, insulator_thickness={insulator_thickness:?})")]
    ModelEvaluation {
        /// Position of the cell in canonical grid order.
        index: usize,
        h: Length,
        insulator_thickness: Length,
        #[source]
        source: EvaluationError,
    },
}
