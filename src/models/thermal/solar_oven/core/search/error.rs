use thiserror::Error;

use crate::models::thermal::solar_oven::core::{
    Configuration, EvaluationError, sweep::SweepError,
};

/// Errors that can occur while searching for the best design.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// No reflector lengths were given to search over.
    #[error("no reflector lengths to search")]
    NoReflectorLengths,

    /// Sweeping one configuration failed.
    #[error("search failed for {config:?} with reflector length {reflector_ml}")]
    Sweep {
        config: Configuration,
        reflector_ml: f64,
        #[source]
        source: SweepError,
    },

    /// The winning design could not be re-evaluated.
    #[error("best design could not be evaluated")]
    Evaluation(#[from] EvaluationError),
}
