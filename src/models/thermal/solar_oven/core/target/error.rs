use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature};

use crate::models::thermal::solar_oven::core::EvaluationError;

/// Errors that can occur while solving for a target insulator thickness.
#[derive(Debug, Error)]
pub enum TargetError {
    /// The oven model rejected a geometry.
    #[error("oven evaluation failed")]
    Evaluation(#[from] EvaluationError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// Even the thickest allowed insulation falls short of the goal.
    #[error("goal {goal:?} unreachable: best interior temperature {best:?}")]
    Unreachable {
        goal: ThermodynamicTemperature,

        /// Interior temperature at the maximum thickness.
        best: ThermodynamicTemperature,
    },

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best interior temperature residual achieved.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
