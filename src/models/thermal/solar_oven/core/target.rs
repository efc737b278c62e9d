//! Insulator thickness needed to reach the goal temperature.
//!
//! At a fixed absorber height the interior temperature rises with insulator
//! thickness, so the thinnest insulation meeting the goal is found by
//! bisection between no insulation and a caller-supplied maximum.

mod config;
mod error;
mod problem;

pub use config::TargetConfig;
pub use error::TargetError;

use tracing::debug;
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        f64::{Length, TemperatureInterval},
        length::meter,
        temperature_interval::kelvin as delta_kelvin,
    },
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{Geometry, SolarOven};

use problem::GoalTemperatureProblem;

/// Finds the insulator thickness at which `oven` reaches its goal
/// temperature, for absorber height `h`.
///
/// Returns zero when the goal is met without insulation.
///
/// # Errors
///
/// Returns [`TargetError::Unreachable`] if `max_thickness` falls short of the
/// goal, [`TargetError::MaxIters`] if bisection does not converge, or the
/// underlying evaluation or solver error.
pub fn target_insulator_thickness(
    oven: &SolarOven,
    h: Length,
    max_thickness: Constrained<Length, StrictlyPositive>,
    config: &TargetConfig,
) -> Result<Length, TargetError> {
    let goal = oven.physics().goal;
    let max_thickness = max_thickness.into_inner();

    let bare = oven.call(&Geometry::new(h, Length::ZERO))?;
    if bare.interior_temperature >= goal {
        return Ok(Length::ZERO);
    }

    let best = oven.call(&Geometry::new(h, max_thickness))?;
    if best.interior_temperature < goal {
        return Err(TargetError::Unreachable {
            goal,
            best: best.interior_temperature,
        });
    }

    let problem = GoalTemperatureProblem::new(h, goal);

    let solution = bisection::solve(
        oven,
        &problem,
        [0.0, max_thickness.get::<meter>()],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Steer away from geometries the oven rejects.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(TargetError::MaxIters {
            residual: TemperatureInterval::new::<delta_kelvin>(solution.residual),
            iters: solution.iters,
        });
    }

    let thickness = solution.snapshot.output.geometry.insulator_thickness;
    debug!(?h, ?thickness, iters = solution.iters, "target thickness found");
    Ok(thickness)
}
