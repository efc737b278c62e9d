use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, TemperatureInterval},
    length::meter,
    temperature_interval::kelvin as delta_kelvin,
};

/// Solver configuration for the goal-temperature thickness search.
#[derive(Debug, Clone, Copy)]
pub struct TargetConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on insulator thickness.
    pub thickness_tol: Length,

    /// Absolute tolerance on the interior temperature residual.
    pub temperature_tol: TemperatureInterval,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            thickness_tol: Length::new::<meter>(1e-9),
            temperature_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
        }
    }
}

impl TargetConfig {
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.thickness_tol.get::<meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.temperature_tol.get::<delta_kelvin>(),
        }
    }
}
