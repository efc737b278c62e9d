//! Problem formulation for the goal-temperature thickness search.

use std::convert::Infallible;

use twine_core::EquationProblem;
use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::meter,
    thermodynamic_temperature::kelvin,
};

use crate::models::thermal::solar_oven::core::{Geometry, Performance};

/// Varies insulator thickness at a fixed absorber height.
///
/// The residual is `interior_temperature - goal`, in kelvin.
pub(super) struct GoalTemperatureProblem {
    h: Length,
    goal: ThermodynamicTemperature,
}

impl GoalTemperatureProblem {
    pub(super) fn new(h: Length, goal: ThermodynamicTemperature) -> Self {
        Self { h, goal }
    }
}

impl EquationProblem<1> for GoalTemperatureProblem {
    type Input = Geometry;
    type Output = Performance;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Geometry::new(self.h, Length::new::<meter>(x[0])))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let interior = output.interior_temperature.get::<kelvin>();
        Ok([interior - self.goal.get::<kelvin>()])
    }
}
