use twine_core::Model;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

use super::{
    Configuration, CostBreakdown, EvaluationError, Geometry, Metric, OvenPhysics,
    design::Design,
    physics::{performance_index, score},
};

/// A configured solar oven, callable at any [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarOven {
    config: Configuration,
    physics: OvenPhysics,
}

/// Every performance output of one oven design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Performance {
    /// Geometry actually evaluated, after clamping into the model domain.
    pub geometry: Geometry,
    pub interior_temperature: ThermodynamicTemperature,
    pub cost: CostBreakdown,
}

impl SolarOven {
    #[must_use]
    pub fn new(config: Configuration, physics: OvenPhysics) -> Self {
        Self { config, physics }
    }

    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    #[must_use]
    pub fn physics(&self) -> &OvenPhysics {
        &self.physics
    }
}

impl Performance {
    /// Temperature rise over `ambient` per dollar spent.
    #[must_use]
    pub fn performance_index(&self, ambient: ThermodynamicTemperature) -> f64 {
        performance_index(self.interior_temperature, ambient, self.cost.total())
    }

    /// Distance from `physics.goal` plus weighted cost; lower is better.
    #[must_use]
    pub fn score(&self, physics: &OvenPhysics) -> f64 {
        score(physics, self.interior_temperature, self.cost.total())
    }

    /// Returns the value `metric` reports for this design.
    #[must_use]
    pub fn metric(&self, metric: Metric, physics: &OvenPhysics) -> f64 {
        match metric {
            Metric::Tio => self.interior_temperature.get::<degree_celsius>(),
            Metric::Cost => self.cost.total(),
            Metric::PerformanceIndex => self.performance_index(physics.ambient),
            Metric::Score => self.score(physics),
        }
    }
}

impl Model for SolarOven {
    type Input = Geometry;
    type Output = Performance;
    type Error = EvaluationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let geometry = self.physics.resolve(*input)?;
        let design = Design::new(&self.config, &self.physics, geometry);
        Ok(Performance {
            geometry,
            interior_temperature: design.interior_temperature(),
            cost: design.cost(),
        })
    }
}
