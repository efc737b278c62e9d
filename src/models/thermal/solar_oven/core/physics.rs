//! Physical models evaluated at each cell of a performance surface.

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        f64::{HeatFluxDensity, Length, ThermodynamicTemperature, Volume},
        heat_flux_density::watt_per_square_meter,
        length::centimeter,
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
        volume::liter,
    },
};

use super::{Configuration, Metric, design::Design};

/// Maps an oven configuration and geometry to a scalar performance value.
///
/// Implementations must be pure: the same inputs always yield the same
/// value, and each [`Metric`] is computed independently of the others.
pub trait PhysicalModel {
    /// Evaluates `metric` for one geometry.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] if the model rejects the geometry or
    /// cannot produce a finite value.
    fn evaluate(
        &self,
        config: &Configuration,
        h: Length,
        insulator_thickness: Length,
        metric: Metric,
    ) -> Result<f64, EvaluationError>;
}

impl<M: PhysicalModel + ?Sized> PhysicalModel for &M {
    fn evaluate(
        &self,
        config: &Configuration,
        h: Length,
        insulator_thickness: Length,
        metric: Metric,
    ) -> Result<f64, EvaluationError> {
        (**self).evaluate(config, h, insulator_thickness, metric)
    }
}

/// Errors that can occur while evaluating a [`PhysicalModel`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// A geometry value is `NaN` or infinite.
    #[error("non-finite geometry: h={h:?}, insulator_thickness={insulator_thickness:?}")]
    NonFiniteInput {
        h: Length,
        insulator_thickness: Length,
    },

    /// The model produced a `NaN` or infinite value.
    #[error("{metric} evaluated to {value}")]
    NonFiniteOutput { metric: Metric, value: f64 },

    /// The model cannot be evaluated with its current parameters.
    ///
    /// [`OvenPhysics`] raises this for a non-positive reflector length,
    /// chamber volume, or minimum absorber height. Other models may use it
    /// for any geometry they reject.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },
}

/// Absorber height and insulator thickness of one oven design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub h: Length,
    pub insulator_thickness: Length,
}

impl Geometry {
    #[must_use]
    pub fn new(h: Length, insulator_thickness: Length) -> Self {
        Self {
            h,
            insulator_thickness,
        }
    }
}

/// The default solar oven heat-balance model and its constants.
///
/// # Domain
///
/// Non-finite geometry is rejected. Finite geometry is clamped: the absorber
/// height is raised to at least [`min_absorber_height`](Self::min_absorber_height)
/// (the chamber side grows without bound as `h` approaches zero), and a
/// negative insulator thickness is treated as no insulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OvenPhysics {
    /// Reflector length as a multiple of the window side.
    pub reflector_ml: f64,

    /// Interior chamber volume, held fixed as the height varies.
    pub chamber_volume: Volume,

    /// Smallest absorber height the model evaluates.
    pub min_absorber_height: Length,

    /// Ambient air temperature.
    pub ambient: ThermodynamicTemperature,

    /// Solar irradiance on the window, at normal incidence.
    pub solar_flux: HeatFluxDensity,

    /// Cooking temperature the [`Metric::Score`] targets.
    pub goal: ThermodynamicTemperature,

    /// Weight of cost, per dollar, in [`Metric::Score`].
    pub cost_weight: f64,
}

impl Default for OvenPhysics {
    fn default() -> Self {
        Self {
            reflector_ml: 3.0,
            chamber_volume: Volume::new::<liter>(1.0),
            min_absorber_height: Length::new::<centimeter>(1.0),
            ambient: ThermodynamicTemperature::new::<degree_celsius>(21.0),
            solar_flux: HeatFluxDensity::new::<watt_per_square_meter>(1000.0),
            goal: ThermodynamicTemperature::new::<degree_fahrenheit>(400.0),
            cost_weight: 4.0,
        }
    }
}

impl OvenPhysics {
    /// Brings a geometry into the model domain.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::NonFiniteInput`] if either length is not
    /// finite, or [`EvaluationError::OutOfDomain`] if the model's own
    /// parameters leave no domain to evaluate in.
    pub fn resolve(&self, geometry: Geometry) -> Result<Geometry, EvaluationError> {
        self.check_parameters()?;

        let Geometry {
            h,
            insulator_thickness,
        } = geometry;

        if !(h.is_finite() && insulator_thickness.is_finite()) {
            return Err(EvaluationError::NonFiniteInput {
                h,
                insulator_thickness,
            });
        }

        Ok(Geometry {
            h: h.max(self.min_absorber_height),
            insulator_thickness: insulator_thickness.max(Length::ZERO),
        })
    }

    fn check_parameters(&self) -> Result<(), EvaluationError> {
        let out_of_domain = |context: String| Err(EvaluationError::OutOfDomain { context });

        if !(self.reflector_ml.is_finite() && self.reflector_ml > 0.0) {
            return out_of_domain(format!("reflector length multiplier {}", self.reflector_ml));
        }
        if !(self.chamber_volume.is_finite() && self.chamber_volume > Volume::ZERO) {
            return out_of_domain(format!("chamber volume {:?}", self.chamber_volume));
        }
        if !(self.min_absorber_height.is_finite() && self.min_absorber_height > Length::ZERO) {
            return out_of_domain(format!(
                "minimum absorber height {:?}",
                self.min_absorber_height
            ));
        }
        Ok(())
    }

    pub(super) fn design<'a>(
        &'a self,
        config: &'a Configuration,
        geometry: Geometry,
    ) -> Result<Design<'a>, EvaluationError> {
        Ok(Design::new(config, self, self.resolve(geometry)?))
    }
}

impl PhysicalModel for OvenPhysics {
    fn evaluate(
        &self,
        config: &Configuration,
        h: Length,
        insulator_thickness: Length,
        metric: Metric,
    ) -> Result<f64, EvaluationError> {
        let design = self.design(config, Geometry::new(h, insulator_thickness))?;

        let value = match metric {
            Metric::Tio => design.interior_temperature().get::<degree_celsius>(),
            Metric::Cost => design.cost().total(),
            Metric::PerformanceIndex => performance_index(
                design.interior_temperature(),
                self.ambient,
                design.cost().total(),
            ),
            Metric::Score => score(self, design.interior_temperature(), design.cost().total()),
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvaluationError::NonFiniteOutput { metric, value })
        }
    }
}

/// Temperature rise over ambient per dollar.
pub(super) fn performance_index(
    interior: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
    cost: f64,
) -> f64 {
    (interior.get::<degree_celsius>() - ambient.get::<degree_celsius>()) / cost
}

/// Distance from the goal temperature plus weighted cost.
pub(super) fn score(physics: &OvenPhysics, interior: ThermodynamicTemperature, cost: f64) -> f64 {
    let miss = physics.goal.get::<degree_celsius>() - interior.get::<degree_celsius>();
    miss.abs() + physics.cost_weight * cost
}
