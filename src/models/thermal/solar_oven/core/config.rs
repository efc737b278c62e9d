//! Validated oven configurations.

use itertools::iproduct;
use thiserror::Error;

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

use super::{
    closed_set::UnknownVariant,
    materials::{
        Absorber, BodyMaterial, Insulator, ReflectiveMaterial, ReflectorType, WindowMaterial,
    },
};

/// Material and reflector choices describing one solar oven.
///
/// A configuration is an immutable value: every material is a member of its
/// closed set and the reflector count is strictly positive by construction.
/// Geometry (absorber height, insulator thickness) is not part of the
/// configuration; it is swept by the surface engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Configuration {
    pub absorber: Absorber,
    pub window: WindowMaterial,
    pub inner_body: BodyMaterial,
    pub outer_body: BodyMaterial,
    pub insulator: Insulator,
    pub reflector_type: ReflectorType,
    pub reflective_material: ReflectiveMaterial,
    pub reflector_number: Constrained<u8, StrictlyPositive>,
}

/// An unvalidated configuration as received from outside the engine.
///
/// Materials are given by identifier (e.g. `"BCS"`, `"SingleMylar"`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawConfiguration {
    pub absorber: String,
    pub window: String,
    pub inner_body: String,
    pub outer_body: String,
    pub insulator: String,
    pub reflector_type: String,
    pub reflective_material: String,
    pub reflector_number: i64,
}

/// Errors raised while validating a [`RawConfiguration`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A material identifier is not a member of its closed set.
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),

    /// The reflector count is zero or negative.
    #[error("reflector number {value} must be strictly positive")]
    NonPositiveReflectorNumber {
        value: i64,
        #[source]
        source: ConstraintError,
    },

    /// The reflector count does not fit the supported range.
    #[error("reflector number {value} exceeds {}", u8::MAX)]
    TooManyReflectors { value: i64 },
}

impl Configuration {
    /// Validates a raw configuration.
    ///
    /// Performs no simulation work.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first field whose value is
    /// outside its closed set, or if the reflector count is not strictly positive.
    pub fn validate(raw: &RawConfiguration) -> Result<Self, ValidationError> {
        let absorber: Absorber = raw.absorber.parse()?;
        let window: WindowMaterial = raw.window.parse()?;
        let inner_body: BodyMaterial = raw.inner_body.parse()?;
        let outer_body: BodyMaterial = raw.outer_body.parse()?;
        let insulator: Insulator = raw.insulator.parse()?;
        let reflector_type: ReflectorType = raw.reflector_type.parse()?;
        let reflective_material: ReflectiveMaterial = raw.reflective_material.parse()?;

        let value = raw.reflector_number;
        let positive = StrictlyPositive::new(value)
            .map_err(|source| ValidationError::NonPositiveReflectorNumber { value, source })?;
        let reflector_number = u8::try_from(positive.into_inner())
            .ok()
            .and_then(|n| StrictlyPositive::new(n).ok())
            .ok_or(ValidationError::TooManyReflectors { value })?;

        Ok(Self {
            absorber,
            window,
            inner_body,
            outer_body,
            insulator,
            reflector_type,
            reflective_material,
            reflector_number,
        })
    }

    /// Enumerates every configuration with up to `max_reflectors` panels.
    ///
    /// The order is fixed: absorber, window, outer body, inner body,
    /// insulator, reflector type, reflective material, then reflector count,
    /// with the last varying fastest.
    pub fn variants(
        max_reflectors: Constrained<u8, StrictlyPositive>,
    ) -> impl Iterator<Item = Configuration> {
        let counts =
            (1..=max_reflectors.into_inner()).filter_map(|n| StrictlyPositive::new(n).ok());

        iproduct!(
            Absorber::variants().iter().copied(),
            WindowMaterial::variants().iter().copied(),
            BodyMaterial::variants().iter().copied(),
            BodyMaterial::variants().iter().copied(),
            Insulator::variants().iter().copied(),
            ReflectorType::variants().iter().copied(),
            ReflectiveMaterial::variants().iter().copied(),
            counts
        )
        .map(
            |(
                absorber,
                window,
                outer_body,
                inner_body,
                insulator,
                reflector_type,
                reflective_material,
                reflector_number,
            )| Configuration {
                absorber,
                window,
                inner_body,
                outer_body,
                insulator,
                reflector_type,
                reflective_material,
                reflector_number,
            },
        )
    }
}

impl From<&Configuration> for RawConfiguration {
    fn from(config: &Configuration) -> Self {
        Self {
            absorber: config.absorber.identifier().to_owned(),
            window: config.window.identifier().to_owned(),
            inner_body: config.inner_body.identifier().to_owned(),
            outer_body: config.outer_body.identifier().to_owned(),
            insulator: config.insulator.identifier().to_owned(),
            reflector_type: config.reflector_type.identifier().to_owned(),
            reflective_material: config.reflective_material.identifier().to_owned(),
            reflector_number: i64::from(config.reflector_number.into_inner()),
        }
    }
}
