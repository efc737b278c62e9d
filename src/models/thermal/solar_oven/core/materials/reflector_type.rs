use uom::si::f64::{Area, Length};

use crate::support::constraint::{Constrained, StrictlyPositive};

closed_set! {
    /// Shape of the reflector panels surrounding the window.
    pub enum ReflectorType in "reflector type" {
        Rectangular => "Rectangular",
        Trapezoidal => "Trapezoidal",
    }
}

impl ReflectorType {
    /// Concentration gain of the reflector array.
    ///
    /// `ml` is the reflector length as a multiple of the window side and
    /// `alpha` the panel angle, in radians.
    /// A bare window has a gain of one.
    #[must_use]
    pub fn gain(
        self,
        count: Constrained<u8, StrictlyPositive>,
        reflectivity: f64,
        ml: f64,
        alpha: f64,
    ) -> f64 {
        let per_panel = f64::from(count.into_inner()) * reflectivity * ml * alpha.sin();
        match self {
            Self::Rectangular => 1.0 + per_panel,
            Self::Trapezoidal => 1.0 + per_panel * (1.0 + ml * alpha.sin()),
        }
    }

    /// Total panel area of `count` reflectors around a square window of side `window`.
    #[must_use]
    pub fn area(self, ml: f64, window: Length, count: Constrained<u8, StrictlyPositive>) -> Area {
        let count = f64::from(count.into_inner());
        let length = window * ml;
        match self {
            Self::Rectangular => length * window * count,
            Self::Trapezoidal => (length * length - window * window) * count / 4.0,
        }
    }
}
