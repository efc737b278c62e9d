use uom::si::{f64::Length, length::meter};

use crate::models::thermal::solar_oven::core::sweep::{AxisRange, SweepConfig};

/// Grid and execution settings for every surface a session builds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Absorber height axis.
    pub h_range: AxisRange,

    /// Insulator thickness axis.
    pub insulator_range: AxisRange,

    pub sweep: SweepConfig,
}

impl Default for SessionConfig {
    /// One-centimetre resolution over 5 to 40 cm of absorber height and up
    /// to 1.5 m of insulation.
    fn default() -> Self {
        Self {
            h_range: AxisRange::new_unchecked(
                Length::new::<meter>(0.05),
                Length::new::<meter>(0.40),
                36,
            ),
            insulator_range: AxisRange::new_unchecked(
                Length::new::<meter>(0.0),
                Length::new::<meter>(1.5),
                151,
            ),
            sweep: SweepConfig::default(),
        }
    }
}
