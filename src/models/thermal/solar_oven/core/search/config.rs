use uom::si::{f64::Length, length::meter};

use crate::models::thermal::solar_oven::core::sweep::{AxisRange, SweepConfig};

/// Search grid and execution settings for [`best_design`](super::best_design)
/// and [`rank_designs`](super::rank_designs).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Absorber height axis.
    pub h_range: AxisRange,

    /// Insulator thickness axis.
    pub insulator_range: AxisRange,

    /// Candidate reflector lengths, as multiples of the window side.
    ///
    /// The full grid is swept once per candidate.
    pub reflector_ml: Vec<f64>,

    /// Workers ranking configurations; each configuration is searched on a
    /// single thread.
    pub sweep: SweepConfig,
}

impl Default for SearchConfig {
    /// One-centimetre heights from 5 to 40 cm, five-centimetre insulation up
    /// to 1.5 m, and reflectors from half to three times the window side.
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
                31,
            ),
            reflector_ml: vec![0.5, 1.0, 1.5, 2.0, 2.5, 3.0],
            sweep: SweepConfig::default(),
        }
    }
}
