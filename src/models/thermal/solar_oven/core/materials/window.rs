use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer},
    heat_transfer::watt_per_square_meter_kelvin,
};

use crate::models::thermal::solar_oven::core::trendline::LnTrendline;

closed_set! {
    /// Glazing covering the top of the oven chamber.
    pub enum WindowMaterial in "window" {
        SingleMylar => "Single Mylar",
        DoubleMylar => "Double Mylar",
    }
}

/// Measured window heat-loss coefficients, W/(m²·K), paired with the
/// interior temperature, °C, at which each was measured.
pub type HeatLossTable = [(f64, f64); 6];

const SINGLE_MYLAR_LOSSES: HeatLossTable = [
    (10.10, 66.0),
    (13.90, 93.0),
    (18.66, 121.0),
    (24.34, 149.0),
    (31.60, 177.0),
    (40.11, 204.0),
];

const DOUBLE_MYLAR_LOSSES: HeatLossTable = [
    (4.88, 66.0),
    (6.69, 93.0),
    (8.96, 121.0),
    (11.74, 149.0),
    (15.20, 177.0),
    (19.35, 204.0),
];

impl WindowMaterial {
    /// Fraction of solar radiation transmitted through the window.
    ///
    /// Each mylar sheet transmits 92%.
    #[must_use]
    pub fn transmissivity(self) -> f64 {
        match self {
            Self::SingleMylar => 0.92,
            Self::DoubleMylar => 0.92 * 0.92,
        }
    }

    /// Material cost, in dollars, of glazing `area`.
    #[must_use]
    pub fn cost(self, area: Area) -> f64 {
        let sheets = match self {
            Self::SingleMylar => 1.0,
            Self::DoubleMylar => 2.0,
        };
        4.144_393_315_5 * sheets * area.get::<square_meter>()
    }

    /// Heat-loss coefficients at which the window was characterized.
    pub fn heat_loss_coefficients(self) -> impl Iterator<Item = HeatTransfer> {
        self.heat_loss_table()
            .into_iter()
            .map(|(u, _)| HeatTransfer::new::<watt_per_square_meter_kelvin>(u))
    }

    /// Measured `(U_w, T)` pairs for this window.
    #[must_use]
    pub fn heat_loss_table(self) -> HeatLossTable {
        match self {
            Self::SingleMylar => SINGLE_MYLAR_LOSSES,
            Self::DoubleMylar => DOUBLE_MYLAR_LOSSES,
        }
    }

    /// Fitted window temperature as a function of heat-loss coefficient,
    /// `T = a·ln(U_w) + b`.
    #[must_use]
    pub fn heat_loss_trendline(self) -> LnTrendline {
        match self {
            Self::SingleMylar => LnTrendline::new(100.509_293_9, -170.007_351_9),
            Self::DoubleMylar => LnTrendline::new(100.595_353_4, -96.797_161_42),
        }
    }
}
