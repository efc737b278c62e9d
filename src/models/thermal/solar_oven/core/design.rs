//! Steady-state heat balance of a single oven design.
//!
//! The chamber is a square box of fixed volume: choosing the absorber height
//! `h` fixes the window side `L = sqrt(V / h)`. Sunlight enters through the
//! window (boosted by the reflectors) and leaves through the walls and the
//! window. The interior temperature is found where the oven's energy balance
//! meets the window's measured heat-loss curve.

use uom::si::{
    f64::{
        Area, HeatTransfer, Length, Power, TemperatureInterval, ThermalConductance,
        ThermodynamicTemperature, Volume,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    volume::cubic_meter,
};

use super::{Configuration, Geometry, OvenPhysics, trendline::LnTrendline};

/// Material cost of one design, in dollars, broken down by component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub absorber: f64,
    pub inner_body: f64,
    pub insulator: f64,
    pub outer_body: f64,
    pub window: f64,
    pub reflectors: f64,
}

impl CostBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.absorber
            + self.inner_body
            + self.insulator
            + self.outer_body
            + self.window
            + self.reflectors
    }
}

/// A configuration paired with a concrete, in-domain geometry.
#[derive(Debug, Clone, Copy)]
pub(super) struct Design<'a> {
    config: &'a Configuration,
    physics: &'a OvenPhysics,
    h: Length,
    side: Length,
    insulator_thickness: Length,
}

impl<'a> Design<'a> {
    /// Creates a design; `geometry` must already be within the model domain.
    pub(super) fn new(
        config: &'a Configuration,
        physics: &'a OvenPhysics,
        geometry: Geometry,
    ) -> Self {
        let side = (physics.chamber_volume.get::<cubic_meter>() / geometry.h.get::<meter>()).sqrt();
        Self {
            config,
            physics,
            h: geometry.h,
            side: Length::new::<meter>(side),
            insulator_thickness: geometry.insulator_thickness,
        }
    }

    pub(super) fn window_area(&self) -> Area {
        self.side * self.side
    }

    /// Absorber plate plus the four side walls.
    pub(super) fn absorber_area(&self) -> Area {
        self.window_area() + self.h * self.side * 4.0
    }

    /// Series heat-transfer coefficient of inner body, insulator, and outer body.
    fn wall_heat_transfer(&self) -> HeatTransfer {
        let layers = [
            (self.config.inner_body.thickness(), self.config.inner_body.conductivity()),
            (self.insulator_thickness, self.config.insulator.conductivity()),
            (self.config.outer_body.thickness(), self.config.outer_body.conductivity()),
        ];
        let resistance: f64 = layers
            .iter()
            .map(|(x, k)| x.get::<meter>() / k.get::<watt_per_meter_kelvin>())
            .sum();
        HeatTransfer::new::<watt_per_square_meter_kelvin>(resistance.recip())
    }

    /// Reflector panel angle, in radians.
    fn reflector_angle(&self) -> f64 {
        let ml = self.physics.reflector_ml;
        (((ml.powi(2) + 8.0).sqrt() - ml) / 4.0).asin()
    }

    fn gain(&self) -> f64 {
        self.config.reflector_type.gain(
            self.config.reflector_number,
            self.config.reflective_material.reflectivity(),
            self.physics.reflector_ml,
            self.reflector_angle(),
        )
    }

    /// Interior temperature balancing absorbed sunlight against wall and
    /// window losses, for a given window heat-loss coefficient.
    fn interior_temperature_at(&self, window_loss: HeatTransfer) -> ThermodynamicTemperature {
        let optics = self.config.window.transmissivity()
            * self.config.absorber.absorptivity()
            * self.gain();
        let absorbed: Power = self.physics.solar_flux * self.window_area() * optics;
        let losses: ThermalConductance = self.wall_heat_transfer() * self.absorber_area()
            + window_loss * self.window_area();
        let rise: TemperatureInterval = absorbed / losses;
        self.physics.ambient + rise
    }

    /// Predicted interior oven temperature.
    ///
    /// The heat balance is evaluated at each measured window heat-loss
    /// coefficient, fitted to a logarithmic trendline, and intersected with
    /// the window's own trendline. Falls back to ambient when the fit is
    /// degenerate.
    pub(super) fn interior_temperature(&self) -> ThermodynamicTemperature {
        let samples = self.config.window.heat_loss_coefficients().map(|u| {
            (
                u.get::<watt_per_square_meter_kelvin>(),
                self.interior_temperature_at(u).get::<degree_celsius>(),
            )
        });
        let window_line = self.config.window.heat_loss_trendline();

        LnTrendline::fit(samples)
            .and_then(|line| line.crossing(&window_line))
            .map_or(self.physics.ambient, ThermodynamicTemperature::new::<degree_celsius>)
    }

    pub(super) fn cost(&self) -> CostBreakdown {
        let config = self.config;
        let inner_wall = config.inner_body.thickness();
        let outer_wall = config.outer_body.thickness();
        let insulation = self.insulator_thickness;

        let inner_shell: Volume =
            (self.h + inner_wall) * (self.side + inner_wall * 2.0) * (self.side + inner_wall * 2.0);
        let outer_side = self.side + inner_wall * 2.0 + insulation * 2.0;
        let outer_shell: Volume = (self.h + inner_wall + insulation) * outer_side * outer_side;

        // The top face is the window, not outer body material.
        let height = self.h + inner_wall + insulation;
        let side = outer_side + outer_wall * 2.0;
        let outer_surface: Area = height * side * 4.0 + side * side * 2.0 - self.window_area();

        let reflector_area = config.reflector_type.area(
            self.physics.reflector_ml,
            self.side,
            config.reflector_number,
        );

        CostBreakdown {
            absorber: config.absorber.cost(self.absorber_area()),
            inner_body: config.inner_body.cost(self.absorber_area()),
            insulator: config.insulator.cost(outer_shell - inner_shell),
            outer_body: config.outer_body.cost(outer_surface),
            window: config.window.cost(self.window_area()),
            reflectors: config.reflective_material.cost(reflector_area),
        }
    }
}
