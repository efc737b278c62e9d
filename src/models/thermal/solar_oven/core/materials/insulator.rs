use uom::si::{
    f64::{ThermalConductivity, Volume},
    thermal_conductivity::watt_per_meter_kelvin,
    volume::cubic_meter,
};

closed_set! {
    /// Insulation packed between the inner and outer oven bodies.
    pub enum Insulator in "insulator" {
        N => "Newspaper",
        FG => "Fiberglass Insulation",
        SF => "Spray Foam",
        DF => "Down Feather",
        FG30 => "R30 Fiberglass",
    }
}

impl Insulator {
    #[must_use]
    pub fn conductivity(self) -> ThermalConductivity {
        let k = match self {
            Self::N => 0.123,
            Self::FG => 1.0 / 13.0,
            Self::SF => 0.039,
            Self::DF => 0.045,
            Self::FG30 => 1.0 / 30.0,
        };
        ThermalConductivity::new::<watt_per_meter_kelvin>(k)
    }

    /// Material cost, in dollars, of filling `volume` with this insulator.
    ///
    /// Newspaper is treated as free.
    #[must_use]
    pub fn cost(self, volume: Volume) -> f64 {
        let per_cubic_meter = match self {
            Self::N => 0.0,
            Self::FG => 83.15,
            Self::SF => 19_612.13,
            Self::DF => 485.57,
            Self::FG30 => 76.60,
        };
        per_cubic_meter * volume.get::<cubic_meter>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn spray_foam_is_the_expensive_one() {
        let volume = Volume::new::<cubic_meter>(0.01);
        assert_relative_eq!(Insulator::N.cost(volume), 0.0);
        assert_relative_eq!(Insulator::SF.cost(volume), 196.1213, epsilon = 1e-9);

        let most_expensive = Insulator::variants()
            .iter()
            .max_by(|a, b| a.cost(volume).total_cmp(&b.cost(volume)))
            .copied();
        assert_eq!(most_expensive, Some(Insulator::SF));
    }

    #[test]
    fn identifiers_roundtrip_through_display_labels() {
        for insulator in Insulator::variants() {
            assert_eq!(insulator.identifier().parse::<Insulator>(), Ok(*insulator));
        }
        assert_eq!(Insulator::FG30.to_string(), "R30 Fiberglass");
    }
}
