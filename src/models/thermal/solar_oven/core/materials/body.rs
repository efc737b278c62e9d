use uom::si::{
    area::square_meter,
    f64::{Area, Length, ThermalConductivity},
    length::{inch, millimeter},
    thermal_conductivity::watt_per_meter_kelvin,
};

closed_set! {
    /// Structural wall material used for the inner and outer oven bodies.
    pub enum BodyMaterial in "body material" {
        C => "Cardboard",
        W16 => "Wood 1/16 in",
    }
}

impl BodyMaterial {
    #[must_use]
    pub fn conductivity(self) -> ThermalConductivity {
        let k = match self {
            Self::C => 0.064,
            Self::W16 => 0.15,
        };
        ThermalConductivity::new::<watt_per_meter_kelvin>(k)
    }

    /// Wall thickness of one sheet of this material.
    #[must_use]
    pub fn thickness(self) -> Length {
        match self {
            Self::C => Length::new::<millimeter>(4.0),
            Self::W16 => Length::new::<inch>(1.0 / 16.0),
        }
    }

    /// Material cost, in dollars, of a wall covering `area`.
    #[must_use]
    pub fn cost(self, area: Area) -> f64 {
        let per_square_meter = match self {
            Self::C => 1.75,
            Self::W16 => 2.48,
        };
        per_square_meter * area.get::<square_meter>()
    }
}
