use uom::si::{area::square_meter, f64::Area};

closed_set! {
    /// Reflective coating applied to the reflector panels.
    pub enum ReflectiveMaterial in "reflective material" {
        AF => "Aluminum Foil",
        TF => "Tin Foil",
        MS => "Mirror Sheets",
        RT => "Reflective Tape",
        SR2000 => "S Reflect 2000",
        SRV => "Silver Reflective Vinyl",
    }
}

impl ReflectiveMaterial {
    /// Fraction of incident radiation the coating reflects toward the window.
    #[must_use]
    pub fn reflectivity(self) -> f64 {
        match self {
            Self::AF => 0.7,
            Self::TF => 0.88,
            Self::MS => 0.9,
            Self::RT => 0.85,
            Self::SR2000 => 0.92,
            Self::SRV => 0.86,
        }
    }

    /// Material cost, in dollars, of coating `area` of reflector panels.
    #[must_use]
    pub fn cost(self, area: Area) -> f64 {
        let per_square_meter = match self {
            Self::AF => 0.55,
            Self::TF => 0.68,
            Self::MS => 23.24,
            Self::RT => 19.35,
            Self::SR2000 => 29.95,
            Self::SRV => 13.40,
        };
        per_square_meter * area.get::<square_meter>()
    }
}
