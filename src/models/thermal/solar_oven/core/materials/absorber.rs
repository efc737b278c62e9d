use uom::si::{area::square_meter, f64::Area};

closed_set! {
    /// Coating applied to the absorber plate at the bottom of the chamber.
    pub enum Absorber in "absorber" {
        BCS => "Black Construction Paper",
        TSC => "Thurmalox Solar Coating",
    }
}

impl Absorber {
    /// Fraction of incident solar radiation absorbed by the coating.
    #[must_use]
    pub fn absorptivity(self) -> f64 {
        match self {
            Self::BCS => 0.9,
            Self::TSC => 0.96,
        }
    }

    /// Material cost, in dollars, of covering `area` with this coating.
    #[must_use]
    pub fn cost(self, area: Area) -> f64 {
        let per_square_meter = match self {
            Self::BCS => 0.83,
            Self::TSC => 38.95,
        };
        per_square_meter * area.get::<square_meter>()
    }
}
