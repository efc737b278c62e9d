//! Material catalogue for oven construction.
//!
//! Every family is a closed set: the model dispatches on each variant with an
//! exhaustive `match`, so adding a material means touching every property it
//! feeds.

mod absorber;
mod body;
mod insulator;
mod reflective;
mod reflector_type;
mod window;

pub use absorber::Absorber;
pub use body::BodyMaterial;
pub use insulator::Insulator;
pub use reflective::ReflectiveMaterial;
pub use reflector_type::ReflectorType;
pub use window::{HeatLossTable, WindowMaterial};
