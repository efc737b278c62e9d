#[macro_use]
mod closed_set;

mod config;
mod design;
mod materials;
mod metric;
mod oven;
mod physics;
mod search;
mod session;
mod sweep;
mod target;
mod trendline;

#[cfg(test)]
mod test_support;

pub use closed_set::UnknownVariant;
pub use config::{Configuration, RawConfiguration, ValidationError};
pub use design::CostBreakdown;
pub use materials::{
    Absorber, BodyMaterial, HeatLossTable, Insulator, ReflectiveMaterial, ReflectorType,
    WindowMaterial,
};
pub use metric::Metric;
pub use oven::{Performance, SolarOven};
pub use physics::{EvaluationError, Geometry, OvenPhysics, PhysicalModel};
pub use search::{BestDesign, SearchConfig, SearchError, best_design, rank_designs};
pub use session::{SessionConfig, SessionError, SessionStats, SurfaceSession};
pub use sweep::{
    AxisRange, GridPoint, RangeError, ResultSet, SweepConfig, SweepError, generate_surface,
    generate_surface_with,
};
pub use target::{TargetConfig, TargetError, target_insulator_thickness};
pub use trendline::LnTrendline;
