//! Solar oven performance model and surface engine.
//!
//! A [`Configuration`] fixes the oven's materials and reflectors. The
//! [`PhysicalModel`] trait evaluates one scalar [`Metric`] for a configuration
//! at a given absorber height and insulator thickness; [`OvenPhysics`] is the
//! default steady-state heat balance.
//!
//! On top of the model:
//!
//! - [`generate_surface`] sweeps a metric over a grid of heights and
//!   thicknesses into an ordered [`ResultSet`].
//! - [`SurfaceSession`] serves surfaces on request, holding only the latest.
//! - [`SolarOven`] adapts a configuration to [`twine_core::Model`], returning
//!   every output at once, and [`target_insulator_thickness`] solves it for
//!   the insulation that reaches the goal temperature.
//! - [`best_design`] finds the lowest-scoring geometry and reflector length
//!   for a configuration, and [`rank_designs`] orders many configurations by
//!   their best score.
//!
//! The computational core lives in the internal `core` module.

pub(crate) mod core;

pub use core::{
    Absorber, AxisRange, BestDesign, BodyMaterial, Configuration, CostBreakdown, EvaluationError,
    Geometry, GridPoint, HeatLossTable, Insulator, LnTrendline, Metric, OvenPhysics, Performance,
    PhysicalModel, RangeError, RawConfiguration, ReflectiveMaterial, ReflectorType, ResultSet,
    SearchConfig, SearchError, SessionConfig, SessionError, SessionStats, SolarOven,
    SurfaceSession, SweepConfig, SweepError, TargetConfig, TargetError, UnknownVariant,
    ValidationError, WindowMaterial, best_design, generate_surface, generate_surface_with,
    rank_designs, target_insulator_thickness,
};
