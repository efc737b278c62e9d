//! Public models.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (e.g., `thermal`).
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail; its public types are re-exported by the model module.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates to
//! the model's core, alongside the core's own entry points (surface sweeps,
//! sessions, solvers).

pub mod thermal;
