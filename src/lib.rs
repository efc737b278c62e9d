//! # Solar Oven Models
//!
//! A solar oven thermal model and a parametric performance-surface engine,
//! built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific models, including the [`twine_core::Model`]
//!   adapter for a configured solar oven.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models. Only utilities in
//! [`support`] are part of the public API; model-specific code stays private.
//!
//! ## Logging
//!
//! Sweeps and sessions emit [`tracing`] events. The crate never installs a
//! subscriber; applications choose where events go.

pub mod models;
pub mod support;
