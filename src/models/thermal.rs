//! Thermal systems models.
//!
//! This module contains models of solar thermal cookers and the tools for
//! exploring their design space.

pub mod solar_oven;
