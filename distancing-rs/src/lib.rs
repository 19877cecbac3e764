//! Deterministic day-by-day epidemic curves under a time-boxed contact
//! reduction ("social distancing") intervention.
//!
//! The core is [`sim::simulate`], a pure function of a [`FixedConfig`] and a
//! [`VariableConfig`]. The [`presenter`] module drives it from slider-like
//! controls and produces view models that any front end can draw.
pub mod config;
pub mod error;
pub mod params;
pub mod prelude;
pub mod presenter;
pub mod sim;
pub mod utils;

pub use crate::error::{Error, Result};
pub use crate::params::{FixedConfig, Saturation, VariableConfig};
pub use crate::sim::{simulate, SimulationResult};
