pub use crate::error::{Error, Result};
pub use crate::params::{FixedConfig, Saturation, VariableConfig};
pub use crate::sim::{simulate, SimulationResult};

/// Basic representation of time. This crate assumes time is measured in days
/// and day 0 is the seed state.
pub type Time = u32;

/// Base Real type used by this crate. Uses an alias to easily change precision
/// if necessary.
pub type Real = f64;

/// Head counts. Signed because the unclamped model may produce negative daily
/// increments once the susceptible pool is exhausted.
pub type Count = i64;
