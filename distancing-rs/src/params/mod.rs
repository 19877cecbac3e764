//! Parameters of a simulation run.
//!
//! A run is described by two objects. [`FixedConfig`] holds the
//! epidemiological setting, which stays the same for a whole session.
//! [`VariableConfig`] holds the intervention, which a front end may change
//! between runs. Both deserialize from TOML with missing fields taken from
//! the reference scenario in [`constants`].
pub mod constants;
mod fixed;
mod variable;

pub use fixed::*;
pub use variable::*;

use crate::{error::Error, prelude::Real};

/// Checks that a rate is a finite, non-negative number.
pub(crate) fn check_rate(field: &'static str, value: Real) -> Result<(), Error> {
    if !value.is_finite() {
        return Err(Error::invalid(field, format!("must be finite, got {}", value)));
    }
    if value < 0.0 {
        return Err(Error::invalid(field, format!("must be >= 0, got {}", value)));
    }
    Ok(())
}
