use super::{check_rate, constants as cte};
use crate::{
    error::Result,
    prelude::{Real, Time},
};
use getset::{CopyGetters, Setters};
use serde::{Deserialize, Serialize};

/// Intervention settings. Those may change between runs.
///
/// The intervention is active on days in the half-open window
/// `[start_day, end_day)`. An `end_day` before `start_day` is allowed and
/// simply describes a window that never activates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, CopyGetters, Setters)]
#[serde(default)]
#[getset(get_copy = "pub", set = "pub")]
pub struct VariableConfig {
    /// Contacts per person per day while the intervention is active.
    reduced_contacts: Real,
    start_day: Time,
    end_day: Time,
}

impl VariableConfig {
    pub fn new(reduced_contacts: Real, start_day: Time, end_day: Time) -> Self {
        VariableConfig {
            reduced_contacts,
            start_day,
            end_day,
        }
    }

    /// Check all values are inside their domain.
    pub fn validate(&self) -> Result<()> {
        check_rate("reduced_contacts", self.reduced_contacts)
    }

    /// True if the intervention applies on the given day.
    #[inline]
    pub fn is_active(&self, day: Time) -> bool {
        self.start_day <= day && day < self.end_day
    }

    /// Contacts per person on the given day, falling back to the baseline
    /// outside the intervention window.
    #[inline]
    pub fn contacts_on(&self, day: Time, baseline: Real) -> Real {
        if self.is_active(day) {
            self.reduced_contacts
        } else {
            baseline
        }
    }
}

impl Default for VariableConfig {
    fn default() -> Self {
        VariableConfig::new(
            cte::REDUCED_CONTACTS,
            cte::INTERVENTION_START,
            cte::INTERVENTION_END,
        )
    }
}
