use crate::{
    params::{constants as cte, VariableConfig},
    prelude::{Real, Time},
};
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// One of the three intervention sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    ReducedContacts,
    StartDay,
    EndDay,
}

/// Bounds and initial position of a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    pub label: &'static str,
    pub min: Real,
    pub max: Real,
    pub default: Real,
}

impl ControlRange {
    /// Bring value inside the range. NaN resets the control to its default.
    pub fn clamp(&self, value: Real) -> Real {
        if value.is_nan() {
            return self.default;
        }
        value.max(self.min).min(self.max)
    }
}

impl Control {
    pub const ALL: [Control; 3] = [Control::ReducedContacts, Control::StartDay, Control::EndDay];

    pub fn range(&self) -> ControlRange {
        let ((min, max), default, label) = match self {
            Control::ReducedContacts => (
                cte::REDUCED_CONTACTS_RANGE,
                cte::REDUCED_CONTACTS,
                "reduced contacts/day",
            ),
            Control::StartDay => (
                cte::INTERVENTION_START_RANGE,
                cte::INTERVENTION_START as Real,
                "start reduction",
            ),
            Control::EndDay => (
                cte::INTERVENTION_END_RANGE,
                cte::INTERVENTION_END as Real,
                "end reduction",
            ),
        };
        ControlRange {
            label,
            min,
            max,
            default,
        }
    }
}

/// Immutable snapshot of all control positions.
///
/// Values are real numbers, like the position of a slider. Day values are
/// converted to whole days only when building a [`VariableConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, CopyGetters)]
#[serde(default)]
#[getset(get_copy = "pub")]
pub struct Controls {
    reduced_contacts: Real,
    start_day: Real,
    end_day: Real,
}

impl Controls {
    /// Snapshot at the given positions. Values are taken as they are; only
    /// moving a control clamps it.
    pub fn new(reduced_contacts: Real, start_day: Real, end_day: Real) -> Self {
        Controls {
            reduced_contacts,
            start_day,
            end_day,
        }
    }

    /// Return a new snapshot with a single control moved. The value is clamped
    /// to the control range.
    pub fn with(mut self, control: Control, value: Real) -> Self {
        let value = control.range().clamp(value);
        match control {
            Control::ReducedContacts => self.reduced_contacts = value,
            Control::StartDay => self.start_day = value,
            Control::EndDay => self.end_day = value,
        }
        return self;
    }

    /// Current position of a control.
    pub fn get(&self, control: Control) -> Real {
        match control {
            Control::ReducedContacts => self.reduced_contacts,
            Control::StartDay => self.start_day,
            Control::EndDay => self.end_day,
        }
    }

    /// Intervention described by this snapshot.
    ///
    /// A day `t` satisfies `start <= t < end` for real bounds exactly when it
    /// does for the bounds rounded up, hence the `ceil`.
    pub fn to_variable(&self) -> VariableConfig {
        VariableConfig::new(
            self.reduced_contacts,
            to_day(self.start_day),
            to_day(self.end_day),
        )
    }
}

fn to_day(x: Real) -> Time {
    x.ceil().max(0.0) as Time
}

impl Default for Controls {
    fn default() -> Self {
        Controls {
            reduced_contacts: Control::ReducedContacts.range().default,
            start_day: Control::StartDay.range().default,
            end_day: Control::EndDay.range().default,
        }
    }
}

impl From<VariableConfig> for Controls {
    fn from(variable: VariableConfig) -> Self {
        Controls::new(
            variable.reduced_contacts(),
            variable.start_day() as Real,
            variable.end_day() as Real,
        )
    }
}
