use super::{check_rate, constants as cte};
use crate::{
    error::{Error, Result},
    prelude::{Count, Real, Time},
};
use getset::{CopyGetters, Setters};
use serde::{Deserialize, Serialize};

/// What happens when the cumulative count catches up with the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Saturation {
    /// Reproduce the plain model: the susceptible pool may go negative and
    /// produce negative daily increments.
    Unclamped,
    /// Clamp the susceptible pool at zero and never infect more people in a
    /// day than are still susceptible.
    Clamped,
}

impl Default for Saturation {
    fn default() -> Self {
        Saturation::Unclamped
    }
}

/// Epidemiological setting of a run. Immutable during a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, CopyGetters, Setters)]
#[serde(default)]
#[getset(get_copy = "pub", set = "pub")]
pub struct FixedConfig {
    /// Total population at risk.
    population: Count,
    /// Number of simulated days after day 0.
    duration: Time,
    /// Infected count at day 0.
    initial_infections: Count,
    /// Contacts per person per day without intervention.
    baseline_contacts: Real,
    /// Probability that an exposure transmits the disease.
    infectivity: Real,
    /// Days an infected individual remains contagious.
    infectious_days: Time,
    saturation: Saturation,
}

impl FixedConfig {
    pub fn new(
        population: Count,
        duration: Time,
        initial_infections: Count,
        baseline_contacts: Real,
        infectivity: Real,
        infectious_days: Time,
    ) -> Self {
        FixedConfig {
            population,
            duration,
            initial_infections,
            baseline_contacts,
            infectivity,
            infectious_days,
            saturation: Saturation::default(),
        }
    }

    /// Check all values are inside their domain.
    pub fn validate(&self) -> Result<()> {
        if self.population <= 0 {
            return Err(Error::invalid(
                "population",
                format!("must be > 0, got {}", self.population),
            ));
        }
        if self.infectious_days < 1 {
            return Err(Error::invalid("infectious_days", "must be >= 1, got 0"));
        }
        if self.initial_infections < 0 {
            return Err(Error::invalid(
                "initial_infections",
                format!("must be >= 0, got {}", self.initial_infections),
            ));
        }
        if self.initial_infections > self.population {
            return Err(Error::invalid(
                "initial_infections",
                format!(
                    "must not exceed population ({}), got {}",
                    self.population, self.initial_infections
                ),
            ));
        }
        check_rate("baseline_contacts", self.baseline_contacts)?;
        if !(0.0..=1.0).contains(&self.infectivity) {
            return Err(Error::invalid(
                "infectivity",
                format!("must be in [0, 1], got {}", self.infectivity),
            ));
        }
        Ok(())
    }
}

impl Default for FixedConfig {
    fn default() -> Self {
        FixedConfig::new(
            cte::POPULATION,
            cte::DURATION,
            cte::INITIAL_INFECTIONS,
            cte::BASELINE_CONTACTS,
            cte::INFECTIVITY,
            cte::INFECTIOUS_DAYS,
        )
    }
}
