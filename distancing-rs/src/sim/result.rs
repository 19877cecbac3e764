use crate::{
    error::Result,
    prelude::{Count, Real, Time},
};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use std::io;

/// Epicurve produced by a single simulation run. Index = day number.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct SimulationResult {
    #[getset(get_copy = "pub")]
    population: Count,
    /// People contagious on each day, including the ones infected that day.
    #[getset(get = "pub")]
    currently_infected: Vec<Count>,
    /// Daily increments. Entry 0 holds the initial infections.
    #[getset(get = "pub")]
    new_infections: Vec<Count>,
    /// Running total of everyone ever infected.
    #[getset(get = "pub")]
    cumulative: Vec<Count>,
    #[getset(get_copy = "pub")]
    total_infections: Count,
}

/// A single row of the CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: Time,
    pub currently_infected: Count,
    pub new_infections: Count,
    pub cumulative: Count,
}

impl SimulationResult {
    pub(crate) fn new(
        population: Count,
        currently_infected: Vec<Count>,
        new_infections: Vec<Count>,
        cumulative: Vec<Count>,
    ) -> Self {
        let total_infections = cumulative.last().copied().unwrap_or_default();
        SimulationResult {
            population,
            currently_infected,
            new_infections,
            cumulative,
            total_infections,
        }
    }

    /// Number of points in the epicurve (duration + 1).
    pub fn days(&self) -> usize {
        self.currently_infected.len()
    }

    /// Day and value of the maximum of the curve. Ties resolve to the
    /// earliest day.
    pub fn peak(&self) -> (Time, Count) {
        let mut best = (0, Count::MIN);
        for (day, &x) in self.currently_infected.iter().enumerate() {
            if x > best.1 {
                best = (day as Time, x);
            }
        }
        return best;
    }

    /// Susceptible pool at the end of the given day.
    pub fn susceptible_at(&self, day: Time) -> Option<Count> {
        self.cumulative
            .get(day as usize)
            .map(|&total| self.population.saturating_sub(total))
    }

    /// Fraction of the population infected by the end of the run.
    pub fn attack_rate(&self) -> Real {
        self.total_infections as Real / self.population as Real
    }

    /// False if the run went through the non-physical regime where the
    /// cumulative count overshoots the population or some day has a negative
    /// number of new infections.
    pub fn is_physical(&self) -> bool {
        self.total_infections <= self.population
            && self.cumulative.iter().all(|&total| total <= self.population)
            && self.new_infections.iter().all(|&x| x >= 0)
    }

    /// Iterate over the epicurve one day at a time.
    pub fn records(&self) -> impl Iterator<Item = DayRecord> + '_ {
        self.currently_infected
            .iter()
            .zip(&self.new_infections)
            .zip(&self.cumulative)
            .enumerate()
            .map(|(day, ((&cur, &new), &tot))| DayRecord {
                day: day as Time,
                currently_infected: cur,
                new_infections: new,
                cumulative: tot,
            })
    }

    /// Write epicurve as CSV, one row per day, with a header line.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for record in self.records() {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Return a CSV string with the content of the epicurve.
    pub fn render_csv(&self) -> Result<String> {
        let mut data = Vec::new();
        self.write_csv(&mut data)?;
        Ok(String::from_utf8_lossy(&data).into_owned())
    }
}
