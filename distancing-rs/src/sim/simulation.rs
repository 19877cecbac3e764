use super::{CohortWindow, SimulationResult};
use crate::{
    error::Result,
    params::{FixedConfig, Saturation, VariableConfig},
    prelude::{Count, Real, Time},
    utils::round_half_even,
};

/// Run a complete simulation and return the resulting epicurve.
///
/// Both configurations are validated before the first step, so an invalid
/// input never yields a partial result. The function has no side effects and
/// keeps no state between calls.
pub fn simulate(fixed: &FixedConfig, variable: &VariableConfig) -> Result<SimulationResult> {
    let mut sim = Simulation::new(fixed, variable)?;
    sim.run(fixed.duration());
    return Ok(sim.finish());
}

/// Day-by-day stepper behind [`simulate`].
///
/// Useful for front ends that want to animate a run, but otherwise just an
/// implementation detail. Each instance is tied to a single run.
#[derive(Debug, Clone)]
pub struct Simulation<'a> {
    fixed: &'a FixedConfig,
    variable: &'a VariableConfig,
    day: Time,
    contagious: Count,
    total: Count,
    cohorts: CohortWindow,
    currently_infected: Vec<Count>,
    new_infections: Vec<Count>,
    cumulative: Vec<Count>,
}

impl<'a> Simulation<'a> {
    /// Validate configurations and seed day 0.
    pub fn new(fixed: &'a FixedConfig, variable: &'a VariableConfig) -> Result<Self> {
        fixed.validate()?;
        variable.validate()?;

        let initial = fixed.initial_infections();
        let capacity = fixed.duration() as usize + 1;
        let mut sim = Simulation {
            fixed,
            variable,
            day: 0,
            contagious: initial,
            total: initial,
            cohorts: CohortWindow::new(fixed.infectious_days()),
            currently_infected: Vec::with_capacity(capacity),
            new_infections: Vec::with_capacity(capacity),
            cumulative: Vec::with_capacity(capacity),
        };
        sim.cohorts.push(initial);
        sim.record(initial);
        return Ok(sim);
    }

    /// Run simulation for the given number of steps.
    pub fn run(&mut self, n_steps: Time) -> &mut Self {
        for _ in 0..n_steps {
            self.step();
        }
        return self;
    }

    /// Advance one day and return the number of new infections.
    pub fn step(&mut self) -> Count {
        self.day += 1;

        // People whose contagious window has ended
        if let Some(cohort) = self.cohorts.expiring() {
            self.contagious = self.contagious.saturating_sub(cohort);
        }

        let contacts = self
            .variable
            .contacts_on(self.day, self.fixed.baseline_contacts());
        let susceptible = self.susceptible();
        let total_contacts = self.contagious as Real * contacts;
        let risky_contacts =
            total_contacts * (susceptible as Real / self.fixed.population() as Real);
        let mut newly_infected = round_half_even(risky_contacts * self.fixed.infectivity());
        if self.fixed.saturation() == Saturation::Clamped {
            newly_infected = newly_infected.min(susceptible);
        }

        self.cohorts.push(newly_infected);
        // Unclamped runs can leave the range of Count within days once the
        // susceptible pool is negative; counts stick at the bounds instead.
        self.total = self.total.saturating_add(newly_infected);
        self.contagious = self.contagious.saturating_add(newly_infected);
        self.record(newly_infected);
        return newly_infected;
    }

    /// Susceptible pool seen by the next step.
    pub fn susceptible(&self) -> Count {
        let susceptible = self.fixed.population().saturating_sub(self.total);
        match self.fixed.saturation() {
            Saturation::Unclamped => susceptible,
            Saturation::Clamped => susceptible.max(0),
        }
    }

    /// Last simulated day.
    pub fn day(&self) -> Time {
        self.day
    }

    /// People currently contagious.
    pub fn contagious(&self) -> Count {
        self.contagious
    }

    /// Consume the stepper and return the epicurve accumulated so far.
    pub fn finish(self) -> SimulationResult {
        SimulationResult::new(
            self.fixed.population(),
            self.currently_infected,
            self.new_infections,
            self.cumulative,
        )
    }

    fn record(&mut self, newly_infected: Count) {
        self.currently_infected.push(self.contagious);
        self.new_infections.push(newly_infected);
        self.cumulative.push(self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use assert_approx_eq::assert_approx_eq;

    fn small(initial: Count, contacts: Real, infectivity: Real, days: Time) -> FixedConfig {
        FixedConfig::new(1000, 5, initial, contacts, infectivity, days)
    }

    fn never() -> VariableConfig {
        VariableConfig::new(0.0, 100, 100)
    }

    #[test]
    fn doubling_growth() {
        let fixed = small(1, 2.0, 1.0, 10);
        let res = simulate(&fixed, &VariableConfig::new(2.0, 100, 100)).unwrap();
        assert_eq!(res.currently_infected(), &vec![1, 3, 9, 27, 80, 227]);
        assert_eq!(res.new_infections(), &vec![1, 2, 6, 18, 53, 147]);
        assert_eq!(res.total_infections(), 227);
    }

    #[test]
    fn reference_scenario() {
        let res = simulate(&FixedConfig::default(), &VariableConfig::default()).unwrap();
        assert_eq!(res.days(), 501);
        assert_eq!(
            &res.currently_infected()[..25],
            &[
                4, 5, 6, 7, 9, 11, 14, 17, 21, 26, 32, 35, 42, 51, 62, 75, 91, 110, 134, 162,
                196, 237, 287, 349, 424
            ]
        );
        assert_eq!(res.total_infections(), 4_523_356);
        assert_eq!(res.peak(), (76, 2_354_689));
        assert_eq!(res.currently_infected()[500], 0);
        assert_approx_eq!(res.attack_rate(), 0.9046712, 1e-7);
        assert!(res.is_physical());
        for (&cur, &tot) in res.currently_infected().iter().zip(res.cumulative()) {
            assert!(cur <= tot);
        }
    }

    #[test]
    fn distancing_flattens_the_curve() {
        let fixed = FixedConfig::default();
        let res = simulate(&fixed, &VariableConfig::new(4.0, 20, 200)).unwrap();
        assert_eq!(res.total_infections(), 208);
        assert_eq!(res.peak(), (19, 162));
        assert_eq!(
            &res.currently_infected()[18..25],
            &[134, 162, 160, 157, 153, 148, 141]
        );

        let res = simulate(&fixed, &VariableConfig::new(10.0, 20, 200)).unwrap();
        assert_eq!(res.total_infections(), 290);
        assert_eq!(res.peak(), (22, 168));
    }

    #[test]
    fn day_zero_and_length() {
        for duration in [0, 1, 7, 60] {
            let mut fixed = small(3, 2.0, 0.5, 4);
            fixed.set_duration(duration);
            let res = simulate(&fixed, &never()).unwrap();
            assert_eq!(res.days(), duration as usize + 1);
            assert_eq!(res.currently_infected()[0], 3);
            assert_eq!(res.cumulative()[0], 3);
        }
    }

    #[test]
    fn zero_duration() {
        let mut fixed = small(7, 2.0, 0.5, 4);
        fixed.set_duration(0);
        let res = simulate(&fixed, &never()).unwrap();
        assert_eq!(res.currently_infected(), &vec![7]);
        assert_eq!(res.total_infections(), 7);
    }

    #[test]
    fn total_is_monotonic_and_sums_increments() {
        let mut fixed = FixedConfig::default();
        fixed.set_duration(200);
        let res = simulate(&fixed, &VariableConfig::new(20.0, 10, 60)).unwrap();
        assert!(res.cumulative().windows(2).all(|w| w[0] <= w[1]));
        let sum: Count = res.new_infections().iter().sum();
        assert_eq!(sum, res.total_infections());
        assert_eq!(*res.cumulative().last().unwrap(), res.total_infections());
    }

    #[test]
    fn intervention_is_noop_without_reduction() {
        let fixed = FixedConfig::default();
        let reference = simulate(&fixed, &VariableConfig::new(50.0, 0, 0)).unwrap();
        for (start, end) in [(1, 30), (20, 200), (0, 500), (300, 10), (30, 400)] {
            let res = simulate(&fixed, &VariableConfig::new(50.0, start, end)).unwrap();
            assert_eq!(res, reference);
        }
    }

    #[test]
    fn no_initial_infections() {
        let mut fixed = FixedConfig::default();
        fixed.set_initial_infections(0);
        let res = simulate(&fixed, &VariableConfig::default()).unwrap();
        assert!(res.currently_infected().iter().all(|&x| x == 0));
        assert_eq!(res.total_infections(), 0);
    }

    #[test]
    fn single_infectious_day_keeps_one_previous_cohort() {
        let mut fixed = small(2, 3.0, 0.5, 1);
        fixed.set_duration(6);
        let res = simulate(&fixed, &never()).unwrap();
        let cur = res.currently_infected();
        let new = res.new_infections();
        assert_eq!(cur, &vec![2, 5, 7, 10, 15, 22, 32]);
        assert_eq!(new, &vec![2, 3, 4, 6, 9, 13, 19]);
        assert_eq!(cur[1], 2 + new[1]);
        for t in 2..cur.len() {
            assert_eq!(cur[t], new[t - 1] + new[t]);
        }
    }

    #[test]
    fn lockdown_stops_transmission() {
        let fixed = small(3, 2.0, 1.0, 10);
        let res = simulate(&fixed, &VariableConfig::new(0.0, 0, 5)).unwrap();
        assert_eq!(res.new_infections(), &vec![3, 0, 0, 0, 0, 6]);
        assert_eq!(res.cumulative(), &vec![3, 3, 3, 3, 3, 9]);
        assert_eq!(res.currently_infected(), &vec![3, 3, 3, 3, 3, 9]);

        let res = simulate(&fixed, &VariableConfig::new(0.0, 0, 6)).unwrap();
        assert!(res.new_infections()[1..].iter().all(|&x| x == 0));
        assert_eq!(res.total_infections(), 3);
    }

    #[test]
    fn unclamped_saturation_goes_negative() {
        let fixed = FixedConfig::new(100, 2, 50, 10.0, 1.0, 10);
        let res = simulate(&fixed, &never()).unwrap();
        assert_eq!(res.new_infections(), &vec![50, 250, -6000]);
        assert_eq!(res.currently_infected(), &vec![50, 300, -5700]);
        assert_eq!(res.total_infections(), -5700);
        assert!(!res.is_physical());
    }

    #[test]
    fn unclamped_blowup_saturates_at_count_bounds() {
        let fixed = FixedConfig::new(100, 14, 50, 10.0, 1.0, 10);
        let res = simulate(&fixed, &never()).unwrap();
        assert_eq!(
            &res.currently_infected()[..5],
            &[50, 300, -5700, -3_311_700, -1_096_772_117_700]
        );
        assert_eq!(
            &res.new_infections()[..5],
            &[50, 250, -6000, -3_306_000, -1_096_768_806_000]
        );
        assert!(res.currently_infected()[5..].iter().all(|&x| x == Count::MIN));
        assert!(res.cumulative()[5..].iter().all(|&x| x == Count::MIN));
        assert_eq!(res.total_infections(), Count::MIN);
        assert_eq!(res.susceptible_at(14), Some(Count::MAX));
        assert!(!res.is_physical());
    }

    #[test]
    fn every_valid_config_completes() {
        for saturation in [Saturation::Unclamped, Saturation::Clamped] {
            for population in [1, 100, 5000] {
                for initial in [0, 1, population] {
                    for contacts in [0.0, 10.0, 50.0] {
                        for infectivity in [0.0, 0.5, 1.0] {
                            for days in [1, 3, 10] {
                                let mut fixed = FixedConfig::new(
                                    population, 40, initial, contacts, infectivity, days,
                                );
                                fixed.set_saturation(saturation);
                                let variable = VariableConfig::new(contacts / 2.0, 5, 20);
                                let res = simulate(&fixed, &variable).unwrap();
                                assert_eq!(res.days(), 41);
                                assert_eq!(res.currently_infected()[0], initial);
                                if saturation == Saturation::Clamped {
                                    assert!(res.is_physical(), "{:?}", fixed);
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn clamped_saturation_caps_at_population() {
        let mut fixed = FixedConfig::new(100, 2, 50, 10.0, 1.0, 10);
        fixed.set_saturation(Saturation::Clamped);
        let res = simulate(&fixed, &never()).unwrap();
        assert_eq!(res.new_infections(), &vec![50, 50, 0]);
        assert_eq!(res.currently_infected(), &vec![50, 100, 100]);
        assert_eq!(res.total_infections(), 100);
        assert!(res.is_physical());
    }

    #[test]
    fn overshoot_near_saturation() {
        let mut fixed = FixedConfig::new(1000, 8, 1, 2.0, 1.0, 2);
        let res = simulate(&fixed, &never()).unwrap();
        assert_eq!(res.currently_infected(), &vec![1, 3, 9, 24, 65, 169, 405, 775, 874]);
        assert_eq!(res.total_infections(), 1052);
        assert_eq!(res.susceptible_at(8), Some(-52));
        assert!(!res.is_physical());

        fixed.set_saturation(Saturation::Clamped);
        let res = simulate(&fixed, &never()).unwrap();
        assert_eq!(res.currently_infected(), &vec![1, 3, 9, 24, 65, 169, 405, 775, 822]);
        assert_eq!(res.new_infections()[8], 157);
        assert_eq!(res.total_infections(), 1000);
        assert_eq!(res.susceptible_at(8), Some(0));
    }

    #[test]
    fn stepper_matches_simulate() {
        let fixed = small(1, 2.0, 1.0, 10);
        let variable = never();
        let mut sim = Simulation::new(&fixed, &variable).unwrap();
        assert_eq!(sim.step(), 2);
        assert_eq!(sim.step(), 6);
        assert_eq!(sim.day(), 2);
        assert_eq!(sim.contagious(), 9);
        assert_eq!(sim.susceptible(), 991);
        sim.run(3);
        assert_eq!(sim.finish(), simulate(&fixed, &variable).unwrap());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let fixed = FixedConfig::new(0, 5, 0, 2.0, 1.0, 10);
        assert!(matches!(
            simulate(&fixed, &never()),
            Err(Error::InvalidConfiguration {
                field: "population",
                ..
            })
        ));
        let fixed = small(1, 2.0, 1.0, 0);
        assert!(simulate(&fixed, &never()).is_err());
        let fixed = small(1, 2.0, 1.0, 10);
        assert!(simulate(&fixed, &VariableConfig::new(-2.0, 0, 3)).is_err());
    }
}
