use crate::prelude::{Count, Time};

/// Rolling record of the last few daily infection counts.
///
/// Contagiousness is tracked per cohort (all people infected on the same day)
/// rather than per individual. The window keeps `infectious_days + 1` cohorts;
/// once full, the oldest one is the cohort whose contagious window ends today.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortWindow {
    window: usize,
    offset: usize,
    limit: usize,
    buffer: Vec<Count>,
}

impl CohortWindow {
    pub fn new(infectious_days: Time) -> CohortWindow {
        let window = infectious_days as usize + 1;
        let limit = 2 * window - 1;
        CohortWindow {
            window,
            offset: 0,
            limit,
            buffer: Vec::with_capacity(limit),
        }
    }

    /// Record the number of people infected on a new day.
    pub fn push(&mut self, cohort: Count) {
        if self.buffer.len() < self.window {
        } else if self.buffer.len() < self.limit {
            self.offset += 1;
        } else {
            let start = self.buffer.len() - (self.window - 1);
            self.buffer.copy_within(start.., 0);
            self.buffer.truncate(self.window - 1);
            self.offset = 0;
        }
        self.buffer.push(cohort);
    }

    /// Cohort that stops being contagious before the next day is computed, if
    /// enough history has accumulated.
    pub fn expiring(&self) -> Option<Count> {
        let slice = self.as_slice();
        (slice.len() == self.window).then(|| slice[0])
    }

    /// Cohorts currently held, oldest first.
    pub fn as_slice(&self) -> &[Count] {
        &self.buffer[self.offset..]
    }
}
