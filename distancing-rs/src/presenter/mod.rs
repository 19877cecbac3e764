//! Interactive front end plumbing.
//!
//! Controls emit immutable [`Controls`] snapshots, the [`Presenter`] feeds
//! them to [`simulate`](crate::sim::simulate) and returns a fresh
//! [`ViewModel`]. Nothing here knows about a particular drawing surface: a
//! GUI, a web page or the `curve` binary can all draw the same view model.
mod controls;
mod view;
pub use controls::*;
pub use view::*;

use crate::{error::Result, params::FixedConfig, prelude::Real, sim::simulate};
use log::{debug, warn};

/// Holds the session configuration and the current control snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Presenter {
    fixed: FixedConfig,
    controls: Controls,
}

impl Presenter {
    /// Create presenter with controls at their default positions.
    pub fn new(fixed: FixedConfig) -> Result<Self> {
        Self::with_controls(fixed, Controls::default())
    }

    pub fn with_controls(fixed: FixedConfig, controls: Controls) -> Result<Self> {
        fixed.validate()?;
        Ok(Presenter { fixed, controls })
    }

    pub fn fixed(&self) -> &FixedConfig {
        &self.fixed
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Move a control and recompute the view. The snapshot is only committed
    /// if the simulation succeeds.
    pub fn update(&mut self, control: Control, value: Real) -> Result<ViewModel> {
        let next = self.controls.with(control, value);
        debug!(
            "{} = {} (requested {})",
            control.range().label,
            next.get(control),
            value
        );
        let view = self.render(&next)?;
        self.controls = next;
        return Ok(view);
    }

    /// View model for the current snapshot.
    pub fn view(&self) -> Result<ViewModel> {
        self.render(&self.controls)
    }

    fn render(&self, controls: &Controls) -> Result<ViewModel> {
        let variable = controls.to_variable();
        let result = simulate(&self.fixed, &variable)?;
        if !result.is_physical() {
            warn!(
                "susceptible pool exhausted: total infections {} for population {}",
                result.total_infections(),
                self.fixed.population()
            );
        }
        debug!(
            "simulated {} days, peak {:?}, total {}",
            result.days(),
            result.peak(),
            result.total_infections()
        );
        Ok(ViewModel::new(&self.fixed, result))
    }
}
