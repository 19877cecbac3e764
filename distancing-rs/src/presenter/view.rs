use crate::{
    params::FixedConfig,
    prelude::{Count, Real, Time},
    sim::SimulationResult,
    utils::{downsample, group_thousands, plot_vbars},
};
use getset::{CopyGetters, Getters};

pub const X_LABEL: &str = "Days Since First Infection";
pub const Y_LABEL: &str = "Number Currently Infected";

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct ViewModel {
    #[getset(get = "pub")]
    title: String,
    /// Run the frame was drawn from.
    #[getset(get = "pub")]
    result: SimulationResult,
    #[getset(get = "pub")]
    total_label: String,
    #[getset(get_copy = "pub")]
    total_infections: Count,
    #[getset(get_copy = "pub")]
    peak: (Time, Count),
}

impl ViewModel {
    pub fn new(fixed: &FixedConfig, result: SimulationResult) -> Self {
        ViewModel {
            title: title(fixed),
            total_label: total_label(result.total_infections()),
            total_infections: result.total_infections(),
            peak: result.peak(),
            result,
        }
    }

    /// Currently infected people, one point per day.
    pub fn series(&self) -> &Vec<Count> {
        self.result.currently_infected()
    }

    pub fn x_label(&self) -> &'static str {
        X_LABEL
    }

    pub fn y_label(&self) -> &'static str {
        Y_LABEL
    }

    /// Render the frame as text: title, curve squeezed into `width` columns
    /// and `height` rows, axis labels and the total.
    pub fn render_ascii(&self, width: usize, height: usize) -> String {
        let values: Vec<Real> = self.series().iter().map(|&x| x as Real).collect();
        let (peak_day, peak) = self.peak;
        let last_day = self.series().len().saturating_sub(1);

        let mut out = String::new();
        out.push_str(&self.title);
        out.push_str("\n\n");
        out.push_str(&format!("{} (max {})\n", Y_LABEL, group_thousands(peak)));
        out.push_str(&plot_vbars(&downsample(&values, width), height));
        out.push('\n');
        out.push_str(&format!("{}: 0..{}\n", X_LABEL, last_day));
        out.push_str(&format!("Peak on day {}\n", peak_day));
        out.push_str(&self.total_label);
        return out;
    }
}

/// Figure title describing the fixed scenario.
pub fn title(fixed: &FixedConfig) -> String {
    format!(
        "Number of Infections Assuming No Vaccine\n\
         Pop = {}, Contacts/Day = {}, Infectivity = {:.1}%, Days Contagious = {}",
        group_thousands(fixed.population()),
        fixed.baseline_contacts(),
        100.0 * fixed.infectivity(),
        fixed.infectious_days(),
    )
}

/// Summary text shown next to the curve.
pub fn total_label(total: Count) -> String {
    format!("Total Infections = {}", group_thousands(total))
}
