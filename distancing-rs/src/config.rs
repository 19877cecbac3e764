//! Scenario files.
//!
//! A scenario is a TOML document with optional `[fixed]`, `[variable]` and
//! `[plot]` tables. Every missing key falls back to the reference scenario.
use crate::{
    error::Result,
    params::{FixedConfig, VariableConfig},
};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Size of the text plot, in characters.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, CopyGetters)]
#[serde(default)]
#[getset(get_copy = "pub")]
pub struct PlotConfig {
    width: usize,
    height: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            width: 100,
            height: 20,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Getters, CopyGetters)]
#[serde(default)]
pub struct Config {
    #[getset(get_copy = "pub")]
    fixed: FixedConfig,
    #[getset(get_copy = "pub")]
    variable: VariableConfig,
    #[getset(get_copy = "pub")]
    plot: PlotConfig,
    /// Path of the CSV epicurve export, if any.
    #[getset(get = "pub")]
    output: Option<String>,
    #[getset(get_copy = "pub")]
    verbose: bool,
}

impl Config {
    /// Read and validate a scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    /// Parse and validate a scenario from TOML source.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(data)?;
        cfg.fixed.validate()?;
        cfg.variable.validate()?;
        return Ok(cfg);
    }
}
