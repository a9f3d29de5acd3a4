//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – runtime switches (parallel force accumulation)
//! - [`ParametersConfig`] – tick interval, run length and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The built-in three body scenario written out as YAML:
//!
//! ```yaml
//! engine:
//!   parallel: false         # rayon force accumulation
//!
//! parameters:
//!   dt: 1.0                 # tick interval
//!   ticks: 600              # ticks per run
//!   G: 6.674e-11            # optional, gravitational constant
//!   accuracy_threshold: 15.0  # optional, pairs closer than this are ignored
//!
//! bodies:
//!   - position: [500.0, 500.0]
//!     m: 1.0e14
//!   - position: [500.0, 600.0]
//!     velocity: [10.0, 0.0]   # optional, defaults to [0, 0]
//!     m: 1.0e12
//!   - position: [600.0, 700.0]
//!     velocity: [-5.0, 0.0]
//!     m: 3.0e12
//! ```
//!
//! [`Scenario::build_scenario`](crate::Scenario::build_scenario) validates
//! this and maps it into the runtime types.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::ScenarioError;
use crate::simulation::params::{DEFAULT_ACCURACY_THRESHOLD, DEFAULT_G};
use crate::simulation::states::{Mass, Precision};

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub parallel: bool, // `true` - accelerations computed on the rayon pool
}

fn default_g() -> Precision {
    DEFAULT_G
}

fn default_accuracy_threshold() -> Precision {
    DEFAULT_ACCURACY_THRESHOLD
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    pub dt: Precision, // tick interval
    pub ticks: u64,    // ticks per run
    #[serde(default = "default_g")]
    pub G: Precision, // gravitational constant
    #[serde(default = "default_accuracy_threshold")]
    pub accuracy_threshold: Precision, // pairs closer than this exert no force
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub position: [Precision; 2], // initial position in simulation units
    #[serde(default)]
    pub velocity: [Precision; 2], // initial velocity, at rest if omitted
    pub m: Mass, // mass of the body
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ScenarioError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let file = File::open(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}

impl Default for ScenarioConfig {
    /// Three bodies around a heavy central mass
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig {
                dt: 1.0,
                ticks: 600,
                G: DEFAULT_G,
                accuracy_threshold: DEFAULT_ACCURACY_THRESHOLD,
            },
            bodies: vec![
                BodyConfig { position: [500.0, 500.0], velocity: [0.0, 0.0], m: 1.0e14 },
                BodyConfig { position: [500.0, 600.0], velocity: [10.0, 0.0], m: 1.0e12 },
                BodyConfig { position: [600.0, 700.0], velocity: [-5.0, 0.0], m: 3.0e12 },
            ],
        }
    }
}
