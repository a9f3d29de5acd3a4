//! High-level runtime engine settings
//!
//! Selects how accelerations are accumulated when running a `Scenario`

use crate::configuration::config::EngineConfig;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    pub parallel: bool, // false = sequential, true = rayon (needs the `parallel` feature)
}

impl Engine {
    pub fn from_config(cfg: &EngineConfig) -> Self {
        if cfg.parallel && !cfg!(feature = "parallel") {
            log::warn!("parallel accumulation requested but orbitsim was built without the `parallel` feature, running sequentially");
        }
        Self {
            parallel: cfg.parallel,
        }
    }

    /// Whether ticks actually run on the rayon pool
    pub fn runs_parallel(&self) -> bool {
        self.parallel && cfg!(feature = "parallel")
    }
}
