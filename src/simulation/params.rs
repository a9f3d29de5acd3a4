//! Numerical and physical parameters for a run
//!
//! `Parameters` holds everything the physics reads but never writes:
//! - tick interval `dt` and run length `ticks`,
//! - gravitational constant `G`,
//! - `accuracy_threshold`, the distance below which a pair is ignored
//!
//! They are injected into each `Scenario`, so simulations with different
//! constants can live side by side.

use crate::simulation::states::Precision;

pub const DEFAULT_G: Precision = 6.674e-11;
pub const DEFAULT_ACCURACY_THRESHOLD: Precision = 15.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: Precision,                 // tick interval
    pub ticks: u64,                    // ticks per run
    pub G: Precision,                  // gravitational constant
    pub accuracy_threshold: Precision, // pair distance floor
}

impl Parameters {
    /// Default constants with the given tick interval and run length
    pub fn new(dt: Precision, ticks: u64) -> Self {
        Self {
            dt,
            ticks,
            G: DEFAULT_G,
            accuracy_threshold: DEFAULT_ACCURACY_THRESHOLD,
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new(1.0, 600)
    }
}
