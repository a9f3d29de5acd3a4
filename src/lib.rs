pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::vector::Vector2;
pub use simulation::states::{Body, System, Mass, Precision, PVec2};
pub use simulation::params::{Parameters, DEFAULT_G, DEFAULT_ACCURACY_THRESHOLD};
pub use simulation::forces::{gravity_at, Acceleration, AccelSet, ThresholdGravity};
pub use simulation::integrator::semi_implicit_euler;
#[cfg(feature = "parallel")]
pub use simulation::integrator::semi_implicit_euler_par;
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};
pub use error::ScenarioError;

pub use visualization::transform::translation_matrix;
#[cfg(feature = "viewer")]
pub use visualization::viewer2d::run_2d;

pub use benchmark::tick_bench::{bench_header, bench_tick};
