//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! `Scenario` is the driver: it owns the bodies and advances all of them once
//! per tick. With the `viewer` feature it is inserted into Bevy as a
//! `Resource`.

use crate::configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};
use crate::error::ScenarioError;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, ThresholdGravity};
use crate::simulation::integrator::semi_implicit_euler;
#[cfg(feature = "parallel")]
use crate::simulation::integrator::semi_implicit_euler_par;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, PVec2, System};

/// Runtime bundle: engine settings, parameters, current system state and
/// the set of active force laws
#[cfg_attr(feature = "viewer", derive(bevy::prelude::Resource))]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    /// Validate `cfg` and assemble the runtime scenario
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        let parameters = build_parameters(&cfg.parameters)?;

        // Bodies: map `BodyConfig` -> runtime `Body`
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(index, bc)| build_body(index, bc))
            .collect::<Result<Vec<_>, _>>()?;

        let engine = Engine::from_config(&cfg.engine);

        log::info!(
            "built scenario: {} bodies, dt = {}, {} ticks, G = {:e}, threshold = {}",
            bodies.len(),
            parameters.dt,
            parameters.ticks,
            parameters.G,
            parameters.accuracy_threshold
        );

        Ok(Self::new(engine, parameters, System::new(bodies)))
    }

    /// Scenario with Newtonian threshold gravity as its only force term
    pub fn new(engine: Engine, parameters: Parameters, system: System) -> Self {
        let forces = AccelSet::new().with(ThresholdGravity::from_parameters(&parameters));
        Self {
            engine,
            parameters,
            system,
            forces,
        }
    }

    /// Advance every body by one tick
    pub fn tick(&mut self) {
        let dt = self.parameters.dt;

        #[cfg(feature = "parallel")]
        {
            if self.engine.runs_parallel() {
                semi_implicit_euler_par(&mut self.system, &self.forces, dt);
                return;
            }
        }

        semi_implicit_euler(&mut self.system, &self.forces, dt);
    }

    /// Run `parameters.ticks` ticks.
    /// Bodies whose state stops being finite are reported once each; the run
    /// carries on regardless
    pub fn run(&mut self) {
        let total = self.parameters.ticks;
        let report_every = (total / 10).max(1);
        let mut diverged = vec![false; self.system.len()];

        for n in 1..=total {
            self.tick();

            for (i, body) in self.system.bodies.iter().enumerate() {
                if !diverged[i] && !body.is_finite() {
                    diverged[i] = true;
                    log::warn!(
                        "body {} diverged at tick {} (t = {}): position {:?}, velocity {:?}",
                        i,
                        self.system.ticks,
                        self.system.t,
                        body.position(),
                        body.velocity()
                    );
                }
            }

            if n % report_every == 0 {
                log::debug!("tick {}/{} (t = {})", n, total, self.system.t);
            }
        }

        log::info!("finished {} ticks, t = {}", total, self.system.t);
    }

    /// Current positions in body order
    pub fn positions(&self) -> Vec<PVec2> {
        self.system.bodies.iter().map(Body::position).collect()
    }
}

fn build_parameters(p_cfg: &ParametersConfig) -> Result<Parameters, ScenarioError> {
    if !(p_cfg.dt.is_finite() && p_cfg.dt > 0.0) {
        return Err(ScenarioError::InvalidParameter {
            name: "dt",
            expected: "positive and finite",
            value: p_cfg.dt,
        });
    }
    if !p_cfg.G.is_finite() {
        return Err(ScenarioError::InvalidParameter {
            name: "G",
            expected: "finite",
            value: p_cfg.G,
        });
    }
    if !(p_cfg.accuracy_threshold.is_finite() && p_cfg.accuracy_threshold >= 0.0) {
        return Err(ScenarioError::InvalidParameter {
            name: "accuracy_threshold",
            expected: "non-negative and finite",
            value: p_cfg.accuracy_threshold,
        });
    }

    Ok(Parameters {
        dt: p_cfg.dt,
        ticks: p_cfg.ticks,
        G: p_cfg.G,
        accuracy_threshold: p_cfg.accuracy_threshold,
    })
}

fn build_body(index: usize, bc: &BodyConfig) -> Result<Body, ScenarioError> {
    if !(bc.m.is_finite() && bc.m > 0.0) {
        return Err(ScenarioError::InvalidBody {
            index,
            reason: format!("mass must be positive and finite, got {}", bc.m),
        });
    }
    let position = PVec2::from(bc.position);
    let velocity = PVec2::from(bc.velocity);
    if !position.is_finite() || !velocity.is_finite() {
        return Err(ScenarioError::InvalidBody {
            index,
            reason: "position and velocity must be finite".to_string(),
        });
    }

    Ok(Body::with_velocity(bc.m, position, velocity))
}
