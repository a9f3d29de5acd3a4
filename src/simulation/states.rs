//! Core state types for the N-body simulation.
//!
//! - `Body`   one point mass (mass, position, velocity)
//! - `System` the ordered collection of bodies plus elapsed time `t`
//!
//! Kinematics use `Precision` (f64) while mass is stored as `Mass` (f32).
//! The split is intentional: positions and velocities collect many small
//! increments over a long run, mass is only ever read.

use crate::simulation::forces::ThresholdGravity;
use crate::simulation::vector::Vector2;

pub type Precision = f64;
pub type Mass = f32;
pub type PVec2 = Vector2<Precision>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    mass: Mass,
    position: PVec2,
    velocity: PVec2,
}

impl Body {
    /// Body at rest
    pub fn new(mass: Mass, position: PVec2) -> Self {
        Self::with_velocity(mass, position, PVec2::zeros())
    }

    pub fn with_velocity(mass: Mass, position: PVec2, velocity: PVec2) -> Self {
        Self {
            mass,
            position,
            velocity,
        }
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    pub fn position(&self) -> PVec2 {
        self.position
    }

    pub fn velocity(&self) -> PVec2 {
        self.velocity
    }

    /// Advance this body by one tick of length `dt` against `others`.
    ///
    /// `others` is the state of every other body as it was before this tick
    /// and must not contain `self`. Pairs closer than
    /// `gravity.accuracy_threshold` contribute nothing.
    pub fn step(&mut self, others: &[Body], dt: Precision, gravity: &ThresholdGravity) {
        let acceleration = gravity.at(self.position, others.iter());
        self.integrate(acceleration, dt);
    }

    /// Semi-implicit Euler update: velocity first, then position from the
    /// already-updated velocity
    pub fn integrate(&mut self, acceleration: PVec2, dt: Precision) {
        let dt = PVec2::scalar_fill(dt);
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // indexed arena, order is stable for the whole run
    pub t: Precision,      // elapsed time
    pub ticks: u64,        // completed ticks
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            t: 0.0,
            ticks: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Every body except the one at index `i`
    pub fn others(&self, i: usize) -> impl Iterator<Item = &Body> {
        self.bodies
            .iter()
            .enumerate()
            .filter(move |(j, _)| *j != i)
            .map(|(_, b)| b)
    }
}
