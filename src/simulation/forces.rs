//! Force / acceleration contributors for the n-body engine
//!
//! `gravity_at` is the thresholded Newtonian kernel shared by
//! [`Body::step`](crate::Body::step) and by [`ThresholdGravity`], so stepping
//! bodies one by one against a snapshot and ticking a whole `System` give the
//! same bits.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, PVec2, Precision, System};

/// Net gravitational acceleration at `position` due to `others`.
///
/// A pair closer than `accuracy_threshold` is skipped outright. This is a
/// hard cutoff: acceleration jumps from zero to `G m / threshold^2` as a pair
/// crosses the floor, there is no softening.
#[allow(non_snake_case)]
pub fn gravity_at<'a, I>(position: PVec2, others: I, G: Precision, accuracy_threshold: Precision) -> PVec2
where
    I: IntoIterator<Item = &'a Body>,
{
    let mut acceleration = PVec2::zeros();

    for other in others {
        // points from `position` toward the other body
        let distance = other.position() - position;
        let dist = distance.length();

        // NaN distances fail this comparison too and are dropped
        if dist >= accuracy_threshold {
            let magnitude = G * Precision::from(other.mass()) / (dist * dist);
            acceleration += PVec2::scalar_fill(magnitude) * distance.normalize();
        }
    }

    acceleration
}

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of all terms acting on body `i`
    pub fn acceleration_on(&self, i: usize, sys: &System) -> PVec2 {
        let mut total = PVec2::zeros();
        for term in &self.terms {
            total += term.acceleration_on(i, sys);
        }
        total
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &System, out: &mut [PVec2]) {
        for (i, a) in out.iter_mut().enumerate() {
            *a = self.acceleration_on(i, sys);
        }
    }

    /// Same as [`AccelSet::accumulate_accels`], bodies spread over the rayon
    /// pool. Workers only read `sys` and each writes its own `out[i]`
    #[cfg(feature = "parallel")]
    pub fn accumulate_accels_par(&self, sys: &System, out: &mut [PVec2]) {
        out.par_iter_mut().enumerate().for_each(|(i, a)| {
            *a = self.acceleration_on(i, sys);
        });
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration source operating on a [`System`] snapshot
pub trait Acceleration {
    /// Contribution to the acceleration of body `i`
    fn acceleration_on(&self, i: usize, sys: &System) -> PVec2;
}

/// Newtonian gravity from every other body, pairs under
/// `accuracy_threshold` ignored
#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct ThresholdGravity {
    pub G: Precision,                  // gravitational constant
    pub accuracy_threshold: Precision, // pair distance floor
}

impl ThresholdGravity {
    pub fn from_parameters(params: &Parameters) -> Self {
        Self {
            G: params.G,
            accuracy_threshold: params.accuracy_threshold,
        }
    }

    /// Acceleration at `position` due to `others`
    pub fn at<'a, I>(&self, position: PVec2, others: I) -> PVec2
    where
        I: IntoIterator<Item = &'a Body>,
    {
        gravity_at(position, others, self.G, self.accuracy_threshold)
    }
}

impl Acceleration for ThresholdGravity {
    fn acceleration_on(&self, i: usize, sys: &System) -> PVec2 {
        match sys.bodies.get(i) {
            Some(body) => self.at(body.position(), sys.others(i)),
            None => PVec2::zeros(),
        }
    }
}
