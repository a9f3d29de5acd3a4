//! Fixed-step semi-implicit (symplectic) Euler integrator
//!
//! A tick reads the whole system first and writes it afterwards: every
//! acceleration is computed from the state before the tick, then every body
//! is integrated. Updating bodies in place while later ones still read them
//! would bias the result by iteration order.

use super::forces::AccelSet;
use super::states::{PVec2, Precision, System};

/// Advance the system by one tick of length `dt`
/// Updates positions, velocities, `sys.t` and `sys.ticks` in place
pub fn semi_implicit_euler(sys: &mut System, forces: &AccelSet, dt: Precision) {
    // a[i] holds the acceleration of body i at the current time
    let mut accels = vec![PVec2::zeros(); sys.len()];
    forces.accumulate_accels(&*sys, &mut accels);

    apply(sys, &accels, dt);
}

/// [`semi_implicit_euler`] with accelerations computed on the rayon pool
#[cfg(feature = "parallel")]
pub fn semi_implicit_euler_par(sys: &mut System, forces: &AccelSet, dt: Precision) {
    let mut accels = vec![PVec2::zeros(); sys.len()];
    forces.accumulate_accels_par(&*sys, &mut accels);

    apply(sys, &accels, dt);
}

fn apply(sys: &mut System, accels: &[PVec2], dt: Precision) {
    // v_n+1 = v_n + dt a_n, x_n+1 = x_n + dt v_n+1
    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        b.integrate(*a, dt);
    }

    sys.t += dt;
    sys.ticks += 1;
}
