use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, PVec2, System};

/// Helper to build a manual System of size `n`
/// Bodies sit on a deterministic spiral, no rand needed
fn make_system(n: usize) -> System {
    let bodies = (0..n)
        .map(|i| {
            let i_f = i as f64;
            let r = 100.0 + 20.0 * i_f;
            let position = PVec2::new(500.0 + r * (i_f * 0.37).cos(), 500.0 + r * (i_f * 0.37).sin());
            Body::new(1.0e12, position)
        })
        .collect();

    System::new(bodies)
}

fn time_ticks(n: usize, steps: u32, parallel: bool) -> f64 {
    let mut scenario = Scenario::new(Engine { parallel }, Parameters::new(1.0, steps as u64), make_system(n));

    // Warm-up
    scenario.tick();

    let t0 = Instant::now();
    for _ in 0..steps {
        scenario.tick();
    }
    t0.elapsed().as_secs_f64() * 1000.0 / steps as f64
}

/// Csv header for [`bench_tick`]; the parallel column only exists when the
/// `parallel` feature is built in
pub fn bench_header() -> &'static str {
    if cfg!(feature = "parallel") {
        "N,sequential_ms,parallel_ms"
    } else {
        "N,sequential_ms"
    }
}

/// Time one tick, sequential against parallel accumulation, for a range of n
/// Output is csv so it can be pasted straight into a spreadsheet
pub fn bench_tick() {
    let with_parallel = cfg!(feature = "parallel");
    if !with_parallel {
        log::warn!("built without the `parallel` feature, timing sequential ticks only");
    }
    println!("{}", bench_header());

    for n in [100, 200, 400, 800, 1600, 3200] {
        // Small n: average over more ticks to smooth noise
        let steps = if n <= 400 { 20 } else { 3 };

        let ms_seq = time_ticks(n, steps, false);
        if with_parallel {
            let ms_par = time_ticks(n, steps, true);
            println!("{},{:.6},{:.6}", n, ms_seq, ms_par);
        } else {
            println!("{},{:.6}", n, ms_seq);
        }
    }
}
