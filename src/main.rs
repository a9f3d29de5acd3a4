use orbitsim::{bench_tick, Scenario, ScenarioConfig};

use anyhow::{bail, Result};
use clap::Parser;

use std::path::PathBuf;

const DEFAULT_SCENARIO: &str = "three_body.yaml";

#[derive(Parser, Debug)]
#[command(about = "2D gravitational n-body simulator")]
struct Args {
    /// Scenario file, as a path or a name under `scenarios/`
    #[arg(short, long, default_value = DEFAULT_SCENARIO)]
    file_name: String,

    /// Override the number of ticks in the scenario
    #[arg(long)]
    ticks: Option<u64>,

    /// Run without opening the viewer
    #[arg(long)]
    headless: bool,

    /// Time sequential against parallel ticks and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_config(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let in_scenarios = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);

    let cfg = if direct.is_file() {
        ScenarioConfig::from_path(&direct)?
    } else if in_scenarios.is_file() {
        ScenarioConfig::from_path(&in_scenarios)?
    } else if file_name == DEFAULT_SCENARIO {
        log::info!("{} not found, using built-in three body scenario", DEFAULT_SCENARIO);
        ScenarioConfig::default()
    } else {
        bail!("scenario {} not found (tried {} and {})", file_name, direct.display(), in_scenarios.display());
    };

    Ok(cfg)
}

fn run_headless(mut scenario: Scenario) {
    scenario.run();

    println!("t = {} after {} ticks", scenario.system.t, scenario.system.ticks);
    for (i, b) in scenario.system.bodies.iter().enumerate() {
        let (x, v) = (b.position(), b.velocity());
        println!("body {i}: m = {:e}, x = ({:.6}, {:.6}), v = ({:.6}, {:.6})", b.mass(), x.i, x.j, v.i, v.j);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_tick();
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_config(&args.file_name)?;
    if let Some(ticks) = args.ticks {
        scenario_cfg.parameters.ticks = ticks;
    }

    let scenario = Scenario::build_scenario(scenario_cfg)?;

    #[cfg(feature = "viewer")]
    {
        if !args.headless {
            orbitsim::run_2d(scenario);
            return Ok(());
        }
    }

    #[cfg(not(feature = "viewer"))]
    {
        if !args.headless {
            log::debug!("built without the `viewer` feature, running headless");
        }
    }

    run_headless(scenario);

    Ok(())
}
