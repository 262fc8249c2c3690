use rcsim::{RunState, Scenario, ScenarioConfig};
use rcsim::{bench_curves, bench_integrators};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "hill.yaml")]
    file_name: String,

    /// Run the curve and integrator benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("cannot open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("malformed scenario {}", config_path.display()))?;

    debug!("{:?}", scenario_cfg);

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_curves()?;
        bench_integrators()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let Scenario { mut simulation, run } = Scenario::build_scenario(scenario_cfg)?;

    // headless stand-in for the animation loop: fixed-rate timestamps
    let frame = 1.0 / run.tick_rate;
    simulation.start()?;
    let mut ticks = 0u64;
    let mut state = RunState::Running;
    while state == RunState::Running {
        let timestamp = ticks as f64 * frame;
        if timestamp > run.t_end {
            simulation.stop();
            break;
        }
        state = simulation.tick(timestamp);
        debug!(
            "t = {:.4}, y = {:?}, position = {:?}, force = {:?}",
            timestamp,
            simulation.state(),
            simulation.position(),
            simulation.force()
        );
        ticks += 1;
    }

    info!(
        "finished after {} ticks: {:?}, final state {:?}",
        ticks,
        simulation.run_state(),
        simulation.state()
    );

    Ok(())
}
