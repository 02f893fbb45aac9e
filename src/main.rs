use colsim::{bench_curve, bench_steps, bench_strategies, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML under the scenarios/ directory
    #[arg(short, default_value = "bouncing.yaml")]
    file_name: String,

    /// Run without the viewer until the scenario's runtime cap
    #[arg(long)]
    headless: bool,

    /// Run the strategy timing sweeps instead of a scenario
    #[arg(long)]
    bench: bool,

    /// Emit the per-tick timing curve as CSV (implies --bench)
    #[arg(long)]
    bench_curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
    Ok(scenario_cfg)
}

/// Fixed-step run with no renderer attached; stops at the runtime cap.
fn run_headless(mut scenario: Scenario) {
    // Seconds of simulated time to run when the scenario sets no cap.
    const FALLBACK_RUNTIME: f64 = 10.0;

    let dt = 1.0 / 60.0;
    let capped = scenario.engine.metrics.has_cap();
    while scenario.engine.is_running() {
        scenario.engine.step(dt);
        if !capped && scenario.engine.metrics.total_runtime >= FALLBACK_RUNTIME {
            scenario.engine.stop();
        }
    }
    println!("{}", scenario.engine.report());
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench || args.bench_curve {
        if args.bench_curve {
            bench_curve();
        } else {
            bench_strategies();
            bench_steps();
        }
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build(scenario_cfg)?;

    if args.headless {
        run_headless(scenario);
    } else {
        colsim::run_viewer(scenario);
    }

    Ok(())
}
