use galsoup::{ScenarioConfig, Simulation};
use galsoup::run_viewer;
use galsoup::{bench_pairwise, bench_step};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "galaxy.yaml")]
    file_name: String,

    /// Print force and step timings instead of opening the viewer
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let scenario_cfg = ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    log::debug!("{scenario_cfg:?}");

    Ok(scenario_cfg.sanitized())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_pairwise();
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let simulation = Simulation::from_config(&scenario_cfg);
    run_viewer(simulation);

    Ok(())
}
