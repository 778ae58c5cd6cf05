use lorentzsim::{Scenario, BodyStatus};
use lorentzsim::{bench_rk4, bench_field_lines};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file: a path, or a name under the crate's `scenarios/` directory
    #[arg(short, default_value = "cyclotron.yaml")]
    file_name: String,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

fn resolve_scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.bench {
        bench_rk4();
        bench_field_lines();
        return Ok(());
    }

    let path = resolve_scenario_path(&args.file_name);

    let mut scenario = Scenario::from_path(&path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;

    scenario.run().context("simulation run failed")?;
    let trajectory = scenario
        .simulation
        .trajectory()
        .context("run finished without a trajectory")?;

    for (i, (body, status)) in scenario
        .simulation
        .bodies()
        .iter()
        .zip(scenario.simulation.statuses())
        .enumerate()
    {
        let last = trajectory.last_recorded_step(i);
        let escaped = match status {
            BodyStatus::Active => "active".to_string(),
            BodyStatus::Escaped { at_step } => format!("escaped at step {at_step}"),
        };
        info!(
            "body {i}: q/m = {:.4e}, last recorded step {:?}, {escaped}, final x = [{:.4}, {:.4}, {:.4}]",
            body.charge_to_mass(),
            last,
            body.position.x,
            body.position.y,
            body.position.z,
        );
    }

    let lines = scenario.trace_field_lines().context("field-line tracing failed")?;
    for (i, line) in lines.iter().enumerate() {
        if let (Some(first), Some(last)) = (line.first(), line.last()) {
            info!(
                "field line {i}: {} points from [{:.3}, {:.3}, {:.3}] to [{:.3}, {:.3}, {:.3}]",
                line.len(),
                first.x, first.y, first.z,
                last.x, last.y, last.z,
            );
        }
    }

    Ok(())
}
