use colsim::{ScenarioConfig, Scenario, Scenario3};
use colsim::{find_collision, resolve, resolve_3d, timed};
use colsim::{run_2d, CollisionReport};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "elastic_2d.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario file {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .context("failed to parse scenario YAML")?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let scenario_cfg = load_scenario_from_yaml()?;

    if scenario_cfg.engine.dimension == false {
        let scenario = Scenario::build_scenario(scenario_cfg)?;
        let (o1, o2) = &scenario.objects;

        let event = timed("collision time search", || {
            find_collision(o1, o2, &scenario.parameters)
        });
        let outcome = resolve(scenario.engine.mode, o1, o2)?;

        run_2d(scenario, CollisionReport { event, outcome });
    } else {
        let scenario = Scenario3::build_scenario_3d(scenario_cfg)?;
        let (o1, o2) = &scenario.objects;

        let outcome = resolve_3d(scenario.engine.mode, o1, o2)?;
        println!("{outcome}");
    }

    //bench_search();

    Ok(())
}
