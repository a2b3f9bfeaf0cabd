use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use mediatrack_cli::{init_tracing, load_scenario, render_table, replay};
use mediatrack_core::TrackingConfig;

#[derive(Parser, Debug)]
#[command(name = "mediatrack-replay")]
#[command(about = "Replay recorded save operations and show what reaches the media tracker")]
struct Args {
    /// Scenario file (JSON) with a property schema and save operations
    #[arg(long, value_name = "FILE")]
    scenario: PathBuf,

    /// Output format: json or table (default: table)
    #[arg(long, default_value = "table")]
    format: String,

    /// Make files transient when they lose their last reference
    /// (overrides MEDIA_TRACKING_MAKE_TRANSIENT_ON_ORPHAN)
    #[arg(long)]
    make_transient_on_orphan: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    let mut config = TrackingConfig::from_env()?;
    if args.make_transient_on_orphan {
        config.make_transient_on_orphan = true;
    }

    let scenario = load_scenario(&args.scenario)?;
    tracing::info!(
        saves = scenario.saves.len(),
        entity_types = scenario.schema.len(),
        "Replaying scenario"
    );

    let report = replay(&scenario, config)?;

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            print!("{}", render_table(&report));
        }
    }

    Ok(())
}
