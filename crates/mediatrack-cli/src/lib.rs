//! Mediatrack CLI support library.
//!
//! Scenario loading and replay live here so the binaries stay thin and the logic can be
//! tested without spawning processes.

pub mod replay;
pub mod scenario;

pub use replay::{render_table, replay, BatchLog, ReplayReport, SaveReport};
pub use scenario::{load_scenario, EntityEvent, JsonEntry, SaveOutcome, Scenario, ScenarioSave};

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
