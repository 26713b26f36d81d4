//! Shared command utilities

use tracing_subscriber::EnvFilter;

/// Initialize logging with the given level for this crate
///
/// `RUST_LOG` overrides the CLI-derived level when set.
pub fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wtms_merger={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Outcome counters reported after a merge run
#[derive(Debug, Clone, Default)]
pub struct MergeStats {
    pub plant_records: usize,
    pub weather_observations: usize,
    pub merged_rows: usize,
    pub parameters: usize,
}
