// skytrack_sim/src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// Skytrack: a headless ride-track simulation driver.
///
/// Loads a course scenario, plays it back at the nominal tick cadence and
/// logs the rig pose and telemetry along the way.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path to the scenario TOML file to run.
    #[arg(short, long, default_value = "assets/scenarios/demo_course.toml")]
    pub scenario: PathBuf,

    /// Playback speed multiplier; overrides the scenario's value when given.
    #[arg(long)]
    pub speed: Option<f64>,

    /// Safety cap on the number of ticks to simulate.
    #[arg(long, default_value_t = 2000)]
    pub max_ticks: usize,

    /// Log telemetry every N ticks.
    #[arg(long, default_value_t = 25)]
    pub log_every: usize,
}
