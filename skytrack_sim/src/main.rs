// skytrack_sim/src/main.rs

mod cli;
mod config;

use clap::Parser;
use tracing::{error, info};

use skytrack_core::playback::NOMINAL_TICK_MS;
use skytrack_core::prelude::RideSession;

use crate::cli::Cli;

fn main() {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();

    info!("Loading scenario from: {}", cli.scenario.display());
    let scenario = match config::load_scenario(&cli.scenario) {
        Ok(scenario) => scenario,
        Err(e) => {
            error!(
                "Failed to load or parse scenario file at {}: {}",
                cli.scenario.display(),
                e
            );
            std::process::exit(1);
        }
    };

    let course = scenario.course.to_course();
    let anchors = scenario.anchors.to_anchor_set();
    let speed = cli.speed.unwrap_or(scenario.playback.speed_multiplier);

    let mut session =
        match RideSession::new(&course, anchors, scenario.playback.divisions_per_segment) {
            Ok(session) => session,
            Err(e) => {
                error!("Failed to start a session for '{}': {}", course.name(), e);
                std::process::exit(1);
            }
        };
    session.set_speed_multiplier(speed);

    info!(
        course = course.name(),
        control_points = course.points().len(),
        path_points = session.path().len(),
        length_m = format!("{:.2}", session.path().arc_length()),
        speed,
        "Session ready"
    );

    session.play();
    let log_every = cli.log_every.max(1);

    for tick in 0..cli.max_ticks {
        let frame = session.tick(NOMINAL_TICK_MS);

        if tick % log_every == 0 {
            let t = &frame.telemetry;
            info!(
                progress = format!("{:.3}", frame.progress),
                speed_ms = format!("{:.2}", t.speed),
                total_g = format!("{:.2}", t.total_g),
                vertical_g = format!("{:.2}", t.vertical_g),
                lateral_g = format!("{:.2}", t.lateral_g),
                altitude_m = format!("{:.2}", t.altitude),
                "telemetry"
            );
        }

        if !session.is_playing() {
            info!(ticks = tick + 1, "Ride reached the end of the path");
            break;
        }
    }

    let last = session.frame();
    info!(
        progress = format!("{:.3}", last.progress),
        position = ?last.pose.position,
        rope_lengths = ?last
            .pose
            .rope_lengths
            .iter()
            .map(|l| (l * 100.0).round() / 100.0)
            .collect::<Vec<_>>(),
        "Final rig state"
    );
}
