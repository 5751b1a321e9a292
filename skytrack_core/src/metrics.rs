// skytrack_core/src/metrics.rs

//! Telemetry derivation. Speed and G-forces come from finite differences of
//! three nearby curve samples; pure and recomputed on every query, so the
//! display collaborator owns any history it wants to keep.

use serde::Serialize;

use crate::sampler::CurveSampler;

/// Half-window used for the finite differences, in progress units.
pub const SAMPLE_DELTA: f64 = 0.01;

/// Scale from progress-space velocity to a plausible speed readout in m/s.
/// Folds in the index (not arc-length) parameterization of the sampler.
pub const SPEED_SCALE: f64 = 50.0;

/// Scale from progress-space acceleration to a G-force readout.
pub const G_SCALE: f64 = 10.0;

/// Derived instantaneous physics readout shown alongside the ride.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TelemetrySnapshot {
    pub speed: f64,
    pub total_g: f64,
    pub vertical_g: f64,
    pub lateral_g: f64,
    pub altitude: f64,
}

/// Computes the telemetry snapshot at the given progress.
///
/// Sampling is clamped to [0, 1]; at the path ends the window collapses
/// toward the current point and the derived values fall toward zero, which is
/// accepted boundary behavior rather than an error.
pub fn compute(sampler: &CurveSampler<'_>, progress: f64) -> TelemetrySnapshot {
    let prev = sampler.point_at((progress - SAMPLE_DELTA).max(0.0));
    let curr = sampler.point_at(progress);
    let next = sampler.point_at((progress + SAMPLE_DELTA).min(1.0));

    let velocity = next - prev;
    let speed = velocity.norm() * SPEED_SCALE;

    let prev_velocity = curr - prev;
    let acceleration = velocity - prev_velocity;

    TelemetrySnapshot {
        speed,
        total_g: acceleration.norm() * G_SCALE,
        vertical_g: acceleration.y.abs() * G_SCALE,
        lateral_g: acceleration.xz().norm() * G_SCALE,
        altitude: curr.y,
    }
}
