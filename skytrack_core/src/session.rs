// skytrack_core/src/session.rs

//! A ride session wires the scheduler, sampler, kinematics and telemetry
//! together behind one owner. Hosts needing several simultaneous rides hold
//! one session each; nothing here is shared or global.

use nalgebra::Point3;

use crate::course::{Course, CourseError};
use crate::kinematics::{RigKinematics, RigPose};
use crate::metrics::{self, TelemetrySnapshot};
use crate::path::DensePath;
use crate::playback::PlaybackScheduler;
use crate::sampler::CurveSampler;
use crate::types::AnchorSet;

/// Progress step between the two curve samples handed to the kinematics.
pub const KINEMATIC_LOOKAHEAD: f64 = 0.01;

/// Everything a renderer or readout needs from one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub progress: f64,
    pub pose: RigPose,
    pub telemetry: TelemetrySnapshot,
}

/// One simulated ride over one course. Owns all mutable engine state.
#[derive(Debug, Clone)]
pub struct RideSession {
    path: DensePath,
    scheduler: PlaybackScheduler,
    kinematics: RigKinematics,
    speed_multiplier: f64,
}

impl RideSession {
    /// Builds the dense path and rig state for a course.
    ///
    /// Courses tagged with an unimplemented ride profile are rejected here,
    /// once, instead of being re-checked every tick.
    pub fn new(
        course: &Course,
        anchors: AnchorSet,
        divisions_per_segment: usize,
    ) -> Result<Self, CourseError> {
        if !course.profile().is_supported() {
            return Err(CourseError::UnsupportedProfile(course.profile()));
        }

        let path = course.build_path(divisions_per_segment);
        let start = path.first().copied().unwrap_or_else(Point3::origin);
        Ok(Self {
            path,
            scheduler: PlaybackScheduler::new(),
            kinematics: RigKinematics::new(anchors, start),
            speed_multiplier: 1.0,
        })
    }

    pub fn path(&self) -> &DensePath {
        &self.path
    }

    pub fn progress(&self) -> f64 {
        self.scheduler.progress()
    }

    pub fn is_playing(&self) -> bool {
        self.scheduler.is_playing()
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn set_speed_multiplier(&mut self, multiplier: f64) {
        self.speed_multiplier = multiplier.max(0.0);
    }

    pub fn play(&mut self) {
        self.scheduler.play();
    }

    pub fn pause(&mut self) {
        self.scheduler.pause();
    }

    pub fn seek(&mut self, progress: f64) {
        self.scheduler.seek(progress);
    }

    /// Advances playback by the elapsed time and returns the frame output.
    pub fn tick(&mut self, dt_ms: f64) -> FrameOutput {
        let progress = self.scheduler.tick(dt_ms, self.speed_multiplier);
        self.sample_frame(progress)
    }

    /// Recomputes the frame at the current progress without advancing, for
    /// redraws while paused or after a seek.
    pub fn frame(&mut self) -> FrameOutput {
        self.sample_frame(self.scheduler.progress())
    }

    fn sample_frame(&mut self, progress: f64) -> FrameOutput {
        let sampler = CurveSampler::new(&self.path);
        let current = sampler.point_at(progress);
        let next = sampler.point_at((progress + KINEMATIC_LOOKAHEAD).min(1.0));

        FrameOutput {
            progress,
            pose: self.kinematics.update(current, next),
            telemetry: metrics::compute(&sampler, progress),
        }
    }
}
