// skytrack_core/src/playback.rs

//! Playback scheduling. Owns the normalized progress value and advances it
//! over time with pause/resume/seek and stop-at-end semantics.

/// Progress advanced per nominal tick at speed multiplier 1.
///
/// Tuned together with [`NOMINAL_TICK_MS`]: the reference driver ticks at
/// ~60 fps, so a full ride takes about eight seconds. Whether this rate (and
/// the orientation blend factor) should instead be derived from wall-clock
/// time is an open tuning question; changing it changes the visible motion,
/// so the scheduler scales by the supplied delta but keeps the nominal-tick
/// units.
pub const BASE_RATE: f64 = 0.002;

/// The tick period the base rate is calibrated against, in milliseconds.
pub const NOMINAL_TICK_MS: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// Owns the progress scalar in [0, 1]. One instance per ride session.
#[derive(Debug, Clone, Default)]
pub struct PlaybackScheduler {
    progress: f64,
    state: PlaybackState,
}

impl PlaybackScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Starts playback; a ride standing at the end rewinds first.
    pub fn play(&mut self) {
        if self.progress >= 1.0 {
            self.progress = 0.0;
        }
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        self.state = PlaybackState::Paused;
    }

    /// Advances progress while playing and returns the new value.
    ///
    /// The advance is `BASE_RATE * speed_multiplier` per nominal tick, scaled
    /// by the actual elapsed time. Reaching the end clamps to 1 and pauses.
    pub fn tick(&mut self, dt_ms: f64, speed_multiplier: f64) -> f64 {
        if self.state == PlaybackState::Playing {
            self.progress += BASE_RATE * speed_multiplier * (dt_ms / NOMINAL_TICK_MS);
            if self.progress >= 1.0 {
                self.progress = 1.0;
                self.state = PlaybackState::Paused;
            }
        }
        self.progress
    }

    /// Jumps to the given progress, clamped to [0, 1]. Allowed in either
    /// state; scrubbing to the end while playing pauses.
    pub fn seek(&mut self, value: f64) {
        self.progress = value.clamp(0.0, 1.0);
        if self.state == PlaybackState::Playing && self.progress >= 1.0 {
            self.state = PlaybackState::Paused;
        }
    }
}
