// skytrack_core/src/prelude.rs

// --- Core Data Structures (The "nouns" of the library) ---
pub use crate::course::{Course, CourseError, RideProfile};
pub use crate::kinematics::{RigKinematics, RigPose};
pub use crate::metrics::TelemetrySnapshot;
pub use crate::path::DensePath;
pub use crate::types::AnchorSet;

// --- Engine Operations ---
pub use crate::metrics::compute as compute_telemetry;
pub use crate::path::{build_path, build_path_total};
pub use crate::playback::{PlaybackScheduler, PlaybackState};
pub use crate::sampler::CurveSampler;
pub use crate::session::{FrameOutput, RideSession};
