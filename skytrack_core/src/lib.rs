// skytrack_core/src/lib.rs

// This file defines the public modules of the library.
pub mod course;
pub mod kinematics;
pub mod metrics;
pub mod path;
pub mod playback;
pub mod prelude;
pub mod sampler;
pub mod session;
pub mod types;
