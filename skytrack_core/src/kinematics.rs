// skytrack_core/src/kinematics.rs

//! Rig kinematics. A stateful simulator that consumes pairs of close curve
//! samples and produces the suspended rig's position, a smoothly damped
//! orientation, and rope lengths to the fixed anchor points.
//!
//! The orientation deliberately carries hysteresis: the previous orientation
//! feeds into each update as a low-pass filter on path curvature, so the rig
//! does not snap violently on sharp turns. One instance must be owned by a
//! single logical session.

use nalgebra::{Matrix3, Point3, Rotation3, UnitQuaternion, Vector3};

use crate::types::AnchorSet;

/// Direction vectors shorter than this are treated as degenerate; the rig
/// keeps its previous orientation for that update.
pub const MIN_DIRECTION: f64 = 0.01;

// Secondary-adjustment gains on the target orientation. Banking follows the
// lateral component of the travel direction, pitch the vertical component.
const BANK_GAIN: f64 = -0.1;
const PITCH_GAIN: f64 = 0.05;

/// Blend factor toward the gentled target orientation each update. Tuned for
/// the nominal 16 ms tick cadence; calling at a different cadence changes the
/// perceived damping. Whether this should scale with wall-clock time is an
/// open tuning question, same as the playback base rate.
pub const ORIENTATION_BLEND: f64 = 0.02;

/// Snapshot of the instantaneous rig state returned by every update.
#[derive(Debug, Clone, PartialEq)]
pub struct RigPose {
    pub position: Point3<f64>,
    pub orientation: UnitQuaternion<f64>,
    pub rope_lengths: Vec<f64>,
}

/// The stateful rig simulator. See the module docs for the ownership rules.
#[derive(Debug, Clone)]
pub struct RigKinematics {
    position: Point3<f64>,
    orientation: UnitQuaternion<f64>,
    anchors: AnchorSet,
    rope_lengths: Vec<f64>,
}

impl RigKinematics {
    pub fn new(anchors: AnchorSet, initial_position: Point3<f64>) -> Self {
        let rope_lengths = vec![1.0; anchors.len()];
        Self {
            position: initial_position,
            orientation: UnitQuaternion::identity(),
            anchors,
            rope_lengths,
        }
    }

    /// Advances the rig to `current`, orienting it toward `next`.
    ///
    /// A degenerate direction (near-zero length) skips the orientation update
    /// but still moves the rig and recomputes rope lengths. All inputs are
    /// accepted; no call path produces a NaN orientation.
    pub fn update(&mut self, current: Point3<f64>, next: Point3<f64>) -> RigPose {
        if let Some(forward) = (next - current).try_normalize(MIN_DIRECTION) {
            if let Some(target) = orientation_along(&forward) {
                let gentled = gentle(&target, &forward);
                self.orientation = self
                    .orientation
                    .try_slerp(&gentled, ORIENTATION_BLEND, 1.0e-9)
                    .unwrap_or(self.orientation);
            }
        }

        // Position is never smoothed; only the orientation lags.
        self.position = current;
        for (length, anchor) in self.rope_lengths.iter_mut().zip(self.anchors.iter()) {
            *length = nalgebra::distance(anchor, &self.position);
        }

        self.pose()
    }

    pub fn pose(&self) -> RigPose {
        RigPose {
            position: self.position,
            orientation: self.orientation,
            rope_lengths: self.rope_lengths.clone(),
        }
    }

    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    pub fn orientation(&self) -> UnitQuaternion<f64> {
        self.orientation
    }

    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }
}

/// Builds the target orientation whose forward axis aligns with `forward`,
/// by Gram-Schmidt against the world up vector.
///
/// Returns `None` when `forward` is (anti)parallel to up and no lateral axis
/// exists; callers keep the previous orientation in that case.
fn orientation_along(forward: &Vector3<f64>) -> Option<UnitQuaternion<f64>> {
    let right = Vector3::y().cross(forward).try_normalize(MIN_DIRECTION)?;
    let up = forward.cross(&right).normalize();

    let basis = Matrix3::from_columns(&[right, up, *forward]);
    Some(UnitQuaternion::from_rotation_matrix(
        &Rotation3::from_matrix_unchecked(basis),
    ))
}

/// Applies the small banking and pitch adjustments that damp raw path
/// curvature into a gentled target orientation.
fn gentle(target: &UnitQuaternion<f64>, forward: &Vector3<f64>) -> UnitQuaternion<f64> {
    let bank = forward.z * BANK_GAIN * forward.norm();
    let pitch = forward.y * PITCH_GAIN;

    // With a Y-up world the x Euler angle pitches about the lateral axis and
    // the z angle banks about the travel direction.
    let (ex, ey, ez) = target.euler_angles();
    UnitQuaternion::from_euler_angles(ex + pitch, ey, ez + bank)
}
