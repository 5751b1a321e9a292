// skytrack_core/src/types.rs

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

// --- Anchor layout constants ---
// The reference rig hangs from four poles arranged on a square footprint.
pub const DEFAULT_POLE_SPACING: f64 = 15.0;
pub const DEFAULT_POLE_HEIGHT: f64 = 20.0;

/// The fixed suspension points (pole tops) a rig's rope lengths are measured
/// against. Immutable for the lifetime of a simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorSet {
    anchors: Vec<Point3<f64>>,
}

impl AnchorSet {
    pub fn new(anchors: Vec<Point3<f64>>) -> Self {
        Self { anchors }
    }

    /// Four pole tops on a square of the given side length, at the given
    /// height. Ordered front-left, front-right, back-right, back-left.
    pub fn pole_square(spacing: f64, height: f64) -> Self {
        let half = spacing / 2.0;
        Self {
            anchors: vec![
                Point3::new(-half, height, -half),
                Point3::new(half, height, -half),
                Point3::new(half, height, half),
                Point3::new(-half, height, half),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.anchors.iter()
    }

    pub fn as_slice(&self) -> &[Point3<f64>] {
        &self.anchors
    }
}

impl Default for AnchorSet {
    fn default() -> Self {
        Self::pole_square(DEFAULT_POLE_SPACING, DEFAULT_POLE_HEIGHT)
    }
}
