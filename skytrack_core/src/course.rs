// skytrack_core/src/course.rs

//! Course documents. Owns the user-authored control points and per-segment
//! curvature offsets, and keeps the two lists consistent under editing.
//! Storage collaborators persist courses as opaque structured data via serde.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::path::{self, DensePath};

/// A course keeps at least this many control points once it has them.
pub const MIN_CONTROL_POINTS: usize = 2;

/// Spacing applied along x when appending a control point after the last one.
const NEW_POINT_SPACING: f64 = 2.0;

/// Errors from course editing operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CourseError {
    #[error("a course keeps at least {min} control points, got {actual}")]
    MinimumPoints { min: usize, actual: usize },

    #[error("control point index {index} out of range for {len} points")]
    PointOutOfRange { index: usize, len: usize },

    #[error("segment index {index} out of range for {len} segments")]
    SegmentOutOfRange { index: usize, len: usize },

    #[error("ride profile {0:?} is not implemented")]
    UnsupportedProfile(RideProfile),
}

/// The kinematics profile a course is ridden with. Only the rollercoaster
/// profile is implemented; the others are declared so stored courses keep
/// their tag, and are rejected at session construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RideProfile {
    #[default]
    Rollercoaster,
    FlightPath,
    RoadRacing,
    Boating,
}

impl RideProfile {
    pub fn is_supported(self) -> bool {
        matches!(self, RideProfile::Rollercoaster)
    }
}

/// A user-authored ride course: ordered control points plus one curvature
/// offset per consecutive pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    name: String,
    profile: RideProfile,
    points: Vec<Point3<f64>>,
    offsets: Vec<Vector3<f64>>,
}

impl Course {
    /// Creates a course from stored control points, resizing the offset list
    /// to match (`max(0, N - 1)` entries, zero-filled).
    pub fn new(
        name: impl Into<String>,
        profile: RideProfile,
        points: Vec<Point3<f64>>,
        offsets: Vec<Vector3<f64>>,
    ) -> Self {
        let mut course = Self {
            name: name.into(),
            profile,
            points,
            offsets,
        };
        course.sync_offsets();
        course
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile(&self) -> RideProfile {
        self.profile
    }

    pub fn set_profile(&mut self, profile: RideProfile) {
        self.profile = profile;
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    pub fn offsets(&self) -> &[Vector3<f64>] {
        &self.offsets
    }

    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Appends a control point a fixed spacing after the last one, clamped to
    /// the ground plane.
    pub fn add_point(&mut self) {
        let last = self.points.last().copied().unwrap_or_else(Point3::origin);
        self.points.push(Point3::new(
            last.x + NEW_POINT_SPACING,
            last.y,
            last.z.max(0.0),
        ));
        self.sync_offsets();
    }

    /// Removes a control point; a course never drops below the minimum.
    pub fn remove_point(&mut self, index: usize) -> Result<(), CourseError> {
        if self.points.len() <= MIN_CONTROL_POINTS {
            return Err(CourseError::MinimumPoints {
                min: MIN_CONTROL_POINTS,
                actual: self.points.len(),
            });
        }
        if index >= self.points.len() {
            return Err(CourseError::PointOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        self.points.remove(index);
        self.sync_offsets();
        Ok(())
    }

    /// Moves a control point, clamping it to the ground plane (z >= 0). The
    /// downstream engine tolerates any real-valued input; the clamp belongs
    /// to the editing layer.
    pub fn move_point(
        &mut self,
        index: usize,
        mut position: Point3<f64>,
    ) -> Result<(), CourseError> {
        let Some(point) = self.points.get_mut(index) else {
            return Err(CourseError::PointOutOfRange {
                index,
                len: self.points.len(),
            });
        };
        position.z = position.z.max(0.0);
        *point = position;
        Ok(())
    }

    /// Sets the curvature handle of one segment.
    pub fn set_offset(&mut self, segment: usize, offset: Vector3<f64>) -> Result<(), CourseError> {
        let len = self.offsets.len();
        let Some(slot) = self.offsets.get_mut(segment) else {
            return Err(CourseError::SegmentOutOfRange {
                index: segment,
                len,
            });
        };
        *slot = offset;
        Ok(())
    }

    /// Builds the dense path at the given per-segment resolution.
    pub fn build_path(&self, divisions_per_segment: usize) -> DensePath {
        path::build_path(&self.points, &self.offsets, divisions_per_segment)
    }

    /// Builds the dense path from a total division budget, the interactive
    /// editor's resolution convention.
    pub fn build_path_total(&self, total_divisions: usize) -> DensePath {
        path::build_path_total(&self.points, &self.offsets, total_divisions)
    }

    // Keeps one offset per consecutive control-point pair, preserving the
    // existing handles and zero-filling the rest.
    fn sync_offsets(&mut self) {
        self.offsets.resize(self.segment_count(), Vector3::zeros());
    }
}

impl Default for Course {
    /// The five-point demonstration course.
    fn default() -> Self {
        Self::new(
            "demo",
            RideProfile::Rollercoaster,
            vec![
                Point3::new(-6.0, 2.0, 0.0),
                Point3::new(-2.0, 4.0, 3.0),
                Point3::new(0.0, 2.0, 5.0),
                Point3::new(3.0, 6.0, 2.0),
                Point3::new(8.0, 1.0, 0.0),
            ],
            Vec::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn offsets_track_the_segment_count() {
        let mut course = Course::default();
        assert_eq!(course.points().len(), 5);
        assert_eq!(course.offsets().len(), 4);

        course.add_point();
        assert_eq!(course.offsets().len(), 5);

        course.remove_point(0).unwrap();
        assert_eq!(course.offsets().len(), 4);
    }

    #[test]
    fn add_point_extends_past_the_last_point() {
        let mut course = Course::default();
        course.add_point();
        let added = *course.points().last().unwrap();
        assert_relative_eq!(added, Point3::new(10.0, 1.0, 0.0));
    }

    #[test]
    fn remove_point_refuses_to_drop_below_minimum() {
        let mut course = Course::new(
            "tiny",
            RideProfile::Rollercoaster,
            vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)],
            Vec::new(),
        );
        assert_eq!(
            course.remove_point(0),
            Err(CourseError::MinimumPoints { min: 2, actual: 2 })
        );
    }

    #[test]
    fn move_point_clamps_to_the_ground_plane() {
        let mut course = Course::default();
        course
            .move_point(2, Point3::new(1.0, 3.0, -4.0))
            .unwrap();
        assert_relative_eq!(course.points()[2], Point3::new(1.0, 3.0, 0.0));

        assert!(matches!(
            course.move_point(99, Point3::origin()),
            Err(CourseError::PointOutOfRange { index: 99, .. })
        ));
    }

    #[test]
    fn set_offset_bends_the_built_path() {
        let mut course = Course::new(
            "bend",
            RideProfile::Rollercoaster,
            vec![Point3::origin(), Point3::new(2.0, 0.0, 0.0)],
            Vec::new(),
        );
        course.set_offset(0, Vector3::new(0.0, 1.0, 0.0)).unwrap();

        let path = course.build_path(2);
        assert_relative_eq!(path.points()[1], Point3::new(1.0, 0.5, 0.0));

        assert!(matches!(
            course.set_offset(5, Vector3::zeros()),
            Err(CourseError::SegmentOutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn stored_offsets_are_preserved_on_resync() {
        let offsets = vec![Vector3::new(0.0, 2.0, 0.0)];
        let mut course = Course::new(
            "stored",
            RideProfile::Rollercoaster,
            vec![
                Point3::origin(),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(4.0, 0.0, 0.0),
            ],
            offsets,
        );
        assert_eq!(course.offsets().len(), 2);
        assert_relative_eq!(course.offsets()[0], Vector3::new(0.0, 2.0, 0.0));

        course.add_point();
        assert_relative_eq!(course.offsets()[0], Vector3::new(0.0, 2.0, 0.0));
        assert_relative_eq!(course.offsets()[2], Vector3::zeros());
    }

    #[test]
    fn only_the_rollercoaster_profile_is_supported() {
        assert!(RideProfile::Rollercoaster.is_supported());
        assert!(!RideProfile::FlightPath.is_supported());
        assert!(!RideProfile::RoadRacing.is_supported());
        assert!(!RideProfile::Boating.is_supported());
    }
}
