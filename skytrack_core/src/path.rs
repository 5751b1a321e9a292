// skytrack_core/src/path.rs

//! Dense path construction. Turns a sparse ordered list of control points plus
//! per-segment curvature offsets into the fully expanded point approximation
//! of the smooth path, used for sampling and rendering.

use nalgebra::{Point3, Vector3};

/// Total sample budget used by interactive callers; spread across all
/// segments with ceiling rounding so short paths still get at least one
/// point per segment.
pub const DEFAULT_TOTAL_DIVISIONS: usize = 50;

/// An ordered sequence of 3D points approximating the smooth path.
///
/// Derived data: fully recomputed whenever control points or offsets change,
/// never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DensePath {
    points: Vec<Point3<f64>>,
}

impl DensePath {
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point3<f64>> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point3<f64>> {
        self.points.last()
    }

    /// Total polyline length in meters (1 unit = 1 m), for course readouts.
    pub fn arc_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| nalgebra::distance(&pair[0], &pair[1]))
            .sum()
    }
}

/// Evaluates the quadratic Bezier curve defined by (p0, control, p1) at t.
fn quadratic_bezier(
    p0: &Point3<f64>,
    control: &Point3<f64>,
    p1: &Point3<f64>,
    t: f64,
) -> Point3<f64> {
    let u = 1.0 - t;
    Point3::from(
        u * u * p0.coords + 2.0 * u * t * control.coords + t * t * p1.coords,
    )
}

/// Builds a dense path from control points and per-segment curvature offsets.
///
/// Each consecutive pair (Pi, Pi+1) spans a quadratic Bezier segment whose
/// control point is the segment midpoint displaced by `offsets[i]` (zero
/// vector when absent). Each segment contributes `divisions_per_segment`
/// divisions, i.e. `divisions_per_segment + 1` samples; joins are
/// de-duplicated by dropping the first sample of every segment after the
/// first.
///
/// Returns an empty path when fewer than two control points are given.
pub fn build_path(
    control_points: &[Point3<f64>],
    offsets: &[Vector3<f64>],
    divisions_per_segment: usize,
) -> DensePath {
    if control_points.len() < 2 {
        return DensePath::default();
    }

    let divisions = divisions_per_segment.max(1);
    let mut points = Vec::with_capacity(control_points.len() * divisions + 1);

    for (i, pair) in control_points.windows(2).enumerate() {
        let start = &pair[0];
        let end = &pair[1];
        let offset = offsets.get(i).copied().unwrap_or_else(Vector3::zeros);

        let midpoint = nalgebra::center(start, end);
        let control = midpoint + offset;

        let skip = usize::from(i > 0); // shared endpoint already emitted
        for step in skip..=divisions {
            let t = step as f64 / divisions as f64;
            points.push(quadratic_bezier(start, &control, end, t));
        }
    }

    DensePath { points }
}

/// Builds a dense path from a total division budget spread across all
/// segments, matching the interactive editor's resolution behavior.
pub fn build_path_total(
    control_points: &[Point3<f64>],
    offsets: &[Vector3<f64>],
    total_divisions: usize,
) -> DensePath {
    if control_points.len() < 2 {
        return DensePath::default();
    }
    let segments = control_points.len() - 1;
    let per_segment = (total_divisions as f64 / segments as f64).ceil() as usize;
    build_path(control_points, offsets, per_segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn demo_points() -> Vec<Point3<f64>> {
        vec![
            Point3::new(-6.0, 2.0, 0.0),
            Point3::new(-2.0, 4.0, 3.0),
            Point3::new(0.0, 2.0, 5.0),
            Point3::new(3.0, 6.0, 2.0),
            Point3::new(8.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn too_few_control_points_gives_empty_path() {
        assert!(build_path(&[], &[], 50).is_empty());
        assert!(build_path(&[Point3::origin()], &[], 50).is_empty());
    }

    #[test]
    fn endpoints_match_first_and_last_control_point() {
        let points = demo_points();
        let path = build_path(&points, &[], 50);

        let first = path.first().unwrap();
        let last = path.last().unwrap();
        assert_relative_eq!(*first, points[0]);
        assert_relative_eq!(*last, points[4]);
    }

    #[test]
    fn demo_course_point_count_accounts_for_deduplicated_joins() {
        let path = build_path(&demo_points(), &[], 50);
        // Four segments of 51 samples each, minus three shared joins.
        assert!(path.len() >= 4 * 50 - 3);
        assert_eq!(path.len(), 51 + 3 * 50);
    }

    #[test]
    fn consecutive_points_are_distinct_at_segment_joins() {
        let path = build_path(&demo_points(), &[], 10);
        for pair in path.points().windows(2) {
            assert!(nalgebra::distance(&pair[0], &pair[1]) > 0.0);
        }
    }

    #[test]
    fn offset_displaces_segment_midpoint() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)];
        let offsets = [Vector3::new(0.0, 1.0, 0.0)];
        // With two divisions the middle sample lands on t = 0.5, where the
        // Bezier passes through half the control-point displacement.
        let path = build_path(&points, &offsets, 2);

        assert_eq!(path.len(), 3);
        assert_relative_eq!(path.points()[1], Point3::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn missing_offsets_default_to_zero() {
        let points = demo_points();
        let with_zeros = build_path(&points, &[Vector3::zeros(); 4], 10);
        let with_none = build_path(&points, &[], 10);
        assert_eq!(with_zeros, with_none);
    }

    #[test]
    fn total_divisions_round_up_per_segment() {
        let points = demo_points();
        // ceil(50 / 4) = 13 divisions per segment.
        let path = build_path_total(&points, &[], 50);
        assert_eq!(path.len(), 14 + 3 * 13);

        // A tiny budget still yields at least one division per segment.
        let tiny = build_path_total(&points[..3], &[], 1);
        assert_eq!(tiny.len(), 3);
    }

    #[test]
    fn arc_length_of_straight_path() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)];
        let path = build_path(&points, &[], 5);
        assert_relative_eq!(path.arc_length(), 10.0, epsilon = 1e-12);
    }
}
