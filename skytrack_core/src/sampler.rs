// skytrack_core/src/sampler.rs

//! Continuous sampling over a dense path. Progress in [0, 1] maps to the
//! point list by index interpolation rather than true arc length, so speed
//! along the path varies with local point density; the telemetry scale
//! constants account for this.

use nalgebra::{Point3, Vector3};

use crate::path::DensePath;

/// Progress step used when sampling a forward difference for the tangent.
pub const TANGENT_STEP: f64 = 0.01;

/// A stateless parametric view over a [`DensePath`]. Safe to share and query
/// concurrently from multiple readers.
#[derive(Debug, Clone, Copy)]
pub struct CurveSampler<'a> {
    points: &'a [Point3<f64>],
}

impl<'a> CurveSampler<'a> {
    pub fn new(path: &'a DensePath) -> Self {
        Self {
            points: path.points(),
        }
    }

    /// Returns the interpolated point at the given normalized progress.
    ///
    /// Progress is clamped to [0, 1]. An empty path yields the origin, the
    /// defined neutral result for downstream queries.
    pub fn point_at(&self, progress: f64) -> Point3<f64> {
        match self.points {
            [] => Point3::origin(),
            [only] => *only,
            points => {
                let index = progress.clamp(0.0, 1.0) * (points.len() - 1) as f64;
                let lo = index.floor() as usize;
                let hi = index.ceil() as usize;
                let frac = index - lo as f64;
                let a = &points[lo];
                let b = &points[hi];
                a + (b - a) * frac
            }
        }
    }

    /// Returns the normalized forward direction at the given progress, from a
    /// small forward difference.
    ///
    /// Returns the zero vector when the path has fewer than two points or the
    /// sampled points coincide; callers treat that as "no orientation change
    /// this tick" rather than an error.
    pub fn tangent_at(&self, progress: f64) -> Vector3<f64> {
        if self.points.len() < 2 {
            return Vector3::zeros();
        }
        let here = self.point_at(progress);
        let ahead = self.point_at((progress + TANGENT_STEP).min(1.0));
        (ahead - here)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::zeros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::build_path;
    use approx::assert_relative_eq;

    fn straight_path() -> DensePath {
        build_path(
            &[Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)],
            &[],
            10,
        )
    }

    #[test]
    fn progress_zero_and_one_hit_the_path_ends() {
        let path = straight_path();
        let sampler = CurveSampler::new(&path);

        assert_relative_eq!(sampler.point_at(0.0), *path.first().unwrap());
        assert_relative_eq!(sampler.point_at(1.0), *path.last().unwrap());
    }

    #[test]
    fn interior_progress_interpolates_between_samples() {
        let path = straight_path();
        let sampler = CurveSampler::new(&path);

        // Index parameterization: 0.25 of 10 samples lands at x = 2.5 on a
        // uniformly sampled straight line.
        assert_relative_eq!(
            sampler.point_at(0.25),
            Point3::new(2.5, 0.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let path = straight_path();
        let sampler = CurveSampler::new(&path);

        assert_relative_eq!(sampler.point_at(-0.5), *path.first().unwrap());
        assert_relative_eq!(sampler.point_at(1.5), *path.last().unwrap());
    }

    #[test]
    fn tangent_is_unit_length_along_the_path() {
        let path = straight_path();
        let sampler = CurveSampler::new(&path);

        let tangent = sampler.tangent_at(0.5);
        assert_relative_eq!(tangent.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(tangent, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn degenerate_paths_yield_neutral_results() {
        let empty = DensePath::default();
        let sampler = CurveSampler::new(&empty);
        assert_relative_eq!(sampler.point_at(0.5), Point3::origin());
        assert_relative_eq!(sampler.tangent_at(0.5), Vector3::zeros());

        // At the very end the forward difference collapses to zero length.
        let path = straight_path();
        let sampler = CurveSampler::new(&path);
        assert_relative_eq!(sampler.tangent_at(1.0), Vector3::zeros());
    }
}
