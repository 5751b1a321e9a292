// skytrack_sim/src/config.rs

//! Scenario configuration: the TOML description of a course and its playback
//! settings, loaded with figment and converted into core engine types.

use figment::{
    providers::{Format, Toml},
    Figment,
};
use nalgebra::{Point3, Vector3};
use serde::Deserialize;
use std::path::Path;

use skytrack_core::prelude::{AnchorSet, Course, RideProfile};
use skytrack_core::types::{DEFAULT_POLE_HEIGHT, DEFAULT_POLE_SPACING};

// =========================================================================
// == Top-Level Scenario Config ==
// =========================================================================

/// Root of the data parsed from a scenario TOML file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)] // Fail if the TOML has fields not in our struct
pub struct ScenarioConfig {
    #[serde(default)]
    pub course: CourseConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub anchors: AnchorConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseConfig {
    pub name: String,
    #[serde(default)]
    pub profile: RideProfile,
    /// Control points as `[x, y, z]` triples.
    pub points: Vec<[f64; 3]>,
    /// Optional per-segment curvature offsets; zero-filled when shorter.
    #[serde(default)]
    pub offsets: Vec<[f64; 3]>,
}

impl Default for CourseConfig {
    fn default() -> Self {
        let demo = Course::default();
        Self {
            name: demo.name().to_string(),
            profile: demo.profile(),
            points: demo.points().iter().map(|p| [p.x, p.y, p.z]).collect(),
            offsets: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaybackConfig {
    pub speed_multiplier: f64,
    pub divisions_per_segment: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed_multiplier: 1.0,
            divisions_per_segment: 50,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnchorConfig {
    pub pole_spacing: f64,
    pub pole_height: f64,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            pole_spacing: DEFAULT_POLE_SPACING,
            pole_height: DEFAULT_POLE_HEIGHT,
        }
    }
}

// =========================================================================
// == Loading and Conversion ==
// =========================================================================

/// Loads and parses a scenario file.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, figment::Error> {
    Figment::new().merge(Toml::file(path)).extract()
}

impl CourseConfig {
    pub fn to_course(&self) -> Course {
        Course::new(
            self.name.clone(),
            self.profile,
            self.points
                .iter()
                .map(|[x, y, z]| Point3::new(*x, *y, *z))
                .collect(),
            self.offsets
                .iter()
                .map(|[x, y, z]| Vector3::new(*x, *y, *z))
                .collect(),
        )
    }
}

impl AnchorConfig {
    pub fn to_anchor_set(&self) -> AnchorSet {
        AnchorSet::pole_square(self.pole_spacing, self.pole_height)
    }
}
