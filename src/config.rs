//! Scene configuration
//!
//! The default configuration is the fixed four-body scene. Configurations
//! can also be loaded from JSON or generated from a seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{BOUNDARY_SIZE, SAMPLE_TIME, TO_MS};
use crate::sim::Body;

/// Rejected configuration values
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("sample time {0} must be positive and finite")]
    InvalidSampleTime(f32),
    #[error("boundary size {0} must be positive and finite")]
    InvalidBoundary(f32),
    #[error("body {index} has non-finite parameters")]
    NonFinite { index: usize },
    #[error("body {index} radius {radius} must be positive")]
    InvalidRadius { index: usize, radius: f32 },
    #[error("body {index} diameter {diameter} does not fit in boundary {boundary}")]
    TooLarge {
        index: usize,
        diameter: f32,
        boundary: f32,
    },
    #[error("body {index} starts outside the boundary at ({x}, {y})")]
    OutOfBounds { index: usize, x: f32, y: f32 },
    #[error("invalid scene json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}

/// Initial parameters of one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub radius: f32,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl BodyConfig {
    pub const fn new(radius: f32, x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self {
            radius,
            x,
            y,
            vx,
            vy,
        }
    }

    pub fn to_body(&self) -> Body {
        Body::new(self.radius, Vec2::new(self.x, self.y), Vec2::new(self.vx, self.vy))
    }
}

/// The built-in four-body scene
pub const DEFAULT_BODIES: [BodyConfig; 4] = [
    BodyConfig::new(0.05, 0.1, 0.1, -0.05, 0.1),
    BodyConfig::new(0.1, 0.5, 0.5, 0.05, 0.15),
    BodyConfig::new(0.22, 0.4, 0.4, -0.25, 0.1),
    BodyConfig::new(0.17, 0.3, 0.7, 0.55, 0.32),
];

/// Scene layout: square size, frame interval and bodies in draw order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_boundary")]
    pub boundary: f32,
    #[serde(default = "default_sample_time")]
    pub sample_time: f32,
    pub bodies: Vec<BodyConfig>,
}

fn default_boundary() -> f32 {
    BOUNDARY_SIZE
}

fn default_sample_time() -> f32 {
    SAMPLE_TIME
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            boundary: BOUNDARY_SIZE,
            sample_time: SAMPLE_TIME,
            bodies: DEFAULT_BODIES.to_vec(),
        }
    }
}

impl SceneConfig {
    /// Parse a configuration from JSON (missing boundary/sample_time use defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Generate `count` bodies from a seed.
    ///
    /// Bodies start fully inside the square, and no body travels more than
    /// half of its free space in one frame, so reflection keeps every disc
    /// contained.
    pub fn random(seed: u64, count: usize, boundary: f32, sample_time: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bodies = (0..count)
            .map(|_| {
                let radius = rng.random_range(0.02f32..0.2) * boundary;
                let free = boundary - 2.0 * radius;
                let max_speed = free / (2.0 * sample_time);
                BodyConfig {
                    radius,
                    x: radius + rng.random_range(0.05f32..0.95) * free,
                    y: radius + rng.random_range(0.05f32..0.95) * free,
                    vx: rng.random_range(-1.0f32..=1.0) * max_speed * 0.5,
                    vy: rng.random_range(-1.0f32..=1.0) * max_speed * 0.5,
                }
            })
            .collect();

        log::info!("Generated {} bodies from seed {}", count, seed);

        Self {
            boundary,
            sample_time,
            bodies,
        }
    }

    /// Driver interval in milliseconds
    pub fn frame_interval_ms(&self) -> f32 {
        self.sample_time * TO_MS
    }

    pub fn to_bodies(&self) -> Vec<Body> {
        self.bodies.iter().map(BodyConfig::to_body).collect()
    }

    /// Reject values for which wall reflection cannot keep bodies inside
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sample_time.is_finite() && self.sample_time > 0.0) {
            return Err(ConfigError::InvalidSampleTime(self.sample_time));
        }
        if !(self.boundary.is_finite() && self.boundary > 0.0) {
            return Err(ConfigError::InvalidBoundary(self.boundary));
        }

        for (index, body) in self.bodies.iter().enumerate() {
            let values = [body.radius, body.x, body.y, body.vx, body.vy];
            if values.iter().any(|v| !v.is_finite()) {
                return Err(ConfigError::NonFinite { index });
            }
            if body.radius <= 0.0 {
                return Err(ConfigError::InvalidRadius {
                    index,
                    radius: body.radius,
                });
            }
            let diameter = 2.0 * body.radius;
            if diameter >= self.boundary {
                return Err(ConfigError::TooLarge {
                    index,
                    diameter,
                    boundary: self.boundary,
                });
            }
            let inside = |c: f32| c - body.radius >= 0.0 && c + body.radius <= self.boundary;
            if !inside(body.x) || !inside(body.y) {
                return Err(ConfigError::OutOfBounds {
                    index,
                    x: body.x,
                    y: body.y,
                });
            }
        }

        Ok(())
    }
}
