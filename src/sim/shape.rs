//! Shape descriptors produced by the simulation for drawing

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An immutable circle description handed to a drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub center: Vec2,
    pub radius: f32,
    /// Outline only when false
    pub filled: bool,
}

impl CircleShape {
    /// Unfilled circle (outline only)
    pub const fn outline(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            filled: false,
        }
    }
}
