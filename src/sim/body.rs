//! A single metaball body
//!
//! Bodies move with constant velocity and bounce off the walls of the
//! bounding square `[0, S] x [0, S]`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shape::CircleShape;

/// A metaball: radius, position, velocity and the last applied sample interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub radius: f32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Sample interval used by the most recent `update` (0 before the first)
    #[serde(default)]
    pub last_dt: f32,
}

impl Body {
    pub fn new(radius: f32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            radius,
            pos,
            vel,
            last_dt: 0.0,
        }
    }

    /// Advance the body by `dt` seconds inside a square of side `boundary`.
    ///
    /// Walls are tested against the projected position `pos + vel * dt`
    /// before moving. Each axis whose projected disc leaves the square has
    /// its velocity negated, then the body moves with the resulting
    /// velocity. Both axes are judged from the same projection, so a flip
    /// on one axis never re-triggers a check this tick.
    ///
    /// `dt <= 0`, `radius <= 0` and `2 * radius >= boundary` are not
    /// guarded here; containment is only meaningful for positive inputs
    /// with a disc that fits the square.
    pub fn update(&mut self, dt: f32, boundary: f32) {
        self.last_dt = dt;

        let projected = self.pos + self.vel * dt;
        if projected.x - self.radius < 0.0 || projected.x + self.radius > boundary {
            self.vel.x = -self.vel.x;
            log::debug!("Body r={} reflected on x at {:?}", self.radius, self.pos);
        }
        if projected.y - self.radius < 0.0 || projected.y + self.radius > boundary {
            self.vel.y = -self.vel.y;
            log::debug!("Body r={} reflected on y at {:?}", self.radius, self.pos);
        }

        self.pos += self.vel * dt;
    }

    /// Outline circle at the current position
    pub fn render(&self) -> CircleShape {
        CircleShape::outline(self.pos, self.radius)
    }

    /// True if the disc lies within `[0, boundary]` on both axes (with tolerance `eps`)
    pub fn is_contained(&self, boundary: f32, eps: f32) -> bool {
        let min = self.pos - Vec2::splat(self.radius);
        let max = self.pos + Vec2::splat(self.radius);
        min.x >= -eps && min.y >= -eps && max.x <= boundary + eps && max.y <= boundary + eps
    }
}
