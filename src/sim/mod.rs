//! Deterministic simulation module
//!
//! All motion logic lives here. This module must be pure and deterministic:
//! - Caller-supplied sample interval only
//! - No randomness, no clock reads
//! - Stable iteration order (body order is draw order)
//! - No rendering or platform dependencies beyond the `Surface` trait

pub mod body;
pub mod scene;
pub mod shape;

pub use body::Body;
pub use scene::{RenderMode, Scene, SceneSnapshot};
pub use shape::CircleShape;
