//! Metaballs - bouncing circles in a unit square
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, wall reflection, scene frames)
//! - `surface`: Drawing surface abstraction the scene redraws onto
//! - `config`: Scene configuration, validation and seeded generation
//! - `driver`: Fixed-cadence driver that feeds frames to the scene
//! - `renderer`: WebGPU rendering of the surface contents

pub mod config;
pub mod driver;
pub mod renderer;
pub mod sim;
pub mod surface;

pub use config::{BodyConfig, ConfigError, SceneConfig};
pub use driver::FixedStepDriver;
pub use sim::{Body, CircleShape, RenderMode, Scene, SceneSnapshot};
pub use surface::{RecordingSurface, Surface};

/// Scene configuration constants
pub mod consts {
    /// Side length of the bounding square (normalized)
    pub const BOUNDARY_SIZE: f32 = 1.0;
    /// Sample interval between frames, in seconds
    pub const SAMPLE_TIME: f32 = 0.1;
    /// Seconds to milliseconds
    pub const TO_MS: f32 = 1000.0;
    /// Maximum frames per driver pump to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
