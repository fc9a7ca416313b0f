//! Scene of bodies advanced one frame at a time
//!
//! A scene owns its bodies and the surface it draws onto. Every call to
//! [`Scene::advance`] updates all bodies with the same interval and then
//! fully replaces the surface contents.

use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::config::{ConfigError, SceneConfig};
use crate::surface::Surface;

/// How the scene redraws itself after each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderMode {
    /// One outline circle per body plus a title
    #[default]
    Circles,
    /// Iso-surface contours. Not implemented: the surface is only cleared.
    Contours,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Circles => "circles",
            RenderMode::Contours => "contours",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "circles" | "circle" => Some(RenderMode::Circles),
            "contours" | "contour" => Some(RenderMode::Contours),
            _ => None,
        }
    }
}

/// Serializable copy of the scene's simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub frame: u64,
    pub elapsed: f64,
    pub boundary: f32,
    pub bodies: Vec<Body>,
}

/// Fixed set of bodies inside a square, drawn onto a surface
#[derive(Debug)]
pub struct Scene<S> {
    /// Update and draw order
    bodies: Vec<Body>,
    boundary: f32,
    /// Sum of every interval passed to `advance`
    elapsed: f64,
    frame: u64,
    mode: RenderMode,
    surface: S,
}

impl<S: Surface> Scene<S> {
    pub fn new(bodies: Vec<Body>, boundary: f32, surface: S) -> Self {
        log::info!(
            "Scene created with {} bodies in a {}x{} square",
            bodies.len(),
            boundary,
            boundary
        );
        Self {
            bodies,
            boundary,
            elapsed: 0.0,
            frame: 0,
            mode: RenderMode::Circles,
            surface,
        }
    }

    /// Build a scene from a validated configuration
    pub fn from_config(config: &SceneConfig, surface: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.to_bodies(), config.boundary, surface))
    }

    /// Resume a scene from a snapshot
    pub fn from_snapshot(snapshot: SceneSnapshot, surface: S) -> Self {
        let mut scene = Self::new(snapshot.bodies, snapshot.boundary, surface);
        scene.frame = snapshot.frame;
        scene.elapsed = snapshot.elapsed;
        scene
    }

    /// Advance every body by `dt` and redraw the surface.
    ///
    /// `frame` is recorded as given; callers are expected to pass
    /// increasing values.
    pub fn advance(&mut self, frame: u64, dt: f32) {
        self.frame = frame;
        self.elapsed += f64::from(dt);

        for body in &mut self.bodies {
            body.update(dt, self.boundary);
        }

        self.redraw();
    }

    /// Redraw the surface according to the current render mode
    pub fn redraw(&mut self) {
        match self.mode {
            RenderMode::Circles => self.draw_circles(),
            RenderMode::Contours => self.draw_contours(),
        }
    }

    /// Clear the surface, draw every body's outline in order, then set the title
    pub fn draw_circles(&mut self) {
        self.surface.clear();
        for body in &self.bodies {
            self.surface.add_shape(body.render());
        }
        let title = self.title();
        self.surface.set_title(&title);
    }

    /// Contour rendering is not implemented; this only clears the surface
    pub fn draw_contours(&mut self) {
        self.surface.clear();
    }

    /// Label for the current frame
    pub fn title(&self) -> String {
        format!("Frame {} Time {:.2}", self.frame, self.elapsed)
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn boundary(&self) -> f32 {
        self.boundary
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            frame: self.frame,
            elapsed: self.elapsed,
            boundary: self.boundary,
            bodies: self.bodies.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BOUNDARY_SIZE, SAMPLE_TIME};
    use crate::surface::RecordingSurface;
    use glam::Vec2;
    use proptest::prelude::*;

    fn default_scene() -> Scene<RecordingSurface> {
        Scene::from_config(&SceneConfig::default(), RecordingSurface::new())
            .expect("default config is valid")
    }

    #[test]
    fn test_advance_updates_counters() {
        let mut scene = default_scene();
        assert_eq!(scene.frame(), 0);
        assert_eq!(scene.elapsed(), 0.0);

        scene.advance(0, SAMPLE_TIME);
        scene.advance(1, SAMPLE_TIME);
        scene.advance(7, SAMPLE_TIME);

        assert_eq!(scene.frame(), 7);
        assert!((scene.elapsed() - 3.0 * f64::from(SAMPLE_TIME)).abs() < 1e-9);
    }

    #[test]
    fn test_advance_moves_first_body() {
        let mut scene = default_scene();
        scene.advance(0, SAMPLE_TIME);

        let body = &scene.bodies()[0];
        assert!((body.pos.x - 0.095).abs() < 1e-6);
        assert!((body.pos.y - 0.11).abs() < 1e-6);
        assert_eq!(body.vel, Vec2::new(-0.05, 0.1));
        assert_eq!(body.last_dt, SAMPLE_TIME);
    }

    #[test]
    fn test_advance_redraws_in_body_order() {
        let mut scene = default_scene();
        scene.advance(0, SAMPLE_TIME);
        scene.advance(1, SAMPLE_TIME);

        let surface = scene.surface();
        assert_eq!(surface.clears, 2);
        assert_eq!(surface.shapes.len(), 4);
        for (shape, body) in surface.shapes.iter().zip(scene.bodies()) {
            assert_eq!(*shape, body.render());
            assert!(!shape.filled);
        }
        assert_eq!(surface.title, "Frame 1 Time 0.20");
    }

    #[test]
    fn test_contour_mode_only_clears() {
        let mut scene = default_scene();
        scene.advance(0, SAMPLE_TIME);
        scene.set_render_mode(RenderMode::Contours);

        let before = scene.bodies()[3].pos;
        scene.advance(1, SAMPLE_TIME);

        // Bodies still move
        assert_ne!(scene.bodies()[3].pos, before);
        assert!(scene.surface().shapes.is_empty());
        assert_eq!(scene.surface().clears, 2);
        // Title left from the last circle frame
        assert_eq!(scene.surface().title, "Frame 0 Time 0.10");
    }

    #[test]
    fn test_render_mode_names() {
        assert_eq!(RenderMode::from_str("Contours"), Some(RenderMode::Contours));
        assert_eq!(RenderMode::from_str("circle"), Some(RenderMode::Circles));
        assert_eq!(RenderMode::from_str("marching"), None);
        assert_eq!(RenderMode::default().as_str(), "circles");
    }

    #[test]
    fn test_determinism() {
        let mut a = default_scene();
        let mut b = default_scene();

        for frame in 0..500 {
            a.advance(frame, SAMPLE_TIME);
            b.advance(frame, SAMPLE_TIME);
        }

        for (x, y) in a.bodies().iter().zip(b.bodies()) {
            assert_eq!(x.pos.x.to_bits(), y.pos.x.to_bits());
            assert_eq!(x.pos.y.to_bits(), y.pos.y.to_bits());
            assert_eq!(x.vel.x.to_bits(), y.vel.x.to_bits());
            assert_eq!(x.vel.y.to_bits(), y.vel.y.to_bits());
        }
        assert_eq!(a.elapsed().to_bits(), b.elapsed().to_bits());
    }

    #[test]
    fn test_default_scene_stays_contained() {
        let mut scene = default_scene();
        for frame in 0..2000 {
            scene.advance(frame, SAMPLE_TIME);
            for body in scene.bodies() {
                assert!(
                    body.is_contained(BOUNDARY_SIZE, 1e-4),
                    "frame {}: {:?}",
                    frame,
                    body
                );
            }
        }
    }

    #[test]
    fn test_snapshot_resume_matches() {
        let mut original = default_scene();
        for frame in 0..10 {
            original.advance(frame, SAMPLE_TIME);
        }

        let json = serde_json::to_string(&original.snapshot()).expect("serialize");
        let snapshot: SceneSnapshot = serde_json::from_str(&json).expect("deserialize");
        let mut resumed = Scene::from_snapshot(snapshot, RecordingSurface::new());

        for frame in 10..20 {
            original.advance(frame, SAMPLE_TIME);
            resumed.advance(frame, SAMPLE_TIME);
        }
        assert_eq!(original.frame(), resumed.frame());
        assert_eq!(original.surface().title, resumed.surface().title);
        for (a, b) in original.bodies().iter().zip(resumed.bodies()) {
            assert!((a.pos - b.pos).length() < 1e-5);
            assert!((a.vel - b.vel).length() < 1e-6);
        }
    }

    proptest! {
        #[test]
        fn prop_elapsed_is_sum_of_intervals(dt in 0.001f32..1.0, n in 1usize..300) {
            let mut scene = default_scene();
            for frame in 0..n {
                scene.advance(frame as u64, dt);
            }
            let expected = n as f64 * f64::from(dt);
            prop_assert!((scene.elapsed() - expected).abs() < 1e-9 * expected.max(1.0));
            prop_assert_eq!(scene.frame(), n as u64 - 1);
        }
    }
}
