use glam::Vec2;
use metaballs::renderer::VertexSurface;
use metaballs::{
    Body, FixedStepDriver, RecordingSurface, RenderMode, Scene, SceneConfig, Surface,
};

/// Surface that records every call in order
#[derive(Default)]
struct CallLog {
    calls: Vec<String>,
}

impl Surface for CallLog {
    fn clear(&mut self) {
        self.calls.push("clear".to_string());
    }

    fn add_shape(&mut self, shape: metaballs::CircleShape) {
        self.calls.push(format!("shape {:.2}", shape.radius));
    }

    fn set_title(&mut self, title: &str) {
        self.calls.push(format!("title {title}"));
    }
}

#[test]
fn advance_clears_then_draws_then_titles() {
    let config = SceneConfig::default();
    let mut scene = Scene::from_config(&config, CallLog::default()).expect("valid config");

    scene.advance(0, config.sample_time);

    assert_eq!(
        scene.surface().calls,
        [
            "clear",
            "shape 0.05",
            "shape 0.10",
            "shape 0.22",
            "shape 0.17",
            "title Frame 0 Time 0.10",
        ]
    );
}

#[test]
fn reflection_flips_and_reverses_each_wall() {
    // One body heading into each wall
    let bodies = vec![
        Body::new(0.1, Vec2::new(0.12, 0.5), Vec2::new(-0.5, 0.0)),
        Body::new(0.1, Vec2::new(0.88, 0.5), Vec2::new(0.5, 0.0)),
        Body::new(0.1, Vec2::new(0.5, 0.12), Vec2::new(0.0, -0.5)),
        Body::new(0.1, Vec2::new(0.5, 0.88), Vec2::new(0.0, 0.5)),
    ];
    let before: Vec<Body> = bodies.clone();
    let mut scene = Scene::new(bodies, 1.0, RecordingSurface::new());

    scene.advance(0, 0.1);

    let after = scene.bodies();
    assert!(after[0].vel.x > 0.0 && after[0].pos.x > before[0].pos.x);
    assert!(after[1].vel.x < 0.0 && after[1].pos.x < before[1].pos.x);
    assert!(after[2].vel.y > 0.0 && after[2].pos.y > before[2].pos.y);
    assert!(after[3].vel.y < 0.0 && after[3].pos.y < before[3].pos.y);
    assert!(after.iter().all(|b| b.is_contained(1.0, 1e-5)));
}

#[test]
fn driver_runs_random_scene_inside_bounds() {
    let config = SceneConfig::random(7, 16, 2.0, 0.05);
    let mut scene = Scene::from_config(&config, VertexSurface::new(config.boundary))
        .expect("generated config is valid");
    let mut driver = FixedStepDriver::new(config.sample_time);

    let mut frames = 0;
    for _ in 0..400 {
        frames += driver.pump(&mut scene, 0.05);
        for body in scene.bodies() {
            assert!(body.is_contained(config.boundary, 1e-4), "{:?}", body);
        }
    }

    assert!(frames >= 390, "only {} frames ran", frames);
    assert_eq!(scene.frame() + 1, driver.next_frame());
    assert!((scene.elapsed() - frames as f64 * f64::from(config.sample_time)).abs() < 1e-6);
    assert!(scene.surface().title().starts_with(&format!("Frame {}", scene.frame())));
}

#[test]
fn contour_mode_keeps_simulating_but_draws_nothing() {
    let config = SceneConfig::default();
    let mut circles = Scene::from_config(&config, RecordingSurface::new()).expect("valid");
    let mut contours = Scene::from_config(&config, RecordingSurface::new()).expect("valid");
    contours.set_render_mode(RenderMode::Contours);

    for frame in 0..50 {
        circles.advance(frame, config.sample_time);
        contours.advance(frame, config.sample_time);
    }

    assert_eq!(circles.snapshot(), contours.snapshot());
    assert!(contours.surface().shapes.is_empty());
    assert!(contours.surface().title.is_empty());
    assert_eq!(contours.surface().clears, 50);
}
