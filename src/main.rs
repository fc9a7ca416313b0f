//! Metaballs entry point
//!
//! On the web the scene is driven from `requestAnimationFrame` and drawn with
//! WebGPU. On native the scene runs headless and logs each frame title.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use metaballs::renderer::{RenderState, VertexSurface};
    use metaballs::{FixedStepDriver, Scene, SceneConfig};

    /// Longest wall-clock gap fed to the driver in one animation frame
    const MAX_FRAME_GAP: f32 = 1.0;

    /// Browser app holding the scene and GPU state
    struct App {
        scene: Scene<VertexSurface>,
        driver: FixedStepDriver,
        render_state: Option<RenderState>,
        document: web_sys::Document,
        last_time: f64,
    }

    impl App {
        /// Run the frames that fit in the elapsed wall time
        fn update(&mut self, dt: f32) {
            self.driver.pump(&mut self.scene, dt.min(MAX_FRAME_GAP));

            let surface = self.scene.surface_mut();
            if surface.take_dirty() {
                self.document.set_title(surface.title());
            }
        }

        /// Draw the latest surface contents
        fn render(&mut self) {
            if let Some(render_state) = self.render_state.as_mut() {
                match render_state.render(self.scene.surface().vertices()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    fn js_err(err: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_err)?;

        log::info!("Metaballs starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let config = SceneConfig::default();
        let scene = Scene::from_config(&config, VertexSurface::new(config.boundary))
            .map_err(js_err)?;
        log::info!(
            "Scene ready: {} bodies, frame every {} ms",
            scene.bodies().len(),
            config.frame_interval_ms()
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(js_err)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(js_err)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, config.boundary)
            .await
            .map_err(js_err)?;

        let app = Rc::new(RefCell::new(App {
            scene,
            driver: FixedStepDriver::new(config.sample_time),
            render_state: Some(render_state),
            document,
            last_time: 0.0,
        }));

        request_animation_frame(app);

        log::info!("Metaballs running!");
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping animation");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            a.last_time = time;

            a.update(dt);
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run().await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{Duration, Instant};

    use anyhow::Context;

    use metaballs::{FixedStepDriver, RecordingSurface, RenderMode, Scene, SceneConfig};

    const DEFAULT_FRAMES: u64 = 100;

    /// `metaballs [CONFIG.json] [FRAMES]`
    pub fn run() -> anyhow::Result<()> {
        env_logger::init();
        log::info!("Metaballs (native, headless) starting...");

        let mut args = std::env::args().skip(1);
        let config = match args.next() {
            Some(path) => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading scene config {path}"))?;
                SceneConfig::from_json(&json)
                    .with_context(|| format!("parsing scene config {path}"))?
            }
            None => SceneConfig::default(),
        };
        let frames = match args.next() {
            Some(n) => n
                .parse::<u64>()
                .with_context(|| format!("frame count {n:?} is not a number"))?,
            None => DEFAULT_FRAMES,
        };
        let realtime = std::env::var("METABALLS_NO_SLEEP").as_deref() != Ok("1");

        let mut scene = Scene::from_config(&config, RecordingSurface::new())
            .context("invalid scene config")?;
        if let Ok(mode) = std::env::var("METABALLS_MODE") {
            let mode = RenderMode::from_str(&mode)
                .with_context(|| format!("unknown render mode {mode:?}"))?;
            scene.set_render_mode(mode);
        }

        log::info!(
            "Running {} frames of {} bodies ({} mode, {} ms interval)",
            frames,
            scene.bodies().len(),
            scene.render_mode().as_str(),
            config.frame_interval_ms()
        );

        let mut driver = FixedStepDriver::new(config.sample_time);
        let interval = Duration::from_secs_f32(config.sample_time);
        let mut last = Instant::now();

        while driver.next_frame() < frames {
            if realtime {
                std::thread::sleep(interval.saturating_sub(last.elapsed()));
                let now = Instant::now();
                let elapsed = now.duration_since(last).as_secs_f32();
                last = now;
                driver.pump_until(&mut scene, elapsed, frames, |scene| {
                    log::info!("{}", scene.title());
                });
            } else {
                driver.step(&mut scene);
                log::info!("{}", scene.title());
            }
        }

        let snapshot = serde_json::to_string_pretty(&scene.snapshot())
            .context("serializing final scene state")?;
        println!("{snapshot}");

        Ok(())
    }
}
