//! WebGPU pipeline that draws a surface's triangle list

use thiserror::Error;
use wgpu::util::DeviceExt;

use super::vertex::{Vertex, colors};

/// Fraction of the boundary left as margin around the square
const VIEW_MARGIN: f32 = 0.05;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface is not supported by the adapter")]
    UnsupportedSurface,
}

/// GPU state for one canvas
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    /// Last uploaded frame, `None` until something was drawn
    vertices: Option<(wgpu::Buffer, u32)>,
    /// Viewport size in pixels
    pub size: (u32, u32),
    /// Scene boundary size for coordinate mapping
    pub boundary: f32,
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        boundary: f32,
    ) -> Result<Self, RenderError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("metaballs-device"),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                ..Default::default()
            })
            .await?;

        let mut config = surface
            .get_default_config(adapter, width, height)
            .ok_or(RenderError::UnsupportedSurface)?;
        config.format = config.format.add_srgb_suffix();
        surface.configure(&device, &config);

        let pipeline = outline_pipeline(&device, config.format);
        log::info!("Render state ready ({}x{}, {:?})", width, height, config.format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertices: None,
            size: (width, height),
            boundary,
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Upload scene-space vertices and draw them over the background
    pub fn render(&mut self, vertices: &[Vertex]) -> Result<(), wgpu::SurfaceError> {
        let ndc = to_ndc(self.size, self.boundary, vertices);
        self.vertices = (!ndc.is_empty()).then(|| {
            let buffer = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("outline_vertices"),
                    contents: bytemuck::cast_slice(&ndc),
                    usage: wgpu::BufferUsages::VERTEX,
                });
            (buffer, ndc.len() as u32)
        });

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&Default::default());
        let mut encoder = self.device.create_command_encoder(&Default::default());

        {
            let [r, g, b, a] = colors::BACKGROUND.map(f64::from);
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("outline_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                ..Default::default()
            });

            if let Some((buffer, count)) = &self.vertices {
                pass.set_pipeline(&self.pipeline);
                pass.set_vertex_buffer(0, buffer.slice(..));
                pass.draw(0..*count, 0..1);
            }
        }

        self.queue.submit([encoder.finish()]);
        frame.present();
        Ok(())
    }
}

/// Alpha-blended triangle list pipeline for `Vertex`
fn outline_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::include_wgsl!("shader.wgsl"));
    let layout = device.create_pipeline_layout(&Default::default());

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("outline_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// Map a scene-space vertex list into NDC
pub fn to_ndc(size: (u32, u32), boundary: f32, vertices: &[Vertex]) -> Vec<Vertex> {
    vertices
        .iter()
        .map(|v| {
            let (x, y) = scene_to_ndc(size, boundary, v.position[0], v.position[1]);
            Vertex::new(x, y, v.color)
        })
        .collect()
}

/// Map `[0, boundary]` square coordinates into NDC, centered and aspect-corrected
pub fn scene_to_ndc(size: (u32, u32), boundary: f32, x: f32, y: f32) -> (f32, f32) {
    let (w, h) = size;
    let aspect = w as f32 / h.max(1) as f32;
    let half = boundary * 0.5;
    let scale = 1.0 / (half * (1.0 + VIEW_MARGIN));
    let (nx, ny) = ((x - half) * scale, (y - half) * scale);

    if aspect > 1.0 {
        // Wider than tall
        (nx / aspect, ny)
    } else {
        // Taller than wide
        (nx, ny * aspect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_origin() {
        let (x, y) = scene_to_ndc((800, 600), 1.0, 0.5, 0.5);
        assert!(x.abs() < 1e-6 && y.abs() < 1e-6);
    }

    #[test]
    fn test_square_fits_with_margin() {
        for size in [(800, 600), (600, 800), (512, 512)] {
            let (x0, y0) = scene_to_ndc(size, 1.0, 0.0, 0.0);
            let (x1, y1) = scene_to_ndc(size, 1.0, 1.0, 1.0);
            assert!(x0 > -1.0 && y0 > -1.0 && x1 < 1.0 && y1 < 1.0);
            // Square stays square on screen
            let px_w = (x1 - x0) * size.0 as f32;
            let px_h = (y1 - y0) * size.1 as f32;
            assert!((px_w - px_h).abs() < 1e-2, "{:?}: {} vs {}", size, px_w, px_h);
        }
    }

    #[test]
    fn test_to_ndc_keeps_colors_and_count() {
        let vertices = [
            Vertex::new(0.0, 0.0, colors::BOUNDARY),
            Vertex::new(2.0, 2.0, colors::BODY_OUTLINE),
        ];
        let ndc = to_ndc((400, 400), 2.0, &vertices);

        assert_eq!(ndc.len(), 2);
        assert_eq!(ndc[0].color, colors::BOUNDARY);
        assert_eq!(ndc[1].color, colors::BODY_OUTLINE);
        assert!((ndc[0].position[0] + ndc[1].position[0]).abs() < 1e-6);
        assert!(to_ndc((400, 400), 1.0, &[]).is_empty());
    }

    #[test]
    fn test_render_error_messages() {
        assert_eq!(
            RenderError::UnsupportedSurface.to_string(),
            "surface is not supported by the adapter"
        );
    }
}
