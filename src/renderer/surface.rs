//! Surface that tessellates shapes into a vertex list for the GPU

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::CircleShape;
use crate::surface::Surface;

/// Segments per circle outline
const CIRCLE_SEGMENTS: u32 = 64;
/// Outline thickness as a fraction of the boundary size
const LINE_WIDTH_FRACTION: f32 = 0.004;

/// Collects the current frame as triangles in scene coordinates
#[derive(Debug, Clone)]
pub struct VertexSurface {
    boundary: f32,
    vertices: Vec<Vertex>,
    title: String,
    /// Set whenever the contents change, cleared by `take_dirty`
    dirty: bool,
}

impl VertexSurface {
    pub fn new(boundary: f32) -> Self {
        let mut surface = Self {
            boundary,
            vertices: Vec::new(),
            title: String::new(),
            dirty: true,
        };
        surface.clear();
        surface
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn boundary(&self) -> f32 {
        self.boundary
    }

    /// Returns whether anything changed since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    fn line_width(&self) -> f32 {
        self.boundary * LINE_WIDTH_FRACTION
    }
}

impl Surface for VertexSurface {
    fn clear(&mut self) {
        self.vertices.clear();
        let frame = shapes::square_frame(self.boundary, self.line_width(), colors::BOUNDARY);
        self.vertices.extend(frame);
        self.dirty = true;
    }

    fn add_shape(&mut self, shape: CircleShape) {
        let vertices = shapes::circle_shape(
            &shape,
            self.line_width(),
            colors::BODY_OUTLINE,
            colors::BODY_FILL,
            CIRCLE_SEGMENTS,
        );
        self.vertices.extend(vertices);
        self.dirty = true;
    }

    fn set_title(&mut self, title: &str) {
        if self.title != title {
            self.title.clear();
            self.title.push_str(title);
            self.dirty = true;
        }
    }
}
