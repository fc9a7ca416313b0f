//! WebGPU rendering module
//!
//! The scene draws onto a [`VertexSurface`], which tessellates outlines into
//! triangles; [`RenderState`] uploads them and draws one pass per frame.

pub mod pipeline;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use surface::VertexSurface;
pub use vertex::Vertex;
