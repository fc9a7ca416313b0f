//! Drawing surface abstraction
//!
//! The scene never owns a window. Each frame it clears a surface, submits
//! one shape per body, and sets a title line.

use crate::sim::CircleShape;

/// A drawing surface the scene redraws onto every frame
pub trait Surface {
    /// Remove every shape currently on the surface
    fn clear(&mut self);
    /// Add a shape on top of the existing ones
    fn add_shape(&mut self, shape: CircleShape);
    /// Replace the title/label
    fn set_title(&mut self, title: &str);
}

/// In-memory surface that keeps whatever was drawn last
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub shapes: Vec<CircleShape>,
    pub title: String,
    pub clears: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.shapes.clear();
        self.clears += 1;
    }

    fn add_shape(&mut self, shape: CircleShape) {
        self.shapes.push(shape);
    }

    fn set_title(&mut self, title: &str) {
        self.title.clear();
        self.title.push_str(title);
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn add_shape(&mut self, shape: CircleShape) {
        (**self).add_shape(shape);
    }

    fn set_title(&mut self, title: &str) {
        (**self).set_title(title);
    }
}
