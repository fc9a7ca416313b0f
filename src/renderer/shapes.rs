//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::CircleShape;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());
        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        push_quad(&mut vertices, inner1, outer1, inner2, outer2, color);
    }

    vertices
}

/// Vertices for a circle descriptor: a ring of `line_width` centered on the
/// radius for outlines, a fan for filled shapes
pub fn circle_shape(
    shape: &CircleShape,
    line_width: f32,
    outline_color: [f32; 4],
    fill_color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    if shape.filled {
        circle(shape.center, shape.radius, fill_color, segments)
    } else {
        let half = line_width * 0.5;
        ring(
            shape.center,
            (shape.radius - half).max(0.0),
            shape.radius + half,
            outline_color,
            segments,
        )
    }
}

/// Outline of the square `[0, size] x [0, size]`, drawn just outside the edge
pub fn square_frame(size: f32, line_width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let w = line_width;
    let mut vertices = Vec::with_capacity(24);

    // Bottom, top, left, right bars (corners covered by the horizontal bars)
    let bars = [
        (Vec2::new(-w, -w), Vec2::new(size + w, 0.0)),
        (Vec2::new(-w, size), Vec2::new(size + w, size + w)),
        (Vec2::new(-w, 0.0), Vec2::new(0.0, size)),
        (Vec2::new(size, 0.0), Vec2::new(size + w, size)),
    ];
    for (min, max) in bars {
        push_quad(
            &mut vertices,
            min,
            Vec2::new(max.x, min.y),
            Vec2::new(min.x, max.y),
            max,
            color,
        );
    }

    vertices
}

/// Two triangles covering the quad `a, b, c, d` where `a-b` and `c-d` are opposite edges
fn push_quad(vertices: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
    vertices.push(Vertex::new(a.x, a.y, color));
    vertices.push(Vertex::new(b.x, b.y, color));
    vertices.push(Vertex::new(c.x, c.y, color));

    vertices.push(Vertex::new(c.x, c.y, color));
    vertices.push(Vertex::new(b.x, b.y, color));
    vertices.push(Vertex::new(d.x, d.y, color));
}
