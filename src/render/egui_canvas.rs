//! [`Canvas`] backend that turns draw calls into egui shapes.
//!
//! Solid fills become feathered convex polygons. Gradient fills are
//! tessellated into vertex-coloured meshes, with the gradient evaluated at
//! every vertex of a few concentric rings.

use std::f32::consts::TAU;

use egui::epaint::{Mesh, QuadraticBezierShape};
use egui::{Color32, Pos2, Rect, Shape, Stroke, TextureId};
use glam::Vec2;

use super::canvas::{Canvas, Paint, RadialGradient};
use crate::constants::ROUND_SEGMENTS;

/// Rings used when tessellating a gradient fill.
const GRADIENT_RINGS: usize = 6;

fn pos(v: Vec2) -> Pos2 {
    Pos2::new(v.x, v.y)
}

/// Points on the outline of a rotated ellipse.
pub fn ellipse_outline(center: Vec2, radii: Vec2, rotation: f32, segments: usize) -> Vec<Vec2> {
    let axis = Vec2::from_angle(rotation);
    (0..segments)
        .map(|i| {
            let angle = i as f32 / segments as f32 * TAU;
            let local = Vec2::new(angle.cos() * radii.x, angle.sin() * radii.y);
            center + axis.rotate(local)
        })
        .collect()
}

/// Vertex-coloured mesh of a rotated ellipse filled with `gradient`.
pub fn gradient_mesh(center: Vec2, radii: Vec2, rotation: f32, gradient: &RadialGradient) -> Mesh {
    let axis = Vec2::from_angle(rotation);
    let mut mesh = Mesh::default();

    mesh.colored_vertex(pos(center), gradient.color_at(center));
    for ring in 1..=GRADIENT_RINGS {
        let scale = ring as f32 / GRADIENT_RINGS as f32;
        for i in 0..ROUND_SEGMENTS {
            let angle = i as f32 / ROUND_SEGMENTS as f32 * TAU;
            let local = Vec2::new(angle.cos() * radii.x, angle.sin() * radii.y) * scale;
            let p = center + axis.rotate(local);
            mesh.colored_vertex(pos(p), gradient.color_at(p));
        }
    }

    let ring_start = |ring: usize| (1 + (ring - 1) * ROUND_SEGMENTS) as u32;
    let n = ROUND_SEGMENTS as u32;
    for i in 0..n {
        let j = (i + 1) % n;
        let first = ring_start(1);
        mesh.add_triangle(0, first + i, first + j);
    }
    for ring in 2..=GRADIENT_RINGS {
        let inner = ring_start(ring - 1);
        let outer = ring_start(ring);
        for i in 0..n {
            let j = (i + 1) % n;
            mesh.add_triangle(inner + i, outer + i, outer + j);
            mesh.add_triangle(inner + i, outer + j, inner + j);
        }
    }

    mesh
}

/// Collects shapes for one frame; hand them to an egui painter afterwards.
#[derive(Default)]
pub struct EguiCanvas {
    shapes: Vec<Shape>,
}

impl EguiCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }
}

impl Canvas for EguiCanvas {
    fn draw_image(&mut self, texture: TextureId, origin: Vec2, size: Vec2) {
        let rect = Rect::from_min_size(pos(origin), egui::vec2(size.x, size.y));
        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
        self.shapes.push(Shape::image(texture, rect, uv, Color32::WHITE));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        if radius <= 0.0 {
            return;
        }
        match paint {
            Paint::Solid(color) => self.shapes.push(Shape::circle_filled(pos(center), radius, *color)),
            Paint::Radial(gradient) => {
                let mesh = gradient_mesh(center, Vec2::splat(radius), 0.0, gradient);
                self.shapes.push(Shape::mesh(mesh));
            }
        }
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, paint: &Paint) {
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return;
        }
        match paint {
            Paint::Solid(color) => {
                let points = ellipse_outline(center, radii, rotation, ROUND_SEGMENTS)
                    .into_iter()
                    .map(pos)
                    .collect();
                self.shapes.push(Shape::convex_polygon(points, *color, Stroke::NONE));
            }
            Paint::Radial(gradient) => {
                self.shapes.push(Shape::mesh(gradient_mesh(center, radii, rotation, gradient)));
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color32) {
        if points.len() < 3 {
            return;
        }
        let points = points.iter().copied().map(pos).collect();
        self.shapes.push(Shape::convex_polygon(points, color, Stroke::NONE));
    }

    fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], width: f32, color: Color32) {
        let stroke = Stroke::new(width, color);
        self.shapes.extend(
            segments
                .iter()
                .map(|&(a, b)| Shape::line_segment([pos(a), pos(b)], stroke)),
        );
    }

    fn stroke_quadratic(&mut self, from: Vec2, control: Vec2, to: Vec2, width: f32, color: Color32) {
        let curve = QuadraticBezierShape::from_points_stroke(
            [pos(from), pos(control), pos(to)],
            false,
            Color32::TRANSPARENT,
            Stroke::new(width, color),
        );
        self.shapes.push(Shape::QuadraticBezier(curve));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipse_outline_is_rotated() {
        let points = ellipse_outline(Vec2::ZERO, Vec2::new(10.0, 5.0), std::f32::consts::FRAC_PI_2, 4);
        // The major axis now points down +y
        assert!(points[0].distance(Vec2::new(0.0, 10.0)) < 1e-4);
        assert!(points[1].distance(Vec2::new(-5.0, 0.0)) < 1e-4);
    }

    #[test]
    fn test_gradient_mesh_is_well_formed() {
        let gradient = RadialGradient::centered(Vec2::ZERO, 10.0)
            .stop(0.0, Color32::WHITE)
            .stop(1.0, Color32::BLACK);
        let mesh = gradient_mesh(Vec2::ZERO, Vec2::splat(10.0), 0.0, &gradient);

        assert_eq!(mesh.vertices.len(), 1 + GRADIENT_RINGS * ROUND_SEGMENTS);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
        assert_eq!(mesh.vertices[0].color, Color32::WHITE);
        assert_eq!(mesh.vertices.last().map(|v| v.color), Some(Color32::BLACK));
    }

    #[test]
    fn test_degenerate_shapes_are_skipped() {
        let mut canvas = EguiCanvas::new();
        canvas.fill_circle(Vec2::ZERO, 0.0, &Paint::Solid(Color32::RED));
        canvas.fill_polygon(&[Vec2::ZERO, Vec2::X], Color32::RED);
        assert!(canvas.into_shapes().is_empty());
    }
}
