//! Drawing surface abstraction used by the scene renderer.

use egui::{Color32, TextureId};
use glam::Vec2;

/// Scene layers, in the order they are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Background,
    PulledDots,
    GrabbedDots,
    Arcs,
    Legs,
    Joints,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color32,
}

/// Two-circle radial gradient. Colour is constant along circles interpolated
/// between the inner and outer circle, and padded beyond them.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub inner_center: Vec2,
    pub inner_radius: f32,
    pub outer_center: Vec2,
    pub outer_radius: f32,
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    pub fn new(inner_center: Vec2, inner_radius: f32, outer_center: Vec2, outer_radius: f32) -> Self {
        Self {
            inner_center,
            inner_radius,
            outer_center,
            outer_radius,
            stops: Vec::with_capacity(3),
        }
    }

    /// Concentric gradient from the centre out to `radius`.
    pub fn centered(center: Vec2, radius: f32) -> Self {
        Self::new(center, 0.0, center, radius)
    }

    pub fn stop(mut self, offset: f32, color: Color32) -> Self {
        self.stops.push(GradientStop { offset, color });
        self
    }

    /// Gradient parameter at `p`, clamped to `[0, 1]`.
    pub fn param_at(&self, p: Vec2) -> f32 {
        let dc = self.outer_center - self.inner_center;
        let dr = self.outer_radius - self.inner_radius;
        let d = p - self.inner_center;
        let r0 = self.inner_radius;

        // |d - s*dc| = r0 + s*dr, solved for the largest s with a non-negative radius
        let a = dc.dot(dc) - dr * dr;
        let b = -2.0 * (d.dot(dc) + r0 * dr);
        let c = d.dot(d) - r0 * r0;

        let s = if a.abs() < 1e-6 {
            if b.abs() < 1e-6 {
                0.0
            } else {
                -c / b
            }
        } else {
            let disc = b * b - 4.0 * a * c;
            if disc < 0.0 {
                return 1.0;
            }
            let root = disc.sqrt();
            let hi = (-b + root) / (2.0 * a);
            let lo = (-b - root) / (2.0 * a);
            let (first, second) = if hi >= lo { (hi, lo) } else { (lo, hi) };
            if r0 + first * dr >= 0.0 {
                first
            } else {
                second
            }
        };

        s.clamp(0.0, 1.0)
    }

    pub fn color_at(&self, p: Vec2) -> Color32 {
        sample_stops(&self.stops, self.param_at(p))
    }
}

/// Interpolate premultiplied colour between the stops surrounding `t`.
pub fn sample_stops(stops: &[GradientStop], t: f32) -> Color32 {
    let Some(first) = stops.first() else {
        return Color32::TRANSPARENT;
    };
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let f = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
            return lerp_color(a.color, b.color, f);
        }
    }
    stops[stops.len() - 1].color
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    let [ar, ag, ab, aa] = a.to_array();
    let [br, bg, bb, ba] = b.to_array();
    Color32::from_rgba_premultiplied(mix(ar, br), mix(ag, bg), mix(ab, bb), mix(aa, ba))
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color32),
    Radial(RadialGradient),
}

impl From<Color32> for Paint {
    fn from(color: Color32) -> Self {
        Paint::Solid(color)
    }
}

impl From<RadialGradient> for Paint {
    fn from(gradient: RadialGradient) -> Self {
        Paint::Radial(gradient)
    }
}

/// Immediate-mode drawing target. Coordinates are logical surface pixels.
pub trait Canvas {
    /// Marks the start of a layer. Backends that do not care may ignore it.
    fn begin_layer(&mut self, _layer: Layer) {}

    /// Blit a texture with its top-left corner at `origin`.
    fn draw_image(&mut self, texture: TextureId, origin: Vec2, size: Vec2);

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);

    /// Fill an ellipse with radii `radii` rotated by `rotation` radians.
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, paint: &Paint);

    fn fill_polygon(&mut self, points: &[Vec2], color: Color32);

    /// Stroke a batch of independent line segments with round caps.
    fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], width: f32, color: Color32);

    fn stroke_quadratic(&mut self, from: Vec2, control: Vec2, to: Vec2, width: f32, color: Color32);

    fn dot(&mut self, center: Vec2, radius: f32, color: Color32) {
        self.fill_circle(center, radius, &Paint::Solid(color));
    }
}

#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Layer(Layer),
        Image { origin: Vec2, size: Vec2 },
        Circle { center: Vec2, radius: f32, paint: Paint },
        Ellipse { center: Vec2, radii: Vec2, rotation: f32 },
        Polygon { points: Vec<Vec2>, color: Color32 },
        Segments { segments: Vec<(Vec2, Vec2)>, width: f32, color: Color32 },
        Quadratic { from: Vec2, control: Vec2, to: Vec2, color: Color32 },
    }

    /// Canvas that records every call for inspection.
    #[derive(Debug, Default)]
    pub struct RecordingCanvas {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingCanvas {
        pub fn layers(&self) -> Vec<Layer> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::Layer(layer) => Some(*layer),
                    _ => None,
                })
                .collect()
        }

        /// Calls made after `layer` began and before the next layer.
        pub fn calls_in(&self, layer: Layer) -> Vec<&DrawCall> {
            let mut current = None;
            let mut out = Vec::new();
            for call in &self.calls {
                match call {
                    DrawCall::Layer(l) => current = Some(*l),
                    other if current == Some(layer) => out.push(other),
                    _ => {}
                }
            }
            out
        }
    }

    impl Canvas for RecordingCanvas {
        fn begin_layer(&mut self, layer: Layer) {
            self.calls.push(DrawCall::Layer(layer));
        }

        fn draw_image(&mut self, _texture: TextureId, origin: Vec2, size: Vec2) {
            self.calls.push(DrawCall::Image { origin, size });
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
            self.calls.push(DrawCall::Circle { center, radius, paint: paint.clone() });
        }

        fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, _paint: &Paint) {
            self.calls.push(DrawCall::Ellipse { center, radii, rotation });
        }

        fn fill_polygon(&mut self, points: &[Vec2], color: Color32) {
            self.calls.push(DrawCall::Polygon { points: points.to_vec(), color });
        }

        fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], width: f32, color: Color32) {
            self.calls.push(DrawCall::Segments { segments: segments.to_vec(), width, color });
        }

        fn stroke_quadratic(&mut self, from: Vec2, control: Vec2, to: Vec2, _width: f32, color: Color32) {
            self.calls.push(DrawCall::Quadratic { from, control, to, color });
        }
    }
}
