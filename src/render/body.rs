//! The spider's body: abdomen with its marking, cephalothorax, head, eyes,
//! fangs and an ambient glow.

use std::f32::consts::PI;

use egui::Color32;
use glam::Vec2;

use super::canvas::{Canvas, Layer, Paint, RadialGradient};
use super::palette::Palette;
use crate::config::Derived;
use crate::constants::*;

/// Positions of the body parts for a given heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyLayout {
    pub center: Vec2,
    pub heading: f32,
    /// Unit vector along the heading
    pub forward: Vec2,
    /// Unit vector 90 degrees clockwise from `forward` in screen space
    pub side: Vec2,
    pub abdomen: Vec2,
    pub head: Vec2,
}

impl BodyLayout {
    pub fn new(center: Vec2, heading: f32, body_radius: f32, derived: &Derived) -> Self {
        let forward = Vec2::from_angle(heading);
        let side = Vec2::new(-forward.y, forward.x);
        let radii = derived.abdomen_radii;
        let abdomen = center
            - Vec2::new(
                forward.x * (body_radius + radii.x - 4.0),
                forward.y * (body_radius + radii.y - 4.0),
            );
        let head = center + forward * (body_radius + derived.head_radius - 3.0);
        Self {
            center,
            heading,
            forward,
            side,
            abdomen,
            head,
        }
    }
}

fn glossy(inner: Vec2, inner_radius: f32, center: Vec2, radius: f32, mid: f32, palette: &Palette) -> Paint {
    RadialGradient::new(inner, inner_radius, center, radius)
        .stop(0.0, palette.spider_sheen)
        .stop(mid, palette.spider_gloss)
        .stop(1.0, palette.spider_base)
        .into()
}

pub(super) fn draw_body<C: Canvas>(
    canvas: &mut C,
    layout: &BodyLayout,
    body_radius: f32,
    derived: &Derived,
    palette: &Palette,
) {
    puffin::profile_function!();
    canvas.begin_layer(Layer::Body);

    draw_abdomen(canvas, layout, layout.heading + PI, derived, palette);

    // Cephalothorax
    let c = layout.center;
    canvas.dot(c + 1.5, body_radius + 1.0, palette.body_shadow);
    canvas.fill_circle(c, body_radius, &glossy(c - 2.0, 1.0, c, body_radius, 0.4, palette));

    // Head
    let head = layout.head;
    let head_radius = derived.head_radius;
    canvas.dot(head + 1.0, head_radius + 0.5, palette.body_shadow);
    canvas.fill_circle(head, head_radius, &glossy(head - 1.0, 0.0, head, head_radius, 0.5, palette));

    draw_face(canvas, layout, head_radius, palette);

    let glow = RadialGradient::centered(c, BODY_GLOW_RADIUS)
        .stop(0.0, palette.body_glow)
        .stop(1.0, Color32::TRANSPARENT);
    canvas.fill_circle(c, BODY_GLOW_RADIUS, &glow.into());
}

fn draw_abdomen<C: Canvas>(canvas: &mut C, layout: &BodyLayout, rotation: f32, derived: &Derived, palette: &Palette) {
    let a = layout.abdomen;
    let radii = derived.abdomen_radii;

    canvas.fill_ellipse(a + 2.0, radii + Vec2::new(2.0, 1.0), rotation, &palette.body_shadow.into());
    canvas.fill_ellipse(a, radii, rotation, &glossy(a - 3.0, 1.0, a, radii.x, 0.3, palette));

    // Marking: a soft glow under two triangles meeting at the abdomen centre
    let glow_radius = MARKING_SIZE + 3.0;
    let glow = RadialGradient::centered(a, glow_radius)
        .stop(0.0, palette.marking_glow)
        .stop(1.0, Color32::TRANSPARENT);
    canvas.fill_circle(a, glow_radius, &glow.into());

    let back = Vec2::from_angle(rotation) * MARKING_SIZE;
    let across = Vec2::new(-back.y, back.x) * 0.6;
    canvas.fill_polygon(&[a, a + back + across, a + back - across], palette.marking);
    canvas.fill_polygon(&[a, a - back + across, a - back - across], palette.marking);

    let highlight = a - Vec2::from_angle(rotation) * 3.0 + layout.side * 3.0;
    canvas.fill_ellipse(
        highlight,
        Vec2::new(radii.x * 0.45, radii.y * 0.3),
        rotation,
        &palette.abdomen_highlight.into(),
    );
}

fn draw_face<C: Canvas>(canvas: &mut C, layout: &BodyLayout, head_radius: f32, palette: &Palette) {
    let head = layout.head;
    let forward = layout.forward;
    let spread = layout.side * EYE_SPREAD;
    let eye_forward = head_radius * 0.25;

    for s in [-1.0, 1.0] {
        let eye = head + forward * eye_forward + spread * s;
        canvas.dot(eye, EYE_RADIUS + 1.5, palette.eye_glow);
        canvas.dot(eye, EYE_RADIUS, palette.eye);
        canvas.dot(eye - 0.4, 0.6, palette.eye_highlight);
    }

    for s in [-1.0, 1.0] {
        let eye = head + forward * (eye_forward + 1.5) + spread * s * 0.5;
        canvas.dot(eye, SECONDARY_EYE_RADIUS, palette.spider_accent);
    }

    let base = head + forward * head_radius;
    for s in [-1.0, 1.0] {
        let tip = base + forward * FANG_LENGTH + spread * s * 0.4;
        canvas.stroke_segments(&[(base, tip)], FANG_WIDTH, palette.spider_sheen);
        canvas.dot(tip, 0.8, palette.spider_accent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpiderConfig;

    #[test]
    fn test_abdomen_trails_and_head_leads() {
        let derived = SpiderConfig::default().derived();
        let layout = BodyLayout::new(Vec2::new(100.0, 100.0), 0.0, 10.0, &derived);

        // r + rx - 4 = 10 + 14 - 4 behind the body
        assert!(layout.abdomen.distance(Vec2::new(80.0, 100.0)) < 1e-4);
        // r + head - 3 = 10 + 6 - 3 ahead of the body
        assert!(layout.head.distance(Vec2::new(113.0, 100.0)) < 1e-4);
    }

    #[test]
    fn test_layout_follows_heading() {
        let derived = SpiderConfig::default().derived();
        let layout = BodyLayout::new(Vec2::ZERO, std::f32::consts::FRAC_PI_2, 10.0, &derived);
        // Facing +y: the abdomen uses the vertical radius (11) for its offset
        assert!(layout.abdomen.distance(Vec2::new(0.0, -17.0)) < 1e-4);
        assert!(layout.head.distance(Vec2::new(0.0, 13.0)) < 1e-4);
    }
}
