//! Two-segment legs, knee joints and foot tips.

use glam::Vec2;

use super::canvas::{Canvas, Layer};
use super::palette::Palette;
use super::Scene;
use crate::constants::*;

/// Knee position for leg `index`: part-way along the body-to-foot vector,
/// bent outward. Legs 0-3 bend to one side and 4-7 to the other.
pub fn knee(body: Vec2, foot: Vec2, index: usize) -> Vec2 {
    let d = foot - body;
    let len = d.length();
    if len <= 0.0 {
        return body;
    }
    let perp = Vec2::new(-d.y, d.x) / len;
    let side = if index < 4 { -1.0 } else { 1.0 };
    body + d * KNEE_ALONG_RATIO + perp * (len * KNEE_OUT_RATIO) * side
}

/// Skeleton of one visible leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct LegPose {
    pub knee: Vec2,
    pub foot: Vec2,
    pub planted: bool,
}

pub(super) fn visible_poses(scene: &Scene, foot_visible_sq: f32) -> Vec<LegPose> {
    scene
        .legs
        .iter()
        .enumerate()
        .filter(|(_, leg)| leg.current.distance_squared(scene.body) >= foot_visible_sq)
        .map(|(i, leg)| LegPose {
            knee: knee(scene.body, leg.current, i),
            foot: leg.current,
            planted: leg.planted,
        })
        .collect()
}

fn shifted(segments: &[(Vec2, Vec2)], offset: f32) -> Vec<(Vec2, Vec2)> {
    segments.iter().map(|&(a, b)| (a + offset, b + offset)).collect()
}

pub(super) fn draw_legs<C: Canvas>(canvas: &mut C, body: Vec2, poses: &[LegPose], palette: &Palette) {
    puffin::profile_function!();
    canvas.begin_layer(Layer::Legs);

    let femurs: Vec<(Vec2, Vec2)> = poses.iter().map(|p| (body, p.knee)).collect();
    let tibias: Vec<(Vec2, Vec2)> = poses.iter().map(|p| (p.knee, p.foot)).collect();

    canvas.stroke_segments(&shifted(&femurs, 1.0), FEMUR_SHADOW_WIDTH, palette.body_shadow);
    canvas.stroke_segments(&femurs, FEMUR_WIDTH, palette.spider_leg);
    canvas.stroke_segments(&shifted(&femurs, -0.4), FEMUR_HIGHLIGHT_WIDTH, palette.spider_leg_highlight);

    canvas.stroke_segments(&shifted(&tibias, 1.0), TIBIA_SHADOW_WIDTH, palette.joint_shadow);
    canvas.stroke_segments(&tibias, TIBIA_WIDTH, palette.spider_leg);
    canvas.stroke_segments(&shifted(&tibias, -0.3), TIBIA_HIGHLIGHT_WIDTH, palette.spider_leg_highlight);
}

pub(super) fn draw_joints<C: Canvas>(canvas: &mut C, poses: &[LegPose], palette: &Palette) {
    canvas.begin_layer(Layer::Joints);
    for pose in poses {
        canvas.dot(pose.knee + 0.5, KNEE_SHADOW_RADIUS, palette.joint_shadow);
        canvas.dot(pose.knee, KNEE_RADIUS, palette.spider_sheen);

        let tip = if pose.planted { palette.spider_accent } else { palette.spider_sheen };
        canvas.dot(pose.foot, FOOT_TIP_RADIUS, tip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knee_bends_to_opposite_sides() {
        let body = Vec2::ZERO;
        let foot = Vec2::new(100.0, 0.0);
        // 38 along, 45 out
        assert!(knee(body, foot, 0).distance(Vec2::new(38.0, -45.0)) < 1e-4);
        assert!(knee(body, foot, 5).distance(Vec2::new(38.0, 45.0)) < 1e-4);
    }

    #[test]
    fn test_knee_of_foot_under_body_is_body() {
        assert_eq!(knee(Vec2::ONE, Vec2::ONE, 2), Vec2::ONE);
    }
}
