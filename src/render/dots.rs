//! Lattice dots reacting to the feet: magnetically pulled dots, grabbed
//! footholds and the flickering arcs between feet and nearby dots.

use glam::Vec2;

use super::canvas::{Canvas, Layer};
use super::palette::{fade, Palette};
use super::Scene;
use crate::config::Derived;
use crate::constants::*;
use crate::spider::{CellRange, GridCell};

/// Where a lattice dot at `origin` is drawn when a foot at `foot` attracts
/// it, together with the pull factor `t` in `(0, 1]`. `None` when the foot
/// is out of range or sits right on the dot.
pub fn magnetic_pull(origin: Vec2, foot: Vec2, radius: f32) -> Option<(Vec2, f32)> {
    let d_sq = origin.distance_squared(foot);
    if d_sq >= radius * radius || d_sq <= 1.0 {
        return None;
    }
    let d = d_sq.sqrt();
    let t = 1.0 - d / radius;
    let pull = t * t * MAG_DOT_PULL_STRENGTH;
    Some((origin + (foot - origin) / d * pull, t))
}

/// Control point of the arc from `foot` to `dot`, jittered over time.
pub fn arc_control(foot: Vec2, dot: Vec2, distance: f32, t: f32, time: f32) -> Vec2 {
    let phase = time * 5.0 + distance;
    (foot + dot) * 0.5 + Vec2::new(phase.sin(), phase.cos()) * 5.0 * t
}

fn is_grabbed(scene: &Scene, cell: GridCell, spacing: f32) -> bool {
    scene
        .legs
        .iter()
        .filter_map(|leg| leg.target)
        .any(|target| target.position == cell.position(spacing))
}

pub(super) fn draw_pulled_dots<C: Canvas>(canvas: &mut C, scene: &Scene, feet: &[Vec2], derived: &Derived, palette: &Palette) {
    puffin::profile_function!();
    canvas.begin_layer(Layer::PulledDots);

    let spacing = scene.config.grid_spacing;
    let check_range = derived.pull_radius + spacing;
    for &foot in feet {
        for cell in CellRange::around(foot, check_range, spacing, scene.size).cells() {
            if is_grabbed(scene, cell, spacing) {
                continue;
            }
            let Some((p, t)) = magnetic_pull(cell.position(spacing), foot, derived.pull_radius) else {
                continue;
            };

            let size = 2.0 + t * 2.0;
            canvas.dot(p + 0.8, size, palette.neu_shadow);
            canvas.dot(p - 0.4, size - 0.5, palette.neu_light);
            canvas.dot(p, size - 1.0, fade(palette.pulled_dot_core, 0.2 + t * 0.4));
        }
    }
}

pub(super) fn draw_grabbed_dots<C: Canvas>(canvas: &mut C, scene: &Scene, palette: &Palette) {
    canvas.begin_layer(Layer::GrabbedDots);
    for target in scene.legs.iter().filter_map(|leg| leg.target) {
        let a = target.position;
        canvas.dot(a + 1.0, 6.0, palette.neu_shadow);
        canvas.dot(a - 0.5, 5.0, palette.neu_light);
        canvas.dot(a, 4.0, palette.grabbed_dot_core);
        canvas.dot(a, 2.5, palette.active_dot);
    }
}

pub(super) fn draw_arcs<C: Canvas>(canvas: &mut C, scene: &Scene, feet: &[Vec2], derived: &Derived, palette: &Palette) {
    puffin::profile_function!();
    canvas.begin_layer(Layer::Arcs);

    let candidates = scene.candidates;
    for &foot in feet {
        let mut drawn = 0;
        for (j, dot) in candidates.points().enumerate() {
            if drawn >= MAX_ARCS_PER_FOOT {
                break;
            }
            let d_sq = dot.distance_squared(foot);
            if d_sq >= derived.arc_radius_sq || d_sq <= MAG_ARC_MIN_DIST_SQ {
                continue;
            }
            if is_grabbed(scene, candidates.cell(j), candidates.spacing()) {
                continue;
            }

            let d = d_sq.sqrt();
            let t = 1.0 - d / derived.arc_radius;
            let flicker = 0.4 + 0.6 * (scene.time * 8.0 + d).sin().abs();
            let control = arc_control(foot, dot, d, t, scene.time);
            canvas.stroke_quadratic(
                foot,
                control,
                dot,
                0.5 + t * 0.5,
                fade(palette.magnetic_arc, t * 0.2 * flicker),
            );
            drawn += 1;
        }
    }
}
