//! Leg state and the per-tick foot motion integrator.

use glam::Vec2;

use super::sampler::GridCell;
use crate::constants::IDLE_RETRACT_RATE;

/// A grid point claimed by a leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Foothold {
    pub cell: GridCell,
    /// Lattice spacing the cell was sampled with
    pub spacing: f32,
    pub position: Vec2,
}

impl Foothold {
    pub fn new(cell: GridCell, spacing: f32) -> Self {
        Self {
            cell,
            spacing,
            position: cell.position(spacing),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub target: Option<Foothold>,
    /// Rendered foot position
    pub current: Vec2,
    /// Foot position when the current step started
    pub previous: Vec2,
    pub stepping: bool,
    /// Progress through the current step in `[0, 1]`
    pub step_progress: f32,
    pub planted: bool,
}

impl Leg {
    /// A claw-less leg with its foot tucked under the body.
    pub fn tucked(at: Vec2) -> Self {
        Self {
            target: None,
            current: at,
            previous: at,
            stepping: false,
            step_progress: 0.0,
            planted: false,
        }
    }

    /// Begin a step from the current foot position toward `target`.
    pub fn start_step(&mut self, target: Foothold) {
        self.previous = self.current;
        self.target = Some(target);
        self.stepping = true;
        self.step_progress = 0.0;
        self.planted = false;
    }

    /// Advance the foot by one tick.
    ///
    /// Stepping legs move along an eased path from `previous` to the target,
    /// lifted by a parabola that peaks mid-step, and snap onto the target when
    /// the step completes. Legs without a target retract toward the body.
    pub fn advance(&mut self, body: Vec2, step_speed: f32, lift_height: f32) {
        match self.target {
            Some(target) if self.stepping => {
                self.step_progress = (self.step_progress + step_speed).min(1.0);
                let t = self.step_progress;
                let along = self.previous.lerp(target.position, ease_in_out_quad(t));
                self.current = Vec2::new(along.x, along.y - step_lift(t, lift_height));

                if t >= 1.0 {
                    self.current = target.position;
                    self.stepping = false;
                    self.planted = true;
                }
            }
            Some(_) => {}
            None => {
                self.current += (body - self.current) * IDLE_RETRACT_RATE;
            }
        }
    }
}

/// Symmetric quadratic ease-in-out.
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Vertical lift of a foot `t` of the way through a step.
pub fn step_lift(t: f32, height: f32) -> f32 {
    4.0 * t * (1.0 - t) * height
}
