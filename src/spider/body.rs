//! Body position: a speed-capped nominal target and a spring-smoothed
//! rendered position that follows it.

use glam::Vec2;

use crate::constants::*;

#[derive(Debug, Clone, PartialEq)]
pub struct BodyMotion {
    /// Position chasing the pointer at capped speed
    pub nominal: Vec2,
    /// Spring-smoothed position used for planning and drawing
    pub position: Vec2,
    velocity: Vec2,
}

impl BodyMotion {
    pub fn new(at: Vec2) -> Self {
        Self {
            nominal: at,
            position: at,
            velocity: Vec2::ZERO,
        }
    }

    pub fn reset(&mut self, at: Vec2) {
        *self = Self::new(at);
    }

    /// Move the nominal target toward `pointer` by at most `max_speed`.
    /// Offsets inside the dead-zone are ignored.
    pub fn chase(&mut self, pointer: Vec2, max_speed: f32) {
        let delta = pointer - self.nominal;
        let dist_sq = delta.length_squared();
        if dist_sq <= POINTER_DEADZONE_SQ {
            return;
        }
        let dist = dist_sq.sqrt();
        let step = dist.min(max_speed);
        self.nominal += delta / dist * step;
    }

    /// Integrate the spring for `dt` seconds in fixed-size sub-steps.
    pub fn settle(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let substeps = (dt / SPRING_SUBSTEP).ceil().max(1.0) as u32;
        let h = dt / substeps as f32;
        for _ in 0..substeps {
            let force = (self.nominal - self.position) * SPRING_STIFFNESS - self.velocity * SPRING_DAMPING;
            self.velocity += force / SPRING_MASS * h;
            self.position += self.velocity * h;
        }
    }

    /// Angle from the rendered body toward `pointer` (0 when they coincide).
    pub fn heading_to(&self, pointer: Vec2) -> f32 {
        let delta = pointer - self.position;
        delta.y.atan2(delta.x)
    }
}
