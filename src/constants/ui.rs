//! Settings panel constants.

use std::ops::RangeInclusive;

pub const GRID_SPACING_RANGE: RangeInclusive<f32> = 20.0..=100.0;
pub const LEG_REACH_RANGE: RangeInclusive<f32> = 50.0..=250.0;
pub const BODY_RADIUS_RANGE: RangeInclusive<f32> = 5.0..=30.0;
pub const STEP_SPEED_RANGE: RangeInclusive<f32> = 0.05..=1.0;
pub const MAX_SPEED_RANGE: RangeInclusive<f32> = 1.0..=20.0;
pub const STEP_LIFT_RANGE: RangeInclusive<f32> = 5.0..=50.0;
pub const INTERACTION_RANGE_RANGE: RangeInclusive<f32> = 20.0..=150.0;

/// Slider increment for the step speed
pub const STEP_SPEED_STEP: f64 = 0.01;
/// Slider increment for the max speed
pub const MAX_SPEED_STEP: f64 = 0.5;

/// Settings panel width
pub const SETTINGS_PANEL_WIDTH: f32 = 240.0;
