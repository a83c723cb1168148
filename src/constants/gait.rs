//! Gait and foothold-planning constants.

use std::f32::consts::PI;

/// Number of legs on the spider
pub const LEG_COUNT: usize = 8;

/// Leg angle offsets relative to the heading (radians).
/// Indices 0-3 sit on one side of the body, 4-7 mirror them on the other.
pub const LEG_ANGLE_OFFSETS: [f32; LEG_COUNT] = [
    PI * 0.35,
    PI * 0.58,
    PI * 0.76,
    PI * 0.92,
    -PI * 0.35,
    -PI * 0.58,
    -PI * 0.76,
    -PI * 0.92,
];

/// Legs that step together in phase A
pub const GAIT_GROUP_A: [usize; 4] = [0, 2, 5, 7];
/// Legs that step together in phase B
pub const GAIT_GROUP_B: [usize; 4] = [1, 3, 4, 6];

/// Ideal foothold distance as a fraction of leg reach
pub const IDEAL_REACH_RATIO: f32 = 0.65;
/// Maximum angular deviation from a leg's preferred heading
pub const ANGULAR_TOLERANCE: f32 = PI / 2.5;
/// Score penalty per radian of angular deviation
pub const ANGLE_SCORE_WEIGHT: f32 = 30.0;

/// A planted foot further than this multiple of reach must step
pub const STEP_FAR_RATIO: f32 = 1.15;
/// A planted foot closer than this multiple of body radius must step
pub const STEP_NEAR_RATIO: f32 = 1.2;

/// Candidates closer than body radius + this margin are never sampled
pub const SAMPLE_INNER_MARGIN: f32 = 5.0;
/// Footholds closer than body radius + this margin are never chosen
pub const FOOTHOLD_INNER_MARGIN: f32 = 8.0;

/// Fraction of the remaining distance a claw-less foot retracts per tick
pub const IDLE_RETRACT_RATE: f32 = 0.1;

/// Initial capacity of the candidate buffers
pub const SAMPLER_INITIAL_CAPACITY: usize = 64;
