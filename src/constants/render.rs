//! Scene rendering constants.

/// Maximum displacement of a dot toward a nearby foot (pixels)
pub const MAG_DOT_PULL_STRENGTH: f32 = 8.0;
/// Arc radius as a fraction of the dot interaction range
pub const MAG_ARC_RADIUS_RATIO: f32 = 0.7;
/// Connecting arcs drawn per foot
pub const MAX_ARCS_PER_FOOT: usize = 3;
/// Dots this close (squared) to a foot get no arc
pub const MAG_ARC_MIN_DIST_SQ: f32 = 16.0;

/// Feet within body radius + this margin are hidden under the body
pub const FOOT_VISIBLE_MARGIN: f32 = 2.0;

/// Knee position along the body-to-foot vector
pub const KNEE_ALONG_RATIO: f32 = 0.38;
/// Knee offset perpendicular to the body-to-foot vector, as a fraction of leg length
pub const KNEE_OUT_RATIO: f32 = 0.45;

pub const FEMUR_SHADOW_WIDTH: f32 = 3.0;
pub const FEMUR_WIDTH: f32 = 2.2;
pub const FEMUR_HIGHLIGHT_WIDTH: f32 = 0.7;
pub const TIBIA_SHADOW_WIDTH: f32 = 2.2;
pub const TIBIA_WIDTH: f32 = 1.5;
pub const TIBIA_HIGHLIGHT_WIDTH: f32 = 0.5;

/// Head radius as a fraction of body radius
pub const HEAD_RADIUS_RATIO: f32 = 0.6;
/// Abdomen ellipse radii as fractions of body radius
pub const ABDOMEN_RX_RATIO: f32 = 1.4;
pub const ABDOMEN_RY_RATIO: f32 = 1.1;

pub const EYE_RADIUS: f32 = 1.8;
pub const EYE_SPREAD: f32 = 2.5;
pub const SECONDARY_EYE_RADIUS: f32 = 1.2;
pub const FANG_LENGTH: f32 = 4.0;
pub const FANG_WIDTH: f32 = 1.2;
/// Half-size of each triangle in the abdomen marking
pub const MARKING_SIZE: f32 = 5.0;
/// Radius of the soft glow around the body
pub const BODY_GLOW_RADIUS: f32 = 40.0;

/// Segments used when tessellating circles and ellipses
pub const ROUND_SEGMENTS: usize = 32;

pub const KNEE_SHADOW_RADIUS: f32 = 2.8;
pub const KNEE_RADIUS: f32 = 2.2;
pub const FOOT_TIP_RADIUS: f32 = 1.2;
