//! Body motion constants.

/// Spring stiffness pulling the rendered body toward its nominal target
pub const SPRING_STIFFNESS: f32 = 250.0;
/// Spring damping coefficient
pub const SPRING_DAMPING: f32 = 25.0;
/// Simulated body mass
pub const SPRING_MASS: f32 = 0.8;
/// Longest integration sub-step for the body spring (seconds)
pub const SPRING_SUBSTEP: f32 = 1.0 / 240.0;

/// Pointer offsets at or below this squared distance do not move the body
pub const POINTER_DEADZONE_SQ: f32 = 1.0;

/// Maximum frame delta fed to the spring (prevents flinging after long frames)
pub const MAX_FRAME_DT: f32 = 0.05;
/// Frame delta assumed for the very first frame
pub const NOMINAL_FRAME_DT: f32 = 1.0 / 60.0;
