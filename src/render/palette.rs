//! Theme palettes. Every colour drawn by the scene or the settings panel
//! comes from one of the two palettes here.

use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    // Page
    pub page_background: Color32,

    // Background lattice
    pub dot_shadow: Color32,
    pub dot_highlight: Color32,
    pub dot_core: Color32,

    // Raised dots
    pub neu_light: Color32,
    pub neu_shadow: Color32,
    /// Opaque base; alpha is applied per dot from the pull strength
    pub pulled_dot_core: Color32,
    pub grabbed_dot_core: Color32,
    pub active_dot: Color32,
    /// Opaque base; alpha is applied per arc
    pub magnetic_arc: Color32,

    // Spider
    pub spider_base: Color32,
    pub spider_gloss: Color32,
    pub spider_sheen: Color32,
    pub spider_accent: Color32,
    pub spider_leg: Color32,
    pub spider_leg_highlight: Color32,
    pub joint_shadow: Color32,
    pub body_shadow: Color32,
    pub marking: Color32,
    pub marking_glow: Color32,
    pub abdomen_highlight: Color32,
    pub eye: Color32,
    pub eye_glow: Color32,
    pub eye_highlight: Color32,
    pub body_glow: Color32,

    // Settings panel
    pub panel_fill: Color32,
    pub panel_border: Color32,
    pub widget_fill: Color32,
    pub widget_hover: Color32,
    pub widget_active: Color32,
    pub text: Color32,
    pub text_muted: Color32,
}

fn rgba(r: u8, g: u8, b: u8, a: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, (a * 255.0).round() as u8)
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            page_background: Color32::from_rgb(0x0a, 0x0a, 0x0a),

            dot_shadow: rgba(20, 20, 20, 0.4),
            dot_highlight: rgba(50, 50, 50, 0.2),
            dot_core: rgba(60, 60, 60, 0.3),

            neu_light: Color32::from_rgb(0x2a, 0x2a, 0x2a),
            neu_shadow: Color32::from_rgb(0x12, 0x12, 0x12),
            pulled_dot_core: Color32::from_rgb(180, 180, 180),
            grabbed_dot_core: rgba(160, 160, 160, 0.3),
            active_dot: Color32::from_rgb(0x77, 0x77, 0x77),
            magnetic_arc: Color32::from_rgb(160, 160, 160),

            spider_base: Color32::from_rgb(0x1a, 0x1a, 0x1a),
            spider_gloss: Color32::from_rgb(0x22, 0x22, 0x22),
            spider_sheen: Color32::from_rgb(0x33, 0x33, 0x33),
            spider_accent: Color32::from_rgb(0x55, 0x55, 0x55),
            spider_leg: Color32::from_rgb(0x1c, 0x1c, 0x1c),
            spider_leg_highlight: Color32::from_rgb(0x2a, 0x2a, 0x2a),
            joint_shadow: rgba(0, 0, 0, 0.3),
            body_shadow: rgba(0, 0, 0, 0.25),
            marking: Color32::from_rgb(0xff, 0x1e, 0x1e),
            marking_glow: rgba(255, 30, 30, 0.3),
            abdomen_highlight: rgba(120, 120, 120, 0.2),
            eye: Color32::from_rgb(0x77, 0x77, 0x77),
            eye_glow: rgba(160, 160, 160, 0.25),
            eye_highlight: Color32::WHITE,
            body_glow: rgba(160, 160, 160, 0.04),

            panel_fill: rgba(0x18, 0x18, 0x1b, 0.9),
            panel_border: Color32::from_rgb(0x27, 0x27, 0x2a),
            widget_fill: Color32::from_rgb(0x27, 0x27, 0x2a),
            widget_hover: Color32::from_rgb(0x3f, 0x3f, 0x46),
            widget_active: Color32::from_rgb(0xfa, 0xfa, 0xfa),
            text: Color32::from_rgb(0xfa, 0xfa, 0xfa),
            text_muted: Color32::from_rgb(0xa1, 0xa1, 0xaa),
        }
    }

    pub fn light() -> Self {
        Self {
            page_background: Color32::from_rgb(0xfa, 0xfa, 0xfa),

            dot_shadow: rgba(0, 0, 0, 0.06),
            dot_highlight: rgba(255, 255, 255, 0.9),
            dot_core: rgba(0, 0, 0, 0.1),

            neu_light: Color32::from_rgb(0xf0, 0xf0, 0xf0),
            neu_shadow: Color32::from_rgb(0xd1, 0xd9, 0xe6),
            pulled_dot_core: Color32::from_rgb(140, 140, 140),
            grabbed_dot_core: rgba(180, 180, 180, 0.2),
            active_dot: Color32::from_rgb(0x66, 0x66, 0x66),
            magnetic_arc: Color32::from_rgb(100, 100, 100),

            spider_base: Color32::from_rgb(0x3d, 0x3d, 0x3d),
            spider_gloss: Color32::from_rgb(0x50, 0x50, 0x50),
            spider_sheen: Color32::from_rgb(0x70, 0x70, 0x70),
            spider_accent: Color32::from_rgb(0x60, 0x60, 0x60),
            spider_leg: Color32::from_rgb(0x45, 0x45, 0x45),
            spider_leg_highlight: Color32::from_rgb(0x6d, 0x6d, 0x6d),
            joint_shadow: rgba(0, 0, 0, 0.08),
            body_shadow: rgba(0, 0, 0, 0.1),
            marking: Color32::from_rgb(0xcc, 0x22, 0x22),
            marking_glow: rgba(255, 30, 30, 0.3),
            abdomen_highlight: rgba(120, 120, 120, 0.2),
            eye: Color32::from_rgb(0x60, 0x60, 0x60),
            eye_glow: rgba(120, 120, 120, 0.15),
            eye_highlight: rgba(255, 255, 255, 0.8),
            body_glow: rgba(0, 0, 0, 0.02),

            panel_fill: rgba(255, 255, 255, 0.9),
            panel_border: Color32::from_rgb(0xe4, 0xe4, 0xe7),
            widget_fill: Color32::from_rgb(0xf4, 0xf4, 0xf5),
            widget_hover: Color32::from_rgb(0xe4, 0xe4, 0xe7),
            widget_active: Color32::from_rgb(0x18, 0x18, 0x1b),
            text: Color32::from_rgb(0x18, 0x18, 0x1b),
            text_muted: Color32::from_rgb(0x71, 0x71, 0x7a),
        }
    }

    pub fn for_theme(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// `color` with its opacity scaled by `alpha` in `[0, 1]`.
pub fn fade(color: Color32, alpha: f32) -> Color32 {
    color.gamma_multiply(alpha.clamp(0.0, 1.0))
}
