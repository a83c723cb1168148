//! Settings panel: live sliders and toggles for the spider configuration.

use egui::{RichText, Slider};

use super::style;
use crate::config::SpiderConfig;
use crate::constants::*;
use crate::render::Palette;

/// State for the settings panel
pub struct SettingsPanel {
    pub visible: bool,
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

fn section_label(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    ui.label(RichText::new(text.to_uppercase()).small().strong().color(palette.text_muted));
}

/// Draw the settings panel. Edits are written straight into `config` and
/// take effect on the next tick. Returns true if anything changed.
pub fn draw_settings(ctx: &egui::Context, panel: &mut SettingsPanel, config: &mut SpiderConfig) -> bool {
    if !panel.visible {
        return false;
    }

    let palette = Palette::for_theme(config.is_dark_mode);
    let before = *config;

    egui::Window::new("Controller")
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 16.0])
        .default_width(SETTINGS_PANEL_WIDTH)
        .resizable(false)
        .collapsible(true)
        .frame(style::window_frame(&palette))
        .show(ctx, |ui| {
            section_label(ui, "Environmental parameters", &palette);
            ui.add_space(8.0);

            ui.add(Slider::new(&mut config.grid_spacing, GRID_SPACING_RANGE).step_by(1.0).text("Grid Spacing"));
            ui.add(Slider::new(&mut config.leg_reach, LEG_REACH_RANGE).step_by(1.0).text("Leg Reach"));
            ui.add(Slider::new(&mut config.body_radius, BODY_RADIUS_RANGE).step_by(1.0).text("Body Radius"));
            ui.add(Slider::new(&mut config.step_speed, STEP_SPEED_RANGE).step_by(STEP_SPEED_STEP).text("Step Speed"));
            ui.add(Slider::new(&mut config.max_speed, MAX_SPEED_RANGE).step_by(MAX_SPEED_STEP).text("Max Speed"));
            ui.add(Slider::new(&mut config.step_lift_height, STEP_LIFT_RANGE).step_by(1.0).text("Step Height"));
            ui.add(
                Slider::new(&mut config.dot_interaction_range, INTERACTION_RANGE_RANGE)
                    .step_by(1.0)
                    .text("Mag Range"),
            );

            ui.add_space(12.0);
            ui.separator();
            ui.horizontal(|ui| {
                let theme_label = if config.is_dark_mode { "Light" } else { "Dark" };
                if ui.button(theme_label).clicked() {
                    config.is_dark_mode = !config.is_dark_mode;
                }
                if ui.selectable_label(config.show_grid, "Grid").clicked() {
                    config.show_grid = !config.show_grid;
                }
            });
        });

    *config != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_panel_draws_nothing() {
        let ctx = egui::Context::default();
        let mut panel = SettingsPanel { visible: false };
        let mut config = SpiderConfig::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            assert!(!draw_settings(ctx, &mut panel, &mut config));
        });
        assert_eq!(config, SpiderConfig::default());
    }

    #[test]
    fn test_visible_panel_leaves_config_untouched_without_input() {
        let ctx = egui::Context::default();
        let mut panel = SettingsPanel::new();
        let mut config = SpiderConfig::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            draw_settings(ctx, &mut panel, &mut config);
        });
        assert_eq!(config, SpiderConfig::default());
    }

    #[test]
    fn test_toggle_flips_visibility() {
        let mut panel = SettingsPanel::new();
        assert!(panel.visible);
        panel.toggle();
        assert!(!panel.visible);
    }
}
