//! Theme-aware egui styling.
//!
//! Flat, monochrome panels that follow the page theme: soft rounding, thin
//! borders, no shadows. All colours come from the active [`Palette`].

use egui::epaint::Shadow;
use egui::style::{WidgetVisuals, Widgets};
use egui::{Frame, Margin, Rounding, Stroke, Style, Visuals};

use crate::render::Palette;

/// Border width for panels and buttons
pub const BORDER_WIDTH: f32 = 1.0;
pub const WINDOW_ROUNDING: f32 = 16.0;
pub const WIDGET_ROUNDING: f32 = 8.0;

/// Create visuals for the given palette
pub fn themed_visuals(palette: &Palette, dark: bool) -> Visuals {
    let mut visuals = if dark { Visuals::dark() } else { Visuals::light() };

    visuals.window_rounding = Rounding::same(WINDOW_ROUNDING);
    visuals.menu_rounding = Rounding::same(WIDGET_ROUNDING);

    visuals.window_shadow = Shadow::NONE;
    visuals.popup_shadow = Shadow::NONE;

    visuals.window_fill = palette.panel_fill;
    visuals.window_stroke = Stroke::new(BORDER_WIDTH, palette.panel_border);
    visuals.panel_fill = palette.panel_fill;
    visuals.extreme_bg_color = palette.widget_fill;

    visuals.widgets = themed_widgets(palette);

    visuals.selection.bg_fill = palette.widget_active;
    visuals.selection.stroke = Stroke::new(1.0, palette.page_background);

    visuals.override_text_color = Some(palette.text);

    visuals
}

fn widget(fill: egui::Color32, border: egui::Color32, text: egui::Color32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: Stroke::new(BORDER_WIDTH, border),
        rounding: Rounding::same(WIDGET_ROUNDING),
        fg_stroke: Stroke::new(1.0, text),
        expansion: 0.0,
    }
}

fn themed_widgets(palette: &Palette) -> Widgets {
    Widgets {
        noninteractive: widget(palette.panel_fill, palette.panel_border, palette.text_muted),
        inactive: widget(palette.widget_fill, palette.panel_border, palette.text),
        hovered: widget(palette.widget_hover, palette.text_muted, palette.text),
        active: widget(palette.widget_hover, palette.text, palette.text),
        open: widget(palette.widget_fill, palette.panel_border, palette.text),
    }
}

/// Frame for the settings window
pub fn window_frame(palette: &Palette) -> Frame {
    Frame::none()
        .fill(palette.panel_fill)
        .stroke(Stroke::new(BORDER_WIDTH, palette.panel_border))
        .rounding(Rounding::same(WINDOW_ROUNDING))
        .inner_margin(Margin::same(16.0))
}

/// Complete style for the given theme
pub fn themed_style(dark: bool) -> Style {
    let palette = Palette::for_theme(dark);
    let mut style = Style::default();
    style.visuals = themed_visuals(&palette, dark);
    style.spacing.slider_width = 140.0;
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_follows_theme() {
        assert!(themed_style(true).visuals.dark_mode);
        assert!(!themed_style(false).visuals.dark_mode);
        assert_eq!(themed_style(false).visuals.window_fill, Palette::light().panel_fill);
    }
}
