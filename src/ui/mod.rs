//! UI rendering using egui.
//!
//! The only window is the settings panel; the scene itself is painted on
//! egui's background layer by the renderer.

pub mod settings;
pub mod style;

pub use settings::{draw_settings, SettingsPanel};
