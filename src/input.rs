//! Input handling.
//!
//! Keyboard shortcuts, touch tracking and conversion of window coordinates
//! into logical surface coordinates. The pointer position itself lives on the
//! animation driver; handlers here only decide what to write there.

use std::collections::HashSet;

use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::TouchPhase;
use winit::keyboard::KeyCode;

use crate::config::SpiderConfig;

/// Input state tracking.
///
/// Written by the window event handler and read by the frame loop, both on
/// the event-loop thread.
pub struct InputState {
    pub keys_pressed: HashSet<KeyCode>,
    /// A finger is currently down
    pub touch_active: bool,
    /// Id of the finger being followed, if any
    pub touch_id: Option<u64>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_pressed: HashSet::new(),
            touch_active: false,
            touch_id: None,
        }
    }

    /// Track a touch event. Returns the position the spider should follow,
    /// or `None` when the event does not move the pointer.
    pub fn handle_touch(&mut self, id: u64, phase: TouchPhase, location: Vec2) -> Option<Vec2> {
        match phase {
            TouchPhase::Started => {
                if self.touch_id.is_none() {
                    self.touch_id = Some(id);
                    self.touch_active = true;
                }
                (self.touch_id == Some(id)).then_some(location)
            }
            TouchPhase::Moved => (self.touch_id == Some(id)).then_some(location),
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.touch_id == Some(id) {
                    self.touch_id = None;
                    self.touch_active = false;
                }
                None
            }
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of processing input
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputResult {
    pub toggle_fullscreen: bool,
    pub toggle_grid: bool,
    pub toggle_theme: bool,
    pub toggle_settings: bool,
}

/// Process keyboard input and return actions to take
pub fn process_keyboard(input: &mut InputState) -> InputResult {
    InputResult {
        toggle_fullscreen: input.keys_pressed.remove(&KeyCode::F11),
        toggle_grid: input.keys_pressed.remove(&KeyCode::KeyG),
        toggle_theme: input.keys_pressed.remove(&KeyCode::KeyT),
        toggle_settings: input.keys_pressed.remove(&KeyCode::Backquote),
    }
}

/// Apply configuration toggles from the keyboard.
pub fn apply_toggles(result: &InputResult, config: &mut SpiderConfig) {
    if result.toggle_grid {
        config.show_grid = !config.show_grid;
    }
    if result.toggle_theme {
        config.is_dark_mode = !config.is_dark_mode;
    }
}

/// Convert a physical window position into logical surface coordinates.
pub fn to_logical(position: PhysicalPosition<f64>, scale_factor: f64) -> Vec2 {
    let logical = position.to_logical::<f64>(scale_factor);
    Vec2::new(logical.x as f32, logical.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_consumed_once() {
        let mut input = InputState::new();
        input.keys_pressed.insert(KeyCode::KeyG);
        input.keys_pressed.insert(KeyCode::Backquote);

        let result = process_keyboard(&mut input);
        assert!(result.toggle_grid);
        assert!(result.toggle_settings);
        assert!(!result.toggle_theme);

        assert_eq!(process_keyboard(&mut input), InputResult::default());
    }

    #[test]
    fn test_toggles_flip_config() {
        let mut config = SpiderConfig::default();
        let result = InputResult {
            toggle_grid: true,
            toggle_theme: true,
            ..InputResult::default()
        };
        apply_toggles(&result, &mut config);
        assert!(!config.show_grid);
        assert!(!config.is_dark_mode);
    }

    #[test]
    fn test_touch_follows_first_finger() {
        let mut input = InputState::new();
        let a = Vec2::new(10.0, 20.0);
        let b = Vec2::new(30.0, 40.0);

        assert_eq!(input.handle_touch(1, TouchPhase::Started, a), Some(a));
        assert!(input.touch_active);
        // A second finger is ignored while the first is down
        assert_eq!(input.handle_touch(2, TouchPhase::Started, b), None);
        assert_eq!(input.handle_touch(1, TouchPhase::Moved, b), Some(b));

        assert_eq!(input.handle_touch(1, TouchPhase::Ended, b), None);
        assert!(!input.touch_active);
        assert_eq!(input.handle_touch(2, TouchPhase::Moved, a), None);
    }

    #[test]
    fn test_logical_conversion_uses_scale_factor() {
        let p = to_logical(PhysicalPosition::new(200.0, 100.0), 2.0);
        assert_eq!(p, Vec2::new(100.0, 50.0));
    }
}
