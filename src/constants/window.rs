//! Window constants.

pub const WINDOW_TITLE: &str = "Spider Web";
/// Default window width
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
/// Default window height
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
