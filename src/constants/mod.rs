//! Tuning constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Most of these were tuned by eye; keep them named rather than re-deriving them.

mod gait;
mod motion;
mod render;
mod ui;
mod window;

pub use gait::*;
pub use motion::*;
pub use render::*;
pub use ui::*;
pub use window::*;
