//! Ratatui views, one per scene. Views are stateless: the mode drivers hand
//! them the current simulation state every frame.

pub mod platformer;
pub mod snake;

pub use platformer::PlatformView;
pub use snake::SnakeView;

use ratatui::style::Color;

/// Background shade carried over from the original demos (#1a1a2e).
pub(crate) const FIELD_BG: Color = Color::Rgb(26, 26, 46);
