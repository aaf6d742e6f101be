//! Scene drivers: terminal setup, the event/tick/render select loop, and
//! teardown for each scene.

pub mod platformer;
pub mod snake;

pub use platformer::PlatformerMode;
pub use snake::SnakeMode;
