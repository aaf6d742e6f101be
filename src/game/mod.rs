//! Snake simulation core.
//!
//! Pure tick logic with no I/O or rendering dependencies: the scene driver
//! feeds it one action per tick and draws whatever state comes back.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;
pub mod timer;

pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, TickReport};
pub use state::{CollisionKind, GameState, Position, Snake};
pub use timer::MoveTimer;
