//! Terminal arcade scenes: a grid snake game and a small platformer.
//!
//! Each scene is split into a pure core with no I/O ([`game`] for the
//! snake, [`platformer`] for the platformer), a ratatui view ([`render`]),
//! and a driver ([`modes`]) that owns the terminal and the async loop
//! wiring input events, simulation ticks, and frames together.

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod platformer;
pub mod render;
