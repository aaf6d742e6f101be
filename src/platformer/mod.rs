//! Platformer scene core.
//!
//! The interesting part is how little there is: the controller only forwards
//! velocities ([`controller`]), and the physics it forwards into is the
//! arcade stand-in ([`world`]) that plays the role the host engine played in
//! the original demo.

pub mod config;
pub mod controller;
pub mod world;

pub use config::PlatformerConfig;
pub use controller::{Controller, PlayerIntent};
pub use world::{ArcadeWorld, Body, Rect};
