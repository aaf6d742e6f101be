use serde::{Deserialize, Serialize};

use super::world::Rect;

/// Tunables for the platformer scene.
///
/// Speeds and gravity are the original demo's engine settings: 160 px/s
/// walking, a 330 px/s jump impulse, 300 px/s^2 gravity, in an 800x600
/// world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformerConfig {
    pub world_width: f32,
    pub world_height: f32,
    /// Constant horizontal speed forwarded while a direction is held.
    pub move_speed: f32,
    /// Upward impulse forwarded when jumping off the ground.
    pub jump_speed: f32,
    /// Downward acceleration applied by the arcade world.
    pub gravity: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// Static surfaces the player can stand on.
    pub platforms: Vec<Rect>,
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            move_speed: 160.0,
            jump_speed: 330.0,
            gravity: 300.0,
            player_width: 32.0,
            player_height: 48.0,
            spawn_x: 100.0,
            spawn_y: 450.0,
            platforms: vec![
                // Ground slab plus three ledges.
                Rect::new(0.0, 552.0, 800.0, 32.0),
                Rect::new(400.0, 384.0, 400.0, 32.0),
                Rect::new(0.0, 234.0, 250.0, 32.0),
                Rect::new(550.0, 204.0, 250.0, 32.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_demo_constants() {
        let config = PlatformerConfig::default();
        assert_eq!(config.move_speed, 160.0);
        assert_eq!(config.jump_speed, 330.0);
        assert_eq!(config.gravity, 300.0);
        assert_eq!(config.world_width, 800.0);
        assert_eq!(config.world_height, 600.0);
        assert_eq!(config.platforms.len(), 4);
    }

    #[test]
    fn test_platforms_sit_inside_the_world() {
        let config = PlatformerConfig::default();
        for platform in &config.platforms {
            assert!(platform.left() >= 0.0);
            assert!(platform.right() <= config.world_width);
            assert!(platform.bottom() <= config.world_height);
        }
    }
}
