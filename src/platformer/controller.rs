use super::config::PlatformerConfig;
use super::world::Body;

/// What the player is asking for this frame, folded from held keys.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerIntent {
    /// -1.0, 0.0 or +1.0.
    pub move_x: f32,
    pub jump: bool,
}

/// The platformer "tick controller". It holds no state and runs no
/// simulation: every frame it forwards the held direction as a constant
/// horizontal velocity (or zero) and, when the world says the body is
/// grounded and jump is asked for, a fixed upward impulse. Gravity and
/// collision stay the arcade world's problem.
#[derive(Debug, Clone, Copy)]
pub struct Controller {
    move_speed: f32,
    jump_speed: f32,
}

impl Controller {
    pub fn new(config: &PlatformerConfig) -> Self {
        Self {
            move_speed: config.move_speed,
            jump_speed: config.jump_speed,
        }
    }

    /// Forward this frame's intent into the body's velocities.
    pub fn apply(&self, intent: PlayerIntent, body: &mut Body) {
        body.vel_x = intent.move_x * self.move_speed;

        if intent.jump && body.on_floor {
            body.vel_y = -self.jump_speed;
        }
    }
}
