use rand::Rng;

use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{CollisionKind, GameState, Position, Snake},
};

/// What a single tick did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// The head landed on the food cell this tick.
    pub ate_food: bool,
    /// Set when this tick ended the game.
    pub collision: Option<CollisionKind>,
    /// True once the session is in its terminal state; further ticks are
    /// no-ops until a restart builds a fresh state.
    pub terminated: bool,
}

impl TickReport {
    fn terminal(collision: Option<CollisionKind>) -> Self {
        Self {
            ate_food: false,
            collision,
            terminated: true,
        }
    }
}

/// The snake tick controller. Owns the rules (config) and the food RNG;
/// the session data lives in [`GameState`] so a restart can swap it whole.
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Build a start-of-game session: the snake a quarter of the way in,
    /// facing right, food waiting at the field center.
    ///
    /// On the classic field that is the original layout exactly: head cell
    /// (10,15) with two trailing segments, food at (20,15).
    pub fn reset(&mut self) -> GameState {
        // On small fields a quarter of the way in is not enough room for
        // the tail; push the head right until the whole snake fits.
        let head_x = (self.config.grid_width / 4)
            .max(self.config.initial_snake_length.saturating_sub(1));
        let head = Position::new(head_x as i32, (self.config.grid_height / 2) as i32);
        let snake = Snake::new(head, Direction::Right, self.config.initial_snake_length);

        let center = Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );
        // Tiny custom grids can leave the center under the snake.
        let food = if snake.occupies(center) {
            self.spawn_food_clear_of(&snake)
                .expect("a fresh field has cells to spare")
        } else {
            center
        };

        GameState::new(snake, food, &self.config)
    }

    /// Advance the session by one tick.
    ///
    /// Order matters and follows the original: turn, then collide, then
    /// move, then eat. A turn straight back into the body is ignored, a
    /// candidate head cell off the field or on the body ends the game, and
    /// eating grows the snake, relocates the food, bumps the score, and
    /// tightens the tick delay down to its floor. A snake that grows to
    /// cover every cell ends the game as well, there being nowhere left to
    /// put food.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> TickReport {
        if state.game_over {
            return TickReport::terminal(None);
        }

        if let Action::Turn(requested) = action {
            if !state.snake.direction.is_reverse_of(requested) {
                state.snake.direction = requested;
            }
        }

        let candidate = state.snake.head().step(state.snake.direction);

        let collision = if !state.in_bounds(candidate) {
            Some(CollisionKind::Wall)
        } else if state.snake.occupies(candidate) {
            Some(CollisionKind::SelfHit)
        } else {
            None
        };

        if collision.is_some() {
            state.game_over = true;
            state.ticks += 1;
            return TickReport::terminal(collision);
        }

        let ate_food = candidate == state.food;
        state.snake.advance(ate_food);

        if ate_food {
            state.score += self.config.food_points;
            match self.spawn_food_clear_of(&state.snake) {
                Some(cell) => state.food = cell,
                // The snake covers the whole field; nothing left to eat.
                None => {
                    state.game_over = true;
                    state.ticks += 1;
                    return TickReport {
                        ate_food: true,
                        collision: None,
                        terminated: true,
                    };
                }
            }
            state.move_delay_ms = state
                .move_delay_ms
                .saturating_sub(self.config.delay_step_ms)
                .max(self.config.min_delay_ms);
        }

        state.ticks += 1;

        TickReport {
            ate_food,
            collision: None,
            terminated: false,
        }
    }

    /// Pick a food cell uniformly over the field, rejecting cells under the
    /// snake, exactly as the original re-rolled occupied positions. `None`
    /// when the snake leaves no free cell; the rejection loop only runs
    /// once a free cell is known to exist.
    fn spawn_food_clear_of(&mut self, snake: &Snake) -> Option<Position> {
        if snake.len() >= self.config.grid_width * self.config.grid_height {
            return None;
        }

        loop {
            let cell = Position::new(
                self.rng.gen_range(0..self.config.grid_width) as i32,
                self.rng.gen_range(0..self.config.grid_height) as i32,
            );

            if !snake.occupies(cell) {
                return Some(cell);
            }
        }
    }
}
