use serde::{Deserialize, Serialize};

/// Tunables for one snake scene.
///
/// The repository originally shipped two near-identical snake demos that
/// differed only in these numbers; they survive here as the `classic` and
/// `compact` presets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the play field in cells.
    pub grid_width: usize,
    /// Height of the play field in cells.
    pub grid_height: usize,
    /// Number of segments the snake starts with.
    pub initial_snake_length: usize,
    /// Points awarded per piece of food.
    pub food_points: u32,
    /// Milliseconds between ticks at the start of a game.
    pub start_delay_ms: u64,
    /// Hard floor for the tick delay; eating never pushes below this.
    pub min_delay_ms: u64,
    /// How many milliseconds each piece of food shaves off the delay.
    pub delay_step_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl GameConfig {
    /// The original demo: a 40x30 field (800x600 px at 20 px cells),
    /// 150 ms ticks speeding up to 100 ms, 2 ms faster per food.
    pub fn classic() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            initial_snake_length: 3,
            food_points: 10,
            start_delay_ms: 150,
            min_delay_ms: 100,
            delay_step_ms: 2,
        }
    }

    /// The second demo variant: a smaller, slightly faster field with the
    /// same rules.
    pub fn compact() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            start_delay_ms: 120,
            min_delay_ms: 80,
            ..Self::classic()
        }
    }

    /// Override the field dimensions, keeping the preset's other values.
    ///
    /// Each axis is clamped to at least one cell more than the starting
    /// snake: anything smaller has no room for both the snake and its food,
    /// and a zero axis has no cells to place anything in at all.
    pub fn with_grid(mut self, width: usize, height: usize) -> Self {
        let floor = self.initial_snake_length + 1;
        self.grid_width = width.max(floor);
        self.grid_height = height.max(floor);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_matches_original_demo() {
        let config = GameConfig::classic();
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 30);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.food_points, 10);
        assert_eq!(config.start_delay_ms, 150);
        assert_eq!(config.min_delay_ms, 100);
        assert_eq!(config.delay_step_ms, 2);
    }

    #[test]
    fn test_compact_shares_rules() {
        let config = GameConfig::compact();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.food_points, GameConfig::classic().food_points);
        assert_eq!(config.delay_step_ms, GameConfig::classic().delay_step_ms);
    }

    #[test]
    fn test_grid_override() {
        let config = GameConfig::classic().with_grid(12, 9);
        assert_eq!(config.grid_width, 12);
        assert_eq!(config.grid_height, 9);
        assert_eq!(config.start_delay_ms, 150);
    }

    #[test]
    fn test_grid_override_clamps_degenerate_fields() {
        // A zero or one-cell axis would leave nowhere to put the food.
        let config = GameConfig::classic().with_grid(0, 1);
        assert_eq!(config.grid_width, 4);
        assert_eq!(config.grid_height, 4);

        let config = GameConfig::classic().with_grid(4, 40);
        assert_eq!(config.grid_width, 4);
        assert_eq!(config.grid_height, 40);
    }
}
