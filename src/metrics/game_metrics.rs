use std::time::{Duration, Instant};

/// Session counters shown in the snake header: how long the current game
/// has been running, the best score so far, and how many games the session
/// has seen. Nothing is persisted; a new process starts from zero.
pub struct GameMetrics {
    game_started: Instant,
    pub best_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            game_started: Instant::now(),
            best_score: 0,
            games_played: 0,
        }
    }

    /// Restart the per-game clock.
    pub fn on_game_start(&mut self) {
        self.game_started = Instant::now();
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.best_score = self.best_score.max(final_score);
    }

    /// Current game time as `mm:ss`.
    pub fn game_clock(&self) -> String {
        clock(self.game_started.elapsed())
    }
}

fn clock(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_formatting() {
        assert_eq!(clock(Duration::ZERO), "00:00");
        assert_eq!(clock(Duration::from_secs(125)), "02:05");
        assert_eq!(clock(Duration::from_secs(3661)), "61:01");
    }

    #[test]
    fn test_best_score_never_decreases() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.best_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.best_score, 10);
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(15);
        assert_eq!(metrics.best_score, 15);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_game_start_resets_the_clock() {
        let mut metrics = GameMetrics::new();
        metrics.game_started = Instant::now() - Duration::from_secs(90);
        assert_eq!(metrics.game_clock(), "01:30");

        metrics.on_game_start();
        assert_eq!(metrics.game_clock(), "00:00");
    }
}
