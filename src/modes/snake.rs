use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::interval;

use crate::game::{Action, Direction, GameConfig, GameEngine, GameState, MoveTimer};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::SnakeView;

/// Snake scene driver.
///
/// Owns the engine, the current session, the view and the input mapping,
/// and runs the select loop that ties them together. The loop polls the
/// simulation far faster than the snake moves; [`MoveTimer`] turns most of
/// those polls into no-ops until the session's current move delay has
/// elapsed.
pub struct SnakeMode {
    engine: GameEngine,
    state: GameState,
    timer: MoveTimer,
    metrics: GameMetrics,
    view: SnakeView,
    input_handler: InputHandler,
    should_quit: bool,
    /// Latest requested heading, consumed by the next granted tick. Only
    /// one turn takes effect per tick no matter how many keys arrived.
    pending_direction: Option<Direction>,
}

impl SnakeMode {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            timer: MoveTimer::new(),
            metrics: GameMetrics::new(),
            view: SnakeView::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            pending_direction: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Poll the simulation well below the fastest move delay; MoveTimer
        // decides which polls actually advance the game.
        let mut sim_timer = interval(Duration::from_millis(15));

        // Render at 30 FPS.
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = sim_timer.tick() => {
                    if !self.state.game_over && self.timer.ready(self.state.move_delay()) {
                        self.advance_tick();
                    }
                }

                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.view.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Game(Action::Turn(direction)) => {
                    self.pending_direction = Some(direction);
                }
                KeyAction::Game(Action::Continue) => {}
                KeyAction::Restart => {
                    self.reset_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn advance_tick(&mut self) {
        let action = self
            .pending_direction
            .take()
            .map(Action::Turn)
            .unwrap_or(Action::Continue);

        let report = self.engine.step(&mut self.state, action);

        if report.terminated {
            self.metrics.on_game_over(self.state.score);
            log::info!(
                "game over after {} ticks, score {}",
                self.state.ticks,
                self.state.score
            );
        }
    }

    /// Full restart: the whole session state is rebuilt, nothing survives
    /// from the old game.
    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.timer.restart_at(Instant::now());
        self.metrics.on_game_start();
        self.pending_direction = None;
        log::info!("session restarted");
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_starts_a_fresh_session() {
        let mode = SnakeMode::new(GameConfig::classic());
        assert!(!mode.state.game_over);
        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.snake.len(), 3);
    }

    #[test]
    fn test_reset_replaces_the_session_wholesale() {
        let mut mode = SnakeMode::new(GameConfig::classic());
        mode.state.score = 40;
        mode.state.move_delay_ms = 120;
        mode.state.game_over = true;
        mode.pending_direction = Some(Direction::Up);

        mode.reset_game();

        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.move_delay_ms, 150);
        assert!(!mode.state.game_over);
        assert_eq!(mode.pending_direction, None);
    }

    #[test]
    fn test_pending_direction_is_consumed_once() {
        let mut mode = SnakeMode::new(GameConfig::classic());
        mode.pending_direction = Some(Direction::Up);

        mode.advance_tick();
        assert_eq!(mode.state.snake.direction, Direction::Up);
        assert_eq!(mode.pending_direction, None);

        // The next tick continues on the same heading.
        mode.advance_tick();
        assert_eq!(mode.state.snake.direction, Direction::Up);
    }

    #[test]
    fn test_game_over_tick_updates_metrics() {
        let mut mode = SnakeMode::new(GameConfig::classic().with_grid(12, 4));

        // Drive the snake into the right wall.
        for _ in 0..12 {
            if mode.state.game_over {
                break;
            }
            mode.advance_tick();
        }

        assert!(mode.state.game_over);
        assert_eq!(mode.metrics.games_played, 1);
    }
}
