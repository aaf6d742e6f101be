use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::interval;

use crate::input::{HeldIntent, PlatformAction};
use crate::platformer::{ArcadeWorld, Body, Controller, PlatformerConfig};
use crate::render::PlatformView;

/// Frame period for the platformer scene; the world is stepped with this
/// fixed dt so physics does not depend on render jitter.
const FRAME: Duration = Duration::from_millis(33);

/// Platformer scene driver.
///
/// There is no simulation of its own here: each frame folds the held keys
/// into an intent, the controller forwards that intent into the body's
/// velocities, and the arcade world does the rest.
pub struct PlatformerMode {
    world: ArcadeWorld,
    body: Body,
    controller: Controller,
    held: HeldIntent,
    view: PlatformView,
    should_quit: bool,
}

impl PlatformerMode {
    pub fn new(config: PlatformerConfig) -> Self {
        Self {
            world: ArcadeWorld::new(&config),
            body: ArcadeWorld::spawn_body(&config),
            controller: Controller::new(&config),
            held: HeldIntent::new(),
            view: PlatformView::new(),
            should_quit: false,
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

        let result = self.run_scene_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_scene_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut frame_timer = interval(FRAME);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(Event::Key(key))) = maybe_event {
                        if self.held.handle_key_event(key, Instant::now())
                            == PlatformAction::Quit
                        {
                            self.should_quit = true;
                        }
                    }
                }

                _ = frame_timer.tick() => {
                    self.advance_frame(Instant::now(), FRAME.as_secs_f32());
                    terminal.draw(|frame| {
                        self.view.render(frame, &self.world, &self.body);
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

    /// One frame: controller first, then physics, matching the original's
    /// update order.
    fn advance_frame(&mut self, now: Instant, dt: f32) {
        let intent = self.held.intent(now);
        self.controller.apply(intent, &mut self.body);
        self.world.step(&mut self.body, dt);
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
