use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::FIELD_BG;
use crate::game::{Direction, GameState, Position};
use crate::metrics::GameMetrics;

/// Draws the snake scene: stats header, the play field (with the game-over
/// banner laid over it once the session ends), and a controls footer.
pub struct SnakeView;

impl SnakeView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let [header, field, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(frame.area());

        frame.render_widget(self.header(state, metrics), header);
        frame.render_widget(self.field(state), field);
        frame.render_widget(self.controls(), footer);

        if state.game_over {
            let banner_area = centered(field, 34, 7);
            frame.render_widget(Clear, banner_area);
            frame.render_widget(self.banner(state), banner_area);
        }
    }

    fn field(&self, state: &GameState) -> Paragraph<'_> {
        let head = state.snake.head();
        let head_glyph = match state.snake.direction {
            Direction::Up => "▲ ",
            Direction::Down => "▼ ",
            Direction::Left => "◀ ",
            Direction::Right => "▶ ",
        };

        let mut lines = Vec::with_capacity(state.grid_height);
        for y in 0..state.grid_height {
            let mut spans = Vec::with_capacity(state.grid_width);
            for x in 0..state.grid_width {
                let cell = Position::new(x as i32, y as i32);

                let span = if cell == head {
                    Span::styled(
                        head_glyph,
                        Style::default()
                            .fg(Color::LightGreen)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.occupies(cell) {
                    Span::styled("■ ", Style::default().fg(Color::Green))
                } else if cell == state.food {
                    Span::styled(
                        "● ",
                        Style::default()
                            .fg(Color::LightRed)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled("· ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .style(Style::default().bg(FIELD_BG))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .title(" Snake "),
            )
    }

    fn header(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let line = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.game_clock(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(line).alignment(Alignment::Center)
    }

    fn banner(&self, state: &GameState) -> Paragraph<'_> {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn controls(&self) -> Paragraph<'_> {
        let line = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" steer  ·  "),
            Span::styled("Space", Style::default().fg(Color::Green)),
            Span::raw(" restart  ·  "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ]);

        Paragraph::new(line).alignment(Alignment::Center)
    }
}

impl Default for SnakeView {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rect centered inside `area`, clamped to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside_area() {
        let area = Rect {
            x: 2,
            y: 3,
            width: 80,
            height: 24,
        };

        let rect = centered(area, 34, 7);
        assert_eq!(rect.width, 34);
        assert_eq!(rect.height, 7);
        assert!(rect.x >= area.x && rect.x + rect.width <= area.x + area.width);
        assert!(rect.y >= area.y && rect.y + rect.height <= area.y + area.height);
    }

    #[test]
    fn test_centered_clamps_to_small_areas() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 20,
            height: 5,
        };

        let rect = centered(area, 34, 7);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }
}
