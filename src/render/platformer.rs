use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::FIELD_BG;
use crate::platformer::{ArcadeWorld, Body};

/// Draws the platformer scene by sampling the world onto the terminal
/// cells: platforms as solid blocks, the player as `@`.
pub struct PlatformView;

impl PlatformView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, world: &ArcadeWorld, body: &Body) {
        let [header, scene, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(frame.area());

        frame.render_widget(self.header(body), header);

        // Project onto the inner area (inside the border).
        let cols = scene.width.saturating_sub(2).max(1) as usize;
        let rows = scene.height.saturating_sub(2).max(1) as usize;
        frame.render_widget(self.scene(world, body, cols, rows), scene);

        frame.render_widget(self.controls(), footer);
    }

    fn scene(&self, world: &ArcadeWorld, body: &Body, cols: usize, rows: usize) -> Paragraph<'_> {
        let (world_w, world_h) = world.size();
        let cell_w = world_w / cols as f32;
        let cell_h = world_h / rows as f32;

        let platform_style = Style::default().fg(Color::Green);
        let player_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let mut grid: Vec<Vec<Span>> = (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| {
                        // Sample the center of the terminal cell.
                        let px = (c as f32 + 0.5) * cell_w;
                        let py = (r as f32 + 0.5) * cell_h;

                        if body.rect.contains(px, py) {
                            Span::styled("@", player_style)
                        } else if world.platforms().iter().any(|p| p.contains(px, py)) {
                            Span::styled("█", platform_style)
                        } else {
                            Span::raw(" ")
                        }
                    })
                    .collect()
            })
            .collect();

        // A small body can fall between sample points; always mark its
        // center cell.
        let center_col = ((body.rect.x + body.rect.w / 2.0) / cell_w) as usize;
        let center_row = ((body.rect.y + body.rect.h / 2.0) / cell_h) as usize;
        if let Some(span) = grid
            .get_mut(center_row.min(rows - 1))
            .and_then(|row| row.get_mut(center_col.min(cols - 1)))
        {
            *span = Span::styled("@", player_style);
        }

        let lines: Vec<Line> = grid.into_iter().map(Line::from).collect();

        Paragraph::new(lines)
            .style(Style::default().bg(FIELD_BG))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .title(" Platformer "),
            )
    }

    fn header(&self, body: &Body) -> Paragraph<'_> {
        let grounded = if body.on_floor {
            Span::styled("on ground", Style::default().fg(Color::Green))
        } else {
            Span::styled("airborne", Style::default().fg(Color::DarkGray))
        };

        let line = Line::from(vec![
            Span::styled(
                "Platformer",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            grounded,
        ]);

        Paragraph::new(line).alignment(Alignment::Center)
    }

    fn controls(&self) -> Paragraph<'_> {
        let line = Line::from(vec![
            Span::styled("←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("AD", Style::default().fg(Color::Cyan)),
            Span::raw(" move  ·  "),
            Span::styled("↑/W/Space", Style::default().fg(Color::Green)),
            Span::raw(" jump  ·  "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ]);

        Paragraph::new(line).alignment(Alignment::Center)
    }
}

impl Default for PlatformView {
    fn default() -> Self {
        Self::new()
    }
}
