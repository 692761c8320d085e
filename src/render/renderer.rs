use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::engine::{self, CELL_SIZE, Surface};
use crate::game::SnakeGame;
use crate::metrics::GameMetrics;

use super::framebuffer::Framebuffer;

/// Terminal columns per grid cell
pub const CHARS_PER_CELL: i32 = 2;

pub struct Renderer;

/// One terminal character of the downsampled canvas
#[derive(Debug, Clone, Copy, PartialEq)]
struct Glyph {
    ch: char,
    bg: engine::Color,
    fg: Option<engine::Color>,
}

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        game: &SnakeGame,
        canvas: &Framebuffer,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Canvas
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(game, metrics);
        frame.render_widget(stats, chunks[0]);

        let bounds = canvas.bounds();
        let width = u16::try_from(bounds.columns() * CHARS_PER_CELL + 2).unwrap_or(u16::MAX);
        let height = u16::try_from(bounds.rows() + 2).unwrap_or(u16::MAX);
        let canvas_area = center(chunks[1], width, height);
        frame.render_widget(self.render_canvas(canvas, game.is_game_over()), canvas_area);

        let controls = self.render_controls(game.is_game_over());
        frame.render_widget(controls, chunks[2]);
    }

    fn render_canvas(&self, canvas: &Framebuffer, game_over: bool) -> Paragraph<'static> {
        let lines = canvas_glyphs(canvas)
            .into_iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .into_iter()
                    .map(|glyph| {
                        let mut style = Style::default().bg(to_tui(glyph.bg));
                        if let Some(fg) = glyph.fg {
                            style = style.fg(to_tui(fg)).add_modifier(Modifier::BOLD);
                        }
                        Span::styled(glyph.ch.to_string(), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect::<Vec<_>>();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(border_color(game_over)))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, game: &SnakeGame, metrics: &GameMetrics) -> Paragraph<'static> {
        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                game.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                (game.tail_len() + 1).to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("FPS: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                metrics.measured_fps.to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if game.is_game_over() {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_controls(&self, game_over: bool) -> Paragraph<'static> {
        let mut spans = vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
        ];
        let restart = Style::default().fg(Color::Green);
        if game_over {
            spans.push(Span::styled("R", restart.add_modifier(Modifier::BOLD)));
        } else {
            spans.push(Span::styled("R", restart));
        }
        spans.extend([
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_tui(color: engine::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Grey like the canvas outline, red once the game is over
fn border_color(game_over: bool) -> Color {
    if game_over {
        Color::Red
    } else {
        to_tui(engine::Color::GREY)
    }
}

/// Rect of at most `width` x `height` centered in `area`
fn center(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Downsample the canvas to one row per grid row and two characters per
/// grid column, then lay text runs over the top.
fn canvas_glyphs(canvas: &Framebuffer) -> Vec<Vec<Glyph>> {
    let bounds = canvas.bounds();
    let cols = (bounds.columns() * CHARS_PER_CELL).max(0) as usize;
    let rows = bounds.rows().max(0) as usize;

    let mut grid: Vec<Vec<Glyph>> = (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| Glyph {
                    ch: ' ',
                    bg: canvas.cell_color(col as i32 / CHARS_PER_CELL, row as i32),
                    fg: None,
                })
                .collect()
        })
        .collect();

    for run in canvas.text_runs() {
        let row = (run.top().max(0) / CELL_SIZE) as usize;
        let Some(line) = grid.get_mut(row) else {
            continue;
        };
        let start = (run.x.max(0) * CHARS_PER_CELL / CELL_SIZE) as usize;
        for (glyph, ch) in line.iter_mut().skip(start).zip(run.text.chars()) {
            glyph.ch = ch;
            glyph.fg = Some(run.color);
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{CanvasBounds, Font};

    fn row_text(row: &[Glyph]) -> String {
        row.iter().map(|g| g.ch).collect()
    }

    #[test]
    fn test_glyph_grid_dimensions() {
        let canvas = Framebuffer::new(CanvasBounds::new(250, 100));
        let grid = canvas_glyphs(&canvas);

        assert_eq!(grid.len(), 4);
        assert!(grid.iter().all(|row| row.len() == 20));
    }

    #[test]
    fn test_cells_take_canvas_colors() {
        let mut canvas = Framebuffer::new(CanvasBounds::new(100, 100));
        canvas.fill_rect(25, 25, 25, 25, engine::Color::RED);
        let grid = canvas_glyphs(&canvas);

        assert_eq!(grid[1][2].bg, engine::Color::RED);
        assert_eq!(grid[1][3].bg, engine::Color::RED);
        assert_eq!(grid[1][4].bg, engine::Color::BLACK);
        assert_eq!(grid[0][2].bg, engine::Color::BLACK);
    }

    #[test]
    fn test_text_overlay() {
        let mut canvas = Framebuffer::new(CanvasBounds::new(250, 100));
        let font = Font::points(20, "Calibri");
        canvas.draw_text("Score: 3", 5, 25, &font, engine::Color::WHITE);
        canvas.draw_text("clipped at the right edge", 200, 75, &font, engine::Color::WHITE);
        let grid = canvas_glyphs(&canvas);

        assert!(row_text(&grid[0]).starts_with("Score: 3"));
        assert_eq!(grid[0][0].fg, Some(engine::Color::WHITE));
        assert_eq!(row_text(&grid[2]).trim_end(), format!("{:16}clip", ""));
    }

    #[test]
    fn test_border_color() {
        assert_eq!(border_color(false), Color::Rgb(128, 128, 128));
        assert_eq!(border_color(true), Color::Red);
    }

    #[test]
    fn test_center() {
        let area = Rect::new(0, 3, 100, 30);
        assert_eq!(center(area, 20, 10), Rect::new(40, 13, 20, 10));
        assert_eq!(center(area, 200, 10).width, 100);
    }
}
