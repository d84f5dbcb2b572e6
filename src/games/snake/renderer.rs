use super::position::{Bounds, Position};
use super::state::SnakeState;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    layout::{Layout, Constraint, Direction as LayoutDirection}
};

/// Pixel units covered by one terminal column. Two columns make one segment.
pub const UNITS_PER_COLUMN: i32 = 5;
/// Pixel units covered by one terminal row
pub const UNITS_PER_ROW: i32 = 10;

const SEGMENT: &str = "█";
const FOOD: &str = "●";

#[derive(Debug)]
pub struct SnakeRenderer;

impl SnakeRenderer {
    /// Draw the score line and the play area, returning the play area's bounds
    /// for the next tick.
    pub fn render(frame: &mut Frame, state: &SnakeState) -> Option<Bounds> {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(1), // Score
                Constraint::Min(0),    // Play area
            ])
            .split(frame.area());

        let score = Paragraph::new(format!("Score: {}   Speed: {}", state.score(), state.speed()))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(score, chunks[0]);

        let block = Block::default().borders(Borders::ALL).title(" SNAKE ");
        let area = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);

        if state.is_game_over() {
            Self::render_game_over(frame, area, state);
        } else {
            Self::render_board(frame, area, state);
        }

        surface_bounds(area)
    }

    fn render_board(frame: &mut Frame, area: Rect, state: &SnakeState) {
        let buf = frame.buffer_mut();

        for (i, segment) in state.snake().iter().enumerate() {
            let color = if i == 0 { Color::Yellow } else { Color::Green };
            // Left and right half of the segment
            paint(buf, area, *segment, SEGMENT, color);
            paint(buf, area, Position::new(segment.x + UNITS_PER_COLUMN, segment.y), SEGMENT, color);
        }

        paint(buf, area, state.food(), FOOD, Color::Red);
    }

    fn render_game_over(frame: &mut Frame, area: Rect, state: &SnakeState) {
        let text = vec![
            Line::from("Game Over").style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Line::from(format!("Final score: {}", state.score())),
            Line::from("Esc or q to quit").style(Style::default().fg(Color::Gray)),
        ];
        let height = (text.len() as u16).min(area.height);
        let message = Rect::new(area.x, area.y + (area.height - height) / 2, area.width, height);
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), message);
    }
}

/// Bounds of a play area drawn into `area`, or `None` if it has no room at all
pub fn surface_bounds(area: Rect) -> Option<Bounds> {
    Bounds::new(
        i32::from(area.width) * UNITS_PER_COLUMN,
        i32::from(area.height) * UNITS_PER_ROW,
    )
}

fn paint(buf: &mut Buffer, area: Rect, pos: Position, symbol: &str, color: Color) {
    if let Some(xy) = cell_for(area, pos) {
        if let Some(cell) = buf.cell_mut(xy) {
            cell.set_symbol(symbol).set_fg(color);
        }
    }
}

/// Terminal cell showing `pos`; row 0 of the play area is its bottom row
fn cell_for(area: Rect, pos: Position) -> Option<(u16, u16)> {
    if pos.x < 0 || pos.y < 0 {
        return None;
    }
    let col = pos.x / UNITS_PER_COLUMN;
    let row = pos.y / UNITS_PER_ROW;
    if col >= i32::from(area.width) || row >= i32::from(area.height) {
        return None;
    }
    Some((area.x + col as u16, area.y + area.height - 1 - row as u16))
}
