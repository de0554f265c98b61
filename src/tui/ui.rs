//! Stateless rendering for the game screen.

use crate::game::{Player, Position, Square};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position as Point, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::App;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the full screen: title, grid, status line, and the
/// outcome modal when the game has ended.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = screen_chunks(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    for (pos, rect) in cell_rects(chunks[1]) {
        draw_cell(frame, rect, app, pos);
    }

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    if let Some(message) = app.modal() {
        draw_modal(frame, area, message);
    }
}

/// Grid cell under the given screen coordinate, if any. Uses the same
/// layout as [`draw`], so mouse clicks land on the cell they show.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let chunks = screen_chunks(area);
    let point = Point::new(column, row);
    cell_rects(chunks[1])
        .into_iter()
        .find(|(_, rect)| rect.contains(point))
        .map(|(pos, _)| pos)
}

fn screen_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(CELL_HEIGHT * 3),
            Constraint::Length(3),
        ])
        .split(area)
}

fn cell_rects(area: Rect) -> [(Position, Rect); 9] {
    let grid = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    Position::ALL.map(|pos| {
        let x = grid.x + pos.column() as u16 * CELL_WIDTH;
        let y = grid.y + pos.row() as u16 * CELL_HEIGHT;
        (pos, Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT))
    })
}

fn draw_cell(frame: &mut Frame, rect: Rect, app: &App, pos: Position) {
    let (symbol, style) = match app.game().board().get(pos) {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::Nought) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::Cross) => (
            "X",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let border_style = if pos == app.cursor() && app.modal().is_none() {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(cell, rect);
}

fn draw_modal(frame: &mut Frame, area: Rect, message: &str) {
    let popup = center_rect(area, 34, 5);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from(Span::styled(
            message,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "press any key to play again",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game over"));
    frame.render_widget(body, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_hit_testing_matches_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let chunks = screen_chunks(area);
        for (pos, rect) in cell_rects(chunks[1]) {
            // Center of each cell maps back to that cell.
            let column = rect.x + rect.width / 2;
            let row = rect.y + rect.height / 2;
            assert_eq!(cell_at(area, column, row), Some(pos));
        }
    }

    #[test]
    fn test_click_outside_grid_misses() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(cell_at(area, 0, 0), None);
    }
}
