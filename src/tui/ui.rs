//! Stateless rendering of the board and status bar.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;
use tictactoe_ai::{Cell, Phase, Player, Position};

/// Splits the screen into title, board, status and help rows.
fn screen_layout(area: Rect) -> [Rect; 4] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .areas(area)
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let [title_area, board_area, status_area, help_area] = screen_layout(frame.area());

    let title = Paragraph::new("Tic Tac Toe vs. Computer")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    draw_board(frame, board_area, app);
    draw_status(frame, status_area, app, now);

    let help = Paragraph::new("arrows/1-9 + Enter or click: move   r: restart   q/Esc: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}

/// Maps a terminal coordinate to the `(row, col)` of the cell drawn there.
pub fn cell_at(screen: Rect, column: u16, row: u16) -> Option<(usize, usize)> {
    let [_, board_area, _, _] = screen_layout(screen);
    let point = ratatui::layout::Position::new(column, row);
    cell_rects(board_area)
        .into_iter()
        .find(|(_, rect)| rect.contains(point))
        .map(|(pos, _)| (pos.row(), pos.col()))
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let phase = app.coordinator().phase();
    let color = match phase {
        Phase::AwaitingHuman => Color::Green,
        Phase::AwaitingComputer => Color::Yellow,
        Phase::Terminal(_) => Color::Magenta,
    };

    let mut spans = vec![Span::styled(
        app.coordinator().status_line(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if let Some(remaining) = app.idle_remaining(now) {
        spans.push(Span::styled(
            format!("   computer moves in {}s", remaining.as_secs() + 1),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(cue) = app.bell().last() {
        spans.push(Span::styled(
            format!("   [{}]", cue),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen rectangles of the nine cells, row-major.
fn cell_rects(area: Rect) -> Vec<(Position, Rect)> {
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    Position::ALL
        .into_iter()
        .map(|pos| {
            let x = board.x + pos.col() as u16 * (CELL_WIDTH + 1);
            let y = board.y + pos.row() as u16 * (CELL_HEIGHT + 1);
            (pos, Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(area))
        })
        .collect()
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let grid = Style::default().fg(Color::DarkGray);

    for i in 1..3u16 {
        let y = board.y + i * (CELL_HEIGHT + 1) - 1;
        let line = Rect::new(board.x, y, board.width, 1).intersection(area);
        frame.render_widget(Paragraph::new("─".repeat(line.width as usize)).style(grid), line);

        let x = board.x + i * (CELL_WIDTH + 1) - 1;
        let bar = Rect::new(x, board.y, 1, board.height).intersection(area);
        frame.render_widget(Paragraph::new("│\n".repeat(bar.height as usize)).style(grid), bar);
    }

    for (pos, rect) in cell_rects(area) {
        draw_cell(frame, rect, app, pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let label = (pos.to_index() + 1).to_string();
    let (symbol, base_style) = match app.coordinator().session().board().get(pos) {
        Cell::Empty => (label, Style::default().fg(Color::DarkGray)),
        Cell::Occupied(player @ Player::Human) => (
            player.symbol().to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(player @ Player::Computer) => (
            player.symbol().to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == app.cursor() && !app.coordinator().phase().is_terminal() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the 3-line cell.
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_maps_to_cell() {
        let screen = Rect::new(0, 0, 80, 24);
        // Board is centred: top-left cell starts at (21, 6), cells are 12x3 with 1-wide rules.
        assert_eq!(cell_at(screen, 21, 6), Some((0, 0)));
        assert_eq!(cell_at(screen, 40, 11), Some((1, 1)));
        assert_eq!(cell_at(screen, 58, 16), Some((2, 2)));
    }

    #[test]
    fn test_click_outside_board() {
        let screen = Rect::new(0, 0, 80, 24);
        assert_eq!(cell_at(screen, 0, 0), None);
        // Vertical rule between the first two columns.
        assert_eq!(cell_at(screen, 33, 7), None);
    }
}
