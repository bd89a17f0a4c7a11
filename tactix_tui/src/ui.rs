//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tactix::rules::win;
use tactix::{Board, Player, Position, Square};

use crate::app::App;

/// Renders the whole screen: title, board, status bar.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tactix - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board = app.game().board();
    let winning_line = win::winning_line(board).map(|(_, line)| line);
    draw_board(frame, chunks[1], board, app.cursor(), winning_line);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    winning_line: Option<[Position; 3]>,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (chunk, row) in [(rows[0], 0), (rows[2], 1), (rows[4], 2)] {
        draw_row(frame, chunk, board, cursor, winning_line, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    winning_line: Option<[Position; 3]>,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (chunk, col) in [(cols[0], 0), (cols[2], 1), (cols[4], 2)] {
        let pos = Position::from_row_col(row, col).unwrap_or(Position::Center);
        draw_cell(frame, chunk, board, cursor, winning_line, pos);
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    winning_line: Option<[Position; 3]>,
    pos: Position,
) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let in_winning_line = winning_line.is_some_and(|line| line.contains(&pos));
    let style = if in_winning_line {
        base_style.fg(Color::Green)
    } else if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
