//! Stateless UI rendering for time-travel tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use timetravel_tictactoe::{Player, Position, RenderView};

use crate::app::{App, Focus};

/// Renders the whole screen from the application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.game().view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board and move list
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe - Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(30)])
        .split(chunks[1]);

    let cursor = (*app.focus() == Focus::Board).then_some(*app.cursor());
    draw_board(frame, body[0], &view, cursor, *app.highlight_winning_line());
    draw_moves(frame, body[1], &view, app);

    let status = match app.message() {
        Some(message) => format!("{}  ({})", view.status(), message),
        None => view.status().clone(),
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(
        "arrows/1-9: move  enter: place/jump  tab: board/history  r: restart  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    view: &RenderView,
    cursor: Option<Position>,
    highlight: bool,
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

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, view, cursor, highlight, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    view: &RenderView,
    cursor: Option<Position>,
    highlight: bool,
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

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        draw_cell(frame, chunk, view, cursor, highlight, row * 3 + col);
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    view: &RenderView,
    cursor: Option<Position>,
    highlight: bool,
    index: usize,
) {
    let (symbol, mut style) = match view.cells()[index] {
        None => (format!("{}", index + 1), Style::default().fg(Color::DarkGray)),
        Some(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if highlight && view.is_highlighted(index) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if *view.last_move() == Some(index) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if cursor.map(Position::to_index) == Some(index) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center the mark in the three-line cell.
    let text = vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &RenderView, app: &App) {
    let browsing = *app.focus() == Focus::History;

    let lines: Vec<Line> = view
        .moves()
        .iter()
        .map(|entry| {
            let marker = if browsing && entry.step() == app.history_selection() {
                "> "
            } else {
                "  "
            };
            let style = if *entry.selected() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{}. {}", entry.step() + 1, entry.description()), style),
            ])
        })
        .collect();

    let border_style = if browsing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = Paragraph::new(lines).block(
        Block::default()
            .title("Moves")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(list, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
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
