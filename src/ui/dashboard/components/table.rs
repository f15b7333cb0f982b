//! Section table component
//!
//! Renders the drivers, all-users or shops table with its pagination line

use crate::view_model::view::TableView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table, TableState,
};

pub fn render_table(f: &mut Frame, area: Rect, view: &TableView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .title(view.title.to_uppercase())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if view.rows.is_empty() {
        let empty = Paragraph::new(view.empty_message.as_str())
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, chunks[0]);
    } else {
        let header = Row::new(view.headers.iter().map(|h| Cell::from(*h))).style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        );
        let rows = view
            .rows
            .iter()
            .map(|row| Row::new(row.iter().map(|value| Cell::from(value.as_str()))));
        let widths = vec![Constraint::Fill(1); view.headers.len()];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        let mut table_state = TableState::default().with_selected(view.selected);
        f.render_stateful_widget(table, chunks[0], &mut table_state);
    }

    let mut status = vec![Span::styled(
        format!("Showing {} of {}", view.shown, view.total),
        Style::default().fg(Color::Gray),
    )];
    if view.has_more {
        status.push(Span::styled(
            "  [M] Load more",
            Style::default().fg(Color::LightYellow),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(status)), chunks[1]);
}
