//! Dashboard logs panel component
//!
//! Renders the activity log, newest first

use super::super::utils::{format_compact_timestamp, get_event_color, get_source_color};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, activity: &[Event]) {
    // Account for borders and padding
    let log_count = (area.height.saturating_sub(3) as usize).max(1);

    let log_lines: Vec<Line> = activity
        .iter()
        .rev()
        .take(log_count)
        .map(|event| {
            let status_icon = match (event.event_type, event.log_level) {
                (EventType::Success, _) => "✅",
                (EventType::Error, LogLevel::Error) => "❌",
                (EventType::Error, _) => "⚠",
                (EventType::Validation, _) => "✋",
                (EventType::Refresh, _) => "↻",
            };

            Line::from(vec![
                Span::raw(format!("{} ", status_icon)),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{} ", event.source),
                    Style::default().fg(get_source_color(event.source)),
                ),
                Span::styled(event.msg.clone(), Style::default().fg(get_event_color(event))),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Nothing yet")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(log_paragraph.block(logs_block).wrap(Wrap { trim: true }), area);
}
