//! Notification toast
//!
//! Live notifications stacked in the top-right corner until they expire

use super::super::utils::get_event_color;
use crate::events::Event;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::Style;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 3;
const MAX_TOASTS: usize = 3;

pub fn render_toast(f: &mut Frame, area: Rect, notifications: &[Event]) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);

    // Newest on top
    for (i, event) in notifications.iter().rev().take(MAX_TOASTS).enumerate() {
        let y = area.y + 1 + i as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        let color = get_event_color(event);
        let toast = Paragraph::new(event.msg.as_str())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(event.source.to_string())
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(Clear, rect);
        f.render_widget(toast, rect);
    }
}
