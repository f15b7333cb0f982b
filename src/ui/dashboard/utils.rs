//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::{Event, EventType, Source};
use crate::logging::LogLevel;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::prelude::Color;

/// Get a ratatui color for the part of the dashboard an event is about
pub fn get_source_color(source: Source) -> Color {
    match source {
        Source::Users => Color::Cyan,
        Source::Shops => Color::Yellow,
        Source::Session => Color::LightBlue,
    }
}

/// Color of a notification: failures by severity, the rest by outcome.
pub fn get_event_color(event: &Event) -> Color {
    match (event.event_type, event.log_level) {
        (EventType::Success, _) => Color::Green,
        (EventType::Validation, _) => Color::LightYellow,
        (EventType::Error, LogLevel::Error) => Color::Red,
        (EventType::Error, _) => Color::LightRed,
        (EventType::Refresh, _) => Color::Gray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// A `width` x `height` rectangle centered in `area`, clamped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_keeps_month_day_and_minutes() {
        assert_eq!(format_compact_timestamp("2024-03-01 10:42:17"), "03-01 10:42");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn centered_rect_is_clamped_to_the_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(area, 80, 40), area);
    }
}
