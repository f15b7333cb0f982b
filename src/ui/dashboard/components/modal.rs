//! Modal overlay
//!
//! Renders the open form or delete confirmation over the dashboard

use super::super::utils::centered_rect;
use crate::view_model::view::ModalView;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

const LABEL_WIDTH: usize = 16;

pub fn render_modal(f: &mut Frame, area: Rect, view: &ModalView) {
    let (title, lines, border) = match view {
        ModalView::Confirm { title, question } => (
            *title,
            vec![Line::from(Span::styled(
                question.as_str(),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ))],
            Color::LightRed,
        ),
        ModalView::Form { title, fields } => {
            let lines: Vec<Line> = fields
                .iter()
                .map(|field| {
                    let marker = if field.focused { "> " } else { "  " };
                    let value = if field.choice {
                        format!("< {} >", field.value)
                    } else if field.focused {
                        format!("{}_", field.value)
                    } else {
                        field.value.clone()
                    };
                    let style = if field.focused {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Line::from(vec![
                        Span::styled(
                            format!("{}{:<width$}", marker, field.label, width = LABEL_WIDTH),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::styled(value, style),
                    ])
                })
                .collect();
            (*title, lines, Color::Cyan)
        }
    };

    let height = lines.len() as u16 + 4;
    let rect = centered_rect(area, 64, height);
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title.to_uppercase())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .padding(Padding::uniform(1)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(paragraph, rect);
}
