//! Dashboard footer component
//!
//! Renders the key bindings available in the current context

use super::super::state::DashboardState;
use crate::view_model::Section;
use crate::view_model::view::ModalView;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn key_hints(state: &DashboardState) -> &'static str {
    match (&state.view.modal, state.view.section) {
        (Some(ModalView::Confirm { .. }), _) => "[Y] Delete | [N] Keep",
        (Some(ModalView::Form { .. }), _) => {
            "[Tab] Next field | [←/→] Change choice | [Enter] Save | [Esc] Cancel"
        }
        (None, Section::Overview) => "[1-4/Tab] Sections | [R] Reload | [Q] Quit",
        (None, Section::Users) => {
            "[1-4/Tab] Sections | [↑/↓] Select | [M] More | [N] New | [E] Edit | [P] Password | [D] Delete | [R] Reload | [Q] Quit"
        }
        (None, Section::Shops) => {
            "[1-4/Tab] Sections | [F] Filter | [M] More | [N] New | [E] Edit | [P] Password | [D] Delete | [R] Reload | [Q] Quit"
        }
        (None, Section::AllUsers) => {
            "[1-4/Tab] Sections | [↑/↓] Select | [N] New | [E] Edit | [P] Password | [D] Delete | [R] Reload | [Q] Quit"
        }
    }
}

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let footer = Paragraph::new(key_hints(state))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
