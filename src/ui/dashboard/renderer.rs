//! Dashboard main renderer

use super::components::{footer, header, modal, overview, table, toast};
use super::state::DashboardState;
use crate::view_model::Section;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    match (&state.view.section, &state.view.table) {
        (Section::Overview, _) | (_, None) => {
            overview::render_overview(f, main_chunks[1], state)
        }
        (_, Some(view)) => table::render_table(f, main_chunks[1], view),
    }

    footer::render_footer(f, main_chunks[2], state);

    // Overlays last so they sit on top
    toast::render_toast(f, f.area(), &state.view.notifications);
    if let Some(view) = &state.view.modal {
        modal::render_modal(f, f.area(), view);
    }
}
