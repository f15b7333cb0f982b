//! Overview section
//!
//! Renders the headline stats, session info and the activity log

use super::super::state::DashboardState;
use super::logs::render_logs_panel;
use crate::environment::Environment;
use crate::view_model::LoadState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_overview(f: &mut Frame, area: Rect, state: &DashboardState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(8)])
        .split(columns[0]);

    render_stats_panel(f, left[0], state);
    render_session_panel(f, left[1], state);
    render_logs_panel(f, columns[1], &state.view.activity);
}

fn stat_line(label: &str, value: usize, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn load_state_color(state: LoadState) -> Color {
    match state {
        LoadState::Loaded => Color::Green,
        LoadState::Failed => Color::Red,
        LoadState::Idle | LoadState::Loading => Color::LightYellow,
    }
}

fn render_stats_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let stats = &state.view.stats;
    let lines = vec![
        stat_line("Users", stats.total_users, Color::White),
        stat_line("  Drivers", stats.drivers, Color::Cyan),
        stat_line("  Other", stats.other_users, Color::Cyan),
        Line::from(""),
        stat_line("Shops", stats.total_shops, Color::White),
        stat_line("  Active", stats.active_shops, Color::Green),
        stat_line("  Pending", stats.pending_shops, Color::LightYellow),
        stat_line("  Inactive", stats.inactive_shops, Color::Red),
    ];

    let block = Block::default()
        .title("OVERVIEW")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_session_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let env_color = match state.environment {
        Environment::Production => Color::Green,
        Environment::Staging => Color::LightYellow,
        Environment::Local | Environment::Custom { .. } => Color::Yellow,
    };
    let secs = state.uptime.as_secs();
    let lines = vec![
        Line::from(Span::styled(
            format!("API: {}", state.environment.api_url()),
            Style::default().fg(env_color),
        )),
        Line::from(vec![
            Span::styled("Users: ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.view.users_state.to_string(),
                Style::default().fg(load_state_color(state.view.users_state)),
            ),
            Span::styled("  Shops: ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.view.shops_state.to_string(),
                Style::default().fg(load_state_color(state.view.shops_state)),
            ),
        ]),
        Line::from(Span::styled(
            format!("Open for {}m {}s", secs / 60, secs % 60),
            Style::default().fg(Color::LightGreen),
        )),
    ];

    let block = Block::default()
        .title("SESSION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
