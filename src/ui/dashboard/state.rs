//! Dashboard frame state
//!
//! The projected view plus the session details drawn around it.

use crate::environment::Environment;
use crate::ui::app::UIConfig;
use crate::view_model::{DashboardView, DashboardViewModel};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct DashboardState {
    /// What to draw, projected from the view-model for this frame.
    pub view: DashboardView,
    /// The environment the session talks to.
    pub environment: Environment,
    /// How long the dashboard has been open.
    pub uptime: Duration,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Label of the request in flight, if any.
    pub busy: Option<&'static str>,
}

impl DashboardState {
    pub fn new(
        view_model: &DashboardViewModel,
        environment: &Environment,
        start_time: Instant,
        ui_config: &UIConfig,
        busy: Option<&'static str>,
        now: Instant,
    ) -> Self {
        Self {
            view: DashboardView::project(view_model, now),
            environment: environment.clone(),
            uptime: now.saturating_duration_since(start_time),
            with_background_color: ui_config.with_background_color,
            busy,
        }
    }
}
