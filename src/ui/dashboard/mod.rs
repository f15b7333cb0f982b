//! Modular dashboard implementation
//!
//! Every component draws from the projected [`DashboardView`](crate::view_model::DashboardView).

pub mod components;
pub mod renderer;
pub mod state;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::DashboardState;
