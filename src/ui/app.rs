//! Main application state and UI loop
//!
//! Maps key presses to named view-model operations and runs the remote ones
//! between frames.

use crate::api::AdminApi;
use crate::consts::cli_consts::{SPLASH_SECS, UI_TICK_MS};
use crate::environment::Environment;
use crate::events::{Event as DashboardEvent, Source};
use crate::logging::LogLevel;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::view_model::{DashboardViewModel, Modal, OperationError, PageKind, Section};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Sections, tables and modals.
    Dashboard,
}

/// Work a key press asks for that needs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Reload,
    SubmitModal,
    ConfirmDelete,
}

impl Action {
    /// Shown in the header while the request is in flight.
    fn busy_label(&self) -> &'static str {
        match self {
            Action::Quit => "",
            Action::Reload => "Loading users and shops...",
            Action::SubmitModal => "Saving...",
            Action::ConfirmDelete => "Deleting...",
        }
    }
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment the API client talks to.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// All dashboard state. Only changed through its operations.
    view_model: DashboardViewModel,

    api: Box<dyn AdminApi>,

    ui_config: UIConfig,

    /// Set while a request is in flight.
    busy: Option<&'static str>,

    /// Remote work queued by the last key press.
    pending: Option<Action>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(environment: Environment, api: Box<dyn AdminApi>, ui_config: UIConfig) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            view_model: DashboardViewModel::new(),
            api,
            ui_config,
            busy: None,
            pending: None,
        }
    }

    #[cfg(test)]
    pub fn view_model(&self) -> &DashboardViewModel {
        &self.view_model
    }

    #[cfg(test)]
    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    /// Leaves the splash screen and queues the initial load.
    fn enter_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard;
        self.pending = Some(Action::Reload);
    }

    fn dashboard_state(&self, now: Instant) -> DashboardState {
        DashboardState::new(
            &self.view_model,
            &self.environment,
            self.start_time,
            &self.ui_config,
            self.busy,
            now,
        )
    }

    /// Applies a key press. Local changes happen here; remote work is returned.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.current_screen == Screen::Splash {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                return Some(Action::Quit);
            }
            // Any other key skips the splash screen
            self.enter_dashboard();
            return None;
        }

        match self.view_model.modal() {
            Some(Modal::ConfirmDelete(_)) => self.handle_confirm_key(key),
            Some(_) => self.handle_form_key(key),
            None => self.handle_main_key(key),
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(Action::ConfirmDelete)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.view_model.cancel_modal();
                None
            }
            _ => None,
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Esc {
            self.view_model.cancel_modal();
            return None;
        }
        if key.code == KeyCode::Enter {
            return Some(Action::SubmitModal);
        }
        let form = self.view_model.modal_form_mut()?;
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Left => form.cycle_choice(false),
            KeyCode::Right => form.cycle_choice(true),
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Char(c) => form.push_char(c),
            _ => {}
        }
        None
    }

    fn handle_main_key(&mut self, key: KeyEvent) -> Option<Action> {
        let vm = &mut self.view_model;
        let section = vm.current_section();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('r') => return Some(Action::Reload),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                vm.navigate(Section::ALL[index]);
            }
            KeyCode::Tab => vm.navigate(section.next()),
            KeyCode::Char('f') => {
                let next = vm.shop_filter().next();
                vm.set_shop_filter(next);
            }
            KeyCode::Char('m') => match section {
                Section::Users => vm.load_more(PageKind::Drivers),
                Section::Shops => vm.load_more(PageKind::Shops),
                Section::Overview | Section::AllUsers => {}
            },
            KeyCode::Down | KeyCode::Char('j') => vm.select_next(),
            KeyCode::Up | KeyCode::Char('k') => vm.select_prev(),
            KeyCode::Char('n') => match section {
                Section::Shops => vm.open_create_shop(),
                Section::Users | Section::AllUsers => vm.open_create_user(),
                Section::Overview => {}
            },
            KeyCode::Char(c @ ('e' | 'p' | 'd')) => {
                if let Err(e) = self.act_on_selection(c) {
                    self.view_model.notify(DashboardEvent::error(
                        Source::Session,
                        e.to_string(),
                        LogLevel::Warn,
                    ));
                }
            }
            _ => {}
        }
        None
    }

    /// Opens the edit, password or delete modal for the highlighted row.
    fn act_on_selection(&mut self, key: char) -> Result<(), OperationError> {
        let vm = &mut self.view_model;
        if let Some(id) = vm.selected_user().map(|user| user.id.clone()) {
            return match key {
                'e' => vm.open_edit_user(&id),
                'p' => vm.open_user_password(&id),
                _ => vm.request_delete_user(&id),
            };
        }
        if let Some(id) = vm.selected_shop().map(|shop| shop.id.clone()) {
            return match key {
                'e' => vm.open_edit_shop(&id),
                'p' => vm.open_shop_password(&id),
                _ => vm.request_delete_shop(&id),
            };
        }
        Ok(())
    }

    /// Runs queued remote work. Failures are already on screen as notifications.
    pub async fn perform(&mut self, action: Action) {
        let api = self.api.as_ref();
        let result = match action {
            Action::Quit => return,
            Action::Reload => self.view_model.load_all(api).await.map_err(|e| e.to_string()),
            Action::SubmitModal => self
                .view_model
                .submit_modal(api)
                .await
                .map_err(|e| e.to_string()),
            Action::ConfirmDelete => self
                .view_model
                .confirm_delete(api)
                .await
                .map_err(|e| e.to_string()),
        };
        if let Err(e) = result {
            log::debug!("{:?} failed: {}", action, e);
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(SPLASH_SECS);

    // UI event loop
    loop {
        let now = Instant::now();
        app.view_model.prune_notifications(now);

        if let Some(action) = app.pending.take() {
            if action == Action::Quit {
                return Ok(());
            }
            // Show what is happening before blocking on the request
            app.busy = Some(action.busy_label());
            terminal.draw(|f| render(f, &app, now))?;
            app.perform(action).await;
            app.busy = None;
            continue;
        }

        terminal.draw(|f| render(f, &app, now))?;

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.enter_dashboard();
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(UI_TICK_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                app.pending = app.handle_key(key);
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App, now: Instant) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, &app.dashboard_state(now)),
    }
}
