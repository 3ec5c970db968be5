//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{Action, AgencyChoice, AppState, Control, Route};
use crate::ui::{self, HitTarget};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration, read once at startup
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App opened at the configured start path
    pub fn new(config: TuiConfig) -> Self {
        let state = AppState::new(config.start_path());
        tracing::info!(
            path = %state.router.path(),
            route = state.current_route().label(),
            "App started"
        );
        Self {
            state,
            config,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Navigate to a path, mounting a fresh screen
    pub fn navigate(&mut self, path: &str) -> Route {
        self.state.navigate(path)
    }

    /// Press a button. Returns false when the button is disabled.
    ///
    /// Login and account creation are stubs: any input that passes the
    /// presence check is accepted and nothing is sent anywhere.
    pub fn activate(&mut self, action: Action) -> bool {
        if !self.state.screen.screen().is_action_enabled(action) {
            tracing::debug!(action = ?action, "Action disabled, required fields missing");
            return false;
        }

        self.navigate(action.target_path());

        if action.is_submit() {
            tracing::info!(action = ?action, "Form submitted (no backend, accepted)");
            self.state.status_message = Some(format!("{}: accepted offline", action.label()));
        }
        true
    }

    /// Main key handler
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global quit
        if ctrl && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        // Address bar is modal
        if self.state.path_prompt.is_some() {
            self.handle_path_prompt_key(key);
            return;
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        if ctrl {
            match key.code {
                KeyCode::Char('l') => self.state.open_path_prompt(),
                KeyCode::Char('s') => {
                    if let Some(action) = self.state.screen.screen().primary_action() {
                        self.activate(action);
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.state.screen.screen_mut().next_focus();
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.screen.screen_mut().prev_focus();
                return;
            }
            _ => {}
        }

        match self.state.screen.screen().focused_control() {
            Some(Control::Input(_)) => self.handle_input_key(key),
            Some(Control::AgencyChoice) => self.handle_agency_key(key),
            Some(Control::Button(action)) => self.handle_button_key(key, action),
            None => {}
        }
    }

    /// Keys while a text input has focus
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.state.screen.input_char(c)
            }
            KeyCode::Backspace => self.state.screen.backspace(),
            KeyCode::Enter => self.state.screen.screen_mut().next_focus(),
            _ => {}
        }
    }

    /// Keys while the agency radio group has focus
    fn handle_agency_key(&mut self, key: KeyEvent) {
        let screen = self.state.screen.screen_mut();
        match key.code {
            KeyCode::Left | KeyCode::Char('y') | KeyCode::Char('Y') => {
                screen.set_agency(AgencyChoice::Yes)
            }
            KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('N') => {
                screen.set_agency(AgencyChoice::No)
            }
            KeyCode::Char(' ') => {
                if let Some(current) = screen.agency() {
                    screen.set_agency(current.toggle());
                }
            }
            KeyCode::Enter => screen.next_focus(),
            _ => self.handle_shortcut_key(key),
        }
    }

    /// Keys while a button has focus
    fn handle_button_key(&mut self, key: KeyEvent, action: Action) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate(action);
            }
            _ => self.handle_shortcut_key(key),
        }
    }

    /// Single-letter shortcuts, only when no text input has focus
    fn handle_shortcut_key(&mut self, key: KeyEvent) {
        let KeyCode::Char(c) = key.code else {
            return;
        };
        match (self.state.current_route(), c) {
            (_, 'q') => self.quit = true,
            (_, 'g') => self.state.open_path_prompt(),
            (Route::Welcome, 'c') => {
                self.activate(Action::OpenCreateAccount);
            }
            (Route::Welcome, 'l') => {
                self.activate(Action::OpenLogin);
            }
            (Route::Account, 'b') => {
                self.activate(Action::BackToWelcome);
            }
            _ => {}
        }
    }

    /// Keys while the address bar is open
    fn handle_path_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.close_path_prompt(),
            KeyCode::Enter => {
                self.state.submit_path_prompt();
            }
            KeyCode::Backspace => {
                if let Some(prompt) = self.state.path_prompt.as_mut() {
                    prompt.input.pop();
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(prompt) = self.state.path_prompt.as_mut() {
                    prompt.input.push(c);
                }
            }
            _ => {}
        }
    }

    /// Main mouse handler: a left click focuses a control and presses buttons
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        if self.state.path_prompt.is_some() {
            return;
        }

        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        let area = Rect::new(0, 0, width, height);

        match ui::hit_test(area, &self.state, mouse.column, mouse.row) {
            Some(HitTarget::Focus(index)) => {
                let screen = self.state.screen.screen_mut();
                screen.set_focus(index);
                if let Some(Control::Button(action)) = screen.focused_control() {
                    self.activate(action);
                }
            }
            Some(HitTarget::Agency(index, choice)) => {
                let screen = self.state.screen.screen_mut();
                screen.set_focus(index);
                screen.set_agency(choice);
            }
            None => {}
        }
    }
}
