//! Application state definitions

use super::router::{Route, Router};
use super::screen::ScreenState;

/// Address bar input, open while the user types a path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathPrompt {
    pub input: String,
}

impl PathPrompt {
    /// Prompt pre-filled with the current path
    pub fn with_path(path: &str) -> Self {
        Self {
            input: path.to_string(),
        }
    }
}

/// Main application state
///
/// The router owns the current path. The mounted screen owns its form
/// state and is replaced wholesale on every navigation.
#[derive(Debug, Default)]
pub struct AppState {
    pub router: Router,
    pub screen: ScreenState,
    pub path_prompt: Option<PathPrompt>,
    pub status_message: Option<String>,
}

impl AppState {
    /// State opened at `path`
    pub fn new(path: &str) -> Self {
        let router = Router::new(path);
        let screen = ScreenState::mount(router.route());
        Self {
            router,
            screen,
            path_prompt: None,
            status_message: None,
        }
    }

    pub fn current_route(&self) -> Route {
        self.router.route()
    }

    /// Navigate to `path`, mounting a fresh screen
    pub fn navigate(&mut self, path: &str) -> Route {
        let route = self.router.navigate(path);
        self.screen = ScreenState::mount(route);
        self.path_prompt = None;
        route
    }

    pub fn open_path_prompt(&mut self) {
        self.path_prompt = Some(PathPrompt::with_path(self.router.path()));
    }

    pub fn close_path_prompt(&mut self) {
        self.path_prompt = None;
    }

    /// Navigate to whatever the address bar holds
    pub fn submit_path_prompt(&mut self) -> Option<Route> {
        let prompt = self.path_prompt.take()?;
        Some(self.navigate(&prompt.input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{CreateAccountField, LoginField};
    use crate::state::screen::Screen;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_welcome_at_root() {
        let state = AppState::default();
        assert_eq!(state.router.path(), "/");
        assert_eq!(state.current_route(), Route::Welcome);
        assert_eq!(state.screen.route(), Route::Welcome);
    }

    #[test]
    fn test_new_mounts_route_for_start_path() {
        let state = AppState::new("/login");
        assert_eq!(state.current_route(), Route::Login);
        assert!(matches!(state.screen, ScreenState::Login(_)));
    }

    #[test]
    fn test_unknown_start_path_renders_welcome() {
        let state = AppState::new("/missing");
        assert_eq!(state.screen, AppState::new("/").screen);
        assert_eq!(state.router.path(), "/missing");
    }

    #[test]
    fn test_navigate_discards_form_state() {
        let mut state = AppState::new("/create");
        if let ScreenState::CreateAccount(form) = &mut state.screen {
            form.get_mut(CreateAccountField::Name).set_text("Jo");
        }

        state.navigate("/account");
        state.navigate("/");
        state.navigate("/create");

        let ScreenState::CreateAccount(form) = &state.screen else {
            panic!("expected create account form");
        };
        assert_eq!(form.get(CreateAccountField::Name).as_text(), "");
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn test_navigate_to_same_route_remounts() {
        let mut state = AppState::new("/login");
        if let ScreenState::Login(form) = &mut state.screen {
            form.get_mut(LoginField::Email).set_text("a@a.com");
        }
        state.navigate("/login");
        let ScreenState::Login(form) = &state.screen else {
            panic!("expected login form");
        };
        assert!(form.get(LoginField::Email).is_empty());
    }

    #[test]
    fn test_path_prompt_prefills_current_path() {
        let mut state = AppState::new("/login");
        state.open_path_prompt();
        assert_eq!(
            state.path_prompt,
            Some(PathPrompt {
                input: "/login".to_string()
            })
        );
    }

    #[test]
    fn test_submit_path_prompt_navigates_and_closes() {
        let mut state = AppState::default();
        state.open_path_prompt();
        if let Some(prompt) = state.path_prompt.as_mut() {
            prompt.input = "/account".to_string();
        }
        assert_eq!(state.submit_path_prompt(), Some(Route::Account));
        assert!(state.path_prompt.is_none());
        assert_eq!(state.router.path(), "/account");
    }

    #[test]
    fn test_submit_without_prompt_is_noop() {
        let mut state = AppState::default();
        assert_eq!(state.submit_path_prompt(), None);
        assert_eq!(state.current_route(), Route::Welcome);
    }

    #[test]
    fn test_close_path_prompt_keeps_route() {
        let mut state = AppState::new("/create");
        state.open_path_prompt();
        state.close_path_prompt();
        assert!(state.path_prompt.is_none());
        assert_eq!(state.current_route(), Route::CreateAccount);
    }
}
