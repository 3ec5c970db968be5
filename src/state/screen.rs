//! Per-screen state and the focus model shared by every screen

use super::forms::{AgencyChoice, CreateAccountForm, FormError, FormField, LoginForm};
use super::router::Route;

/// What a button does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Welcome: "Create Account"
    OpenCreateAccount,
    /// Welcome: "Already Registered? Login"
    OpenLogin,
    /// Login form submit
    Login,
    /// Create account form submit
    CreateAccount,
    /// Account: "Back to Welcome"
    BackToWelcome,
}

/// Visual weight of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Secondary,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Self::OpenCreateAccount => "Create Account",
            Self::OpenLogin => "Already Registered? Login",
            Self::Login => "Login",
            Self::CreateAccount => "Create Account",
            Self::BackToWelcome => "Back to Welcome",
        }
    }

    pub fn kind(self) -> ButtonKind {
        match self {
            Self::OpenLogin | Self::BackToWelcome => ButtonKind::Secondary,
            _ => ButtonKind::Primary,
        }
    }

    /// Path navigated to when the action fires
    pub fn target_path(self) -> &'static str {
        match self {
            Self::OpenCreateAccount => Route::CreateAccount.path(),
            Self::OpenLogin => Route::Login.path(),
            Self::Login | Self::CreateAccount => Route::Account.path(),
            Self::BackToWelcome => Route::Welcome.path(),
        }
    }

    /// Form submits stand in for a backend call that does not exist
    pub fn is_submit(self) -> bool {
        matches!(self, Self::Login | Self::CreateAccount)
    }
}

/// A focusable control on a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Text input, indexed into the screen's fields
    Input(usize),
    /// The yes/no agency radio group
    AgencyChoice,
    Button(Action),
}

/// Common focus and input handling for a mounted screen
pub trait Screen {
    /// Focus order of the screen's controls
    fn controls(&self) -> &'static [Control];
    fn focus(&self) -> usize;
    fn set_focus(&mut self, index: usize);

    fn next_focus(&mut self) {
        let count = self.controls().len();
        if count > 0 {
            self.set_focus((self.focus() + 1) % count);
        }
    }

    fn prev_focus(&mut self) {
        let count = self.controls().len();
        if count == 0 {
            return;
        }
        let current = self.focus();
        if current == 0 {
            self.set_focus(count - 1);
        } else {
            self.set_focus(current - 1);
        }
    }

    fn focused_control(&self) -> Option<Control> {
        self.controls().get(self.focus()).copied()
    }

    fn field(&self, _index: usize) -> Option<&FormField> {
        None
    }

    /// Replace a field's value by name
    fn set_field(&mut self, name: &str, _value: String) -> Result<(), FormError> {
        Err(FormError::UnknownField(name.to_string()))
    }

    /// All required fields are present
    fn is_valid(&self) -> bool {
        true
    }

    fn agency(&self) -> Option<AgencyChoice> {
        None
    }

    fn set_agency(&mut self, _choice: AgencyChoice) {}

    /// Whether a button can be pressed right now
    fn is_action_enabled(&self, action: Action) -> bool {
        !action.is_submit() || self.is_valid()
    }

    /// The submit action, for screens that have one
    fn primary_action(&self) -> Option<Action> {
        self.controls().iter().find_map(|c| match c {
            Control::Button(action) if action.is_submit() => Some(*action),
            _ => None,
        })
    }
}

/// Welcome screen: two navigation buttons
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WelcomeState {
    pub focus: usize,
}

const WELCOME_CONTROLS: &[Control] = &[
    Control::Button(Action::OpenCreateAccount),
    Control::Button(Action::OpenLogin),
];

impl Screen for WelcomeState {
    fn controls(&self) -> &'static [Control] {
        WELCOME_CONTROLS
    }
    fn focus(&self) -> usize {
        self.focus
    }
    fn set_focus(&mut self, index: usize) {
        self.focus = index.min(WELCOME_CONTROLS.len() - 1);
    }
}

/// Placeholder profile shown on the account screen.
///
/// Nothing entered on the login or sign-up forms reaches this screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub initials: &'static str,
    pub verified: bool,
    pub bio: &'static str,
}

pub const PLACEHOLDER_PROFILE: AccountProfile = AccountProfile {
    name: "Marry Doe",
    email: "Marry@gmail.Com",
    initials: "MD",
    verified: true,
    bio: "Lorem Ipsum Dolor Sit Amet, Consetetur Sadipscing Elitr, Sed Diam Nonumy \
          Eirmod Tempor Invidunt Ut Labore Et Dolore Magna Aliquyam Erat, Sed Diam",
};

/// Account settings screen: read-only profile plus a back button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountState {
    pub profile: AccountProfile,
    pub focus: usize,
}

const ACCOUNT_CONTROLS: &[Control] = &[Control::Button(Action::BackToWelcome)];

impl Default for AccountState {
    fn default() -> Self {
        Self {
            profile: PLACEHOLDER_PROFILE,
            focus: 0,
        }
    }
}

impl Screen for AccountState {
    fn controls(&self) -> &'static [Control] {
        ACCOUNT_CONTROLS
    }
    fn focus(&self) -> usize {
        self.focus
    }
    fn set_focus(&mut self, index: usize) {
        self.focus = index.min(ACCOUNT_CONTROLS.len() - 1);
    }
}

/// State of the mounted screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    Welcome(WelcomeState),
    Login(LoginForm),
    CreateAccount(CreateAccountForm),
    Account(AccountState),
}

impl ScreenState {
    /// Fresh state for a route; nothing carries over from the previous screen
    pub fn mount(route: Route) -> Self {
        match route {
            Route::Welcome => Self::Welcome(WelcomeState::default()),
            Route::Login => Self::Login(LoginForm::new()),
            Route::CreateAccount => Self::CreateAccount(CreateAccountForm::new()),
            Route::Account => Self::Account(AccountState::default()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Self::Welcome(_) => Route::Welcome,
            Self::Login(_) => Route::Login,
            Self::CreateAccount(_) => Route::CreateAccount,
            Self::Account(_) => Route::Account,
        }
    }

    pub fn screen(&self) -> &dyn Screen {
        match self {
            Self::Welcome(s) => s,
            Self::Login(f) => f,
            Self::CreateAccount(f) => f,
            Self::Account(s) => s,
        }
    }

    pub fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Welcome(s) => s,
            Self::Login(f) => f,
            Self::CreateAccount(f) => f,
            Self::Account(s) => s,
        }
    }

    /// True when the focused control accepts typed characters
    pub fn is_text_input_focused(&self) -> bool {
        matches!(self.screen().focused_control(), Some(Control::Input(_)))
    }

    /// Append a typed character to the focused input
    pub fn input_char(&mut self, c: char) {
        self.edit_focused(|value| value.push(c));
    }

    /// Remove the last character of the focused input
    pub fn backspace(&mut self) {
        self.edit_focused(|value| {
            value.pop();
        });
    }

    /// Apply `edit` to the focused input and store the result by field name
    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(Control::Input(index)) = self.screen().focused_control() else {
            return;
        };
        let Some(field) = self.screen().field(index) else {
            return;
        };
        let name = field.name;
        let mut value = field.value.clone();
        edit(&mut value);

        if let Err(err) = self.screen_mut().set_field(name, value) {
            tracing::warn!(error = %err, "Dropped input for focused field");
        }
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::mount(Route::default())
    }
}
