//! Login and create-account form state
//!
//! Each form is a plain value. Text updates are keyed by field name, so a
//! keystroke and a programmatic update take the same path.

use super::field::FormField;
use crate::state::screen::{Action, Control, Screen};
use std::str::FromStr;

/// Errors from name-keyed form updates
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// Answer to "Are you an Agency?"
///
/// A single value rather than two flags, so exactly one option is always
/// selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgencyChoice {
    #[default]
    Yes,
    No,
}

impl AgencyChoice {
    pub const ALL: [AgencyChoice; 2] = [AgencyChoice::Yes, AgencyChoice::No];

    pub fn toggle(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl FromStr for AgencyChoice {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            _ => Err(FormError::InvalidValue {
                field: "agency",
                value: s.to_string(),
            }),
        }
    }
}

// Login Form

/// Field names on the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub const ALL: [LoginField; 2] = [Self::Email, Self::Password];

    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl FromStr for LoginField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
}

const LOGIN_CONTROLS: &[Control] = &[
    Control::Input(0),
    Control::Input(1),
    Control::Button(Action::Login),
];

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email Address", "Enter email address"),
            password: FormField::text("password", "Password", "Enter password").masked(),
            active_field_index: 0,
        }
    }

    pub fn get(&self, field: LoginField) -> &FormField {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    pub fn get_mut(&mut self, field: LoginField) -> &mut FormField {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    /// Set a field by its string name
    pub fn set_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = name.parse::<LoginField>()?;
        self.get_mut(field).set_text(value);
        Ok(())
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for LoginForm {
    fn controls(&self) -> &'static [Control] {
        LOGIN_CONTROLS
    }
    fn focus(&self) -> usize {
        self.active_field_index
    }
    fn set_focus(&mut self, index: usize) {
        self.active_field_index = index.min(LOGIN_CONTROLS.len() - 1);
    }
    fn field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            _ => None,
        }
    }
    fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError> {
        self.set_by_name(name, value)
    }
    fn is_valid(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

// Create Account Form

/// Field names on the create-account form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateAccountField {
    Name,
    Phone,
    Email,
    Password,
    Company,
}

impl CreateAccountField {
    pub const ALL: [CreateAccountField; 5] = [
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::Password,
        Self::Company,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Password => "password",
            Self::Company => "company",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Phone => 1,
            Self::Email => 2,
            Self::Password => 3,
            Self::Company => 4,
        }
    }
}

impl FromStr for CreateAccountField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountForm {
    /// name, phone, email, password, company
    pub fields: [FormField; 5],
    pub agency: AgencyChoice,
    pub active_field_index: usize,
}

const CREATE_ACCOUNT_CONTROLS: &[Control] = &[
    Control::Input(0),
    Control::Input(1),
    Control::Input(2),
    Control::Input(3),
    Control::Input(4),
    Control::AgencyChoice,
    Control::Button(Action::CreateAccount),
];

impl CreateAccountForm {
    pub fn new() -> Self {
        const PLACEHOLDER: &str = "Marry Doe";
        Self {
            fields: [
                FormField::text("name", "Full Name", PLACEHOLDER).required(),
                FormField::text("phone", "Phone number", PLACEHOLDER).required(),
                FormField::text("email", "Email address", PLACEHOLDER).required(),
                FormField::text("password", "Password", PLACEHOLDER)
                    .required()
                    .masked(),
                FormField::text("company", "Company name", PLACEHOLDER),
            ],
            agency: AgencyChoice::default(),
            active_field_index: 0,
        }
    }

    pub fn get(&self, field: CreateAccountField) -> &FormField {
        &self.fields[field.index()]
    }

    pub fn get_mut(&mut self, field: CreateAccountField) -> &mut FormField {
        &mut self.fields[field.index()]
    }

    /// Set a field by its string name; "agency" takes "yes" or "no"
    pub fn set_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let value: String = value.into();
        if name == "agency" {
            self.agency = value.parse()?;
            return Ok(());
        }
        let field = name.parse::<CreateAccountField>()?;
        self.get_mut(field).set_text(value);
        Ok(())
    }
}

impl Default for CreateAccountForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for CreateAccountForm {
    fn controls(&self) -> &'static [Control] {
        CREATE_ACCOUNT_CONTROLS
    }
    fn focus(&self) -> usize {
        self.active_field_index
    }
    fn set_focus(&mut self, index: usize) {
        self.active_field_index = index.min(CREATE_ACCOUNT_CONTROLS.len() - 1);
    }
    fn field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
    fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError> {
        self.set_by_name(name, value)
    }
    fn is_valid(&self) -> bool {
        // company is optional and the agency answer never blocks
        self.fields.iter().all(FormField::is_satisfied)
    }
    fn agency(&self) -> Option<AgencyChoice> {
        Some(self.agency)
    }
    fn set_agency(&mut self, choice: AgencyChoice) {
        self.agency = choice;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod agency_choice {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_yes() {
            assert_eq!(AgencyChoice::default(), AgencyChoice::Yes);
            assert_eq!(CreateAccountForm::new().agency, AgencyChoice::Yes);
        }

        #[test]
        fn test_toggle_flips() {
            assert_eq!(AgencyChoice::Yes.toggle(), AgencyChoice::No);
            assert_eq!(AgencyChoice::No.toggle(), AgencyChoice::Yes);
        }

        #[test]
        fn test_selection_sequence_keeps_one_selected() {
            let mut form = CreateAccountForm::new();
            for choice in [
                AgencyChoice::No,
                AgencyChoice::Yes,
                AgencyChoice::Yes,
                AgencyChoice::No,
            ] {
                form.set_agency(choice);
                let selected: Vec<_> = AgencyChoice::ALL
                    .into_iter()
                    .filter(|c| Some(*c) == form.agency())
                    .collect();
                assert_eq!(selected, vec![choice]);
            }
        }

        #[test]
        fn test_parse() {
            assert_eq!("yes".parse::<AgencyChoice>(), Ok(AgencyChoice::Yes));
            assert_eq!("No".parse::<AgencyChoice>(), Ok(AgencyChoice::No));
            assert_eq!(
                "maybe".parse::<AgencyChoice>(),
                Err(FormError::InvalidValue {
                    field: "agency",
                    value: "maybe".to_string(),
                })
            );
            assert_eq!(
                "maybe".parse::<AgencyChoice>().unwrap_err().to_string(),
                "invalid value for agency: maybe"
            );
        }
    }

    mod login_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = LoginForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.password.as_text(), "");
            assert!(form.password.masked);
            assert!(!form.email.masked);
        }

        #[test]
        fn test_valid_iff_both_fields_present() {
            for (email, password, expected) in [
                ("", "", false),
                ("a@a.com", "", false),
                ("", "secret", false),
                ("a@a.com", "secret", true),
                ("not-an-email", "x", true),
            ] {
                let mut form = LoginForm::new();
                form.get_mut(LoginField::Email).set_text(email);
                form.get_mut(LoginField::Password).set_text(password);
                assert_eq!(form.is_valid(), expected, "email={email:?} password={password:?}");
                assert_eq!(form.is_action_enabled(Action::Login), expected);
            }
        }

        #[test]
        fn test_set_by_name() {
            let mut form = LoginForm::new();
            form.set_by_name("email", "a@a.com").unwrap();
            form.set_by_name("password", "x").unwrap();
            assert!(form.is_valid());
            assert_eq!(
                form.set_by_name("company", "Acme"),
                Err(FormError::UnknownField("company".to_string()))
            );
        }

        #[test]
        fn test_field_names_parse() {
            for field in LoginField::ALL {
                assert_eq!(field.name().parse::<LoginField>(), Ok(field));
                assert_eq!(LoginForm::new().get(field).name, field.name());
            }
        }

        #[test]
        fn test_focus_cycles_through_button() {
            let mut form = LoginForm::new();
            form.next_focus();
            form.next_focus();
            assert_eq!(form.focused_control(), Some(Control::Button(Action::Login)));
            form.next_focus();
            assert_eq!(form.focused_control(), Some(Control::Input(0)));
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = LoginForm::new();
            assert_eq!(form.field(0).unwrap().name, "email");
            assert_eq!(form.field(1).unwrap().name, "password");
            assert!(form.field(2).is_none());
        }
    }

    mod create_account_form {
        use super::*;
        use pretty_assertions::assert_eq;

        fn filled() -> CreateAccountForm {
            let mut form = CreateAccountForm::new();
            form.get_mut(CreateAccountField::Name).set_text("Jo");
            form.get_mut(CreateAccountField::Phone).set_text("1");
            form.get_mut(CreateAccountField::Email).set_text("a@a.com");
            form.get_mut(CreateAccountField::Password).set_text("x");
            form
        }

        #[test]
        fn test_new_has_correct_defaults() {
            let form = CreateAccountForm::new();
            assert_eq!(form.active_field_index, 0);
            assert!(form.fields.iter().all(FormField::is_empty));
            assert!(form.fields.iter().all(|f| f.placeholder == "Marry Doe"));
            assert!(!form.is_valid());
        }

        #[test]
        fn test_valid_iff_required_fields_present() {
            // every subset of the four required fields
            for mask in 0u8..16 {
                let mut form = CreateAccountForm::new();
                for (bit, field) in CreateAccountField::ALL[..4].iter().enumerate() {
                    if mask & (1 << bit) != 0 {
                        form.get_mut(*field).set_text("v");
                    }
                }
                assert_eq!(form.is_valid(), mask == 0b1111, "mask={mask:04b}");
            }
        }

        #[test]
        fn test_company_and_agency_never_block() {
            for agency in AgencyChoice::ALL {
                for company in ["", "Acme"] {
                    let mut form = filled();
                    form.get_mut(CreateAccountField::Company).set_text(company);
                    form.set_agency(agency);
                    assert!(form.is_valid());
                    assert!(form.is_action_enabled(Action::CreateAccount));
                }
            }
        }

        #[test]
        fn test_company_and_agency_do_not_make_form_valid() {
            let mut form = CreateAccountForm::new();
            form.get_mut(CreateAccountField::Company).set_text("Acme");
            form.set_agency(AgencyChoice::No);
            assert!(!form.is_valid());
        }

        #[test]
        fn test_set_by_name() {
            let mut form = CreateAccountForm::new();
            for (name, value) in [
                ("name", "Jo"),
                ("phone", "1"),
                ("email", "a@a.com"),
                ("password", "x"),
                ("agency", "no"),
            ] {
                form.set_by_name(name, value).unwrap();
            }
            assert!(form.is_valid());
            assert_eq!(form.agency, AgencyChoice::No);
            assert!(form.set_by_name("nickname", "J").is_err());
            assert!(matches!(
                form.set_by_name("agency", "maybe"),
                Err(FormError::InvalidValue { field: "agency", .. })
            ));
            assert_eq!(form.agency, AgencyChoice::No);
        }

        #[test]
        fn test_field_names_parse() {
            for field in CreateAccountField::ALL {
                assert_eq!(field.name().parse::<CreateAccountField>(), Ok(field));
                assert_eq!(filled().get(field).name, field.name());
            }
        }

        #[test]
        fn test_controls_order() {
            let mut form = CreateAccountForm::new();
            form.set_focus(5);
            assert_eq!(form.focused_control(), Some(Control::AgencyChoice));
            form.next_focus();
            assert_eq!(
                form.focused_control(),
                Some(Control::Button(Action::CreateAccount))
            );
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = CreateAccountForm::new();
            form.set_focus(100);
            assert_eq!(form.active_field_index, 6);
        }

        #[test]
        fn test_only_password_is_masked() {
            let form = CreateAccountForm::new();
            let masked: Vec<_> = form
                .fields
                .iter()
                .filter(|f| f.masked)
                .map(|f| f.name)
                .collect();
            assert_eq!(masked, vec!["password"]);
        }
    }
}
