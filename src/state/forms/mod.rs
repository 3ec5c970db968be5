//! Form domain layer
//!
//! Type-safe form state for the login and create-account screens.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{
    AgencyChoice, CreateAccountField, CreateAccountForm, FormError, LoginField, LoginForm,
};
