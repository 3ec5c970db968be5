//! PopX TUI - onboarding screens in the terminal
//!
//! Four screens (welcome, login, create account, account settings) drawn
//! inside a fixed phone-sized frame, with path-based navigation between
//! them. Login and sign-up accept any input that passes a presence check;
//! nothing is sent anywhere and nothing is persisted.

pub mod app;
pub mod config;
pub mod error;
pub mod state;
pub mod ui;

pub use error::{AppError, Result};
