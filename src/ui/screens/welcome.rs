//! Welcome screen

use super::{body, heading};
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

const TITLE: &str = "Welcome to PopX";
const BODY: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

pub struct WelcomeLayout {
    pub title: Rect,
    pub body: Rect,
    /// "Create Account", "Already Registered? Login"
    pub controls: Vec<Rect>,
}

/// Copy and buttons sit at the bottom of the frame
pub fn layout(inner: Rect) -> WelcomeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Spacer
            Constraint::Length(1),             // Title
            Constraint::Length(1),             // Gap
            Constraint::Length(2),             // Body
            Constraint::Length(1),             // Gap
            Constraint::Length(BUTTON_HEIGHT), // Create Account
            Constraint::Length(BUTTON_HEIGHT), // Login
            Constraint::Length(1),             // Bottom padding
        ])
        .split(inner);

    WelcomeLayout {
        title: chunks[1],
        body: chunks[3],
        controls: vec![chunks[5], chunks[6]],
    }
}

/// Draw the static copy; buttons are drawn by the caller
pub fn draw(frame: &mut Frame, inner: Rect) {
    let layout = layout(inner);
    frame.render_widget(heading(&[TITLE]), layout.title);
    frame.render_widget(body(BODY), layout.body);
}
