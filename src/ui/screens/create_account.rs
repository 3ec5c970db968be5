//! Create account screen

use super::heading;
use crate::ui::components::{BUTTON_HEIGHT, INPUT_HEIGHT, RADIO_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

const TITLE: [&str; 2] = ["Create your", "PopX account"];

pub struct CreateAccountLayout {
    pub title: Rect,
    /// Five inputs, the agency radio group, then the submit button
    pub controls: Vec<Rect>,
}

pub fn layout(inner: Rect) -> CreateAccountLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Top padding
            Constraint::Length(2),             // Title
            Constraint::Length(1),             // Gap
            Constraint::Length(INPUT_HEIGHT),  // Full name
            Constraint::Length(INPUT_HEIGHT),  // Phone
            Constraint::Length(INPUT_HEIGHT),  // Email
            Constraint::Length(INPUT_HEIGHT),  // Password
            Constraint::Length(INPUT_HEIGHT),  // Company
            Constraint::Length(RADIO_HEIGHT),  // Agency
            Constraint::Length(BUTTON_HEIGHT), // Create Account
            Constraint::Min(0),                // Remaining space
        ])
        .split(inner);

    CreateAccountLayout {
        title: chunks[1],
        controls: chunks[3..10].to_vec(),
    }
}

pub fn draw(frame: &mut Frame, inner: Rect) {
    frame.render_widget(heading(&TITLE), layout(inner).title);
}
