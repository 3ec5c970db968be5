//! Login screen

use super::{body, heading};
use crate::ui::components::{BUTTON_HEIGHT, INPUT_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

const TITLE: [&str; 2] = ["Signin to your", "PopX account"];
const BODY: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

pub struct LoginLayout {
    pub title: Rect,
    pub body: Rect,
    /// Email, password, login button
    pub controls: Vec<Rect>,
}

pub fn layout(inner: Rect) -> LoginLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Top padding
            Constraint::Length(2),             // Title
            Constraint::Length(1),             // Gap
            Constraint::Length(2),             // Body
            Constraint::Length(1),             // Gap
            Constraint::Length(INPUT_HEIGHT),  // Email
            Constraint::Length(INPUT_HEIGHT),  // Password
            Constraint::Length(BUTTON_HEIGHT), // Login
            Constraint::Min(0),                // Remaining space
        ])
        .split(inner);

    LoginLayout {
        title: chunks[1],
        body: chunks[3],
        controls: vec![chunks[5], chunks[6], chunks[7]],
    }
}

pub fn draw(frame: &mut Frame, inner: Rect) {
    let layout = layout(inner);
    frame.render_widget(heading(&TITLE), layout.title);
    frame.render_widget(body(BODY), layout.body);
}
