//! Screen split and status bar

use super::theme;
use crate::app::App;
use crate::state::{Control, ScreenState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the terminal into the phone area and a one-row status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar: current path, key hints, last message
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let router = &app.state.router;
    let mut spans = vec![Span::styled(
        format!(" {} ", router.path()),
        Style::default().fg(Color::White).bg(theme::ACCENT),
    )];

    if router.is_fallback() {
        spans.push(Span::styled(
            format!(" → {}", router.route().label()),
            Style::default().fg(Color::Yellow),
        ));
    }

    if app.config.show_key_hints() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            get_hints(&app.state.screen, app.state.path_prompt.is_some()),
            Style::default().fg(theme::MUTED),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_width = quit_hint.len() as u16;
    if area.width > quit_width {
        let quit_area = Rect {
            x: area.right() - quit_width,
            width: quit_width,
            ..area
        };
        frame.render_widget(
            Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray)),
            quit_area,
        );
    }
}

/// Keyboard hints for the focused control
fn get_hints(screen: &ScreenState, prompt_open: bool) -> String {
    if prompt_open {
        return "type a path  Enter:go  Esc:cancel".to_string();
    }
    match screen.screen().focused_control() {
        Some(Control::Input(_)) => "Tab:next  ^S:submit  ^L:go to".to_string(),
        Some(Control::AgencyChoice) => "←/y:yes  →/n:no  Space:toggle  Tab:next".to_string(),
        Some(Control::Button(_)) | None => match screen {
            ScreenState::Welcome(_) => "Tab:next  Enter:press  c:create  l:login  g:go to",
            ScreenState::Account(_) => "Enter:press  b:back  g:go to",
            _ => "Tab:next  Enter:press  g:go to",
        }
        .to_string(),
    }
}
