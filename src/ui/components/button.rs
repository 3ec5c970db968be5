//! Primary and secondary action buttons

use crate::state::ButtonKind;
use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Text style for a button of the given kind
fn button_style(kind: ButtonKind, is_enabled: bool) -> Style {
    match (kind, is_enabled) {
        (_, false) => Style::default()
            .fg(theme::DISABLED_FG)
            .bg(theme::DISABLED_BG),
        (ButtonKind::Primary, true) => Style::default()
            .fg(ratatui::style::Color::White)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        (ButtonKind::Secondary, true) => Style::default()
            .fg(theme::ACCENT_DARK)
            .bg(theme::ACCENT_SOFT)
            .add_modifier(Modifier::BOLD),
    }
}

/// Render a full-width button.
///
/// A disabled button still takes focus so the user can see it, but its
/// border never lights up.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    kind: ButtonKind,
    is_focused: bool,
    is_enabled: bool,
) {
    let border_style = if is_focused && is_enabled {
        Style::default()
            .fg(theme::FOCUS)
            .add_modifier(Modifier::BOLD)
    } else if is_focused {
        Style::default().fg(theme::MUTED)
    } else {
        Style::default().fg(theme::BORDER)
    };

    let content = if is_focused {
        format!("› {label} ‹")
    } else {
        label.to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(button_style(kind, is_enabled));

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}
