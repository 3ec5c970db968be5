//! Account settings screen

use super::body;
use crate::state::AccountState;
use crate::ui::components::BUTTON_HEIGHT;
use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const AVATAR_WIDTH: u16 = 6;
const BADGE_WIDTH: u16 = 11;

pub struct AccountLayout {
    pub avatar: Rect,
    pub identity: Rect,
    pub badge: Rect,
    pub bio: Rect,
    pub separator: Rect,
    /// "Back to Welcome"
    pub controls: Vec<Rect>,
}

pub fn layout(inner: Rect) -> AccountLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Top padding
            Constraint::Length(3),             // Avatar row
            Constraint::Length(1),             // Gap
            Constraint::Length(5),             // Bio
            Constraint::Length(1),             // Gap
            Constraint::Length(1),             // Dashed separator
            Constraint::Min(0),                // Empty settings area
            Constraint::Length(BUTTON_HEIGHT), // Back to Welcome
            Constraint::Length(1),             // Bottom padding
        ])
        .split(inner);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(AVATAR_WIDTH),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(BADGE_WIDTH),
        ])
        .split(rows[1]);

    AccountLayout {
        avatar: header[0],
        identity: header[2],
        badge: header[3],
        bio: rows[3],
        separator: rows[5],
        controls: vec![rows[7]],
    }
}

pub fn draw(frame: &mut Frame, inner: Rect, state: &AccountState) {
    let layout = layout(inner);
    let profile = &state.profile;

    // Avatar: initials in a rounded box
    let avatar = Paragraph::new(profile.initials)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme::ACCENT_DARK)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::LABEL)),
        );
    frame.render_widget(avatar, layout.avatar);

    let identity = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            profile.name,
            Style::default()
                .fg(theme::HEADING)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(profile.email, Style::default().fg(theme::MUTED))),
    ]);
    frame.render_widget(identity, layout.identity);

    if profile.verified {
        let badge = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "✔ Verified",
                Style::default()
                    .fg(theme::LABEL)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Right);
        frame.render_widget(badge, layout.badge);
    }

    frame.render_widget(body(profile.bio), layout.bio);

    let dashes = "╌".repeat(layout.separator.width as usize);
    frame.render_widget(
        Paragraph::new(dashes).style(Style::default().fg(theme::BORDER)),
        layout.separator,
    );
}
