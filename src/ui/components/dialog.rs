//! Address bar dialog for typing a path

use crate::state::PathPrompt;
use crate::ui::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const DIALOG_WIDTH: u16 = 48;
const DIALOG_HEIGHT: u16 = 6;

/// Centre a `width` x `height` rect in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(theme::FOCUS)
            .add_modifier(Modifier::BOLD),
    )
}

/// Render the "Go to path" overlay centred on the screen
pub fn render_path_prompt(frame: &mut Frame, prompt: &PathPrompt) {
    let area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let content = vec![
        Line::from(vec![
            Span::styled("› ", Style::default().fg(theme::LABEL)),
            Span::raw(prompt.input.as_str()),
            Span::styled("▌", Style::default().fg(theme::FOCUS)),
        ]),
        Line::from(""),
        Line::from(vec![
            key_span("Enter"),
            Span::raw(" go  "),
            key_span("Esc"),
            Span::raw(" cancel"),
        ]),
    ];

    let dialog = Paragraph::new(content).block(
        Block::default()
            .title(Span::styled(
                " Go to path ",
                Style::default()
                    .fg(theme::HEADING)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::FOCUS)),
    );

    frame.render_widget(dialog, area);
}
