//! Yes/no radio group

use crate::state::AgencyChoice;
use crate::ui::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Radio group height in rows (label sits in the top border)
pub const RADIO_HEIGHT: u16 = 3;

const OPTION_WIDTH: u16 = 8;
const OPTION_GAP: u16 = 3;

fn group_block(label: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default().fg(theme::FOCUS)
    } else {
        Style::default().fg(theme::BORDER)
    };
    Block::default()
        .title(Span::styled(
            format!(" {label} "),
            Style::default().fg(theme::LABEL),
        ))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Screen area of each option, in `AgencyChoice::ALL` order
pub fn option_areas(area: Rect) -> [(AgencyChoice, Rect); 2] {
    let inner = group_block("", false).inner(area);
    let width = OPTION_WIDTH.min(inner.width);
    let yes = Rect {
        width,
        height: inner.height.min(1),
        ..inner
    };
    let no_x = (inner.x + OPTION_WIDTH + OPTION_GAP).min(inner.right());
    let no = Rect {
        x: no_x,
        width: OPTION_WIDTH.min(inner.right().saturating_sub(no_x)),
        ..yes
    };
    [(AgencyChoice::Yes, yes), (AgencyChoice::No, no)]
}

fn option_line(choice: AgencyChoice, selected: AgencyChoice) -> Line<'static> {
    let (marker, style) = if choice == selected {
        (
            "(•)",
            Style::default()
                .fg(theme::LABEL)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("( )", Style::default().fg(theme::MUTED))
    };
    Line::from(vec![
        Span::styled(marker, style),
        Span::raw(" "),
        Span::raw(choice.label()),
    ])
}

/// Draw the radio group with exactly one option marked
pub fn draw_radio_group(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    selected: AgencyChoice,
    is_focused: bool,
) {
    frame.render_widget(group_block(label, is_focused), area);
    for (choice, option_area) in option_areas(area) {
        frame.render_widget(Paragraph::new(option_line(choice, selected)), option_area);
    }
}
