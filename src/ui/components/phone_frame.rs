//! Fixed-size "phone" frame every screen is drawn inside

use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding},
    Frame,
};

/// Frame width in columns, borders included
pub const PHONE_WIDTH: u16 = 42;
/// Frame height in rows, borders included
pub const PHONE_HEIGHT: u16 = 32;

fn phone_block(title: Option<&str>) -> Block<'_> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .padding(Padding::horizontal(1));
    if let Some(title) = title {
        block = block
            .title(Span::styled(
                format!(" {title} "),
                Style::default()
                    .fg(theme::MUTED)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Left);
    }
    block
}

/// Centre the phone in `area`, shrinking it when the terminal is smaller
pub fn phone_area(area: Rect) -> Rect {
    let width = PHONE_WIDTH.min(area.width);
    let height = PHONE_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Content area inside the frame
pub fn inner_area(phone: Rect, title: Option<&str>) -> Rect {
    phone_block(title).inner(phone)
}

/// Draw the frame and return its content area
pub fn render_phone_frame(frame: &mut Frame, phone: Rect, title: Option<&str>) -> Rect {
    let block = phone_block(title);
    let inner = block.inner(phone);
    frame.render_widget(block, phone);
    inner
}
