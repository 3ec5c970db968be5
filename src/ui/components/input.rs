//! Labeled text input

use crate::state::FormField;
use crate::ui::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Input height in rows (label sits in the top border)
pub const INPUT_HEIGHT: u16 = 3;

const CURSOR: &str = "▌";

/// Title line: label plus a red asterisk for required fields
fn label_line(field: &FormField) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" {}", field.label),
        Style::default().fg(theme::LABEL),
    )];
    if field.required {
        spans.push(Span::styled(" *", Style::default().fg(theme::REQUIRED)));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

/// Last `max_chars` characters of `text`
fn tail(text: &str, max_chars: usize) -> &str {
    let skip = text.chars().count().saturating_sub(max_chars);
    match text.char_indices().nth(skip) {
        Some((start, _)) => &text[start..],
        None => "",
    }
}

/// Body line: value (masked if needed) or placeholder, plus the cursor.
///
/// While focused, a value wider than `width` scrolls so its end and the
/// cursor stay visible.
fn value_line(field: &FormField, is_focused: bool, mask_char: char, width: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(2);

    if field.is_empty() {
        if is_focused {
            spans.push(Span::styled(CURSOR, Style::default().fg(theme::FOCUS)));
        }
        spans.push(Span::styled(
            field.placeholder,
            Style::default()
                .fg(theme::PLACEHOLDER)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        let value = field.display_value(mask_char);
        if is_focused {
            let visible = tail(&value, width.saturating_sub(1)).to_string();
            spans.push(Span::raw(visible));
            spans.push(Span::styled(CURSOR, Style::default().fg(theme::FOCUS)));
        } else {
            spans.push(Span::raw(value));
        }
    }

    Line::from(spans)
}

/// Draw a form field
pub fn draw_input(frame: &mut Frame, area: Rect, field: &FormField, is_focused: bool, mask_char: char) {
    let border_style = if is_focused {
        Style::default().fg(theme::FOCUS)
    } else {
        Style::default().fg(theme::BORDER)
    };

    let block = Block::default()
        .title(label_line(field))
        .borders(Borders::ALL)
        .border_style(border_style);

    let width = block.inner(area).width as usize;
    let paragraph = Paragraph::new(value_line(field, is_focused, mask_char, width)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_required_label_has_asterisk() {
        let field = FormField::text("name", "Full Name", "Marry Doe").required();
        assert_eq!(line_text(&label_line(&field)), " Full Name * ");
    }

    #[test]
    fn test_optional_label_has_no_asterisk() {
        let field = FormField::text("company", "Company name", "Marry Doe");
        assert_eq!(line_text(&label_line(&field)), " Company name ");
    }

    #[test]
    fn test_empty_field_shows_placeholder() {
        let field = FormField::text("email", "Email Address", "Enter email address");
        assert_eq!(
            line_text(&value_line(&field, false, '•', 36)),
            "Enter email address"
        );
        assert_eq!(
            line_text(&value_line(&field, true, '•', 36)),
            "▌Enter email address"
        );
    }

    #[test]
    fn test_password_value_is_masked() {
        let mut field = FormField::text("password", "Password", "Enter password").masked();
        field.set_text("hunter2");
        assert_eq!(line_text(&value_line(&field, true, '*', 36)), "*******▌");
    }

    #[test]
    fn test_tail_counts_chars() {
        assert_eq!(tail("abcdef", 3), "def");
        assert_eq!(tail("abc", 10), "abc");
        assert_eq!(tail("••••", 2), "••");
        assert_eq!(tail("abc", 0), "");
    }

    #[test]
    fn test_long_focused_value_scrolls_to_end() {
        let mut field = FormField::text("email", "Email Address", "Enter email address");
        field.set_text("someone.with.a.long.name@example-company.com");

        assert_eq!(line_text(&value_line(&field, true, '•', 10)), "mpany.com▌");
        // Unfocused shows the start
        assert_eq!(
            line_text(&value_line(&field, false, '•', 10)),
            "someone.with.a.long.name@example-company.com"
        );
    }

    #[test]
    fn test_overflowing_value_renders_tail_and_cursor() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut field = FormField::text("email", "Email Address", "Enter email address");
        field.set_text("someone.with.a.long.name@example-company.com");

        let mut terminal = Terminal::new(TestBackend::new(20, INPUT_HEIGHT)).unwrap();
        terminal
            .draw(|frame| draw_input(frame, frame.area(), &field, true, '•'))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..20).map(|x| buffer[(x, 1)].symbol()).collect();
        assert_eq!(row, "│ample-company.com▌│");
    }
}
