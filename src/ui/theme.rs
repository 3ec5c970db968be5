//! PopX color palette

use ratatui::style::Color;

/// Primary button background (#6a00ff)
pub const ACCENT: Color = Color::Rgb(106, 0, 255);
/// Secondary button text (violet-700)
pub const ACCENT_DARK: Color = Color::Rgb(109, 40, 217);
/// Secondary button background (violet-100)
pub const ACCENT_SOFT: Color = Color::Rgb(237, 233, 254);
/// Input labels (violet-600)
pub const LABEL: Color = Color::Rgb(124, 58, 237);
/// Required marker (rose-500)
pub const REQUIRED: Color = Color::Rgb(244, 63, 94);

pub const HEADING: Color = Color::White;
pub const MUTED: Color = Color::Gray;
pub const PLACEHOLDER: Color = Color::DarkGray;
pub const BORDER: Color = Color::DarkGray;
pub const FOCUS: Color = Color::Cyan;

/// Disabled button background (gray-300)
pub const DISABLED_BG: Color = Color::Rgb(209, 213, 219);
pub const DISABLED_FG: Color = Color::Rgb(107, 114, 128);
