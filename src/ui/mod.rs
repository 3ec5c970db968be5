//! UI module for rendering the TUI

mod components;
mod layout;
mod screens;
mod theme;

use crate::app::App;
use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub use screens::HitTarget;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    let route = app.state.current_route();
    let phone = components::phone_area(content_area);
    let inner = components::render_phone_frame(frame, phone, screens::frame_title(route));

    screens::draw(frame, inner, &app.state.screen, app.config.mask_char());

    layout::draw_status_bar(frame, status_area, app);

    // Address bar overlay
    if let Some(prompt) = &app.state.path_prompt {
        components::render_path_prompt(frame, prompt);
    }
}

/// Find the control under a mouse position, given the full terminal area
pub fn hit_test(area: Rect, state: &AppState, column: u16, row: u16) -> Option<HitTarget> {
    let (content_area, _) = layout::create_layout(area);
    let phone = components::phone_area(content_area);
    let inner = components::inner_area(phone, screens::frame_title(state.current_route()));
    let position = ratatui::layout::Position::new(column, row);

    screens::control_regions(&state.screen, inner)
        .into_iter()
        .find(|(region, _)| region.contains(position))
        .map(|(_, target)| target)
}
