//! Screen rendering
//!
//! Each screen module lays out its static copy and one rect per control,
//! in the same order as the screen's focus list. Drawing and mouse hit
//! testing both go through those rects.

mod account;
mod create_account;
mod login;
mod welcome;

use super::components::{draw_input, draw_radio_group, option_areas, render_button};
use super::theme;
use crate::state::{AgencyChoice, Control, Route, Screen, ScreenState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Label of the agency radio group
const AGENCY_LABEL: &str = "Are you an Agency?";

/// Where a mouse click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Control at this focus index
    Focus(usize),
    /// A specific option of the radio group at this focus index
    Agency(usize, AgencyChoice),
}

/// Title shown in the phone frame's top border
pub fn frame_title(route: Route) -> Option<&'static str> {
    match route {
        Route::Account => Some(Route::Account.label()),
        _ => None,
    }
}

/// Control rects for the mounted screen, in focus order
fn control_areas(screen: &ScreenState, inner: Rect) -> Vec<Rect> {
    match screen {
        ScreenState::Welcome(_) => welcome::layout(inner).controls,
        ScreenState::Login(_) => login::layout(inner).controls,
        ScreenState::CreateAccount(_) => create_account::layout(inner).controls,
        ScreenState::Account(_) => account::layout(inner).controls,
    }
}

/// Clickable regions of the mounted screen
pub fn control_regions(screen: &ScreenState, inner: Rect) -> Vec<(Rect, HitTarget)> {
    let controls = screen.screen().controls();
    let mut regions = Vec::with_capacity(controls.len() + 2);

    for (index, (control, area)) in controls
        .iter()
        .zip(control_areas(screen, inner))
        .enumerate()
    {
        if let Control::AgencyChoice = control {
            for (choice, option) in option_areas(area) {
                regions.push((option, HitTarget::Agency(index, choice)));
            }
        }
        regions.push((area, HitTarget::Focus(index)));
    }

    regions
}

/// Draw the mounted screen inside the phone frame
pub fn draw(frame: &mut Frame, inner: Rect, screen: &ScreenState, mask_char: char) {
    match screen {
        ScreenState::Welcome(_) => welcome::draw(frame, inner),
        ScreenState::Login(_) => login::draw(frame, inner),
        ScreenState::CreateAccount(_) => create_account::draw(frame, inner),
        ScreenState::Account(state) => account::draw(frame, inner, state),
    }
    draw_controls(frame, screen.screen(), &control_areas(screen, inner), mask_char);
}

/// Draw every control of a screen into its rect
fn draw_controls(frame: &mut Frame, screen: &dyn Screen, areas: &[Rect], mask_char: char) {
    let focus = screen.focus();

    for (index, (control, area)) in screen.controls().iter().zip(areas).enumerate() {
        let is_focused = index == focus;
        match *control {
            Control::Input(field_index) => {
                if let Some(field) = screen.field(field_index) {
                    draw_input(frame, *area, field, is_focused, mask_char);
                }
            }
            Control::AgencyChoice => {
                if let Some(selected) = screen.agency() {
                    draw_radio_group(frame, *area, AGENCY_LABEL, selected, is_focused);
                }
            }
            Control::Button(action) => render_button(
                frame,
                *area,
                action.label(),
                action.kind(),
                is_focused,
                screen.is_action_enabled(action),
            ),
        }
    }
}

/// Bold screen heading, one line per entry
fn heading(lines: &[&'static str]) -> Paragraph<'static> {
    let lines: Vec<Line> = lines.iter().map(|l| Line::from(*l)).collect();
    Paragraph::new(lines).style(
        Style::default()
            .fg(theme::HEADING)
            .add_modifier(Modifier::BOLD),
    )
}

/// Muted, wrapped body copy
fn body(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(text)
        .style(Style::default().fg(theme::MUTED))
        .wrap(Wrap { trim: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Action, CreateAccountForm};
    use ratatui::layout::Position;

    const INNER: Rect = Rect {
        x: 2,
        y: 1,
        width: 38,
        height: 30,
    };

    #[test]
    fn test_one_area_per_control() {
        for route in [
            Route::Welcome,
            Route::Login,
            Route::CreateAccount,
            Route::Account,
        ] {
            let screen = ScreenState::mount(route);
            assert_eq!(
                control_areas(&screen, INNER).len(),
                screen.screen().controls().len(),
                "{route:?}"
            );
        }
    }

    #[test]
    fn test_control_areas_stay_inside_frame_and_do_not_overlap() {
        for route in [
            Route::Welcome,
            Route::Login,
            Route::CreateAccount,
            Route::Account,
        ] {
            let areas = control_areas(&ScreenState::mount(route), INNER);
            for (i, a) in areas.iter().enumerate() {
                assert_eq!(INNER.intersection(*a), *a, "{route:?} control {i}");
                for b in &areas[i + 1..] {
                    assert!(!a.intersects(*b), "{route:?} control {i} overlaps");
                }
            }
        }
    }

    #[test]
    fn test_agency_options_come_before_group_region() {
        let screen = ScreenState::CreateAccount(CreateAccountForm::new());
        let regions = control_regions(&screen, INNER);
        let agency: Vec<_> = regions
            .iter()
            .filter(|(_, t)| matches!(t, HitTarget::Agency(..)))
            .collect();
        assert_eq!(agency.len(), 2);

        let (no_area, _) = agency[1];
        let first_hit = regions
            .iter()
            .find(|(area, _)| area.contains(Position::new(no_area.x, no_area.y)))
            .map(|(_, t)| *t);
        assert_eq!(first_hit, Some(HitTarget::Agency(5, AgencyChoice::No)));
    }

    #[test]
    fn test_frame_title_only_on_account() {
        assert_eq!(frame_title(Route::Account), Some("Account Settings"));
        assert_eq!(frame_title(Route::Welcome), None);
        assert_eq!(frame_title(Route::Login), None);
        assert_eq!(frame_title(Route::CreateAccount), None);
    }

    #[test]
    fn test_welcome_buttons_in_focus_order() {
        let screen = ScreenState::mount(Route::Welcome);
        let areas = control_areas(&screen, INNER);
        assert_eq!(
            screen.screen().controls(),
            &[
                Control::Button(Action::OpenCreateAccount),
                Control::Button(Action::OpenLogin)
            ]
        );
        assert!(areas[0].y < areas[1].y);
    }
}
