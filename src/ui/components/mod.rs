//! Reusable UI components

mod button;
mod dialog;
mod input;
mod phone_frame;
mod radio;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::render_path_prompt;
pub use input::{draw_input, INPUT_HEIGHT};
pub use phone_frame::{inner_area, phone_area, render_phone_frame};
pub use radio::{draw_radio_group, option_areas, RADIO_HEIGHT};
