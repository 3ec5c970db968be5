//! Application state module

mod app_state;
mod forms;
mod router;
mod screen;

pub use app_state::*;
pub use forms::*;
pub use router::*;
pub use screen::*;
