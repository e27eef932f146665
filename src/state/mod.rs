//! Application state module

mod app_state;
mod forms;
mod ui_area;

pub use app_state::*;
pub use forms::*;
pub use ui_area::*;
