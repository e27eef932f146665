//! Dialog components for TUI

mod base;
mod error_dialog;
mod receipt_dialog;

pub use error_dialog::render_error_dialog;
pub use receipt_dialog::render_receipt_dialog;
