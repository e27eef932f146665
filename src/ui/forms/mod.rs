//! Form rendering module
//!
//! - `field_renderer`: one boxed field with its inline error
//! - `registration_form`: the scrolling registration form and action panel

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration_form;
