//! Reusable UI components.
//!
//! - `InputField` - labelled single-line box with focus and error styling
//! - `Button` - bracketed button label
//! - `Dropdown` - overlay list for the link type
//! - `IconRow` - icon next to a labelled value

mod button;
mod dropdown;
mod icon_row;
mod input_field;

pub use button::render_button;
pub use dropdown::{dropdown_height, render_dropdown};
pub use icon_row::{render_icon_row, IconRowConfig, ICON_ROW_HEIGHT};
pub use input_field::{render_input_field, tail_to_width, InputFieldConfig, INPUT_FIELD_HEIGHT};
