//! Colour palette.

use ratatui::style::Color;

/// Unfocused borders and separators
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Focused borders and highlighted text
pub const COLOR_ACCENT: Color = Color::White;

/// Labels and secondary text
pub const COLOR_DIM: Color = Color::DarkGray;

/// Panel title
pub const COLOR_HEADER: Color = Color::Rgb(204, 51, 51);

/// Invalid input marker
pub const COLOR_ERROR: Color = Color::Red;

/// Success feedback
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Background of text inputs
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Highlighted dropdown entry
pub const COLOR_SELECTION_BG: Color = Color::Rgb(45, 45, 70);
