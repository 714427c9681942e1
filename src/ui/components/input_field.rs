//! Input Field Component
//!
//! A label line above a rounded single-line box. The box shows the end of the
//! value when it is wider than the field, so the cursor stays visible.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// Rows used: label (1) + box (3).
pub const INPUT_FIELD_HEIGHT: u16 = 4;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Draw the field in the error colour
    pub is_error: bool,
    /// Shown dimmed when the value is empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_error: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// The longest suffix of `value` that fits in `width` columns.
pub fn tail_to_width(value: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (idx, c) in value.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &value[start..]
}

/// Render an input field into `area` (at least [`INPUT_FIELD_HEIGHT`] rows).
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) {
    let accent = if config.is_error {
        COLOR_ERROR
    } else if config.focused {
        Color::White
    } else {
        COLOR_DIM
    };

    let label_area = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, Style::default().fg(accent)))),
        label_area,
    );

    let box_area = Rect {
        y: area.y + 1,
        height: 3.min(area.height.saturating_sub(1)),
        ..area
    };
    let border_color = if config.is_error {
        COLOR_ERROR
    } else if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    // Two columns of border, one for the cursor.
    let inner_width = box_area.width.saturating_sub(3) as usize;
    let content = match (config.value.is_empty(), config.placeholder) {
        (true, Some(placeholder)) if !config.focused => {
            Span::styled(placeholder.to_string(), Style::default().fg(COLOR_DIM))
        }
        _ => {
            let mut text = tail_to_width(config.value, inner_width).to_string();
            if config.focused {
                text.push('\u{2588}');
            }
            let fg = if config.focused { Color::White } else { Color::Gray };
            Span::styled(text, Style::default().fg(fg))
        }
    };

    frame.render_widget(Paragraph::new(Line::from(content)).block(block), box_area);
}
