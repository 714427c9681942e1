//! Bracketed button label, e.g. `[ Copy ]`.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_SELECTION_BG};

/// A button span. Disabled buttons are dimmed even when focused.
pub fn render_button(label: &str, focused: bool, enabled: bool) -> Span<'static> {
    let style = match (focused, enabled) {
        (_, false) => Style::default().fg(COLOR_DIM),
        (true, true) => Style::default()
            .fg(COLOR_ACCENT)
            .bg(COLOR_SELECTION_BG)
            .add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(COLOR_ACCENT),
    };
    Span::styled(format!("[ {} ]", label), style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_label() {
        assert_eq!(render_button("Copy", false, true).content, "[ Copy ]");
    }

    #[test]
    fn test_disabled_button_is_dim() {
        let span = render_button("Copy", true, false);
        assert_eq!(span.style.fg, Some(COLOR_DIM));
        assert!(!span.style.add_modifier.contains(Modifier::BOLD));
    }
}
