//! An icon next to a labelled, read-only value.
//!
//! Used for the item, skin and upgrade rows. The icon column is always
//! reserved so rows line up while metadata is still loading.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::icons::{Icon, ICON_COLUMNS, ICON_PIXEL_ROWS};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Icon height in lines.
pub const ICON_ROW_HEIGHT: u16 = ICON_PIXEL_ROWS.div_ceil(2) as u16;

#[derive(Debug, Clone)]
pub struct IconRowConfig<'a> {
    pub label: &'a str,
    /// Resolved display name; empty while unknown
    pub name: &'a str,
    /// Raw ID, shown dimmed after the name
    pub id: Option<u32>,
    pub icon: Option<&'a Icon>,
    pub focused: bool,
}

fn placeholder_icon() -> Vec<Line<'static>> {
    let blank = " ".repeat(ICON_COLUMNS as usize);
    (0..ICON_ROW_HEIGHT)
        .map(|_| Line::from(Span::styled(blank.clone(), Style::default().bg(COLOR_BORDER))))
        .collect()
}

/// Render the row into `area` (at least [`ICON_ROW_HEIGHT`] rows tall).
pub fn render_icon_row(frame: &mut Frame, area: Rect, config: &IconRowConfig) {
    let icon_width = ICON_COLUMNS as u16;
    let icon_area = Rect {
        width: icon_width.min(area.width),
        height: ICON_ROW_HEIGHT.min(area.height),
        ..area
    };
    let icon_lines = config
        .icon
        .map(Icon::to_lines)
        .unwrap_or_else(placeholder_icon);
    frame.render_widget(Paragraph::new(icon_lines), icon_area);

    let text_area = Rect {
        x: area.x + icon_width + 1,
        width: area.width.saturating_sub(icon_width + 1),
        height: 3.min(area.height),
        ..area
    };
    let border = if config.focused { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(border));

    let mut value = vec![Span::styled(
        config.name.to_string(),
        Style::default().fg(COLOR_ACCENT),
    )];
    if let Some(id) = config.id {
        let sep = if config.name.is_empty() { "" } else { "  " };
        value.push(Span::styled(format!("{}#{}", sep, id), Style::default().fg(COLOR_DIM)));
    }
    if config.focused {
        value.push(Span::styled("\u{2588}", Style::default().fg(COLOR_ACCENT)));
    }

    let label_style = Style::default().fg(if config.focused { COLOR_ACCENT } else { COLOR_DIM });
    let text = vec![
        Line::from(Span::styled(config.label.to_string(), label_style)),
        Line::from(value),
    ];
    frame.render_widget(Paragraph::new(text).block(block), text_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(config: &IconRowConfig) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, ICON_ROW_HEIGHT)).unwrap();
        terminal
            .draw(|frame| render_icon_row(frame, frame.area(), config))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_row_shows_label_name_and_id() {
        let text = rendered(&IconRowConfig {
            label: "Upgrade #1",
            name: "Superior Sigil of Air",
            id: Some(24554),
            icon: None,
            focused: false,
        });
        assert!(text.contains("Upgrade #1"));
        assert!(text.contains("Superior Sigil of Air"));
        assert!(text.contains("#24554"));
    }

    #[test]
    fn test_row_without_metadata_renders_blank_name() {
        let text = rendered(&IconRowConfig {
            label: "Skin",
            name: "",
            id: None,
            icon: None,
            focused: true,
        });
        assert!(text.contains("Skin"));
        assert!(!text.contains('#'));
    }
}
