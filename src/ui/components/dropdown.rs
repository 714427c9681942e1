//! Link type dropdown overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::chatlink::ChatLinkType;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_SELECTION_BG};

/// Rows needed to show every type plus borders.
pub fn dropdown_height() -> u16 {
    ChatLinkType::ALL.len() as u16 + 2
}

/// Draw the type list over `area`, highlighting `selected`.
pub fn render_dropdown(
    frame: &mut Frame,
    area: Rect,
    selected: usize,
    current: Option<ChatLinkType>,
) {
    let lines: Vec<Line<'static>> = ChatLinkType::ALL
        .iter()
        .enumerate()
        .map(|(idx, ty)| {
            let marker = if Some(*ty) == current { "\u{2713} " } else { "  " };
            let style = if idx == selected {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .bg(COLOR_SELECTION_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(ty.name(), style),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
