//! UI rendering for the chat link viewer.
//!
//! A single centered panel:
//! - Chat code field with the Copy button beside it
//! - Link type selector (dropdown overlay when open)
//! - One row per property of the current type; ID rows that resolve to
//!   game data show the icon and name
//! - Status line, footer buttons and the share URL

pub mod components;
pub mod theme;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::api::{Item, Skin};
use crate::app::{App, Focus, FooterButton};
use crate::chatlink::ChatLinkType;
use crate::state::{item, skin, ChatLinkState, PropertyDescriptor};
use components::{
    dropdown_height, render_button, render_dropdown, render_icon_row, render_input_field,
    IconRowConfig, InputFieldConfig, ICON_ROW_HEIGHT, INPUT_FIELD_HEIGHT,
};
use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS};

/// Widest the panel grows.
const PANEL_MAX_WIDTH: u16 = 76;

const COPY_BUTTON_WIDTH: u16 = 10;

const INVALID_PLACEHOLDER: &str = "Invalid chat code";

const KEY_HINTS: &str = "Tab focus  Enter select  Ctrl-Y copy  Esc quit";

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let state = app.chat_link();
    let area = frame.area();

    let width = area.width.min(PANEL_MAX_WIDTH);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " GW2TB Link ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let rows = app.property_rows();
    let mut constraints = vec![
        Constraint::Length(INPUT_FIELD_HEIGHT),
        Constraint::Length(INPUT_FIELD_HEIGHT),
    ];
    constraints.extend(rows.iter().map(|_| Constraint::Length(row_height())));
    constraints.extend([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ]);
    let chunks = Layout::vertical(constraints).split(inner);

    render_chat_code(frame, chunks[0], app, &state);
    render_type_selector(frame, chunks[1], app, &state);
    for (index, descriptor) in rows.iter().enumerate() {
        render_property(frame, chunks[2 + index], app, &state, index, descriptor);
    }

    let tail = 2 + rows.len();
    render_status(frame, chunks[tail + 1], app);
    render_footer(frame, chunks[tail + 2], chunks[tail + 3], app);

    if let Some(selected) = app.dropdown {
        let anchor = chunks[1];
        let below = anchor.y + anchor.height;
        let overlay = Rect {
            x: anchor.x,
            y: below,
            width: anchor.width.min(32),
            height: dropdown_height().min(area.height.saturating_sub(below)),
        };
        render_dropdown(frame, overlay, selected, state.link_type());
    }
}

fn row_height() -> u16 {
    INPUT_FIELD_HEIGHT.max(ICON_ROW_HEIGHT)
}

fn render_chat_code(frame: &mut Frame, area: Rect, app: &App, state: &ChatLinkState) {
    let [field, button] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(COPY_BUTTON_WIDTH)])
            .areas(area);

    let text = app.chat_code_text();
    let config = InputFieldConfig::new("Chat code", &text)
        .focused(app.focus == Focus::ChatCode)
        .error(state.link_type().is_none())
        .placeholder("[&...]");
    render_input_field(frame, field, &config);

    // Line up with the middle of the input box.
    let button_area = Rect {
        x: button.x + 1,
        y: button.y + 2,
        width: button.width.saturating_sub(1),
        height: 1,
    };
    let copy = render_button("Copy", app.focus == Focus::Copy, state.is_copyable());
    if button_area.y < area.y + area.height {
        frame.render_widget(Paragraph::new(Line::from(copy)), button_area);
    }
}

fn render_type_selector(frame: &mut Frame, area: Rect, app: &App, state: &ChatLinkState) {
    let focused = app.focus == Focus::TypeSelector;
    let label_style = Style::default().fg(if focused { COLOR_ACCENT } else { COLOR_DIM });
    frame.render_widget(
        Paragraph::new(Span::styled("Type", label_style)),
        Rect { height: 1, ..area },
    );

    let border = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));

    let value = match state.link_type() {
        Some(link_type) => Span::styled(link_type.name(), Style::default().fg(COLOR_ACCENT)),
        None => Span::styled(INVALID_PLACEHOLDER, Style::default().fg(COLOR_DIM)),
    };
    let box_area = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1).min(3),
        ..area
    };
    let marker_width = box_area.width.saturating_sub(4) as usize;
    let line = Line::from(vec![
        value.clone(),
        Span::raw(" ".repeat(marker_width.saturating_sub(value.width()))),
        Span::styled("\u{25BC}", Style::default().fg(border)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), box_area);
}

/// Game data resolved for the property at `descriptor`, if it is an ID row.
fn metadata_for<'a>(
    app: &'a App,
    link_type: ChatLinkType,
    descriptor: &PropertyDescriptor,
) -> Option<Resolved<'a>> {
    let slot = |item: &'a Option<Item>| Resolved::Item(item.as_ref());
    match (link_type, descriptor.name) {
        (ChatLinkType::Item, name) if name == item::ITEM_ID.name() => {
            Some(slot(&app.item_metadata.item))
        }
        (ChatLinkType::Item, name) if name == item::SKIN_ID.name() => {
            Some(Resolved::Skin(app.skin.as_ref()))
        }
        (ChatLinkType::Item, name) if name == item::FIRST_UPGRADE_SLOT.name() => {
            Some(slot(&app.item_metadata.first_upgrade))
        }
        (ChatLinkType::Item, name) if name == item::SECOND_UPGRADE_SLOT.name() => {
            Some(slot(&app.item_metadata.second_upgrade))
        }
        (ChatLinkType::Skin, name) if name == skin::SKIN_ID.name() => {
            Some(Resolved::Skin(app.skin.as_ref()))
        }
        _ => None,
    }
}

enum Resolved<'a> {
    Item(Option<&'a Item>),
    Skin(Option<&'a Skin>),
}

impl<'a> Resolved<'a> {
    fn name(&self) -> &'a str {
        match self {
            Resolved::Item(item) => item.map(|i| i.name.as_str()).unwrap_or_default(),
            Resolved::Skin(skin) => skin.map(|s| s.name.as_str()).unwrap_or_default(),
        }
    }

    fn icon_url(&self) -> Option<&'a str> {
        match self {
            Resolved::Item(item) => item.and_then(|i| i.icon.as_deref()),
            Resolved::Skin(skin) => skin.and_then(|s| s.icon.as_deref()),
        }
    }
}

fn render_property(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    state: &ChatLinkState,
    index: usize,
    descriptor: &PropertyDescriptor,
) {
    let focused = app.focus == Focus::Property(index);
    let value = state.properties().get_raw(descriptor.name);

    let resolved = state
        .link_type()
        .and_then(|link_type| metadata_for(app, link_type, descriptor));

    match resolved {
        Some(resolved) => {
            let icon = app.icon(resolved.icon_url());
            let config = IconRowConfig {
                label: descriptor.label,
                name: resolved.name(),
                id: value,
                icon: icon.as_deref(),
                focused,
            };
            render_icon_row(frame, area, &config);
        }
        None => {
            let text = value.map(|v| v.to_string()).unwrap_or_default();
            let config = InputFieldConfig::new(descriptor.label, &text)
                .focused(focused)
                .error(value.is_none() && !descriptor.optional);
            render_input_field(frame, area, &config);
        }
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(status) => {
            let color = if status.is_error { COLOR_ERROR } else { COLOR_SUCCESS };
            Line::from(Span::styled(status.text.clone(), Style::default().fg(color)))
        }
        None => Line::from(Span::styled(KEY_HINTS, Style::default().fg(COLOR_DIM))),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, buttons_area: Rect, share_area: Rect, app: &App) {
    let mut spans = Vec::new();
    for (idx, button) in FooterButton::ALL.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(render_button(
            button.label(),
            app.focus == Focus::Footer(button),
            true,
        ));
    }
    if let Focus::Footer(button) = app.focus {
        spans.push(Span::styled(
            format!("  {}", button.description()),
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), buttons_area);

    let share = Line::from(vec![
        Span::styled("Share: ", Style::default().fg(COLOR_DIM)),
        Span::styled(app.share_url(), Style::default().fg(COLOR_ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(share), share_area);
}
