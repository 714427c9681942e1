//! Application state for the interactive viewer.
//!
//! [`App`] holds everything the screen needs besides the link state itself:
//! focus, the type dropdown, fetched metadata, decoded icons and the status
//! line. The link state stays in [`MainComponent`]; the app reads snapshots
//! and reacts to [`AppMessage::LinkStateChanged`].

mod fetch;
mod handlers;
mod messages;

pub use fetch::{spawn_icon, spawn_item_metadata, spawn_skin_metadata, spawn_state_forwarder};
pub use messages::AppMessage;

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::Skin;
use crate::chatlink::ChatLinkType;
use crate::component::MainComponent;
use crate::icons::{Icon, IconCache};
use crate::metadata::{ItemMetadata, MetadataTracker, Refresh};
use crate::state::{ChatLinkState, PropertyDescriptor};

pub const GITHUB_URL: &str = "https://github.com/GW2ToolBelt/link";
pub const MASTODON_URL: &str = "https://mastodon.social/@themrmilchmann";

/// Social buttons in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterButton {
    GitHub,
    Sponsor,
    Mastodon,
}

impl FooterButton {
    pub const ALL: [FooterButton; 3] = [
        FooterButton::GitHub,
        FooterButton::Sponsor,
        FooterButton::Mastodon,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FooterButton::GitHub => "GitHub",
            FooterButton::Sponsor => "Sponsor",
            FooterButton::Mastodon => "Mastodon",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FooterButton::GitHub => "Follow on GitHub",
            FooterButton::Sponsor => "Sponsor on GitHub",
            FooterButton::Mastodon => "Follow on Mastodon",
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            FooterButton::GitHub | FooterButton::Sponsor => GITHUB_URL,
            FooterButton::Mastodon => MASTODON_URL,
        }
    }
}

/// Which element receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    ChatCode,
    Copy,
    TypeSelector,
    /// Index into the current type's property descriptors
    Property(usize),
    Footer(FooterButton),
}

/// One-line feedback shown above the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Main application state.
pub struct App {
    component: Arc<MainComponent>,
    /// Currently focused element
    pub focus: Focus,
    /// Highlighted entry while the type dropdown is open
    pub dropdown: Option<usize>,
    /// Item and upgrade metadata for the current item link
    pub item_metadata: ItemMetadata,
    /// Skin for the current item or skin link
    pub skin: Option<Skin>,
    tracker: MetadataTracker,
    icon_cache: IconCache,
    pending_icons: HashSet<String>,
    pub status: Option<StatusLine>,
    /// Flag to track if app should quit
    pub should_quit: bool,
    /// Set whenever something visible changed
    pub needs_redraw: bool,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    pub fn new(component: Arc<MainComponent>, icon_cache_bytes: usize) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            component,
            focus: Focus::ChatCode,
            dropdown: None,
            item_metadata: ItemMetadata::default(),
            skin: None,
            tracker: MetadataTracker::new(),
            icon_cache: IconCache::new(icon_cache_bytes),
            pending_icons: HashSet::new(),
            status: None,
            should_quit: false,
            needs_redraw: true,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    pub fn component(&self) -> &MainComponent {
        &self.component
    }

    /// Current link state snapshot.
    pub fn chat_link(&self) -> ChatLinkState {
        self.component.chat_link()
    }

    /// Sender for background tasks.
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Start forwarding component state changes into the message channel.
    pub fn spawn_state_forwarder(&self) -> JoinHandle<()> {
        spawn_state_forwarder(self.component.subscribe(), self.message_sender())
    }

    /// Start mirroring the state into the platform fragment. Every store is
    /// reported as [`AppMessage::FragmentStored`] so the footer redraws.
    pub fn spawn_fragment_sync(&self) -> JoinHandle<()> {
        let tx = self.message_sender();
        self.component.spawn_fragment_sync_with(move |fragment| {
            let _ = tx.send(AppMessage::FragmentStored(fragment.to_string()));
        })
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Property descriptors of the current type.
    pub fn property_rows(&self) -> &'static [PropertyDescriptor] {
        self.chat_link()
            .link_type()
            .map(ChatLinkType::properties)
            .unwrap_or(&[])
    }

    /// Focusable elements in Tab order.
    pub fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = vec![Focus::ChatCode, Focus::Copy, Focus::TypeSelector];
        ring.extend((0..self.property_rows().len()).map(Focus::Property));
        ring.extend(FooterButton::ALL.into_iter().map(Focus::Footer));
        ring
    }

    fn move_focus(&mut self, forward: bool) {
        let ring = self.focus_ring();
        let current = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % ring.len()
        } else {
            (current + ring.len() - 1) % ring.len()
        };
        self.focus = ring[next];
        self.dropdown = None;
        self.mark_dirty();
    }

    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    /// React to the component's current state: refresh metadata slots and
    /// keep focus on an element that still exists.
    pub fn sync_state(&mut self) {
        let state = self.chat_link();
        let refresh = self.tracker.observe(&state);
        let api = self.component.api();

        match refresh.item {
            Refresh::Unchanged => {}
            Refresh::Clear => self.item_metadata = ItemMetadata::default(),
            Refresh::Fetch(key) => {
                self.item_metadata = ItemMetadata::default();
                spawn_item_metadata(Arc::clone(&api), key, self.message_sender());
            }
        }
        match refresh.skin {
            Refresh::Unchanged => {}
            Refresh::Clear => self.skin = None,
            Refresh::Fetch(key) => {
                self.skin = None;
                spawn_skin_metadata(api, key, self.message_sender());
            }
        }

        if !self.focus_ring().contains(&self.focus) {
            self.focus = Focus::TypeSelector;
        }
        self.mark_dirty();
    }

    /// Apply a background result. Results for stale keys are dropped.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::LinkStateChanged => self.sync_state(),
            AppMessage::FragmentStored(fragment) => {
                tracing::trace!("Navigation fragment now {}", fragment);
                self.mark_dirty();
            }
            AppMessage::ItemMetadataLoaded { key, metadata } => {
                if !self.tracker.is_current_item(&key) {
                    tracing::debug!("Dropping stale item metadata for {:?}", key);
                    return;
                }
                self.item_metadata = match metadata {
                    Ok(metadata) => metadata,
                    Err(message) => {
                        self.status = Some(StatusLine::error(message));
                        ItemMetadata::default()
                    }
                };
                self.request_icons();
                self.mark_dirty();
            }
            AppMessage::SkinMetadataLoaded { key, skin } => {
                if !self.tracker.is_current_skin(&key) {
                    tracing::debug!("Dropping stale skin metadata for {:?}", key);
                    return;
                }
                self.skin = match skin {
                    Ok(skin) => skin,
                    Err(message) => {
                        self.status = Some(StatusLine::error(message));
                        None
                    }
                };
                self.request_icons();
                self.mark_dirty();
            }
            AppMessage::IconLoaded { url, icon } => {
                self.pending_icons.remove(&url);
                if let Ok(icon) = icon {
                    self.icon_cache.insert(&url, icon);
                    self.mark_dirty();
                }
            }
        }
    }

    /// Icon URLs of the metadata currently shown.
    pub fn icon_urls(&self) -> Vec<String> {
        let items = [
            &self.item_metadata.item,
            &self.item_metadata.first_upgrade,
            &self.item_metadata.second_upgrade,
        ];
        items
            .into_iter()
            .filter_map(|item| item.as_ref().and_then(|i| i.icon.clone()))
            .chain(self.skin.as_ref().and_then(|s| s.icon.clone()))
            .collect()
    }

    fn request_icons(&mut self) {
        let http = self.component.api().http();
        for url in self.icon_urls() {
            if self.icon_cache.get(&url).is_some() || !self.pending_icons.insert(url.clone()) {
                continue;
            }
            spawn_icon(Arc::clone(&http), url, self.message_sender());
        }
    }

    /// Decoded icon for `url`, if loaded.
    pub fn icon(&self, url: Option<&str>) -> Option<Arc<Icon>> {
        url.and_then(|url| self.icon_cache.peek(url))
    }

    pub fn share_url(&self) -> String {
        self.component.share_url()
    }

    /// Copy the current chat code, reporting the outcome in the status line.
    pub fn copy_chat_code(&mut self) {
        let state = self.chat_link();
        if !state.is_copyable() {
            self.status = Some(StatusLine::error("Nothing to copy"));
            self.mark_dirty();
            return;
        }

        let code = state.encoded().unwrap_or_default().trim().to_string();
        self.status = Some(match self.component.copy_to_clipboard(&code) {
            Ok(()) => StatusLine::info(format!("Copied {}", code)),
            Err(e) => {
                tracing::warn!("Copy failed: {}", e);
                StatusLine::error(e.to_string())
            }
        });
        self.mark_dirty();
    }

    pub fn open_footer_link(&mut self, button: FooterButton) {
        self.status = Some(match self.component.navigate_to_url(button.url()) {
            Ok(()) => StatusLine::info(format!("Opened {}", button.url())),
            Err(e) => {
                tracing::warn!("Opening {} failed: {}", button.url(), e);
                StatusLine::error(e.to_string())
            }
        });
        self.mark_dirty();
    }

    /// Open the dropdown on the current type, or the first entry.
    pub fn open_dropdown(&mut self) {
        let selected = self
            .chat_link()
            .link_type()
            .and_then(|t| ChatLinkType::ALL.iter().position(|a| *a == t))
            .unwrap_or(0);
        self.dropdown = Some(selected);
        self.mark_dirty();
    }

    pub fn move_dropdown(&mut self, delta: isize) {
        if let Some(selected) = self.dropdown {
            let len = ChatLinkType::ALL.len() as isize;
            let next = (selected as isize + delta).rem_euclid(len);
            self.dropdown = Some(next as usize);
            self.mark_dirty();
        }
    }

    /// Apply the highlighted type and close the dropdown.
    pub fn confirm_dropdown(&mut self) {
        if let Some(selected) = self.dropdown.take() {
            self.component.update_type(ChatLinkType::ALL[selected]);
            self.mark_dirty();
        }
    }

    /// Text of the chat code field.
    pub fn chat_code_text(&self) -> String {
        self.chat_link().encoded().unwrap_or_default().to_string()
    }

    pub fn edit_chat_code(&mut self, edit: impl FnOnce(&mut String)) {
        let mut text = self.chat_code_text();
        edit(&mut text);
        self.component.update_encoded(&text);
        self.status = None;
        self.mark_dirty();
    }

    /// Append a digit to property `index`, if the result stays within range.
    pub fn push_property_digit(&mut self, index: usize, digit: u32) {
        let Some(descriptor) = self.property_rows().get(index) else {
            return;
        };
        let current = self.chat_link().properties().get_raw(descriptor.name);
        let next = current
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .filter(|v| *v <= descriptor.max);

        if let Some(value) = next {
            self.component.update_property(descriptor.name, Some(value));
            self.mark_dirty();
        }
    }

    /// Drop the last digit of property `index`; removing the last one unsets it.
    pub fn pop_property_digit(&mut self, index: usize) {
        let Some(descriptor) = self.property_rows().get(index) else {
            return;
        };
        let current = self.chat_link().properties().get_raw(descriptor.name);
        if let Some(value) = current {
            let next = if value < 10 { None } else { Some(value / 10) };
            self.component.update_property(descriptor.name, next);
            self.mark_dirty();
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("focus", &self.focus)
            .field("dropdown", &self.dropdown)
            .field("icon_cache", &self.icon_cache)
            .field("status", &self.status)
            .finish()
    }
}
