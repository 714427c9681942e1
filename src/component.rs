//! The main component: single owner of the current [`ChatLinkState`].
//!
//! State lives in a `tokio::sync::watch` cell. Every update builds a fresh
//! state and replaces the old one; observers (the UI, the fragment sync task)
//! see each distinct state. Equal successive states are not re-announced.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::Gw2ApiClient;
use crate::chatlink::{ChatLink, ChatLinkType};
use crate::config::DEFAULT_SITE_URL;
use crate::state::{ChatLinkState, PropertyMap};
use crate::traits::{Platform, PlatformError};

pub struct MainComponent {
    api: Arc<Gw2ApiClient>,
    platform: Arc<dyn Platform>,
    chat_link: watch::Sender<ChatLinkState>,
    site_url: String,
}

impl MainComponent {
    /// Create the component, seeded with `initial` when given.
    pub fn new(
        api: Arc<Gw2ApiClient>,
        platform: Arc<dyn Platform>,
        initial: Option<ChatLink>,
    ) -> Self {
        let state = initial
            .as_ref()
            .map(ChatLinkState::from_link)
            .unwrap_or(ChatLinkState::EMPTY);
        let (chat_link, _) = watch::channel(state);

        Self {
            api,
            platform,
            chat_link,
            site_url: DEFAULT_SITE_URL.to_string(),
        }
    }

    /// Set the site the share URL points at.
    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = site_url.into();
        self
    }

    pub fn api(&self) -> Arc<Gw2ApiClient> {
        Arc::clone(&self.api)
    }

    /// Snapshot of the current state.
    pub fn chat_link(&self) -> ChatLinkState {
        self.chat_link.borrow().clone()
    }

    /// Receiver observing every state change.
    pub fn subscribe(&self) -> watch::Receiver<ChatLinkState> {
        self.chat_link.subscribe()
    }

    fn replace(&self, state: ChatLinkState) {
        let changed = self.chat_link.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
        if changed {
            tracing::debug!("Chat link state is now {:?}", self.chat_link.borrow().encoded());
        }
    }

    /// Replace the state with a typed link.
    pub fn update_chat_link(&self, link: ChatLink) {
        self.replace(ChatLinkState::from_link(&link));
    }

    /// Replace the state with user-entered text, decoded if possible.
    pub fn update_encoded(&self, text: &str) {
        self.replace(ChatLinkState::from_encoded(text));
    }

    /// Switch to a blank state of `link_type`. No-op if already selected.
    pub fn update_type(&self, link_type: ChatLinkType) {
        if self.chat_link.borrow().link_type() == Some(link_type) {
            return;
        }
        self.replace(ChatLinkState::of_type(link_type));
    }

    /// Set one property of the current type and re-encode.
    ///
    /// Ignored when no type is selected or the type does not declare `name`.
    pub fn update_property(&self, name: &str, value: Option<u32>) {
        let current = self.chat_link();
        let Some(link_type) = current.link_type() else {
            return;
        };

        let mut values: PropertyMap = current.properties().clone();
        if !values.set(name, value) {
            tracing::debug!("{} has no property {}", link_type, name);
            return;
        }
        self.replace(ChatLinkState::from_properties(link_type, &values));
    }

    pub fn copy_to_clipboard(&self, value: &str) -> Result<(), PlatformError> {
        self.platform.copy_to_clipboard(value)
    }

    pub fn navigate_to_url(&self, url: &str) -> Result<(), PlatformError> {
        self.platform.navigate_to_url(url)
    }

    /// Mirror the state into the platform's navigation fragment.
    ///
    /// Stores the current fragment immediately, then once per state change
    /// until the component is dropped.
    pub fn spawn_fragment_sync(&self) -> JoinHandle<()> {
        self.spawn_fragment_sync_with(|_| {})
    }

    /// Like [`spawn_fragment_sync`](Self::spawn_fragment_sync), calling
    /// `on_stored` with each fragment after the platform holds it.
    pub fn spawn_fragment_sync_with<F>(&self, on_stored: F) -> JoinHandle<()>
    where
        F: Fn(&str) + Send + 'static,
    {
        let mut rx = self.subscribe();
        let platform = Arc::clone(&self.platform);

        tokio::spawn(async move {
            loop {
                let fragment = rx.borrow_and_update().fragment().to_string();
                platform.store_navigation_fragment(&fragment);
                on_stored(&fragment);

                if rx.changed().await.is_err() {
                    tracing::debug!("Chat link cell closed, fragment sync stopping");
                    break;
                }
            }
        })
    }

    /// Site URL for the fragment last stored on the platform.
    pub fn share_url(&self) -> String {
        let fragment = self.platform.navigation_fragment();
        format!(
            "{}/{}",
            self.site_url.trim_end_matches('/'),
            fragment.trim_start_matches('/')
        )
    }
}

impl std::fmt::Debug for MainComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainComponent")
            .field("chat_link", &*self.chat_link.borrow())
            .field("site_url", &self.site_url)
            .finish()
    }
}
