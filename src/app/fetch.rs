//! Fire-and-forget background tasks reporting back through the app channel.

use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::AppMessage;
use crate::api::Gw2ApiClient;
use crate::icons::fetch_icon;
use crate::metadata::{fetch_item_metadata, fetch_skin_metadata, ItemMetadataKey, SkinMetadataKey};
use crate::state::ChatLinkState;
use crate::traits::HttpClient;

pub fn spawn_item_metadata(
    api: Arc<Gw2ApiClient>,
    key: ItemMetadataKey,
    tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let metadata = fetch_item_metadata(&api, &key)
            .await
            .map_err(|e| e.user_message());
        let _ = tx.send(AppMessage::ItemMetadataLoaded { key, metadata });
    })
}

pub fn spawn_skin_metadata(
    api: Arc<Gw2ApiClient>,
    key: SkinMetadataKey,
    tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let skin = fetch_skin_metadata(&api, &key)
            .await
            .map_err(|e| e.user_message());
        let _ = tx.send(AppMessage::SkinMetadataLoaded { key, skin });
    })
}

pub fn spawn_icon(
    http: Arc<dyn HttpClient>,
    url: String,
    tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let icon = fetch_icon(http.as_ref(), &url).await.map_err(|e| {
            tracing::warn!("Failed to load icon {}: {}", url, e);
            e.to_string()
        });
        let _ = tx.send(AppMessage::IconLoaded { url, icon });
    })
}

/// Forward every state change as [`AppMessage::LinkStateChanged`].
pub fn spawn_state_forwarder(
    mut rx: watch::Receiver<ChatLinkState>,
    tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            if tx.send(AppMessage::LinkStateChanged).is_err() {
                break;
            }
        }
    })
}
