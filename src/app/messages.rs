//! AppMessage enum for async communication within the application.

use crate::api::Skin;
use crate::icons::Icon;
use crate::metadata::{ItemMetadata, ItemMetadataKey, SkinMetadataKey};

/// Messages received from background tasks.
///
/// Fetch results carry the key they were requested for so the app can drop
/// the ones that no longer match the state on screen.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Item and upgrade metadata resolved, or a user-facing failure message
    ItemMetadataLoaded {
        key: ItemMetadataKey,
        metadata: Result<ItemMetadata, String>,
    },
    /// Skin metadata resolved (`None` when the skin does not exist)
    SkinMetadataLoaded {
        key: SkinMetadataKey,
        skin: Result<Option<Skin>, String>,
    },
    /// Icon download finished
    IconLoaded {
        url: String,
        icon: Result<Icon, String>,
    },
    /// The component published a new chat link state
    LinkStateChanged,
    /// The platform now holds this navigation fragment
    FragmentStored(String),
}
