//! Display metadata for the current link.
//!
//! Fetches are keyed by the IDs a state carries. [`MetadataTracker`] remembers
//! the keys last requested so a new state only triggers a fetch when its IDs
//! changed, and so responses for keys that are no longer current can be
//! recognised and dropped.

use crate::api::{items_by_ids, skins_by_id, Gw2ApiClient, Item, Skin};
use crate::chatlink::ChatLinkType;
use crate::error::LinkResult;
use crate::state::{item, skin, ChatLinkState};

/// IDs resolved through `/v2/items` for an item link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ItemMetadataKey {
    pub item_id: Option<u32>,
    pub first_upgrade_slot: Option<u32>,
    pub second_upgrade_slot: Option<u32>,
}

impl ItemMetadataKey {
    /// Key for an Item state, `None` for any other type.
    pub fn from_state(state: &ChatLinkState) -> Option<Self> {
        if state.link_type() != Some(ChatLinkType::Item) {
            return None;
        }
        Some(Self {
            item_id: state.get(item::ITEM_ID),
            first_upgrade_slot: state.get(item::FIRST_UPGRADE_SLOT),
            second_upgrade_slot: state.get(item::SECOND_UPGRADE_SLOT),
        })
    }

    /// Distinct IDs to request, in slot order.
    pub fn ids(&self) -> Vec<u32> {
        let mut ids = Vec::with_capacity(3);
        for id in [self.item_id, self.first_upgrade_slot, self.second_upgrade_slot]
            .into_iter()
            .flatten()
        {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}

/// Skin resolved through `/v2/skins`, from an Item or Skin link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SkinMetadataKey {
    pub skin_id: Option<u32>,
}

impl SkinMetadataKey {
    pub fn from_state(state: &ChatLinkState) -> Option<Self> {
        let skin_id = match state.link_type()? {
            ChatLinkType::Item => state.get(item::SKIN_ID),
            ChatLinkType::Skin => state.get(skin::SKIN_ID),
            _ => return None,
        };
        Some(Self { skin_id })
    }
}

/// Items shown for an item link. Missing entries render as blank labels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemMetadata {
    pub item: Option<Item>,
    pub first_upgrade: Option<Item>,
    pub second_upgrade: Option<Item>,
}

/// Fetch the item and its upgrades in one request.
///
/// IDs missing from the response, or a "not found" answer, leave the slot
/// empty. Any other failure is returned.
pub async fn fetch_item_metadata(
    api: &Gw2ApiClient,
    key: &ItemMetadataKey,
) -> LinkResult<ItemMetadata> {
    let ids = key.ids();
    if ids.is_empty() {
        return Ok(ItemMetadata::default());
    }

    let items = api
        .execute_optional(&items_by_ids(&ids))
        .await?
        .unwrap_or_default();

    let find = |id: Option<u32>| {
        id.and_then(|id| items.iter().find(|item| item.id == id).cloned())
    };

    Ok(ItemMetadata {
        item: find(key.item_id),
        first_upgrade: find(key.first_upgrade_slot),
        second_upgrade: find(key.second_upgrade_slot),
    })
}

pub async fn fetch_skin_metadata(
    api: &Gw2ApiClient,
    key: &SkinMetadataKey,
) -> LinkResult<Option<Skin>> {
    let Some(skin_id) = key.skin_id else {
        return Ok(None);
    };
    Ok(api.execute_optional(&skins_by_id(skin_id)).await?)
}

/// What to do with one metadata slot after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh<K> {
    /// Key unchanged; keep what is shown.
    Unchanged,
    /// Nothing to show for the new state.
    Clear,
    /// Clear, then fetch for the new key.
    Fetch(K),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataRefresh {
    pub item: Refresh<ItemMetadataKey>,
    pub skin: Refresh<SkinMetadataKey>,
}

/// Tracks the metadata keys of the state currently on screen.
#[derive(Debug, Clone, Default)]
pub struct MetadataTracker {
    item: Option<ItemMetadataKey>,
    skin: Option<SkinMetadataKey>,
}

impl MetadataTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `state` as current and report which slots need work.
    pub fn observe(&mut self, state: &ChatLinkState) -> MetadataRefresh {
        let item_key = ItemMetadataKey::from_state(state);
        let skin_key = SkinMetadataKey::from_state(state);

        let item = if item_key == self.item {
            Refresh::Unchanged
        } else {
            match item_key {
                Some(key) if !key.ids().is_empty() => Refresh::Fetch(key),
                _ => Refresh::Clear,
            }
        };
        let skin = if skin_key == self.skin {
            Refresh::Unchanged
        } else {
            match skin_key {
                Some(key) if key.skin_id.is_some() => Refresh::Fetch(key),
                _ => Refresh::Clear,
            }
        };

        self.item = item_key;
        self.skin = skin_key;
        MetadataRefresh { item, skin }
    }

    /// Whether a response for `key` still belongs to the current state.
    pub fn is_current_item(&self, key: &ItemMetadataKey) -> bool {
        self.item.as_ref() == Some(key)
    }

    pub fn is_current_skin(&self, key: &SkinMetadataKey) -> bool {
        self.skin.as_ref() == Some(key)
    }
}
