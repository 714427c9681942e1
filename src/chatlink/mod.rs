//! Guild Wars 2 chat link codec.
//!
//! A chat link is a tagged little-endian byte payload rendered as
//! `[&<base64>]`. The first payload byte is the header naming the link kind;
//! the rest is a fixed layout per kind (items additionally carry a flag byte
//! announcing optional trailing fields).
//!
//! # Example
//!
//! ```
//! use gw2link::chatlink::{decode_chat_link, encode_chat_link, ChatLink};
//!
//! let link = decode_chat_link("[&AgGqtgAA]").unwrap();
//! assert_eq!(
//!     link,
//!     ChatLink::Item {
//!         amount: 1,
//!         item_id: 46762,
//!         skin_id: None,
//!         first_upgrade_slot: None,
//!         second_upgrade_slot: None,
//!     }
//! );
//! assert_eq!(encode_chat_link(&link).unwrap(), "[&AgGqtgAA]");
//! ```

mod codec;
mod error;
mod scan;
mod wire;

pub use codec::{decode_chat_link, encode_chat_link, from_bytes, to_bytes};
pub use error::ChatLinkError;
pub use scan::find_chat_links;
pub use wire::MAX_U24;

use serde::Serialize;

/// Largest item ID the item layout can carry.
pub const MAX_ITEM_ID: u32 = MAX_U24;

/// A decoded chat link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatLink {
    /// An amount of coins, in copper.
    Coin { copper: u32 },
    /// An item stack with optional skin and upgrade overrides.
    Item {
        amount: u8,
        item_id: u32,
        skin_id: Option<u32>,
        first_upgrade_slot: Option<u32>,
        second_upgrade_slot: Option<u32>,
    },
    NpcText { text_id: u32 },
    /// A point of interest, waypoint or vista.
    Map { poi_id: u32 },
    Skill { skill_id: u32 },
    Trait { trait_id: u32 },
    Recipe { recipe_id: u32 },
    /// A wardrobe skin.
    Skin { skin_id: u32 },
    Outfit { outfit_id: u32 },
    WvwObjective { objective_id: u32, map_id: u32 },
}

impl ChatLink {
    /// Shorthand for a plain item stack without overrides.
    pub fn item(amount: u8, item_id: u32) -> Self {
        ChatLink::Item {
            amount,
            item_id,
            skin_id: None,
            first_upgrade_slot: None,
            second_upgrade_slot: None,
        }
    }

    /// The variant tag of this link.
    pub fn link_type(&self) -> ChatLinkType {
        match self {
            ChatLink::Coin { .. } => ChatLinkType::Coin,
            ChatLink::Item { .. } => ChatLinkType::Item,
            ChatLink::NpcText { .. } => ChatLinkType::NpcText,
            ChatLink::Map { .. } => ChatLinkType::Map,
            ChatLink::Skill { .. } => ChatLinkType::Skill,
            ChatLink::Trait { .. } => ChatLinkType::Trait,
            ChatLink::Recipe { .. } => ChatLinkType::Recipe,
            ChatLink::Skin { .. } => ChatLinkType::Skin,
            ChatLink::Outfit { .. } => ChatLinkType::Outfit,
            ChatLink::WvwObjective { .. } => ChatLinkType::WvwObjective,
        }
    }

    /// The header byte this link is written with.
    pub fn header(&self) -> u8 {
        self.link_type().header()
    }
}

/// The closed set of link kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ChatLinkType {
    Coin,
    Item,
    NpcText,
    Map,
    Skill,
    Trait,
    Recipe,
    Skin,
    Outfit,
    WvwObjective,
}

impl ChatLinkType {
    /// Every link kind, in the order the type selector lists them.
    pub const ALL: [ChatLinkType; 10] = [
        ChatLinkType::Item,
        ChatLinkType::Skin,
        ChatLinkType::Coin,
        ChatLinkType::NpcText,
        ChatLinkType::Map,
        ChatLinkType::Skill,
        ChatLinkType::Trait,
        ChatLinkType::Recipe,
        ChatLinkType::Outfit,
        ChatLinkType::WvwObjective,
    ];

    pub fn header(self) -> u8 {
        match self {
            ChatLinkType::Coin => 0x01,
            ChatLinkType::Item => 0x02,
            ChatLinkType::NpcText => 0x03,
            ChatLinkType::Map => 0x04,
            ChatLinkType::Skill => 0x06,
            ChatLinkType::Trait => 0x07,
            ChatLinkType::Recipe => 0x09,
            ChatLinkType::Skin => 0x0A,
            ChatLinkType::Outfit => 0x0B,
            ChatLinkType::WvwObjective => 0x0C,
        }
    }

    pub fn from_header(header: u8) -> Option<Self> {
        ChatLinkType::ALL.into_iter().find(|t| t.header() == header)
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            ChatLinkType::Coin => "Coin",
            ChatLinkType::Item => "Item",
            ChatLinkType::NpcText => "NPC Text",
            ChatLinkType::Map => "Map",
            ChatLinkType::Skill => "Skill",
            ChatLinkType::Trait => "Trait",
            ChatLinkType::Recipe => "Recipe",
            ChatLinkType::Skin => "Skin",
            ChatLinkType::Outfit => "Outfit",
            ChatLinkType::WvwObjective => "WvW Objective",
        }
    }
}

impl std::fmt::Display for ChatLinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
