//! Response types for the game-data API endpoints the viewer uses.
//!
//! Only the fields shown in the UI are modelled; everything else in the
//! payload is ignored.

use serde::{Deserialize, Serialize};

/// An entry of `/v2/items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    /// Render service URL of the icon
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub rarity: String,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub chat_link: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// An entry of `/v2/skins`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skin {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub skin_type: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub rarity: String,
}
