//! Property declarations, extraction and assembly per link type.

use super::property::{Property, PropertyDescriptor, PropertyMap};
use crate::chatlink::{ChatLink, ChatLinkType, MAX_ITEM_ID};

pub mod item {
    use super::Property;

    pub const AMOUNT: Property<u8> = Property::new("amount");
    pub const ITEM_ID: Property<u32> = Property::new("item_id");
    pub const SKIN_ID: Property<u32> = Property::new("skin_id");
    pub const FIRST_UPGRADE_SLOT: Property<u32> = Property::new("first_upgrade_slot");
    pub const SECOND_UPGRADE_SLOT: Property<u32> = Property::new("second_upgrade_slot");
}

pub mod skin {
    use super::Property;

    pub const SKIN_ID: Property<u32> = Property::new("skin_id");
}

pub mod coin {
    use super::Property;

    pub const COPPER: Property<u32> = Property::new("copper");
}

pub mod npc_text {
    use super::Property;

    pub const TEXT_ID: Property<u32> = Property::new("text_id");
}

pub mod map {
    use super::Property;

    pub const POI_ID: Property<u32> = Property::new("poi_id");
}

pub mod skill {
    use super::Property;

    pub const SKILL_ID: Property<u32> = Property::new("skill_id");
}

pub mod skill_trait {
    use super::Property;

    pub const TRAIT_ID: Property<u32> = Property::new("trait_id");
}

pub mod recipe {
    use super::Property;

    pub const RECIPE_ID: Property<u32> = Property::new("recipe_id");
}

pub mod outfit {
    use super::Property;

    pub const OUTFIT_ID: Property<u32> = Property::new("outfit_id");
}

pub mod wvw_objective {
    use super::Property;

    pub const OBJECTIVE_ID: Property<u32> = Property::new("objective_id");
    pub const MAP_ID: Property<u32> = Property::new("map_id");
}

const fn required(name: &'static str, label: &'static str, max: u32) -> PropertyDescriptor {
    PropertyDescriptor {
        name,
        label,
        max,
        optional: false,
    }
}

const fn optional(name: &'static str, label: &'static str) -> PropertyDescriptor {
    PropertyDescriptor {
        name,
        label,
        max: u32::MAX,
        optional: true,
    }
}

const ITEM_PROPERTIES: [PropertyDescriptor; 5] = [
    required("amount", "Amount", u8::MAX as u32),
    required("item_id", "Item", MAX_ITEM_ID),
    optional("skin_id", "Skin"),
    optional("first_upgrade_slot", "Upgrade #1"),
    optional("second_upgrade_slot", "Upgrade #2"),
];
const SKIN_PROPERTIES: [PropertyDescriptor; 1] = [required("skin_id", "Skin", u32::MAX)];
const COIN_PROPERTIES: [PropertyDescriptor; 1] = [required("copper", "Copper", u32::MAX)];
const NPC_TEXT_PROPERTIES: [PropertyDescriptor; 1] = [required("text_id", "Text", u32::MAX)];
const MAP_PROPERTIES: [PropertyDescriptor; 1] = [required("poi_id", "Point of interest", u32::MAX)];
const SKILL_PROPERTIES: [PropertyDescriptor; 1] = [required("skill_id", "Skill", u32::MAX)];
const TRAIT_PROPERTIES: [PropertyDescriptor; 1] = [required("trait_id", "Trait", u32::MAX)];
const RECIPE_PROPERTIES: [PropertyDescriptor; 1] = [required("recipe_id", "Recipe", u32::MAX)];
const OUTFIT_PROPERTIES: [PropertyDescriptor; 1] = [required("outfit_id", "Outfit", u32::MAX)];
const WVW_OBJECTIVE_PROPERTIES: [PropertyDescriptor; 2] = [
    required("objective_id", "Objective", u32::MAX),
    required("map_id", "Map", u32::MAX),
];

impl ChatLinkType {
    /// The properties this type's extractor declares, in display order.
    pub fn properties(self) -> &'static [PropertyDescriptor] {
        match self {
            ChatLinkType::Item => &ITEM_PROPERTIES,
            ChatLinkType::Skin => &SKIN_PROPERTIES,
            ChatLinkType::Coin => &COIN_PROPERTIES,
            ChatLinkType::NpcText => &NPC_TEXT_PROPERTIES,
            ChatLinkType::Map => &MAP_PROPERTIES,
            ChatLinkType::Skill => &SKILL_PROPERTIES,
            ChatLinkType::Trait => &TRAIT_PROPERTIES,
            ChatLinkType::Recipe => &RECIPE_PROPERTIES,
            ChatLinkType::Outfit => &OUTFIT_PROPERTIES,
            ChatLinkType::WvwObjective => &WVW_OBJECTIVE_PROPERTIES,
        }
    }

    pub fn property(self, name: &str) -> Option<&'static PropertyDescriptor> {
        self.properties().iter().find(|d| d.name == name)
    }

    /// A map declaring every property of this type with no values.
    pub fn empty_properties(self) -> PropertyMap {
        PropertyMap::declared(self.properties())
    }

    /// Extract the property values of `link`.
    ///
    /// Returns `None` when `link` is of a different type.
    pub fn extract(self, link: &ChatLink) -> Option<PropertyMap> {
        if link.link_type() != self {
            return None;
        }

        let mut map = PropertyMap::new();
        match *link {
            ChatLink::Item {
                amount,
                item_id,
                skin_id,
                first_upgrade_slot,
                second_upgrade_slot,
            } => {
                map.push(item::AMOUNT.name(), Some(u32::from(amount)));
                map.push(item::ITEM_ID.name(), Some(item_id));
                map.push(item::SKIN_ID.name(), skin_id);
                map.push(item::FIRST_UPGRADE_SLOT.name(), first_upgrade_slot);
                map.push(item::SECOND_UPGRADE_SLOT.name(), second_upgrade_slot);
            }
            ChatLink::WvwObjective {
                objective_id,
                map_id,
            } => {
                map.push(wvw_objective::OBJECTIVE_ID.name(), Some(objective_id));
                map.push(wvw_objective::MAP_ID.name(), Some(map_id));
            }
            ChatLink::Coin { copper: id }
            | ChatLink::NpcText { text_id: id }
            | ChatLink::Map { poi_id: id }
            | ChatLink::Skill { skill_id: id }
            | ChatLink::Trait { trait_id: id }
            | ChatLink::Recipe { recipe_id: id }
            | ChatLink::Skin { skin_id: id }
            | ChatLink::Outfit { outfit_id: id } => {
                map.push(self.properties()[0].name, Some(id));
            }
        }
        Some(map)
    }

    /// Build a link of this type from property values.
    ///
    /// Returns `None` when a required value is missing or a value does not fit
    /// the field's Rust type. Wire-width checks are left to the encoder.
    pub fn assemble(self, properties: &PropertyMap) -> Option<ChatLink> {
        let single = || properties.get_raw(self.properties()[0].name);

        let link = match self {
            ChatLinkType::Item => ChatLink::Item {
                amount: properties.get(item::AMOUNT)?,
                item_id: properties.get(item::ITEM_ID)?,
                skin_id: properties.get(item::SKIN_ID),
                first_upgrade_slot: properties.get(item::FIRST_UPGRADE_SLOT),
                second_upgrade_slot: properties.get(item::SECOND_UPGRADE_SLOT),
            },
            ChatLinkType::WvwObjective => ChatLink::WvwObjective {
                objective_id: properties.get(wvw_objective::OBJECTIVE_ID)?,
                map_id: properties.get(wvw_objective::MAP_ID)?,
            },
            ChatLinkType::Coin => ChatLink::Coin { copper: single()? },
            ChatLinkType::NpcText => ChatLink::NpcText { text_id: single()? },
            ChatLinkType::Map => ChatLink::Map { poi_id: single()? },
            ChatLinkType::Skill => ChatLink::Skill { skill_id: single()? },
            ChatLinkType::Trait => ChatLink::Trait { trait_id: single()? },
            ChatLinkType::Recipe => ChatLink::Recipe { recipe_id: single()? },
            ChatLinkType::Skin => ChatLink::Skin { skin_id: single()? },
            ChatLinkType::Outfit => ChatLink::Outfit { outfit_id: single()? },
        };
        Some(link)
    }
}
