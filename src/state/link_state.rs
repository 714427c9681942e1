//! The immutable link state shown by the main screen.

use super::property::{Property, PropertyMap, PropertyValue};
use crate::chatlink::{decode_chat_link, encode_chat_link, ChatLink, ChatLinkType};

/// Fragment used when there is no valid link to mirror.
pub const ROOT_FRAGMENT: &str = "/";

/// Snapshot of the current chat link.
///
/// A new state replaces the previous one on every edit; states are never
/// mutated in place. `link_type` is `None` exactly when the text failed to
/// decode, and the property keys are always those `link_type` declares.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatLinkState {
    encoded: Option<String>,
    link_type: Option<ChatLinkType>,
    properties: PropertyMap,
}

impl ChatLinkState {
    pub const EMPTY: ChatLinkState = ChatLinkState {
        encoded: None,
        link_type: None,
        properties: PropertyMap::new(),
    };

    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// State for a typed link. `encoded` is `None` if the link cannot be encoded.
    pub fn from_link(link: &ChatLink) -> Self {
        let link_type = link.link_type();
        let encoded = match encode_chat_link(link) {
            Ok(encoded) => Some(encoded),
            Err(e) => {
                tracing::debug!("Failed to encode {} link: {}", link_type, e);
                None
            }
        };

        Self {
            encoded,
            link_type: Some(link_type),
            properties: link_type.extract(link).unwrap_or_default(),
        }
    }

    /// State for user-entered text. The text is kept verbatim.
    pub fn from_encoded(text: &str) -> Self {
        match decode_chat_link(text) {
            Ok(link) => {
                let link_type = link.link_type();
                Self {
                    encoded: Some(text.to_string()),
                    link_type: Some(link_type),
                    properties: link_type.extract(&link).unwrap_or_default(),
                }
            }
            Err(e) => {
                tracing::trace!("Chat code {:?} does not decode: {}", text, e);
                Self {
                    encoded: Some(text.to_string()),
                    link_type: None,
                    properties: PropertyMap::new(),
                }
            }
        }
    }

    /// Blank state of the given type: no text and every property unset.
    pub fn of_type(link_type: ChatLinkType) -> Self {
        Self {
            encoded: None,
            link_type: Some(link_type),
            properties: link_type.empty_properties(),
        }
    }

    /// State assembled from edited property values.
    ///
    /// Values for keys `link_type` does not declare are dropped. `encoded` is
    /// `None` while the values do not form an encodable link.
    pub fn from_properties(link_type: ChatLinkType, values: &PropertyMap) -> Self {
        let mut properties = link_type.empty_properties();
        for (name, value) in values.iter() {
            properties.set(name, value);
        }

        let encoded = link_type
            .assemble(&properties)
            .and_then(|link| encode_chat_link(&link).ok());

        Self {
            encoded,
            link_type: Some(link_type),
            properties,
        }
    }

    pub fn encoded(&self) -> Option<&str> {
        self.encoded.as_deref()
    }

    pub fn link_type(&self) -> Option<ChatLinkType> {
        self.link_type
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    pub fn get<T: PropertyValue>(&self, property: Property<T>) -> Option<T> {
        self.properties.get(property)
    }

    /// Whether the state holds a recognised link type.
    pub fn is_valid(&self) -> bool {
        self.link_type.is_some()
    }

    /// Whether the encoded text can be copied.
    pub fn is_copyable(&self) -> bool {
        self.is_valid() && self.encoded.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// The link described by the current properties, when complete.
    pub fn link(&self) -> Option<ChatLink> {
        self.link_type.and_then(|t| t.assemble(&self.properties))
    }

    /// Path mirrored into the navigation fragment.
    pub fn fragment(&self) -> &str {
        match (self.link_type, self.encoded.as_deref()) {
            (Some(_), Some(encoded)) if !encoded.trim().is_empty() => encoded.trim(),
            _ => ROOT_FRAGMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::item;

    #[test]
    fn test_empty_state() {
        let state = ChatLinkState::EMPTY;
        assert_eq!(state.encoded(), None);
        assert_eq!(state.link_type(), None);
        assert!(state.properties().is_empty());
        assert_eq!(state.fragment(), "/");
        assert_eq!(state, ChatLinkState::default());
    }

    #[test]
    fn test_from_link_encodes() {
        let state = ChatLinkState::from_link(&ChatLink::item(1, 46762));
        assert_eq!(state.encoded(), Some("[&AgGqtgAA]"));
        assert_eq!(state.link_type(), Some(ChatLinkType::Item));
        assert_eq!(state.get(item::ITEM_ID), Some(46762));
        assert_eq!(state.get(item::AMOUNT), Some(1));
    }

    #[test]
    fn test_from_link_unencodable_keeps_type() {
        let state = ChatLinkState::from_link(&ChatLink::item(1, 0x0100_0000));
        assert_eq!(state.encoded(), None);
        assert_eq!(state.link_type(), Some(ChatLinkType::Item));
        assert_eq!(state.fragment(), "/");
        assert!(!state.is_copyable());
    }

    #[test]
    fn test_from_encoded_valid() {
        let state = ChatLinkState::from_encoded("[&AgHcdwDgRhIAAOpfAAAnYAAA]");
        assert_eq!(state.link_type(), Some(ChatLinkType::Item));
        assert_eq!(state.get(item::ITEM_ID), Some(30684));
        assert_eq!(state.get(item::SKIN_ID), Some(4678));
        assert_eq!(state.get(item::FIRST_UPGRADE_SLOT), Some(24554));
        assert_eq!(state.get(item::SECOND_UPGRADE_SLOT), Some(24615));
        assert!(state.is_copyable());
    }

    #[test]
    fn test_from_encoded_invalid_keeps_text() {
        let state = ChatLinkState::from_encoded("[&AgGq");
        assert_eq!(state.encoded(), Some("[&AgGq"));
        assert_eq!(state.link_type(), None);
        assert!(state.properties().is_empty());
        assert!(!state.is_valid());
        assert_eq!(state.fragment(), "/");
    }

    #[test]
    fn test_of_type_declares_all_keys_without_values() {
        let state = ChatLinkState::of_type(ChatLinkType::Item);
        assert_eq!(state.encoded(), None);
        assert_eq!(state.properties().len(), 5);
        assert!(state.properties().iter().all(|(_, v)| v.is_none()));
        assert_eq!(state.link(), None);
    }

    #[test]
    fn test_from_properties_complete() {
        let mut values = ChatLinkType::Skin.empty_properties();
        values.set("skin_id", Some(4678));
        let state = ChatLinkState::from_properties(ChatLinkType::Skin, &values);
        assert_eq!(state.encoded(), Some("[&CkYSAAA=]"));
        assert_eq!(state.link(), Some(ChatLink::Skin { skin_id: 4678 }));
    }

    #[test]
    fn test_from_properties_drops_foreign_keys() {
        let mut values = ChatLinkType::Item.empty_properties();
        values.set("skin_id", Some(4678));
        values.set("amount", Some(1));
        let state = ChatLinkState::from_properties(ChatLinkType::Skin, &values);
        assert_eq!(state.properties().keys().collect::<Vec<_>>(), vec!["skin_id"]);
        assert_eq!(state.encoded(), Some("[&CkYSAAA=]"));
    }

    #[test]
    fn test_from_properties_out_of_range_item() {
        let mut values = ChatLinkType::Item.empty_properties();
        values.set("amount", Some(1));
        values.set("item_id", Some(0x0100_0000));
        let state = ChatLinkState::from_properties(ChatLinkType::Item, &values);
        assert_eq!(state.encoded(), None);
        assert_eq!(state.get(item::ITEM_ID), Some(0x0100_0000));
    }

    #[test]
    fn test_fragment_trims_user_text() {
        let state = ChatLinkState::from_encoded(" [&CkYSAAA=] ");
        assert_eq!(state.fragment(), "[&CkYSAAA=]");
    }
}
