//! Text and byte level encoding of [`ChatLink`].

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use super::error::ChatLinkError;
use super::wire::{LinkReader, LinkWriter};
use super::{ChatLink, ChatLinkType};

const PREFIX: &str = "[&";
const SUFFIX: char = ']';

const FLAG_SKIN: u8 = 0x80;
const FLAG_FIRST_UPGRADE: u8 = 0x40;
const FLAG_SECOND_UPGRADE: u8 = 0x20;
const FLAG_MASK: u8 = FLAG_SKIN | FLAG_FIRST_UPGRADE | FLAG_SECOND_UPGRADE;

/// Encode a link to its `[&...]` text form.
pub fn encode_chat_link(link: &ChatLink) -> Result<String, ChatLinkError> {
    let bytes = to_bytes(link)?;
    Ok(format!("{PREFIX}{}{SUFFIX}", BASE64.encode(bytes)))
}

/// Decode the `[&...]` text form. Surrounding whitespace is ignored.
pub fn decode_chat_link(text: &str) -> Result<ChatLink, ChatLinkError> {
    let payload = text
        .trim()
        .strip_prefix(PREFIX)
        .and_then(|rest| rest.strip_suffix(SUFFIX))
        .ok_or(ChatLinkError::MissingDelimiters)?;

    let bytes = BASE64
        .decode(payload)
        .map_err(|e| ChatLinkError::InvalidBase64(e.to_string()))?;

    from_bytes(&bytes)
}

/// Serialize a link to its binary payload, header byte included.
pub fn to_bytes(link: &ChatLink) -> Result<Vec<u8>, ChatLinkError> {
    let mut w = LinkWriter::new(link.header());

    match *link {
        ChatLink::Item {
            amount,
            item_id,
            skin_id,
            first_upgrade_slot,
            second_upgrade_slot,
        } => {
            let mut flags = 0u8;
            if skin_id.is_some() {
                flags |= FLAG_SKIN;
            }
            if first_upgrade_slot.is_some() {
                flags |= FLAG_FIRST_UPGRADE;
            }
            if second_upgrade_slot.is_some() {
                flags |= FLAG_SECOND_UPGRADE;
            }

            w.put_u8(amount);
            w.put_u24("item_id", item_id)?;
            w.put_u8(flags);
            for id in [skin_id, first_upgrade_slot, second_upgrade_slot]
                .into_iter()
                .flatten()
            {
                w.put_u32(id);
            }
        }
        ChatLink::WvwObjective {
            objective_id,
            map_id,
        } => {
            w.put_u32(objective_id);
            w.put_u32(map_id);
        }
        ChatLink::Coin { copper: id }
        | ChatLink::NpcText { text_id: id }
        | ChatLink::Map { poi_id: id }
        | ChatLink::Skill { skill_id: id }
        | ChatLink::Trait { trait_id: id }
        | ChatLink::Recipe { recipe_id: id }
        | ChatLink::Skin { skin_id: id }
        | ChatLink::Outfit { outfit_id: id } => w.put_u32(id),
    }

    Ok(w.finish())
}

/// Parse a binary payload, header byte included.
pub fn from_bytes(bytes: &[u8]) -> Result<ChatLink, ChatLinkError> {
    let (&header, _) = bytes.split_first().ok_or(ChatLinkError::Empty)?;
    let link_type = ChatLinkType::from_header(header).ok_or(ChatLinkError::UnknownHeader(header))?;

    let mut r = LinkReader::new(&bytes[1..]);

    let link = match link_type {
        ChatLinkType::Item => {
            let amount = r.get_u8()?;
            let item_id = r.get_u24()?;
            let flags = r.get_u8()?;
            if flags & !FLAG_MASK != 0 {
                return Err(ChatLinkError::InvalidFlags(flags));
            }

            let mut optional = |flag: u8| -> Result<Option<u32>, ChatLinkError> {
                if flags & flag != 0 {
                    r.get_u32().map(Some)
                } else {
                    Ok(None)
                }
            };

            let skin_id = optional(FLAG_SKIN)?;
            let first_upgrade_slot = optional(FLAG_FIRST_UPGRADE)?;
            let second_upgrade_slot = optional(FLAG_SECOND_UPGRADE)?;

            ChatLink::Item {
                amount,
                item_id,
                skin_id,
                first_upgrade_slot,
                second_upgrade_slot,
            }
        }
        ChatLinkType::WvwObjective => ChatLink::WvwObjective {
            objective_id: r.get_u32()?,
            map_id: r.get_u32()?,
        },
        ChatLinkType::Coin => ChatLink::Coin { copper: r.get_u32()? },
        ChatLinkType::NpcText => ChatLink::NpcText { text_id: r.get_u32()? },
        ChatLinkType::Map => ChatLink::Map { poi_id: r.get_u32()? },
        ChatLinkType::Skill => ChatLink::Skill { skill_id: r.get_u32()? },
        ChatLinkType::Trait => ChatLink::Trait { trait_id: r.get_u32()? },
        ChatLinkType::Recipe => ChatLink::Recipe { recipe_id: r.get_u32()? },
        ChatLinkType::Skin => ChatLink::Skin { skin_id: r.get_u32()? },
        ChatLinkType::Outfit => ChatLink::Outfit { outfit_id: r.get_u32()? },
    };

    r.finish()?;
    Ok(link)
}
