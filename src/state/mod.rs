//! Link state container.
//!
//! [`ChatLinkState`] wraps a link's text form, its type and the values its
//! type declares as typed properties. The property keys for each type live in
//! the per-type submodules ([`item`], [`skin`], ...).

mod link_state;
mod link_type;
mod property;

pub use link_state::{ChatLinkState, ROOT_FRAGMENT};
pub use link_type::{
    coin, item, map, npc_text, outfit, recipe, skill, skill_trait, skin, wvw_objective,
};
pub use property::{Property, PropertyDescriptor, PropertyMap, PropertyValue};
