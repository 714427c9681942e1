//! Typed property keys and the ordered property map of a link state.

use std::fmt;
use std::marker::PhantomData;

/// A value type a property can hold. Every property fits in a `u32`.
pub trait PropertyValue: Copy {
    fn to_raw(self) -> u32;
    fn from_raw(raw: u32) -> Option<Self>;
}

impl PropertyValue for u8 {
    fn to_raw(self) -> u32 {
        u32::from(self)
    }

    fn from_raw(raw: u32) -> Option<Self> {
        u8::try_from(raw).ok()
    }
}

impl PropertyValue for u32 {
    fn to_raw(self) -> u32 {
        self
    }

    fn from_raw(raw: u32) -> Option<Self> {
        Some(raw)
    }
}

/// Typed key into a [`PropertyMap`].
pub struct Property<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Property<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Property<T> {}

impl<T> PartialEq for Property<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for Property<T> {}

impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Property({})", self.name)
    }
}

/// Untyped description of a property, used to build and edit forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    /// Largest value the field accepts.
    pub max: u32,
    /// Whether the link can be assembled without this field.
    pub optional: bool,
}

/// Property values in declaration order. Values are nullable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyMap {
    entries: Vec<(&'static str, Option<u32>)>,
}

impl PropertyMap {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A map declaring `descriptors` with every value unset.
    pub fn declared(descriptors: &[PropertyDescriptor]) -> Self {
        Self {
            entries: descriptors.iter().map(|d| (d.name, None)).collect(),
        }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: Option<u32>) {
        self.entries.push((name, value));
    }

    pub fn get<T: PropertyValue>(&self, property: Property<T>) -> Option<T> {
        self.get_raw(property.name()).and_then(T::from_raw)
    }

    pub fn get_raw(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| *value)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| *key == name)
    }

    /// Set the value of a declared key. Returns `false` for unknown keys.
    pub fn set(&mut self, name: &str, value: Option<u32>) -> bool {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => {
                entry.1 = value;
                true
            }
            None => false,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<u32>)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
