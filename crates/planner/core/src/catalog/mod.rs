//! Content types supplied by the data-loading collaborators.
//!
//! Everything here is immutable input to the planner: characters with their
//! abilities, and the item catalog. Builds refer to items by [`ItemId`] when
//! persisted and resolve them through [`ItemLookup`].

pub mod character;
pub mod item;
pub mod upgrade;

use std::collections::BTreeMap;

pub use character::{Ability, AbilityId, AbilityKind, BaseStats, Character, CharacterId};
pub use item::{Item, ItemCategory, ItemEffect, ItemId};
pub use upgrade::{Upgrade, UpgradeEffect};

/// Resolves item ids to item definitions.
pub trait ItemLookup {
    fn item(&self, id: &ItemId) -> Option<&Item>;
}

impl ItemLookup for [Item] {
    fn item(&self, id: &ItemId) -> Option<&Item> {
        self.iter().find(|item| &item.id == id)
    }
}

impl ItemLookup for Vec<Item> {
    fn item(&self, id: &ItemId) -> Option<&Item> {
        self.as_slice().item(id)
    }
}

/// Item catalog indexed by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemCatalog {
    items: BTreeMap<ItemId, Item>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item, returning the definition it replaced if the id was taken.
    pub fn insert(&mut self, item: Item) -> Option<Item> {
        self.items.insert(item.id.clone(), item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }
}

impl ItemLookup for ItemCatalog {
    fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }
}

impl FromIterator<Item> for ItemCatalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for item in iter {
            catalog.insert(item);
        }
        catalog
    }
}
