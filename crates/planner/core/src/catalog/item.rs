//! Upgrade item definitions.

use std::collections::BTreeMap;
use std::fmt;

/// Identifier of an item in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Shop category of an item; also names the investment track its cost feeds.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemCategory {
    Weapon,
    Vitality,
    Spirit,
}

/// Passive or active effect text attached to an item.
///
/// Effects are display data only; the engine never evaluates them.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemEffect {
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown: Option<f64>,
}

impl ItemEffect {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            cooldown: None,
        }
    }

    pub fn with_cooldown(mut self, cooldown: f64) -> Self {
        self.cooldown = Some(cooldown);
        self
    }
}

/// An item that can be equipped into a build slot.
///
/// `stats` maps dataset stat names (e.g. `"bulletResist"`) to modifiers. Whether a
/// modifier reads as flat or percentage is a display concern; the engine adds them all.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: ItemCategory,
    /// Price in souls. Signed so malformed data flows through instead of failing to load.
    pub cost: i64,
    #[cfg_attr(feature = "serde", serde(default = "default_tier"))]
    pub tier: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: BTreeMap<String, f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub passive: Option<ItemEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub active: Option<ItemEffect>,
}

#[cfg(feature = "serde")]
fn default_tier() -> u8 {
    1
}

impl Item {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        category: ItemCategory,
        cost: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            cost,
            tier: 1,
            stats: BTreeMap::new(),
            passive: None,
            active: None,
        }
    }

    pub fn with_tier(mut self, tier: u8) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_stat(mut self, key: impl Into<String>, value: f64) -> Self {
        self.stats.insert(key.into(), value);
        self
    }

    pub fn with_passive(mut self, effect: ItemEffect) -> Self {
        self.passive = Some(effect);
        self
    }

    pub fn with_active(mut self, effect: ItemEffect) -> Self {
        self.active = Some(effect);
        self
    }

    /// True when the item carries both a passive and an active effect.
    ///
    /// Tolerated everywhere; content validation reports it.
    pub fn has_conflicting_effects(&self) -> bool {
        self.passive.is_some() && self.active.is_some()
    }
}
