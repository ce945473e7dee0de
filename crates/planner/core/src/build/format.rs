//! Persisted build representations and the legacy-format migration.
//!
//! Two shapes are accepted on load:
//!
//! - **current**: an ordered array of up to 12 optional item ids
//! - **legacy**: `{ weapon, vitality, spirit, flex }` groups, flattened in that
//!   fixed order into sequential slots
//!
//! [`BuildData::normalize`] is the only place that knows about the legacy shape;
//! everything downstream sees a [`NormalizedBuild`].

use super::upgrades::AbilityUpgrades;
use crate::catalog::{CharacterId, ItemId};
use crate::config::SLOT_COUNT;

/// Serialized build, in either supported format.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum BuildData {
    /// Current format: slot-ordered item ids, `None` for empty slots.
    Slots(Vec<Option<ItemId>>),
    /// Category-keyed format written by older planner versions.
    Legacy(LegacyBuild),
}

/// Category-keyed build groups. Missing groups are empty; any other key is
/// rejected so that an unrelated object never reads as an empty build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LegacyBuild {
    pub weapon: Vec<Option<ItemId>>,
    pub vitality: Vec<Option<ItemId>>,
    pub spirit: Vec<Option<ItemId>>,
    pub flex: Vec<Option<ItemId>>,
}

impl LegacyBuild {
    /// Groups in flattening order.
    pub fn groups(&self) -> [&[Option<ItemId>]; 4] {
        [&self.weapon, &self.vitality, &self.spirit, &self.flex]
    }
}

/// A build in slot order, exactly [`SLOT_COUNT`] entries long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedBuild {
    pub slots: [Option<ItemId>; SLOT_COUNT],
    /// Entries that did not fit into the 12 slots and were dropped.
    pub overflow: usize,
    pub legacy: bool,
}

impl BuildData {
    /// An empty build in the current format.
    pub fn empty() -> Self {
        BuildData::Slots(vec![None; SLOT_COUNT])
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, BuildData::Legacy(_))
    }

    /// Detects the format and produces the 12-slot representation.
    ///
    /// Legacy groups skip their empty entries so that items pack into
    /// sequential slots; current-format arrays keep their positions.
    pub fn normalize(&self) -> NormalizedBuild {
        let mut slots: [Option<ItemId>; SLOT_COUNT] = std::array::from_fn(|_| None);
        let mut overflow = 0;

        match self {
            BuildData::Slots(entries) => {
                for (index, entry) in entries.iter().enumerate() {
                    if index < SLOT_COUNT {
                        slots[index] = entry.clone();
                    } else if entry.is_some() {
                        overflow += 1;
                    }
                }
            }
            BuildData::Legacy(legacy) => {
                let ids = legacy.groups().into_iter().flatten().flatten();
                for (index, id) in ids.enumerate() {
                    if index < SLOT_COUNT {
                        slots[index] = Some(id.clone());
                    } else {
                        overflow += 1;
                    }
                }
            }
        }

        NormalizedBuild {
            slots,
            overflow,
            legacy: self.is_legacy(),
        }
    }
}

impl Default for BuildData {
    fn default() -> Self {
        Self::empty()
    }
}

/// Result of [`Build::load`](super::Build::load).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Slots that received an item.
    pub loaded: usize,
    /// Ids the catalog could not resolve; their slots stay empty.
    pub unknown: Vec<ItemId>,
    /// Repeated ids; only the first occurrence is equipped.
    pub duplicates: Vec<ItemId>,
    /// Entries dropped for not fitting into the 12 slots.
    pub overflow: usize,
    pub migrated_legacy: bool,
}

impl LoadReport {
    /// True when every entry of the source data landed in a slot.
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty() && self.duplicates.is_empty() && self.overflow == 0
    }
}

/// A build bundled with its character and ability upgrades.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedBuild {
    pub character: CharacterId,
    pub slots: BuildData,
    #[cfg_attr(feature = "serde", serde(default))]
    pub upgrades: AbilityUpgrades,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> Option<ItemId> {
        Some(ItemId::new(raw))
    }

    #[test]
    fn short_arrays_are_padded() {
        let data = BuildData::Slots(vec![id("a"), None, id("c")]);
        let normalized = data.normalize();
        assert_eq!(normalized.slots[0], id("a"));
        assert_eq!(normalized.slots[1], None);
        assert_eq!(normalized.slots[2], id("c"));
        assert!(normalized.slots[3..].iter().all(Option::is_none));
        assert_eq!(normalized.overflow, 0);
        assert!(!normalized.legacy);
    }

    #[test]
    fn long_arrays_count_overflow() {
        let mut entries: Vec<_> = (0..14).map(|i| id(&format!("item_{i}"))).collect();
        entries.push(None);
        let normalized = BuildData::Slots(entries).normalize();
        assert_eq!(normalized.slots[11], id("item_11"));
        assert_eq!(normalized.overflow, 2);
    }

    #[test]
    fn legacy_groups_flatten_in_category_order() {
        let legacy = LegacyBuild {
            weapon: vec![id("w1"), None, id("w2")],
            vitality: vec![id("v1")],
            spirit: vec![],
            flex: vec![id("f1")],
        };
        let normalized = BuildData::Legacy(legacy).normalize();
        assert!(normalized.legacy);
        assert_eq!(
            &normalized.slots[..4],
            &[id("w1"), id("w2"), id("v1"), id("f1")]
        );
        assert!(normalized.slots[4..].iter().all(Option::is_none));
    }

    #[test]
    fn legacy_overflow_is_dropped() {
        let legacy = LegacyBuild {
            weapon: (0..6).map(|i| id(&format!("w{i}"))).collect(),
            vitality: (0..6).map(|i| id(&format!("v{i}"))).collect(),
            spirit: (0..3).map(|i| id(&format!("s{i}"))).collect(),
            flex: vec![],
        };
        let normalized = BuildData::Legacy(legacy).normalize();
        assert_eq!(normalized.slots[11], id("v5"));
        assert_eq!(normalized.overflow, 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn detects_format_from_json_shape() {
        let current: BuildData = serde_json::from_str(r#"["a", null, "b"]"#).unwrap();
        assert_eq!(current, BuildData::Slots(vec![id("a"), None, id("b")]));

        let legacy: BuildData =
            serde_json::from_str(r#"{"weapon": ["a"], "flex": ["b", null]}"#).unwrap();
        match legacy {
            BuildData::Legacy(groups) => {
                assert_eq!(groups.weapon, vec![id("a")]);
                assert!(groups.vitality.is_empty());
                assert_eq!(groups.flex, vec![id("b"), None]);
            }
            other => panic!("expected legacy build, got {other:?}"),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_legacy_keys_are_rejected() {
        assert!(serde_json::from_str::<BuildData>(r#"{"weapons": ["a"]}"#).is_err());
        assert!(serde_json::from_str::<BuildData>(r#"{"slots": ["a"]}"#).is_err());
        let empty: BuildData = serde_json::from_str("{}").unwrap();
        assert!(empty.is_legacy());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn saved_build_defaults_upgrades() {
        let saved: SavedBuild =
            serde_json::from_str(r#"{"character": "haze", "slots": []}"#).unwrap();
        assert_eq!(saved.character, CharacterId::new("haze"));
        assert!(saved.upgrades.is_empty());
    }
}
