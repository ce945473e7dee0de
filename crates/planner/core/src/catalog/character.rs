//! Playable characters and their abilities.

use std::fmt;

use crate::config::UPGRADE_TIERS;

use super::upgrade::Upgrade;

/// Identifier of a character.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CharacterId(pub String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an ability, unique within its character.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AbilityId(pub String);

impl AbilityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AbilityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Base attributes of a character before any item or investment bonus.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct BaseStats {
    pub health: f64,
    pub health_regen: f64,
    pub bullet_damage: f64,
    /// Bullets per second.
    pub fire_rate: f64,
    pub clip_size: f64,
    pub reload_time: f64,
    pub move_speed: f64,
    pub sprint_speed: f64,
    /// Stamina charges; `None` falls back to the balance-table default.
    pub stamina: Option<f64>,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AbilityKind {
    #[default]
    Basic,
    Ultimate,
}

/// A character ability with its three upgrade tiers (costing 1, 2 and 5 points).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Ability {
    pub id: AbilityId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default, rename = "type"))]
    pub kind: AbilityKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_damage: Option<f64>,
    /// Damage gained per point of spirit power.
    #[cfg_attr(feature = "serde", serde(default))]
    pub spirit_scaling: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: f64,
    pub upgrades: [Upgrade; UPGRADE_TIERS],
}

impl Ability {
    pub fn new(
        id: impl Into<AbilityId>,
        name: impl Into<String>,
        kind: AbilityKind,
        upgrades: [Upgrade; UPGRADE_TIERS],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            base_damage: None,
            spirit_scaling: None,
            cooldown: 0.0,
            duration: 0.0,
            range: 0.0,
            upgrades,
        }
    }

    pub fn with_damage(mut self, base_damage: f64, spirit_scaling: Option<f64>) -> Self {
        self.base_damage = Some(base_damage);
        self.spirit_scaling = spirit_scaling;
        self
    }

    pub fn is_ultimate(&self) -> bool {
        self.kind == AbilityKind::Ultimate
    }
}

/// A playable character. Loaded from content; never mutated by the planner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub base_stats: BaseStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<Ability>,
}

impl Character {
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_stats: BaseStats) -> Self {
        Self {
            id: CharacterId::new(id),
            name: name.into(),
            base_stats,
            abilities: Vec::new(),
        }
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    pub fn ability(&self, id: &AbilityId) -> Option<&Ability> {
        self.abilities.iter().find(|a| &a.id == id)
    }

    /// The ultimate ability, if the character defines exactly one.
    pub fn ultimate(&self) -> Option<&Ability> {
        let mut ultimates = self.abilities.iter().filter(|a| a.is_ultimate());
        match (ultimates.next(), ultimates.next()) {
            (Some(ultimate), None) => Some(ultimate),
            _ => None,
        }
    }
}
