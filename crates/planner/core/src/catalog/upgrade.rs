//! Ability upgrade tiers and their classified effects.
//!
//! Upgrade text in the datasets is free-form narrative ("+8 Damage", "Gains lifesteal").
//! Each description is classified exactly once, when the [`Upgrade`] is built or
//! deserialized, into an [`UpgradeEffect`]. Calculations only ever look at the
//! classified effect, never at the text.

use std::sync::LazyLock;

use regex::Regex;

// "+<integer> Damage" or "+<integer> DPS", case-insensitive.
static DAMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\+(\d+)\s*(?:damage|dps)").expect("valid regex"));
// "+<number>[s] Duration", case-insensitive.
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\+(\d+(?:\.\d+)?)s?\s*duration").expect("valid regex")
});

/// What an upgrade tier does, as far as the planner can tell.
#[derive(Clone, Debug, PartialEq)]
pub enum UpgradeEffect {
    /// Flat damage added to the ability.
    DamageBonus(i64),
    /// Seconds added to the ability duration.
    DurationBonus(f64),
    /// Anything the planner does not model; carries the original text.
    Other(String),
}

impl UpgradeEffect {
    /// Classifies upgrade text. Damage takes precedence over duration when both appear.
    pub fn classify(description: &str) -> Self {
        if let Some(amount) = DAMAGE_RE
            .captures(description)
            .and_then(|caps| caps[1].parse::<i64>().ok())
        {
            return Self::DamageBonus(amount);
        }
        if let Some(amount) = DURATION_RE
            .captures(description)
            .and_then(|caps| caps[1].parse::<f64>().ok())
        {
            return Self::DurationBonus(amount);
        }
        Self::Other(description.to_owned())
    }

    /// Damage contributed to the ability damage total (0 for non-damage effects).
    pub fn damage_bonus(&self) -> i64 {
        match self {
            Self::DamageBonus(amount) => *amount,
            Self::DurationBonus(_) | Self::Other(_) => 0,
        }
    }

    pub fn is_modelled(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// One purchasable upgrade tier of an ability.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "UpgradeRecord", into = "UpgradeRecord")
)]
pub struct Upgrade {
    pub description: String,
    pub effect: UpgradeEffect,
}

impl Upgrade {
    pub fn new(description: impl Into<String>) -> Self {
        let description = description.into();
        let effect = UpgradeEffect::classify(&description);
        Self {
            description,
            effect,
        }
    }
}

/// Dataset shape of an upgrade: either bare text or `{ "description": ... }`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum UpgradeRecord {
    Text(String),
    Record { description: String },
}

#[cfg(feature = "serde")]
impl From<UpgradeRecord> for Upgrade {
    fn from(record: UpgradeRecord) -> Self {
        match record {
            UpgradeRecord::Text(description) | UpgradeRecord::Record { description } => {
                Upgrade::new(description)
            }
        }
    }
}

#[cfg(feature = "serde")]
impl From<Upgrade> for UpgradeRecord {
    fn from(upgrade: Upgrade) -> Self {
        UpgradeRecord::Record {
            description: upgrade.description,
        }
    }
}
