//! Per-ability upgrade levels.

use std::collections::BTreeMap;

use super::error::BuildError;
use crate::catalog::AbilityId;
use crate::config::MAX_UPGRADE_LEVEL;

/// Upgrade level (0..=3) per ability. Abilities at level 0 are not stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AbilityUpgrades {
    levels: BTreeMap<AbilityId, u8>,
}

impl AbilityUpgrades {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level of `ability` (0 when never upgraded).
    pub fn level(&self, ability: &AbilityId) -> u8 {
        self.levels.get(ability).copied().unwrap_or(0)
    }

    /// Sets the level of `ability`, returning the previous level.
    pub fn set_level(&mut self, ability: AbilityId, level: u8) -> Result<u8, BuildError> {
        if level > MAX_UPGRADE_LEVEL {
            return Err(BuildError::UpgradeLevelOutOfRange {
                ability,
                level,
                max: MAX_UPGRADE_LEVEL,
            });
        }
        let previous = if level == 0 {
            self.levels.remove(&ability)
        } else {
            self.levels.insert(ability, level)
        };
        Ok(previous.unwrap_or(0))
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Abilities with a non-zero level, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&AbilityId, u8)> {
        self.levels.iter().map(|(id, level)| (id, *level))
    }
}

impl FromIterator<(AbilityId, u8)> for AbilityUpgrades {
    fn from_iter<I: IntoIterator<Item = (AbilityId, u8)>>(iter: I) -> Self {
        let mut upgrades = Self::new();
        for (ability, level) in iter {
            if level > 0 {
                upgrades.levels.insert(ability, level.min(MAX_UPGRADE_LEVEL));
            }
        }
        upgrades
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlannerError;

    #[test]
    fn levels_default_to_zero() {
        let upgrades = AbilityUpgrades::new();
        assert_eq!(upgrades.level(&AbilityId::new("catalyst")), 0);
        assert!(upgrades.is_empty());
    }

    #[test]
    fn set_level_returns_previous_and_drops_zero() {
        let mut upgrades = AbilityUpgrades::new();
        let id = AbilityId::new("catalyst");
        assert_eq!(upgrades.set_level(id.clone(), 2), Ok(0));
        assert_eq!(upgrades.set_level(id.clone(), 3), Ok(2));
        assert_eq!(upgrades.level(&id), 3);
        assert_eq!(upgrades.set_level(id.clone(), 0), Ok(3));
        assert!(upgrades.is_empty());
    }

    #[test]
    fn level_above_three_is_rejected() {
        let mut upgrades = AbilityUpgrades::new();
        let err = upgrades
            .set_level(AbilityId::new("catalyst"), 4)
            .unwrap_err();
        assert_eq!(err.error_code(), "BUILD_UPGRADE_LEVEL_OUT_OF_RANGE");
        assert!(upgrades.is_empty());
    }

    #[test]
    fn collect_clamps_levels() {
        let upgrades: AbilityUpgrades = [
            (AbilityId::new("a"), 9),
            (AbilityId::new("b"), 0),
            (AbilityId::new("c"), 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(upgrades.level(&AbilityId::new("a")), 3);
        assert_eq!(upgrades.iter().count(), 2);
    }
}
