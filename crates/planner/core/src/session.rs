//! Planner session: the explicit state a UI host holds for one character.
//!
//! The session owns the selected character, its [`Build`], its
//! [`AbilityUpgrades`] and a [`StatsEngine`]. Stats are never cached; each
//! [`PlannerSession::stats`] call recomputes the snapshot from scratch.

use crate::build::{AbilityUpgrades, Build, BuildError, EquipOutcome, LoadReport, SavedBuild};
use crate::catalog::{Ability, AbilityId, Character, Item, ItemLookup};
use crate::config::PlannerConfig;
use crate::stats::{AbilityDamage, DerivedStats, StatsEngine, points_used_with};

/// Damage line for one ability of the session character.
#[derive(Clone, Debug, PartialEq)]
pub struct AbilitySummary<'a> {
    pub ability: &'a Ability,
    pub level: u8,
    /// `None` for abilities without base damage.
    pub damage: Option<AbilityDamage>,
}

#[derive(Debug)]
pub struct PlannerSession {
    character: Character,
    build: Build,
    upgrades: AbilityUpgrades,
    engine: StatsEngine,
    enforce_point_budget: bool,
}

impl PlannerSession {
    pub fn new(character: Character, config: &PlannerConfig) -> Self {
        Self {
            character,
            build: Build::with_config(config),
            upgrades: AbilityUpgrades::new(),
            engine: StatsEngine::new(config.tables.clone()),
            enforce_point_budget: config.enforce_point_budget,
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn build(&self) -> &Build {
        &self.build
    }

    /// Mutable build access, e.g. to subscribe observers.
    pub fn build_mut(&mut self) -> &mut Build {
        &mut self.build
    }

    pub fn upgrades(&self) -> &AbilityUpgrades {
        &self.upgrades
    }

    pub fn engine(&self) -> &StatsEngine {
        &self.engine
    }

    pub fn equip(&mut self, slot: usize, item: Item) -> Result<EquipOutcome, BuildError> {
        self.build.equip(slot, item)
    }

    pub fn unequip(&mut self, slot: usize) -> Result<Option<Item>, BuildError> {
        self.build.unequip(slot)
    }

    /// Sets the upgrade level of one of the character's abilities.
    ///
    /// Returns the previous level. With point budget enforcement on, a level
    /// whose total cost exceeds the points earned so far is rejected; lowering
    /// a level is always allowed.
    pub fn set_upgrade(&mut self, ability: AbilityId, level: u8) -> Result<u8, BuildError> {
        if self.character.ability(&ability).is_none() {
            return Err(BuildError::UnknownAbility { ability });
        }

        let mut candidate = self.upgrades.clone();
        let previous = candidate.set_level(ability.clone(), level)?;

        if self.enforce_point_budget && level > previous {
            let tables = self.engine.tables();
            let required = points_used_with(&candidate, tables);
            let available = tables.points_for_souls(self.build.total_souls());
            if required > available {
                return Err(BuildError::PointBudgetExceeded {
                    required,
                    available,
                });
            }
        }

        tracing::debug!(ability = %ability, previous, level, "set ability upgrade");
        self.upgrades = candidate;
        Ok(previous)
    }

    /// Clears all slots and upgrade levels.
    pub fn reset(&mut self) {
        self.build.reset();
        self.upgrades.clear();
    }

    /// Selects another character, discarding the build and upgrades.
    /// Observers stay subscribed and see a [`Reset`](crate::BuildChange::Reset).
    pub fn switch_character(&mut self, character: Character) -> Character {
        tracing::info!(from = %self.character.id, to = %character.id, "switching character");
        let previous = std::mem::replace(&mut self.character, character);
        self.reset();
        previous
    }

    /// Recomputes the derived stats snapshot.
    pub fn stats(&self) -> DerivedStats {
        self.engine
            .compute(&self.character, self.build.equipped_items(), &self.upgrades)
    }

    /// Damage of every ability at the current spirit power and upgrade levels.
    pub fn ability_damage(&self) -> Vec<AbilitySummary<'_>> {
        let derived = self.stats();
        self.character
            .abilities
            .iter()
            .map(|ability| AbilitySummary {
                ability,
                level: self.upgrades.level(&ability.id),
                damage: self.engine.ability_damage(ability, &derived, &self.upgrades),
            })
            .collect()
    }

    pub fn save(&self) -> SavedBuild {
        SavedBuild {
            character: self.character.id.clone(),
            slots: self.build.build_data(),
            upgrades: self.upgrades.clone(),
        }
    }

    /// Restores a saved build for the session character.
    ///
    /// Like [`Build::load`], no slot lock or point budget rule is applied.
    /// Upgrade entries for unknown abilities or out-of-range levels are dropped.
    pub fn restore<L>(&mut self, saved: &SavedBuild, lookup: &L) -> Result<LoadReport, BuildError>
    where
        L: ItemLookup + ?Sized,
    {
        if saved.character != self.character.id {
            return Err(BuildError::CharacterMismatch {
                expected: self.character.id.clone(),
                found: saved.character.clone(),
            });
        }

        let mut upgrades = AbilityUpgrades::new();
        for (ability, level) in saved.upgrades.iter() {
            if self.character.ability(ability).is_none() {
                tracing::warn!(ability = %ability, "dropping upgrade for unknown ability");
                continue;
            }
            if let Err(err) = upgrades.set_level(ability.clone(), level) {
                tracing::warn!(%err, "dropping saved upgrade");
            }
        }

        let report = self.build.load(&saved.slots, lookup);
        self.upgrades = upgrades;
        Ok(report)
    }
}
