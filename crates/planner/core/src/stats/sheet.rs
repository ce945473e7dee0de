//! Stat Sheet - Layer 1 of the stat pipeline.
//!
//! A [`StatSheet`] is seeded from a character's base stats and receives every item
//! stat modifier additively. Modifier keys use the dataset's camelCase names; keys
//! the planner does not model are still summed, into [`StatSheet::extra`].

use std::collections::BTreeMap;
use std::str::FromStr;

use strum::IntoEnumIterator;

use super::layer::StatLayer;
use crate::catalog::{BaseStats, Item};

/// Stats the planner models, named as in the item datasets.
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
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "camelCase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum StatKey {
    Health,
    HealthRegen,
    BulletDamage,
    FireRate,
    ClipSize,
    ReloadTime,
    MoveSpeed,
    SprintSpeed,
    Stamina,
    WeaponDamage,
    SpiritPower,
    BulletLifesteal,
    SpiritLifesteal,
    BulletResist,
    SpiritResist,
    CooldownReduction,
    AbilityRange,
    AbilityDuration,
}

/// Flat record of every modelled stat plus any unmodelled item keys.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StatSheet {
    pub health: f64,
    pub health_regen: f64,
    pub bullet_damage: f64,
    pub fire_rate: f64,
    pub clip_size: f64,
    pub reload_time: f64,
    pub move_speed: f64,
    pub sprint_speed: f64,
    pub stamina: f64,
    /// Fractional bonus to bullet damage (0.1 = +10%).
    pub weapon_damage: f64,
    pub spirit_power: f64,
    pub bullet_lifesteal: f64,
    pub spirit_lifesteal: f64,
    pub bullet_resist: f64,
    pub spirit_resist: f64,
    pub cooldown_reduction: f64,
    pub ability_range: f64,
    pub ability_duration: f64,
    /// Item stat keys without a [`StatKey`], summed verbatim.
    pub extra: BTreeMap<String, f64>,
}

impl StatSheet {
    /// Seeds a sheet from base stats; accumulator stats start at zero.
    pub fn seed(base: &BaseStats, default_stamina: f64) -> Self {
        Self {
            health: base.health,
            health_regen: base.health_regen,
            bullet_damage: base.bullet_damage,
            fire_rate: base.fire_rate,
            clip_size: base.clip_size,
            reload_time: base.reload_time,
            move_speed: base.move_speed,
            sprint_speed: base.sprint_speed,
            stamina: base.stamina.unwrap_or(default_stamina),
            ..Self::default()
        }
    }

    pub fn get(&self, key: StatKey) -> f64 {
        match key {
            StatKey::Health => self.health,
            StatKey::HealthRegen => self.health_regen,
            StatKey::BulletDamage => self.bullet_damage,
            StatKey::FireRate => self.fire_rate,
            StatKey::ClipSize => self.clip_size,
            StatKey::ReloadTime => self.reload_time,
            StatKey::MoveSpeed => self.move_speed,
            StatKey::SprintSpeed => self.sprint_speed,
            StatKey::Stamina => self.stamina,
            StatKey::WeaponDamage => self.weapon_damage,
            StatKey::SpiritPower => self.spirit_power,
            StatKey::BulletLifesteal => self.bullet_lifesteal,
            StatKey::SpiritLifesteal => self.spirit_lifesteal,
            StatKey::BulletResist => self.bullet_resist,
            StatKey::SpiritResist => self.spirit_resist,
            StatKey::CooldownReduction => self.cooldown_reduction,
            StatKey::AbilityRange => self.ability_range,
            StatKey::AbilityDuration => self.ability_duration,
        }
    }

    pub fn get_mut(&mut self, key: StatKey) -> &mut f64 {
        match key {
            StatKey::Health => &mut self.health,
            StatKey::HealthRegen => &mut self.health_regen,
            StatKey::BulletDamage => &mut self.bullet_damage,
            StatKey::FireRate => &mut self.fire_rate,
            StatKey::ClipSize => &mut self.clip_size,
            StatKey::ReloadTime => &mut self.reload_time,
            StatKey::MoveSpeed => &mut self.move_speed,
            StatKey::SprintSpeed => &mut self.sprint_speed,
            StatKey::Stamina => &mut self.stamina,
            StatKey::WeaponDamage => &mut self.weapon_damage,
            StatKey::SpiritPower => &mut self.spirit_power,
            StatKey::BulletLifesteal => &mut self.bullet_lifesteal,
            StatKey::SpiritLifesteal => &mut self.spirit_lifesteal,
            StatKey::BulletResist => &mut self.bullet_resist,
            StatKey::SpiritResist => &mut self.spirit_resist,
            StatKey::CooldownReduction => &mut self.cooldown_reduction,
            StatKey::AbilityRange => &mut self.ability_range,
            StatKey::AbilityDuration => &mut self.ability_duration,
        }
    }

    /// Adds a modifier by dataset key, routing unknown keys to `extra`.
    pub fn add_raw(&mut self, key: &str, value: f64) {
        match StatKey::from_str(key) {
            Ok(stat) => *self.get_mut(stat) += value,
            Err(_) => *self.extra.entry(key.to_owned()).or_insert(0.0) += value,
        }
    }

    /// Field-wise sum of `other` into `self`.
    pub fn accumulate(&mut self, other: &StatSheet) {
        for key in StatKey::iter() {
            *self.get_mut(key) += other.get(key);
        }
        for (key, value) in &other.extra {
            *self.extra.entry(key.clone()).or_insert(0.0) += value;
        }
    }
}

/// Item stat deltas, summed across all equipped items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemBonuses {
    deltas: StatSheet,
}

impl ItemBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: &Item) {
        for (key, value) in &item.stats {
            self.deltas.add_raw(key, *value);
        }
    }

    pub fn add_raw(&mut self, key: &str, value: f64) {
        self.deltas.add_raw(key, value);
    }

    /// The summed deltas, for "+X from items" breakdowns.
    pub fn deltas(&self) -> &StatSheet {
        &self.deltas
    }

    pub fn into_deltas(self) -> StatSheet {
        self.deltas
    }
}

impl<'a> FromIterator<&'a Item> for ItemBonuses {
    fn from_iter<I: IntoIterator<Item = &'a Item>>(iter: I) -> Self {
        let mut bonuses = Self::new();
        for item in iter {
            bonuses.add_item(item);
        }
        bonuses
    }
}

/// Layer 1: base sheet plus item deltas.
impl StatLayer for StatSheet {
    type Base = StatSheet;
    type Bonuses = ItemBonuses;
    type Final = StatSheet;

    fn compute(base: &Self::Base, bonuses: &Self::Bonuses) -> Self::Final {
        let mut sheet = base.clone();
        sheet.accumulate(&bonuses.deltas);
        sheet
    }

    fn empty_bonuses() -> Self::Bonuses {
        ItemBonuses::new()
    }
}
