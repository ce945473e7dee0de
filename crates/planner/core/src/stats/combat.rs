//! Combat Numbers - Layer 3 of the stat pipeline.
//!
//! Formulas:
//! - effective bullet damage = bullet damage × (1 + weapon damage)
//! - DPS = effective bullet damage × fire rate
//! - burst = effective bullet damage × clip size
//! - effective health = health / (1 − resist), infinite at resist ≥ 1

use super::layer::StatLayer;
use super::sheet::StatSheet;

/// Health adjusted for one damage type's resistance.
pub fn effective_health(health: f64, resist: f64) -> f64 {
    if resist >= 1.0 {
        f64::INFINITY
    } else {
        health / (1.0 - resist)
    }
}

/// Combat numbers computed from a final stat sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CombatStats {
    pub effective_bullet_damage: f64,
    pub dps: f64,
    pub burst_damage: f64,
    /// Effective health against bullet damage.
    pub bullet_ehp: f64,
    /// Effective health against spirit damage.
    pub spirit_ehp: f64,
}

impl StatLayer for CombatStats {
    type Base = StatSheet;
    type Bonuses = ();
    type Final = CombatStats;

    fn compute(sheet: &Self::Base, _: &Self::Bonuses) -> Self::Final {
        let effective_bullet_damage = sheet.bullet_damage * (1.0 + sheet.weapon_damage);
        Self {
            effective_bullet_damage,
            dps: effective_bullet_damage * sheet.fire_rate,
            burst_damage: effective_bullet_damage * sheet.clip_size,
            bullet_ehp: effective_health(sheet.health, sheet.bullet_resist),
            spirit_ehp: effective_health(sheet.health, sheet.spirit_resist),
        }
    }

    fn empty_bonuses() -> Self::Bonuses {}
}
