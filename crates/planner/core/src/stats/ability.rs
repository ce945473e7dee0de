//! Ability damage with spirit scaling and upgrade bonuses.

use crate::catalog::Ability;

/// Damage breakdown of one ability at a given spirit power and upgrade level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AbilityDamage {
    pub base: f64,
    /// Spirit power × scaling, rounded on its own for display.
    pub spirit_bonus: i64,
    pub upgrade_bonus: i64,
    pub total: i64,
}

/// Computes ability damage, or `None` for abilities without base damage.
///
/// Upgrade tiers `1..=upgrade_level` contribute their classified damage bonus;
/// tiers whose effect is not a damage bonus contribute 0.
pub fn compute_ability_damage(
    ability: &Ability,
    spirit_power: f64,
    upgrade_level: u8,
) -> Option<AbilityDamage> {
    let base = ability.base_damage?;
    let spirit_bonus = spirit_power * ability.spirit_scaling.unwrap_or(0.0);
    let upgrade_bonus: i64 = ability
        .upgrades
        .iter()
        .take(upgrade_level as usize)
        .map(|upgrade| upgrade.effect.damage_bonus())
        .fold(0, i64::saturating_add);

    Some(AbilityDamage {
        base,
        spirit_bonus: round_half_up(spirit_bonus),
        upgrade_bonus,
        total: round_half_up(base + spirit_bonus + upgrade_bonus as f64),
    })
}

// Halves round toward +inf (-2.5 -> -2), not away from zero.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
