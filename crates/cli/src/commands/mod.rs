//! Subcommand implementations.

mod abilities;
mod stats;
mod validate;

pub use abilities::Abilities;
pub use stats::Stats;
pub use validate::Validate;

use anyhow::{Context, Result};
use planner_core::AbilityId;

/// Parses `ability=level` pairs given on the command line.
pub(crate) fn parse_upgrade(raw: &str) -> Result<(AbilityId, u8)> {
    let (ability, level) = raw
        .split_once('=')
        .with_context(|| format!("expected ABILITY=LEVEL, got '{raw}'"))?;
    let ability = ability.trim();
    if ability.is_empty() {
        anyhow::bail!("missing ability id in '{raw}'");
    }
    let level = level
        .trim()
        .parse::<u8>()
        .with_context(|| format!("invalid upgrade level in '{raw}'"))?;
    Ok((AbilityId::new(ability), level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ability_level_pairs() {
        assert_eq!(
            parse_upgrade("catalyst=2").unwrap(),
            (AbilityId::new("catalyst"), 2)
        );
        assert_eq!(
            parse_upgrade(" flame_dash = 3 ").unwrap(),
            (AbilityId::new("flame_dash"), 3)
        );
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(parse_upgrade("catalyst").is_err());
        assert!(parse_upgrade("=2").is_err());
        assert!(parse_upgrade("catalyst=high").is_err());
        assert!(parse_upgrade("catalyst=-1").is_err());
    }
}
