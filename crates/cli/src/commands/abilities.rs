//! Per-ability damage table.

use anyhow::Result;
use clap::Parser;
use console::style;
use planner_core::{CharacterId, UpgradeEffect, compute_ability_damage};

use crate::config::CliConfig;

/// Print ability damage at every upgrade level
#[derive(Parser)]
pub struct Abilities {
    /// Character id (e.g. infernus)
    #[arg(short, long, value_name = "ID")]
    character: String,

    /// Spirit power to evaluate at
    #[arg(short, long, value_name = "N", default_value_t = 0.0)]
    spirit_power: f64,
}

impl Abilities {
    pub fn execute(self, cli: &CliConfig) -> Result<()> {
        let factory = cli.factory()?;
        let character = factory.load_character(&CharacterId::new(self.character))?;

        println!(
            "\n{} {}",
            style(&character.name).bold().cyan(),
            style(format!("at {} spirit power", self.spirit_power)).dim()
        );
        println!(
            "{}",
            style(format!(
                "{:<24} {:<9} {:>6} {:>6} {:>6} {:>6}",
                "ability", "type", "L0", "L1", "L2", "L3"
            ))
            .bold()
        );

        for ability in &character.abilities {
            let cells: Vec<String> = (0..=3)
                .map(|level| {
                    compute_ability_damage(ability, self.spirit_power, level)
                        .map(|damage| damage.total.to_string())
                        .unwrap_or_else(|| "-".to_string())
                })
                .collect();
            println!(
                "{:<24} {:<9} {:>6} {:>6} {:>6} {:>6}",
                ability.name, ability.kind.as_ref(), cells[0], cells[1], cells[2], cells[3]
            );

            for (tier, upgrade) in ability.upgrades.iter().enumerate() {
                let marker = match upgrade.effect {
                    UpgradeEffect::DamageBonus(_) => style("dmg").green(),
                    UpgradeEffect::DurationBonus(_) => style("dur").yellow(),
                    UpgradeEffect::Other(_) => style("---").dim(),
                };
                println!("    {} T{} {}", marker, tier + 1, upgrade.description);
            }
        }
        Ok(())
    }
}
