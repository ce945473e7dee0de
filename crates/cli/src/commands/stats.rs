//! Replay a build and print its derived stats snapshot.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use planner_content::BuildLoader;
use planner_core::{AbilityId, CharacterId, DerivedStats, PlannerSession, SLOT_COUNT};

use super::parse_upgrade;
use crate::config::CliConfig;

/// Print the derived stats of a build
#[derive(Parser)]
pub struct Stats {
    /// Character id (e.g. infernus)
    #[arg(short, long, value_name = "ID")]
    character: String,

    /// Build file: a saved build, a 12-slot array or a legacy category build
    #[arg(short, long, value_name = "FILE")]
    build: Option<PathBuf>,

    /// Ability upgrade levels, applied after the build file's own
    #[arg(short, long = "upgrade", value_name = "ABILITY=LEVEL", value_parser = parse_upgrade)]
    upgrades: Vec<(AbilityId, u8)>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Full JSON snapshot
    Json,
}

impl Stats {
    pub fn execute(self, cli: &CliConfig) -> Result<()> {
        let factory = cli.factory()?;
        let config = cli.planner_config(&factory)?;
        let character_id = CharacterId::new(self.character);
        let character = factory.load_character(&character_id)?;
        let catalog = factory.load_catalog()?;

        let mut session = PlannerSession::new(character, &config);

        if let Some(path) = &self.build {
            let saved = BuildLoader::load(path)?.into_saved(character_id.clone());
            let report = session
                .restore(&saved, &catalog)
                .with_context(|| format!("Failed to restore build {}", path.display()))?;
            if !report.is_clean() {
                tracing::warn!(
                    unknown = report.unknown.len(),
                    duplicates = report.duplicates.len(),
                    dropped = report.overflow,
                    "build file had entries that were not equipped"
                );
            }
            tracing::info!(
                loaded = report.loaded,
                legacy = report.migrated_legacy,
                "restored build"
            );
        }

        for (ability, level) in self.upgrades {
            session
                .set_upgrade(ability.clone(), level)
                .with_context(|| format!("Failed to set {ability} to level {level}"))?;
        }

        let derived = session.stats();
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&derived)
                    .context("Failed to encode stats snapshot")?;
                println!("{json}");
            }
            OutputFormat::Summary => print_summary(&session, &derived),
        }
        Ok(())
    }
}

fn print_summary(session: &PlannerSession, derived: &DerivedStats) {
    let build = session.build();
    let character = session.character();

    println!(
        "\n{} {}",
        style(&character.name).bold().cyan(),
        style(format!("({})", character.id)).dim()
    );
    println!("{}", style("─".repeat(48)).dim());

    println!("\n{}", style("Slots").bold());
    for slot in 0..SLOT_COUNT {
        let label = match build.slot(slot) {
            Some(item) => format!("{} ({} souls)", item.name, item.cost),
            None if build.is_locked(slot) => style("locked").red().to_string(),
            None => style("empty").dim().to_string(),
        };
        println!("  {:>2}: {}", slot, label);
    }

    let stats = &derived.stats;
    let items = &derived.item_bonuses;
    let bonus = &derived.investment.bonus;
    println!("\n{}", style("Stats").bold());
    println!(
        "  Health          {:>9.1}  (+{:.0} items, +{:.0} investment)",
        stats.health, items.health, bonus.health
    );
    println!(
        "  Weapon damage   {:>8.0}%  (+{:.0}% items, +{:.0}% investment)",
        stats.weapon_damage * 100.0,
        items.weapon_damage * 100.0,
        bonus.weapon_damage * 100.0
    );
    println!(
        "  Spirit power    {:>9.1}  (+{:.0} items, +{:.0} investment)",
        stats.spirit_power, items.spirit_power, bonus.spirit_power
    );
    println!("  Bullet resist   {:>8.0}%", stats.bullet_resist * 100.0);
    println!("  Spirit resist   {:>8.0}%", stats.spirit_resist * 100.0);
    for (key, value) in &stats.extra {
        println!("  {:<15} {:>9.2}", key, value);
    }

    let combat = &derived.combat;
    println!("\n{}", style("Combat").bold());
    println!("  Bullet damage   {:>9.2}", combat.effective_bullet_damage);
    println!("  DPS             {:>9.1}", combat.dps);
    println!("  Burst           {:>9.1}", combat.burst_damage);
    println!("  Bullet EHP      {:>9.1}", combat.bullet_ehp);
    println!("  Spirit EHP      {:>9.1}", combat.spirit_ehp);

    let spend = &derived.investment.spend;
    println!("\n{}", style("Economy").bold());
    println!(
        "  Souls           {:>9}  (weapon {}, vitality {}, spirit {})",
        derived.total_souls, spend.weapon, spend.vitality, spend.spirit
    );
    let remaining = derived.points_remaining();
    let points = format!(
        "{}/{} used",
        derived.points_used, derived.points_available
    );
    let points = if remaining < 0 {
        style(points).red().to_string()
    } else {
        style(points).green().to_string()
    };
    println!("  Ability points  {:>9}", points);
    println!(
        "  Unlocked slots  {:>9}",
        format!("{}/{}", build.unlocked_slot_count(), SLOT_COUNT)
    );
}
