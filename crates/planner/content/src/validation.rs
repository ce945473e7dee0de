//! Data-quality checks over loaded content.
//!
//! The planner tolerates malformed data (garbage in, garbage out); this module
//! is where such data gets reported. Validation never fails, it only collects
//! [`Finding`]s.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use planner_core::stats::StatKey;
use planner_core::{Character, Item, ItemId, UpgradeEffect};

/// Highest item tier.
pub const MAX_ITEM_TIER: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FindingLevel {
    /// Tolerated by the planner but probably wrong.
    Warning,
    /// Produces wrong numbers or breaks a content invariant.
    Error,
}

impl FindingLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FindingLevel::Warning => "warning",
            FindingLevel::Error => "error",
        }
    }
}

/// One data-quality issue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub level: FindingLevel,
    /// Stable identifier of the check, e.g. `ITEM_DUPLICATE_ID`.
    pub code: &'static str,
    /// Content the finding is about, e.g. `item 'hollow_point'`.
    pub subject: String,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}: {}",
            self.level.as_str(),
            self.code,
            self.subject,
            self.message
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.at_level(FindingLevel::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.at_level(FindingLevel::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings with the given code.
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Finding> + 'a {
        self.findings.iter().filter(move |f| f.code == code)
    }

    fn at_level(&self, level: FindingLevel) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.level == level)
    }

    fn push(
        &mut self,
        level: FindingLevel,
        code: &'static str,
        subject: String,
        message: impl Into<String>,
    ) {
        self.findings.push(Finding {
            level,
            code,
            subject,
            message: message.into(),
        });
    }
}

/// Checks characters and items for data-quality issues.
pub fn validate_catalog(characters: &[Character], items: &[Item]) -> ValidationReport {
    let mut report = ValidationReport::new();
    validate_items(items, &mut report);
    validate_characters(characters, &mut report);

    tracing::debug!(
        characters = characters.len(),
        items = items.len(),
        findings = report.findings.len(),
        "validated catalog"
    );
    report
}

fn validate_items(items: &[Item], report: &mut ValidationReport) {
    let mut seen: BTreeMap<&ItemId, usize> = BTreeMap::new();

    for item in items {
        let subject = format!("item '{}'", item.id);

        *seen.entry(&item.id).or_default() += 1;

        if item.has_conflicting_effects() {
            report.push(
                FindingLevel::Warning,
                "ITEM_PASSIVE_AND_ACTIVE",
                subject.clone(),
                "item has both a passive and an active effect",
            );
        }

        if !(1..=MAX_ITEM_TIER).contains(&item.tier) {
            report.push(
                FindingLevel::Error,
                "ITEM_TIER_OUT_OF_RANGE",
                subject.clone(),
                format!("tier {} is outside 1..={}", item.tier, MAX_ITEM_TIER),
            );
        }

        if item.cost <= 0 {
            report.push(
                FindingLevel::Error,
                "ITEM_NON_POSITIVE_COST",
                subject.clone(),
                format!("cost {} souls is not positive", item.cost),
            );
        }

        for key in item.stats.keys() {
            if StatKey::from_str(key).is_err() {
                report.push(
                    FindingLevel::Warning,
                    "ITEM_UNMODELLED_STAT",
                    subject.clone(),
                    format!("stat '{key}' is not modelled and only tracked as an extra"),
                );
            }
        }
    }

    for (id, count) in seen {
        if count > 1 {
            report.push(
                FindingLevel::Error,
                "ITEM_DUPLICATE_ID",
                format!("item '{id}'"),
                format!("id is defined {count} times"),
            );
        }
    }
}

fn validate_characters(characters: &[Character], report: &mut ValidationReport) {
    let mut seen = BTreeSet::new();

    for character in characters {
        let subject = format!("character '{}'", character.id);

        if !seen.insert(&character.id) {
            report.push(
                FindingLevel::Error,
                "CHARACTER_DUPLICATE_ID",
                subject.clone(),
                "id is defined more than once",
            );
        }

        let ultimates = character
            .abilities
            .iter()
            .filter(|ability| ability.is_ultimate())
            .count();
        if ultimates != 1 {
            report.push(
                FindingLevel::Error,
                "CHARACTER_ULTIMATE_COUNT",
                subject.clone(),
                format!("expected exactly one ultimate ability, found {ultimates}"),
            );
        }

        let mut ability_ids = BTreeSet::new();
        for ability in &character.abilities {
            if !ability_ids.insert(&ability.id) {
                report.push(
                    FindingLevel::Error,
                    "ABILITY_DUPLICATE_ID",
                    format!("ability '{}' of {}", ability.id, subject),
                    "ability id is used more than once",
                );
            }

            // Only damaging abilities can lose value to unclassified text
            if ability.base_damage.is_none() {
                continue;
            }
            for (tier, upgrade) in ability.upgrades.iter().enumerate() {
                if let UpgradeEffect::Other(text) = &upgrade.effect {
                    report.push(
                        FindingLevel::Warning,
                        "UPGRADE_UNCLASSIFIED",
                        format!("ability '{}' of {}", ability.id, subject),
                        format!(
                            "tier {} text {:?} is not a damage or duration bonus",
                            tier + 1,
                            text
                        ),
                    );
                }
            }
        }
    }
}
