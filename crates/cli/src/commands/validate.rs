//! Data-quality report over the content directory.

use anyhow::Result;
use clap::Parser;
use console::style;
use planner_content::{FindingLevel, validate_catalog};

use crate::config::CliConfig;

/// Check characters and items for data-quality issues
#[derive(Parser)]
pub struct Validate {
    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
}

impl Validate {
    pub fn execute(self, cli: &CliConfig) -> Result<()> {
        let factory = cli.factory()?;
        let characters = factory.load_characters()?;
        let items = factory.load_items()?;

        let report = validate_catalog(&characters, &items);

        for finding in report.findings() {
            match finding.level {
                FindingLevel::Error => println!("{} {}", style("✗").red(), finding),
                FindingLevel::Warning if !self.quiet => {
                    println!("{} {}", style("!").yellow(), finding)
                }
                FindingLevel::Warning => {}
            }
        }

        let errors = report.errors().count();
        let warnings = report.warnings().count();
        println!(
            "\nChecked {} characters and {} items: {} errors, {} warnings",
            characters.len(),
            items.len(),
            errors,
            warnings
        );

        if errors > 0 {
            anyhow::bail!("content validation found {} errors", errors);
        }
        println!("{}", style("✓ content is usable").green());
        Ok(())
    }
}
