//! Load the content directory and report the outcome of the load pass.

use anyhow::Result;
use clap::Parser;
use console::style;

use eligibility_core::{EligibilityEngine, LoadReport, PolicyError};

use crate::content::ContentArgs;

/// Report what a load pass built and what it skipped
#[derive(Parser)]
pub struct Summary {
    /// Fail when any definition was skipped
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    content: ContentArgs,
}

impl Summary {
    pub fn execute(self) -> Result<()> {
        let factory = self.content.factory();
        let (engine, report) = self.content.load_engine()?;

        println!(
            "{} {}",
            style("Content:").bold().cyan(),
            factory.data_dir().display()
        );
        println!("{} {}", style("Mode:").bold().cyan(), engine.mode());
        println!();

        print_counts(&report);
        print_tables(&engine);
        print_skipped(&report);

        if self.strict && !report.is_clean() {
            anyhow::bail!("{} definition(s) skipped", report.skipped.len());
        }
        Ok(())
    }
}

fn print_counts(report: &LoadReport) {
    println!("{}", style("Loaded:").bold().yellow());
    println!("  Subjects: {}", report.subjects);
    println!("  Resources: {}", report.resources);
    println!("  Content packs: {}", report.packs);
    println!("  Restriction pairs: {}", report.restrictions);
    println!("  Overrides: {}", report.overrides);
    println!("  Faction entries: {}", report.faction_entries);
    println!();
}

fn print_tables(engine: &EligibilityEngine) {
    println!("{}", style("Restriction tables:").bold().yellow());
    for kind in &engine.config().kinds {
        println!(
            "  {:<22} {} resource(s)",
            kind.as_ref(),
            engine.tables().restrictions.len(*kind)
        );
    }
    println!();
}

fn print_skipped(report: &LoadReport) {
    if report.is_clean() {
        println!("{}", style("✓ No definitions skipped").green());
        return;
    }

    println!(
        "{}",
        style(format!("Skipped ({}):", report.skipped.len()))
            .bold()
            .red()
    );
    for err in &report.skipped {
        println!(
            "  [{}] {} {}",
            err.severity().as_str(),
            style(err.error_code()).dim(),
            err
        );
    }
}
