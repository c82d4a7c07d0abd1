//! Answer a single eligibility query from the command line.

use anyhow::Result;
use clap::Parser;
use console::style;

use eligibility_core::{Fallback, QueryOptions, RestrictionKind};

use crate::content::ContentArgs;

/// Answer one eligibility query
#[derive(Parser)]
pub struct Check {
    /// Restriction table to query (e.g. equipment, apparel_whitelist, research)
    #[arg(value_name = "KIND")]
    kind: RestrictionKind,

    /// Resource id (e.g. PowerArmor)
    #[arg(value_name = "RESOURCE")]
    resource: String,

    /// Subject id (e.g. Avian)
    #[arg(value_name = "SUBJECT")]
    subject: String,

    /// Faction of the subject; narrows research verdicts
    #[arg(short, long, value_name = "FACTION")]
    faction: Option<String>,

    /// Research projects to mark as hacked before querying
    #[arg(long, value_name = "RESEARCH")]
    hacked: Vec<String>,

    /// Deny resources without a table entry instead of using the kind default
    #[arg(long)]
    deny_missing: bool,

    /// Allow subjects the experimental store has never heard of
    #[arg(long)]
    allow_unknown_subject: bool,

    #[command(flatten)]
    content: ContentArgs,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        let (engine, _) = self.content.load_engine()?;

        for research in &self.hacked {
            engine.set_hacked(research.as_str(), true);
        }

        let mut options = QueryOptions::new();
        if self.deny_missing {
            options = options.with_missing_key(Fallback::Deny);
        }
        if self.allow_unknown_subject {
            options = options.with_subject_not_found(Fallback::Allow);
        }
        if let Some(faction) = &self.faction {
            options = options.with_faction(faction.as_str());
        }

        println!("{} {}", style("Mode:").bold().cyan(), engine.mode());
        println!(
            "{} {} / {} / {}",
            style("Query:").bold().cyan(),
            self.kind,
            self.resource,
            self.subject
        );
        if let Some(faction) = &self.faction {
            println!("{} {}", style("Faction:").bold().cyan(), faction);
        }
        println!();

        let verdict = engine.check(self.kind, &self.resource, &self.subject, &options)?;
        if verdict {
            println!("{}", style("✓ allowed").bold().green());
        } else {
            let denial = engine.explain(self.kind, &self.resource, &self.subject);
            println!("{} {}", style("✗ denied:").bold().red(), denial);
        }

        Ok(())
    }
}
