//! List the subjects allowed to use a resource.

use anyhow::Result;
use clap::Parser;
use console::style;

use eligibility_core::{EligibilityEngine, EvaluationMode, RestrictionKind};

use crate::content::ContentArgs;

/// List the subjects allowed to use a resource
#[derive(Parser)]
pub struct Allowed {
    /// Restriction table to inspect
    #[arg(value_name = "KIND")]
    kind: RestrictionKind,

    /// Resource id
    #[arg(value_name = "RESOURCE")]
    resource: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(flatten)]
    content: ContentArgs,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One subject per line
    Text,
    /// JSON array of subject ids
    Json,
}

impl Allowed {
    pub fn execute(self) -> Result<()> {
        let (engine, _) = self.content.load_engine()?;
        let subjects = engine.allowed_subjects(self.kind, &self.resource)?;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&subjects)?);
            }
            OutputFormat::Text => {
                println!(
                    "{} {} / {} ({} mode)",
                    style("Resource:").bold().cyan(),
                    self.kind,
                    engine.registry().resource_label(&self.resource),
                    engine.mode()
                );
                println!();

                if subjects.is_empty() {
                    println!("  {}", style(empty_note(&engine, self.kind, &self.resource)?).dim());
                }
                for subject in &subjects {
                    println!(
                        "  {} ({})",
                        subject,
                        engine.registry().subject_label(subject.as_str())
                    );
                }
            }
        }

        Ok(())
    }
}

fn empty_note(
    engine: &EligibilityEngine,
    kind: RestrictionKind,
    resource: &str,
) -> Result<&'static str> {
    if engine.mode() == EvaluationMode::Experimental {
        return Ok("no subject declares it");
    }
    let has_entry = engine
        .tables()
        .restrictions
        .allowed_subjects(kind, resource)?
        .is_some();
    Ok(if has_entry {
        "locked: no subject may use it"
    } else {
        "no entry: the missing-key policy decides"
    })
}
