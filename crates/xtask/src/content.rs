//! Content arguments shared by every command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use eligibility_content::ContentFactory;
use eligibility_core::{EligibilityEngine, EvaluationMode, LoadReport};

#[derive(Args)]
pub struct ContentArgs {
    /// Content directory (defaults to ELIGIBILITY_DATA_DIR, then the sample data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Answer from the experimental override store regardless of config.toml
    #[arg(long)]
    experimental: bool,
}

impl ContentArgs {
    pub fn factory(&self) -> ContentFactory {
        match &self.data_dir {
            Some(dir) => ContentFactory::new(dir),
            None => ContentFactory::from_env(),
        }
    }

    /// Reads the content directory and runs one load pass.
    pub fn load_engine(&self) -> Result<(EligibilityEngine, LoadReport)> {
        let factory = self.factory();
        if !factory.data_dir().exists() {
            anyhow::bail!(
                "Content directory not found: {}\n\nHint: pass --data-dir or set ELIGIBILITY_DATA_DIR",
                factory.data_dir().display()
            );
        }

        let mut config = factory.load_config().with_context(|| {
            format!("Failed to load config from {}", factory.data_dir().display())
        })?;
        if self.experimental {
            config.mode = EvaluationMode::Experimental;
        }

        let catalog = factory.load_catalog().with_context(|| {
            format!("Failed to load content from {}", factory.data_dir().display())
        })?;

        Ok(EligibilityEngine::with_catalog(config, &catalog))
    }
}
