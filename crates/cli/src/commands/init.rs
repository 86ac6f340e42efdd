//! dvnc init command

use clap::Args;
use console::Term;
use dialoguer::Confirm;
use shared::{EngineConfig, CONFIG_FILE_NAME};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Overwrite an existing dvnc.json without asking
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self, domain: Option<&str>) -> anyhow::Result<()> {
        println!("Initializing DVNC project in {:?}", self.directory);

        std::fs::create_dir_all(&self.directory)?;
        let path = self.directory.join(CONFIG_FILE_NAME);

        if path.exists() && !self.force && !self.confirm_overwrite(&path)? {
            println!("Left existing {} untouched", path.display());
            return Ok(());
        }

        let mut config = EngineConfig::default();
        if let Some(domain) = domain {
            config.included_domain = domain.to_string();
        }
        config.validate()?;
        config.write_to(&path)?;

        std::fs::create_dir_all(self.directory.join("reports"))?;

        println!("✓ DVNC project initialized");
        Ok(())
    }

    fn confirm_overwrite(&self, path: &Path) -> anyhow::Result<bool> {
        if !Term::stderr().is_term() {
            anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
        }
        Ok(Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", path.display()))
            .default(false)
            .interact()?)
    }
}
