//! dvnc domains command

use clap::Args;
use console::style;
use engine::{domain_icon, Orchestrator};
use serde::Serialize;
use shared::{Concept, EngineConfig};

#[derive(Debug, Args)]
pub struct DomainsCommand {
    /// Show each expert's system prompt
    #[arg(long)]
    pub prompts: bool,
}

/// One registered domain as listed by the command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainListing {
    pub domain: String,
    pub temperature: f64,
    pub system_prompt: String,
    pub concepts: Vec<Concept>,
}

impl DomainsCommand {
    pub fn listings(config: EngineConfig) -> anyhow::Result<Vec<DomainListing>> {
        let orchestrator = Orchestrator::from_config(config)?;
        Ok(orchestrator
            .experts()
            .iter()
            .map(|expert| DomainListing {
                domain: expert.name().to_string(),
                temperature: expert.temperature(),
                system_prompt: expert.system_prompt(),
                concepts: expert.knowledge().iter().cloned().collect(),
            })
            .collect())
    }

    pub fn run(&self, config: EngineConfig, json: bool) -> anyhow::Result<()> {
        let listings = Self::listings(config)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&listings)?);
            return Ok(());
        }

        for listing in &listings {
            println!(
                "{} {} {}",
                domain_icon(&listing.domain),
                style(&listing.domain).bold(),
                style(format!("(temperature {:.1})", listing.temperature)).dim()
            );
            if self.prompts {
                println!("  {}", style(&listing.system_prompt).italic());
            }
            for concept in &listing.concepts {
                println!("  - {}: {}", concept.name, style(&concept.citation).dim());
            }
            println!();
        }
        Ok(())
    }
}
