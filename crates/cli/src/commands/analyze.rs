//! dvnc analyze command

use crate::display::{self, Streamer};
use crate::export;
use clap::Args;
use engine::Orchestrator;
use shared::EngineConfig;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AnalyzeCommand {
    /// Engineering challenge to analyze
    #[arg(required = true, num_args = 1..)]
    pub prompt: Vec<String>,

    /// Also save the report into this directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl AnalyzeCommand {
    pub fn prompt(&self) -> String {
        self.prompt.join(" ")
    }

    pub fn run(&self, config: EngineConfig, json: bool) -> anyhow::Result<()> {
        let prompt = self.prompt();
        let mut orchestrator = Orchestrator::from_config(config)?;
        let analysis = orchestrator.analyze(&prompt);

        if json {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        } else {
            Streamer::new().stream(&display::response_blocks(&analysis))?;
        }

        if let Some(dir) = &self.output {
            let path = export::save_report(dir, &analysis.report(), chrono::Local::now().naive_local())?;
            if !json {
                println!("\n📄 Report saved as `{}`", path.display());
            }
        }

        Ok(())
    }
}
