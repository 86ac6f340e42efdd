//! Interactive REPL mode

use crate::display::{self, Streamer};
use crate::export;
use console::style;
use engine::Orchestrator;
use history::{truncate_prompt, InteractionHistory};
use rand::Rng;
use shared::EngineConfig;
use std::io::{self, Write};
use std::path::PathBuf;

const PROMPT_PREVIEW_CHARS: usize = 100;

/// Interactive CLI session: one orchestrator and its history
pub struct InteractiveCli {
    orchestrator: Orchestrator,
    history: InteractionHistory,
    recent_history: usize,
    last_prompt: Option<String>,
    last_response: Option<String>,
    streamer: Streamer,
}

impl InteractiveCli {
    pub fn new(config: EngineConfig) -> anyhow::Result<Self> {
        let history = InteractionHistory::new(config.history_capacity);
        let recent_history = config.recent_history;
        Ok(Self {
            orchestrator: Orchestrator::from_config(config)?,
            history,
            recent_history,
            last_prompt: None,
            last_response: None,
            streamer: Streamer::new(),
        })
    }

    /// Disable line-by-line animation
    pub fn with_streamer(mut self, streamer: Streamer) -> Self {
        self.streamer = streamer;
        self
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.print_welcome();

        loop {
            // Print prompt
            print!("{} ", style("dvnc >").cyan().bold());
            io::stdout().flush()?;

            // Read input
            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            // Handle commands
            if input.starts_with('/') {
                match self.handle_command(input) {
                    Ok(should_exit) if should_exit => break,
                    Ok(_) => continue,
                    Err(e) => {
                        println!("{} {}", style("Error:").red(), e);
                        continue;
                    }
                }
            }

            if let Err(e) = self.handle_prompt(input) {
                println!("{} {}", style("Error:").red(), e);
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!("{}", style("🎨 DVNC.ai").bold());
        println!("{}", style("Leonardo's Intelligence, Reimagined for the 21st Century").italic());
        println!();
        println!("Domains: {}", self.orchestrator.domains().join(", "));
        println!("Try: \"Design a bio-inspired underwater drone\" or \"Create an adaptive prosthetic limb\"");
        println!("Type /help for commands, /quit to exit");
        println!();
    }

    /// Analyze a prompt, stream the response and record it
    pub fn handle_prompt(&mut self, prompt: &str) -> anyhow::Result<()> {
        let spinner = self.streamer.spinner("🔬 Analyzing your challenge...");
        let analysis = self.orchestrator.analyze(prompt);
        spinner.finish_and_clear();

        self.streamer.stream(&display::response_blocks(&analysis))?;

        let response = display::full_response(&analysis);
        self.history.add_interaction(prompt, &response);
        self.last_prompt = Some(prompt.to_string());
        self.last_response = Some(response);
        Ok(())
    }

    fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => {
                println!("Commands:");
                println!("  /regenerate    - Reseed and analyze the last prompt again");
                println!("  /history       - Show recent prompts");
                println!("  /history --json - Dump the whole session history as JSON");
                println!("  /clear         - Clear chat history");
                println!("  /save [dir]    - Save the last report");
                println!("  /domain [name] - Show or change the configurable domain");
                println!("  /seed <n>      - Reseed the engine");
                println!("  /status        - Show current status");
                println!("  /quit          - Exit");
            }
            "/regenerate" | "/r" => {
                let Some(prompt) = self.last_prompt.clone() else {
                    println!("Nothing to regenerate yet.");
                    return Ok(false);
                };
                let seed = rand::thread_rng().gen_range(1..=1000);
                self.orchestrator.reseed(seed)?;
                println!("🔄 Regenerating analysis for: *{}*", prompt);
                self.handle_prompt(&prompt)?;
            }
            "/history" if parts.get(1) == Some(&"--json") => {
                println!("{}", serde_json::to_string_pretty(&self.history.export_json())?);
            }
            "/history" => {
                let recent = self.history.get_recent(self.recent_history);
                if recent.is_empty() {
                    println!("📭 No chat history available.");
                } else {
                    println!("### 📜 Recent Conversations\n");
                    for (i, record) in recent.iter().enumerate() {
                        println!("**[{}] Query {}:**", record.timestamp.format("%H:%M:%S"), i + 1);
                        println!("_{}_\n", truncate_prompt(&record.user_prompt, PROMPT_PREVIEW_CHARS));
                    }
                }
            }
            "/clear" => {
                self.history.clear();
                println!("✨ Chat history cleared.");
            }
            "/save" => {
                let Some(response) = &self.last_response else {
                    println!("No report to save yet.");
                    return Ok(false);
                };
                let dir = parts.get(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
                let path = export::save_report(&dir, response, chrono::Local::now().naive_local())?;
                println!("📄 Report saved as `{}`", path.display());
            }
            "/domain" => {
                if parts.len() > 1 {
                    let name = parts[1..].join(" ");
                    self.orchestrator.set_included_domain(&name)?;
                    println!("Domains: {}", self.orchestrator.domains().join(", "));
                } else {
                    println!("Configurable domain: {}", self.orchestrator.domains()[2]);
                }
            }
            "/seed" => {
                let Some(raw) = parts.get(1) else {
                    println!("Current seed: {}", self.orchestrator.seed());
                    return Ok(false);
                };
                let seed: u64 = raw
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid seed: {}", raw))?;
                self.orchestrator.reseed(seed)?;
                println!("Seed set to: {}", seed);
            }
            "/status" => {
                println!("Status:");
                println!("  Domains: {}", self.orchestrator.domains().join(", "));
                println!("  Seed: {}", self.orchestrator.seed());
                let stats = self.history.get_stats();
                println!("  History: {}/{}", stats.total_entries, stats.capacity);
            }
            _ => {
                println!("Unknown command: {}", cmd);
            }
        }

        Ok(false)
    }
}
