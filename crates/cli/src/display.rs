//! Response rendering and progressive terminal output

use console::Term;
use engine::{domain_icon, Analysis};
use indicatif::{ProgressBar, ProgressStyle};
use shared::{Insights, KeywordMatch};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const LINE_DELAY: Duration = Duration::from_millis(20);
const SECTION_DELAY: Duration = Duration::from_millis(100);

/// Domain analysis block: matched concepts per domain
pub fn domain_analysis(matches: &KeywordMatch) -> String {
    let mut out = String::from("### 📍 Domain Analysis\n\n");
    for entry in matches.iter() {
        out.push_str(&format!("**{} {}:** ", domain_icon(&entry.domain), entry.domain));
        if entry.concepts.is_empty() {
            out.push_str("*No specific concepts detected*\n");
        } else {
            out.push_str(&format!("`{}`\n", entry.concepts.join(" • ")));
        }
    }
    out.push_str("\n---\n");
    out
}

/// Insight block, domains sorted by name
pub fn domain_insights(insights: &Insights) -> String {
    let mut out = String::from("### 💡 Generating Domain Insights\n\n");
    for insight in insights.sorted_by_domain().iter() {
        out.push_str(&format!(
            "**{} {} Analysis:**\n{}\n\n",
            domain_icon(&insight.domain),
            insight.domain,
            insight.text
        ));
    }
    out.push_str("---\n");
    out
}

/// Blocks of the full response, in delivery order
pub fn response_blocks(analysis: &Analysis) -> Vec<String> {
    let mut blocks = vec![
        domain_analysis(&analysis.matches),
        domain_insights(&analysis.insights),
    ];
    blocks.extend(analysis.sections.iter().map(|s| s.body.clone()));
    blocks
}

/// Full response text as archived in history
pub fn full_response(analysis: &Analysis) -> String {
    response_blocks(analysis).join("\n")
}

/// Writes response blocks, line by line on a terminal
pub struct Streamer {
    animate: bool,
}

impl Streamer {
    /// Animate only when stdout is a terminal
    pub fn new() -> Self {
        Self {
            animate: Term::stdout().is_term(),
        }
    }

    pub fn instant() -> Self {
        Self { animate: false }
    }

    /// Spinner shown while the engine works
    pub fn spinner(&self, message: &'static str) -> ProgressBar {
        if !self.animate {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    }

    /// Write blocks in order
    pub fn stream(&self, blocks: &[String]) -> io::Result<()> {
        let mut stdout = io::stdout();
        for block in blocks {
            for line in block.lines() {
                writeln!(stdout, "{line}")?;
                if self.animate {
                    stdout.flush()?;
                    thread::sleep(LINE_DELAY);
                }
            }
            if self.animate {
                thread::sleep(SECTION_DELAY);
            }
        }
        stdout.flush()
    }
}

impl Default for Streamer {
    fn default() -> Self {
        Self::new()
    }
}
