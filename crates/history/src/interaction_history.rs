//! InteractionHistory - Ring buffer of past prompts and reports

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Interactions kept when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 50;

/// One prompt and the full response produced for it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    pub timestamp: DateTime<Local>,
    pub user_prompt: String,
    pub full_response: String,
}

/// Session history, oldest entries evicted first
#[derive(Debug)]
pub struct InteractionHistory {
    entries: VecDeque<InteractionRecord>,
    capacity: usize,
}

impl InteractionHistory {
    /// Create a new InteractionHistory
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record
    pub fn push(&mut self, record: InteractionRecord) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(record);
    }

    /// Record an interaction stamped with the current local time
    pub fn add_interaction(&mut self, user_prompt: &str, full_response: &str) {
        self.push(InteractionRecord {
            timestamp: Local::now(),
            user_prompt: user_prompt.to_string(),
            full_response: full_response.to_string(),
        });
    }

    /// Last `n` records, oldest first
    pub fn get_recent(&self, n: usize) -> Vec<&InteractionRecord> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).collect()
    }

    /// Most recent record
    pub fn last(&self) -> Option<&InteractionRecord> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get statistics
    pub fn get_stats(&self) -> HistoryStats {
        HistoryStats {
            total_entries: self.entries.len(),
            capacity: self.capacity,
        }
    }

    /// Export as JSON
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::to_value(self.entries.iter().collect::<Vec<_>>()).unwrap_or_default()
    }
}

impl Default for InteractionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// History statistics
#[derive(Debug, Clone)]
pub struct HistoryStats {
    pub total_entries: usize,
    pub capacity: usize,
}

/// Shorten a prompt for list views, appending "..." when cut
pub fn truncate_prompt(prompt: &str, max_chars: usize) -> String {
    if prompt.chars().count() <= max_chars {
        return prompt.to_string();
    }
    let cut: String = prompt.chars().take(max_chars).collect();
    format!("{cut}...")
}
