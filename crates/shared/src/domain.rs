//! Domain and concept types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display name of the included domain when none is configured
pub const DEFAULT_INCLUDED_DOMAIN: &str = "Anatomy";

/// A fixed subject-matter lens with its own concept vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Domain {
    Physics,
    Biomechanics,
    /// Name-configurable domain. Always backed by the anatomy catalog.
    Configurable(String),
}

impl Domain {
    /// Build the configurable domain from user input.
    ///
    /// The name is trimmed, and any casing of "anatomy" is normalized to
    /// [`DEFAULT_INCLUDED_DOMAIN`]. An empty name falls back to the default.
    pub fn included(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case(DEFAULT_INCLUDED_DOMAIN) {
            Domain::Configurable(DEFAULT_INCLUDED_DOMAIN.to_string())
        } else {
            Domain::Configurable(name.to_string())
        }
    }

    /// Display name used as the key in matches, insights and reports
    pub fn name(&self) -> &str {
        match self {
            Domain::Physics => "Physics",
            Domain::Biomechanics => "Biomechanics",
            Domain::Configurable(name) => name,
        }
    }

    /// Whether this is the configurable slot
    pub fn is_configurable(&self) -> bool {
        matches!(self, Domain::Configurable(_))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named idea within a domain, paired with the study it is drawn from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub name: String,
    pub citation: String,
}

impl Concept {
    pub fn new(name: impl Into<String>, citation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            citation: citation.into(),
        }
    }
}

/// Matched concept names for a single domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainKeywords {
    pub domain: String,
    /// Deduplicated, sorted ascending
    pub concepts: Vec<String>,
}

/// Per-domain keyword matches, in expert registration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    entries: Vec<DomainKeywords>,
}

impl KeywordMatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the matches for a domain, replacing any earlier entry.
    ///
    /// Concepts are deduplicated and sorted before storing.
    pub fn insert(&mut self, domain: impl Into<String>, concepts: impl IntoIterator<Item = String>) {
        let domain = domain.into();
        let mut concepts: Vec<String> = concepts.into_iter().collect();
        concepts.sort();
        concepts.dedup();

        match self.entries.iter_mut().find(|e| e.domain == domain) {
            Some(entry) => entry.concepts = concepts,
            None => self.entries.push(DomainKeywords { domain, concepts }),
        }
    }

    /// Matches for a domain; empty when the domain is unknown
    pub fn get(&self, domain: &str) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.domain == domain)
            .map(|e| e.concepts.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainKeywords> {
        self.entries.iter()
    }

    pub fn domains(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.domain.as_str()).collect()
    }

    /// True when no domain matched anything
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.concepts.is_empty())
    }
}
