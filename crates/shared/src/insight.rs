//! Insight types produced by domain experts

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(.+?)\*\*").expect("emphasis pattern is valid")
});

/// Template family used to phrase an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phrasing {
    /// Prompt matched concepts of this domain
    Directive,
    /// Nothing matched; a random concept is suggested
    Exploratory,
}

/// A single domain's contribution to a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub domain: String,
    /// Resolved canonical concept, if known
    pub concept: Option<String>,
    pub citation: Option<String>,
    pub phrasing: Phrasing,
    /// Rendered markdown text
    pub text: String,
}

impl Insight {
    /// Build an insight from a resolved concept and render its text
    pub fn from_concept(
        domain: impl Into<String>,
        concept: impl Into<String>,
        citation: impl Into<String>,
        phrasing: Phrasing,
    ) -> Self {
        let concept = concept.into();
        let citation = citation.into();
        let text = match phrasing {
            Phrasing::Exploratory => format!(
                "Consider **{concept}**, informed by da Vinci's work on *{citation}*. \
                 Translate this into constraints and a measurable performance target."
            ),
            Phrasing::Directive => format!(
                "Leverage **{concept}** (cf. da Vinci's *{citation}*). \
                 Define 2–3 constraints, an objective, and a quick benchtop test."
            ),
        };

        Self {
            domain: domain.into(),
            concept: Some(concept),
            citation: Some(citation),
            phrasing,
            text,
        }
    }

    /// Wrap already-rendered text. The concept is recovered from the first
    /// `**...**` span, if any.
    pub fn from_text(domain: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let concept = first_emphasis(&text).map(str::to_string);
        Self {
            domain: domain.into(),
            concept,
            citation: None,
            phrasing: Phrasing::Directive,
            text,
        }
    }

    /// The concept this insight emphasizes
    pub fn emphasized(&self) -> Option<&str> {
        self.concept.as_deref().or_else(|| first_emphasis(&self.text))
    }
}

/// First double-asterisk span in markdown text
pub fn first_emphasis(text: &str) -> Option<&str> {
    EMPHASIS
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Insights in a caller-defined order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    items: Vec<Insight>,
}

impl Insights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an insight, replacing any earlier one for the same domain
    pub fn push(&mut self, insight: Insight) {
        match self.items.iter_mut().find(|i| i.domain == insight.domain) {
            Some(existing) => *existing = insight,
            None => self.items.push(insight),
        }
    }

    pub fn get(&self, domain: &str) -> Option<&Insight> {
        self.items.iter().find(|i| i.domain == domain)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Insight> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Copy sorted by domain name
    pub fn sorted_by_domain(&self) -> Self {
        let mut items = self.items.clone();
        items.sort_by(|a, b| a.domain.cmp(&b.domain));
        Self { items }
    }
}

impl FromIterator<Insight> for Insights {
    fn from_iter<I: IntoIterator<Item = Insight>>(iter: I) -> Self {
        let mut insights = Insights::new();
        for insight in iter {
            insights.push(insight);
        }
        insights
    }
}
