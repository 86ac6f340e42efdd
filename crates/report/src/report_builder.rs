//! ReportBuilder - Ordered report sections

use crate::templates::{domain_icon, ReportTemplates};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shared::Insights;

/// Timestamp format used in the report header
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Report section identifiers, in delivery order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Insights,
    Synthesis,
    Architecture,
    Validation,
    Roadmap,
}

/// A single independently renderable block of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub body: String,
}

impl ReportSection {
    fn new(kind: SectionKind, lines: Vec<String>) -> Self {
        Self {
            kind,
            body: lines.join("\n"),
        }
    }
}

/// Join sections into the full markdown report
pub fn render(sections: &[ReportSection]) -> String {
    sections
        .iter()
        .map(|s| s.body.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds reports from a fixed template set
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    templates: ReportTemplates,
}

impl ReportBuilder {
    /// Create a ReportBuilder with the default templates
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(templates: ReportTemplates) -> Self {
        Self { templates }
    }

    /// Assemble the report.
    ///
    /// Section order is fixed. Insight subsections are sorted by domain name
    /// regardless of the order they were passed in.
    pub fn build(
        &self,
        prompt: &str,
        insights: &Insights,
        drivers: &[String],
        concept_name: &str,
        timestamp: NaiveDateTime,
    ) -> Vec<ReportSection> {
        vec![
            self.header(prompt, timestamp),
            self.insights(insights),
            self.synthesis(drivers, concept_name),
            ReportSection {
                kind: SectionKind::Architecture,
                body: self.templates.architecture.clone(),
            },
            ReportSection {
                kind: SectionKind::Validation,
                body: self.templates.validation.clone(),
            },
            ReportSection {
                kind: SectionKind::Roadmap,
                body: self.templates.roadmap.clone(),
            },
        ]
    }

    fn header(&self, prompt: &str, timestamp: NaiveDateTime) -> ReportSection {
        ReportSection::new(
            SectionKind::Header,
            vec![
                self.templates.title.clone(),
                self.templates.subtitle.clone(),
                String::new(),
                format!("**Timestamp:** {}", timestamp.format(TIMESTAMP_FORMAT)),
                format!("**Challenge:** {prompt}"),
                String::new(),
            ],
        )
    }

    fn insights(&self, insights: &Insights) -> ReportSection {
        let mut lines = vec!["## 🔬 Multidisciplinary Insights\n".to_string()];
        for insight in insights.sorted_by_domain().iter() {
            lines.push(format!("### {} {}", domain_icon(&insight.domain), insight.domain));
            lines.push(format!("{}\n", insight.text));
        }
        ReportSection::new(SectionKind::Insights, lines)
    }

    fn synthesis(&self, drivers: &[String], concept_name: &str) -> ReportSection {
        ReportSection::new(
            SectionKind::Synthesis,
            vec![
                "## 🚀 Concept Synthesis".to_string(),
                format!("### **{concept_name}**"),
                String::new(),
                format!("**Primary Innovation Drivers:** `{}`", drivers.join(" × ")),
                String::new(),
            ],
        )
    }
}
