//! Orchestrator - Central pipeline (prompt → matches → insights → report)

use crate::clock::{Clock, SystemClock};
use knowledge::DomainExpert;
use rand::rngs::StdRng;
use rand::SeedableRng;
use report::{ReportBuilder, ReportSection};
use router::KeywordRouter;
use serde::Serialize;
use shared::{Domain, EngineConfig, Insights, KeywordMatch, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Maximum number of innovation drivers in a synthesis
pub const MAX_DRIVERS: usize = 3;

/// Everything produced for one prompt
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub prompt: String,
    pub matches: KeywordMatch,
    pub insights: Insights,
    pub drivers: Vec<String>,
    pub concept_name: String,
    pub sections: Vec<ReportSection>,
}

impl Analysis {
    /// Full report markdown
    pub fn report(&self) -> String {
        report::render(&self.sections)
    }
}

/// Orchestrator - owns the experts and the random source
pub struct Orchestrator {
    /// Configuration
    config: EngineConfig,
    /// Experts in registration order
    experts: Vec<DomainExpert>,
    /// Keyword router
    router: KeywordRouter,
    /// Report builder
    report_builder: ReportBuilder,
    /// Random source consumed by concept selection
    rng: StdRng,
    /// Clock for report timestamps
    clock: Arc<dyn Clock>,
}

impl Orchestrator {
    /// Create an Orchestrator with default settings
    pub fn new(included_domain: &str, seed: u64) -> Result<Self> {
        Self::from_config(EngineConfig {
            included_domain: included_domain.to_string(),
            seed,
            ..Default::default()
        })
    }

    /// Create an Orchestrator from configuration
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let experts = Self::register_experts(&config)?;

        info!(
            domains = ?experts.iter().map(|e| e.name()).collect::<Vec<_>>(),
            seed = config.seed,
            "Orchestrator initialized"
        );

        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            experts,
            router: KeywordRouter::new(),
            report_builder: ReportBuilder::new(),
            clock: Arc::new(SystemClock),
        })
    }

    /// Use a different clock for report timestamps
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn register_experts(config: &EngineConfig) -> Result<Vec<DomainExpert>> {
        [
            Domain::Physics,
            Domain::Biomechanics,
            Domain::included(&config.included_domain),
        ]
        .into_iter()
        .map(|domain| DomainExpert::builtin(domain, config.temperature))
        .collect()
    }

    /// Rebuild experts and random state with a new seed
    pub fn reseed(&mut self, seed: u64) -> Result<()> {
        self.config.seed = seed;
        self.experts = Self::register_experts(&self.config)?;
        self.rng = StdRng::seed_from_u64(seed);
        info!(seed, "Orchestrator reseeded");
        Ok(())
    }

    /// Replace the configurable domain, resetting random state.
    ///
    /// Leaves the orchestrator untouched when the name is rejected.
    pub fn set_included_domain(&mut self, name: &str) -> Result<()> {
        let config = EngineConfig {
            included_domain: name.to_string(),
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        self.reseed(self.config.seed)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    pub fn experts(&self) -> &[DomainExpert] {
        &self.experts
    }

    pub fn expert(&self, domain: &str) -> Option<&DomainExpert> {
        self.experts.iter().find(|e| e.name() == domain)
    }

    /// Domain names in registration order
    pub fn domains(&self) -> Vec<&str> {
        self.experts.iter().map(|e| e.name()).collect()
    }

    /// Match the prompt against every expert's vocabulary
    pub fn extract(&self, prompt: &str) -> KeywordMatch {
        self.router.extract(prompt, &self.experts)
    }

    /// One insight per expert, in registration order
    pub fn generate_insights(&mut self, prompt: &str, matches: &KeywordMatch) -> Insights {
        debug!(prompt_len = prompt.len(), "Generating insights");
        let rng = &mut self.rng;
        self.experts
            .iter()
            .map(|expert| expert.generate_insight(matches.get(expert.name()), rng))
            .collect()
    }

    /// First emphasized concept of each insight, in the given order.
    ///
    /// Falls back to the domain names when no insight emphasizes anything.
    pub fn choose_drivers(insights: &Insights) -> Vec<String> {
        let mut drivers: Vec<String> = insights
            .iter()
            .filter_map(|i| i.emphasized())
            .map(str::to_string)
            .collect();

        if drivers.is_empty() {
            drivers = insights.iter().map(|i| i.domain.clone()).collect();
        }

        drivers.truncate(MAX_DRIVERS);
        drivers
    }

    /// Name a concept after the last word of each driver
    pub fn propose_concept_name(drivers: &[String]) -> String {
        let nouns: Vec<&str> = drivers
            .iter()
            .filter_map(|d| d.split_whitespace().last())
            .collect();
        format!("Project {}", title_case(&nouns.join("-")))
    }

    /// Build report sections.
    ///
    /// Insights are sorted by domain name before drivers are chosen.
    pub fn build_report(&self, prompt: &str, insights: &Insights) -> Vec<ReportSection> {
        let sorted = insights.sorted_by_domain();
        let drivers = Self::choose_drivers(&sorted);
        let concept_name = Self::propose_concept_name(&drivers);
        self.report_builder
            .build(prompt, &sorted, &drivers, &concept_name, self.clock.now())
    }

    /// Run the whole pipeline for one prompt
    pub fn analyze(&mut self, prompt: &str) -> Analysis {
        let matches = self.extract(prompt);
        let insights = self.generate_insights(prompt, &matches);

        let sorted = insights.sorted_by_domain();
        let drivers = Self::choose_drivers(&sorted);
        let concept_name = Self::propose_concept_name(&drivers);
        let sections = self.report_builder.build(
            prompt,
            &sorted,
            &drivers,
            &concept_name,
            self.clock.now(),
        );

        debug!(concept = %concept_name, sections = sections.len(), "Analysis complete");

        Analysis {
            prompt: prompt.to_string(),
            matches,
            insights,
            drivers,
            concept_name,
            sections,
        }
    }
}

/// Title-case: uppercase after any non-letter, lowercase after a letter
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_letter = false;
    for c in text.chars() {
        if prev_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_letter = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{NaiveDate, NaiveDateTime};
    use report::{SectionKind, CLOSING_LINE};
    use shared::{Insight, Phrasing};

    const PROMPT: &str = "Design a lightweight aerodynamics joint";

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn create_orchestrator(seed: u64) -> Orchestrator {
        Orchestrator::new("Anatomy", seed)
            .unwrap()
            .with_clock(Arc::new(FixedClock(fixed_time())))
    }

    // ============== Construction Tests ==============

    #[test]
    fn test_registration_order() {
        let orchestrator = create_orchestrator(42);
        assert_eq!(orchestrator.domains(), vec!["Physics", "Biomechanics", "Anatomy"]);
        assert_eq!(orchestrator.seed(), 42);
    }

    #[test]
    fn test_custom_domain_keeps_anatomy_catalog() {
        let orchestrator = Orchestrator::new("  Botany ", 42).unwrap();
        assert_eq!(orchestrator.domains(), vec!["Physics", "Biomechanics", "Botany"]);

        let botany = orchestrator.expert("Botany").unwrap();
        assert!(botany.knowledge().contains("Human Proportionality"));
        assert!(orchestrator.expert("Anatomy").is_none());
    }

    #[test]
    fn test_lowercase_anatomy_normalized() {
        let orchestrator = Orchestrator::new("anatomy", 1).unwrap();
        assert_eq!(orchestrator.domains()[2], "Anatomy");
    }

    #[test]
    fn test_builtin_domain_name_rejected() {
        for name in ["Physics", "biomechanics"] {
            let result = Orchestrator::new(name, 42);
            assert!(matches!(result, Err(shared::DvncError::Config(_))), "{name}");
        }
    }

    #[test]
    fn test_set_included_domain_rejects_builtin_name() {
        let mut orchestrator = create_orchestrator(42);
        assert!(orchestrator.set_included_domain("Physics").is_err());

        // Registry unchanged, so every domain still gets its own insight
        assert_eq!(orchestrator.domains(), vec!["Physics", "Biomechanics", "Anatomy"]);
        assert_eq!(orchestrator.config().included_domain, "Anatomy");
        let analysis = orchestrator.analyze(PROMPT);
        assert_eq!(analysis.insights.len(), 3);
        assert_eq!(analysis.matches.domains(), orchestrator.domains());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            temperature: 2.0,
            ..Default::default()
        };
        assert!(Orchestrator::from_config(config).is_err());
    }

    // ============== Extraction Tests ==============

    #[test]
    fn test_extract() {
        let orchestrator = create_orchestrator(42);
        let matches = orchestrator.extract(PROMPT);
        assert!(matches.get("Physics").contains(&"Aerodynamics".to_string()));
        assert_eq!(matches.get("Biomechanics"), ["Joint Articulation"]);
    }

    // ============== Insight Tests ==============

    #[test]
    fn test_generate_insights_per_domain() {
        let mut orchestrator = create_orchestrator(42);
        let matches = orchestrator.extract(PROMPT);
        let insights = orchestrator.generate_insights(PROMPT, &matches);

        let domains: Vec<_> = insights.iter().map(|i| i.domain.as_str()).collect();
        assert_eq!(domains, vec!["Physics", "Biomechanics", "Anatomy"]);

        let physics = insights.get("Physics").unwrap();
        assert_eq!(physics.concept.as_deref(), Some("Aerodynamics"));
        assert_eq!(physics.phrasing, Phrasing::Directive);

        let anatomy = insights.get("Anatomy").unwrap();
        assert_eq!(anatomy.phrasing, Phrasing::Exploratory);
    }

    #[test]
    fn test_generate_insights_missing_domain_is_exploratory() {
        let mut orchestrator = create_orchestrator(42);
        let insights = orchestrator.generate_insights("anything", &KeywordMatch::new());
        assert_eq!(insights.len(), 3);
        assert!(insights.iter().all(|i| i.phrasing == Phrasing::Exploratory));
    }

    #[test]
    fn test_same_seed_same_insights() {
        let mut a = create_orchestrator(7);
        let mut b = create_orchestrator(7);
        let matches = a.extract("");
        for _ in 0..5 {
            assert_eq!(
                a.generate_insights("", &matches),
                b.generate_insights("", &matches)
            );
        }
    }

    #[test]
    fn test_reseed_equivalent_to_recreation() {
        let mut reseeded = create_orchestrator(1);
        let matches = reseeded.extract("");
        reseeded.generate_insights("", &matches);
        reseeded.reseed(99).unwrap();

        let mut fresh = create_orchestrator(99);
        assert_eq!(
            reseeded.generate_insights("", &matches),
            fresh.generate_insights("", &matches)
        );
        assert_eq!(reseeded.seed(), 99);
    }

    #[test]
    fn test_set_included_domain() {
        let mut orchestrator = create_orchestrator(42);
        orchestrator.set_included_domain("Optics").unwrap();
        assert_eq!(orchestrator.domains(), vec!["Physics", "Biomechanics", "Optics"]);
    }

    // ============== Driver Tests ==============

    #[test]
    fn test_choose_drivers_in_given_order() {
        let insights: Insights = [
            Insight::from_text("Physics", "Leverage **Aerodynamics** now"),
            Insight::from_text("Biomechanics", "no emphasis"),
            Insight::from_text("Anatomy", "Consider **Body Mechanics**"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            Orchestrator::choose_drivers(&insights),
            vec!["Aerodynamics", "Body Mechanics"]
        );
    }

    #[test]
    fn test_choose_drivers_falls_back_to_domains() {
        let insights: Insights = [
            Insight::from_text("Physics", "plain"),
            Insight::from_text("Anatomy", "plain"),
        ]
        .into_iter()
        .collect();

        assert_eq!(Orchestrator::choose_drivers(&insights), vec!["Physics", "Anatomy"]);
    }

    #[test]
    fn test_choose_drivers_truncates() {
        let insights: Insights = ["A", "B", "C", "D"]
            .into_iter()
            .map(|d| Insight::from_text(d, format!("**{d} Concept**")))
            .collect();
        assert_eq!(Orchestrator::choose_drivers(&insights).len(), MAX_DRIVERS);
    }

    #[test]
    fn test_choose_drivers_empty() {
        assert!(Orchestrator::choose_drivers(&Insights::new()).is_empty());
    }

    // ============== Concept Name Tests ==============

    #[test]
    fn test_propose_concept_name() {
        let drivers = vec!["Human Proportionality".to_string(), "Muscular Force".to_string()];
        assert_eq!(
            Orchestrator::propose_concept_name(&drivers),
            "Project Proportionality-Force"
        );
    }

    #[test]
    fn test_propose_concept_name_title_cases() {
        let drivers = vec!["fluid DYNAMICS".to_string(), "Aerodynamics".to_string(), "3d scan".to_string()];
        assert_eq!(
            Orchestrator::propose_concept_name(&drivers),
            "Project Dynamics-Aerodynamics-Scan"
        );
    }

    #[test]
    fn test_title_case_after_digits() {
        assert_eq!(title_case("3d-model"), "3D-Model");
    }

    // ============== Report Tests ==============

    #[test]
    fn test_analyze_pipeline() {
        let mut orchestrator = create_orchestrator(42);
        let analysis = orchestrator.analyze(PROMPT);

        // Sorted: Anatomy, Biomechanics, Physics
        assert_eq!(analysis.drivers.len(), 3);
        assert_eq!(analysis.drivers[1], "Joint Articulation");
        assert_eq!(analysis.drivers[2], "Aerodynamics");
        assert!(analysis.concept_name.starts_with("Project "));
        assert!(analysis.concept_name.ends_with("-Articulation-Aerodynamics"));

        let report = analysis.report();
        assert!(report.starts_with('#'));
        assert!(report.ends_with(CLOSING_LINE));
        assert!(report.contains("**Timestamp:** 2025-01-15 12:00:00"));
    }

    #[test]
    fn test_build_report_idempotent() {
        let mut orchestrator = create_orchestrator(42);
        let matches = orchestrator.extract(PROMPT);
        let insights = orchestrator.generate_insights(PROMPT, &matches);

        let first = orchestrator.build_report(PROMPT, &insights);
        let second = orchestrator.build_report(PROMPT, &insights);
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
        assert_eq!(first[0].kind, SectionKind::Header);
        assert_eq!(first[5].kind, SectionKind::Roadmap);
    }

    #[test]
    fn test_build_report_matches_analyze() {
        let mut a = create_orchestrator(3);
        let mut b = create_orchestrator(3);

        let analysis = a.analyze(PROMPT);
        let matches = b.extract(PROMPT);
        let insights = b.generate_insights(PROMPT, &matches);

        assert_eq!(analysis.sections, b.build_report(PROMPT, &insights));
    }

    #[test]
    fn test_empty_prompt_degrades() {
        let mut orchestrator = create_orchestrator(42);
        let analysis = orchestrator.analyze("");

        assert!(analysis.matches.is_empty());
        assert!(analysis
            .insights
            .iter()
            .all(|i| i.phrasing == Phrasing::Exploratory));
        assert_eq!(analysis.sections.len(), 6);
    }
}
