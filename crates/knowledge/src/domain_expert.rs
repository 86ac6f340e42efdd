//! DomainExpert - Concept selection and templated insights for one domain

use crate::{catalog_for, KnowledgeBase};
use rand::Rng;
use shared::{Concept, Domain, EmptyKnowledgeBaseError, Insight, Phrasing, Result};
use tracing::debug;

/// At or above this temperature, selection among several candidates is random
pub const EXPLORATION_TEMPERATURE: f64 = 0.7;

/// A specialist owning one knowledge base
#[derive(Debug, Clone)]
pub struct DomainExpert {
    domain: Domain,
    knowledge: KnowledgeBase,
    temperature: f64,
}

impl DomainExpert {
    /// Create an expert. Fails if the knowledge base is empty.
    pub fn new(domain: Domain, knowledge: KnowledgeBase, temperature: f64) -> Result<Self> {
        if knowledge.is_empty() {
            return Err(EmptyKnowledgeBaseError {
                domain: domain.name().to_string(),
            }
            .into());
        }

        Ok(Self {
            domain,
            knowledge,
            temperature: temperature.clamp(0.0, 1.0),
        })
    }

    /// Create an expert backed by the built-in catalog for its domain
    pub fn builtin(domain: Domain, temperature: f64) -> Result<Self> {
        let knowledge = catalog_for(&domain)?;
        Self::new(domain, knowledge, temperature)
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn name(&self) -> &str {
        self.domain.name()
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Role description for this expert
    pub fn system_prompt(&self) -> String {
        format!(
            "You are a specialized SLM for {}. \
             Use concise, actionable language. Cite a Da Vinci study when relevant. \
             Prefer design heuristics and constraints over vague generalities.",
            self.domain
        )
    }

    /// Pick a concept name.
    ///
    /// - no candidates: uniform over the whole knowledge base
    /// - several candidates at exploration temperature: uniform over candidates
    /// - otherwise: the first candidate
    pub fn select<R: Rng + ?Sized>(&self, candidates: &[String], rng: &mut R) -> String {
        if candidates.is_empty() {
            return self.any_concept(rng).name.clone();
        }

        if self.temperature >= EXPLORATION_TEMPERATURE && candidates.len() > 1 {
            let index = rng.gen_range(0..candidates.len());
            return candidates[index].clone();
        }

        candidates[0].clone()
    }

    /// Produce an insight from this domain's matched keywords
    pub fn generate_insight<R: Rng + ?Sized>(&self, candidates: &[String], rng: &mut R) -> Insight {
        let phrasing = if candidates.is_empty() {
            Phrasing::Exploratory
        } else {
            Phrasing::Directive
        };

        let chosen = self.select(candidates, rng);
        let concept = match self.knowledge.resolve(&chosen) {
            Some(concept) => concept,
            None => {
                debug!(domain = %self.domain, keyword = %chosen, "Keyword not in knowledge base, falling back");
                self.any_concept(rng)
            }
        };

        debug!(domain = %self.domain, concept = %concept.name, ?phrasing, "Generated insight");
        Insight::from_concept(self.name(), &concept.name, &concept.citation, phrasing)
    }

    /// Uniform draw over the whole base, which is never empty
    fn any_concept<R: Rng + ?Sized>(&self, rng: &mut R) -> &Concept {
        let concepts = self.knowledge.as_slice();
        &concepts[rng.gen_range(0..concepts.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn physics(temperature: f64) -> DomainExpert {
        DomainExpert::builtin(Domain::Physics, temperature).unwrap()
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // ============== Construction Tests ==============

    #[test]
    fn test_empty_knowledge_rejected() {
        let result = DomainExpert::new(Domain::Physics, KnowledgeBase::new(), 0.6);
        assert!(matches!(result, Err(shared::DvncError::EmptyKnowledgeBase(_))));
    }

    #[test]
    fn test_temperature_clamped() {
        assert_eq!(physics(3.0).temperature(), 1.0);
        assert_eq!(physics(-1.0).temperature(), 0.0);
    }

    #[test]
    fn test_system_prompt_names_domain() {
        let expert = DomainExpert::builtin(Domain::included("Botany"), 0.6).unwrap();
        assert!(expert.system_prompt().starts_with("You are a specialized SLM for Botany."));
    }

    // ============== Selection Tests ==============

    #[test]
    fn test_select_low_temperature_is_first() {
        let expert = physics(0.6);
        let mut rng = StdRng::seed_from_u64(1);
        let candidates = names(&["Aerodynamics", "Fluid Dynamics", "Lever Mechanics"]);
        for _ in 0..20 {
            assert_eq!(expert.select(&candidates, &mut rng), "Aerodynamics");
        }
    }

    #[test]
    fn test_select_single_candidate_high_temperature() {
        let expert = physics(0.9);
        let mut rng = StdRng::seed_from_u64(1);
        let candidates = names(&["Wave Propagation"]);
        assert_eq!(expert.select(&candidates, &mut rng), "Wave Propagation");
    }

    #[test]
    fn test_select_high_temperature_stays_in_candidates() {
        let expert = physics(0.7);
        let mut rng = StdRng::seed_from_u64(9);
        let candidates = names(&["Aerodynamics", "Fluid Dynamics"]);
        for _ in 0..50 {
            assert!(candidates.contains(&expert.select(&candidates, &mut rng)));
        }
    }

    #[test]
    fn test_select_at_exploration_threshold_varies() {
        let expert = physics(EXPLORATION_TEMPERATURE);
        let mut rng = StdRng::seed_from_u64(42);
        let candidates = names(&["Aerodynamics", "Fluid Dynamics", "Lever Mechanics"]);

        let picked: std::collections::HashSet<String> =
            (0..50).map(|_| expert.select(&candidates, &mut rng)).collect();
        assert!(picked.len() > 1, "only ever picked {picked:?}");
    }

    #[test]
    fn test_select_high_temperature_reproducible() {
        let expert = physics(0.8);
        let candidates = names(&["Aerodynamics", "Fluid Dynamics", "Lever Mechanics", "Wave Propagation"]);

        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..25).map(|_| expert.select(&candidates, &mut rng)).collect::<Vec<_>>()
        };

        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_select_empty_draws_from_knowledge() {
        let expert = physics(0.6);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..30 {
            let name = expert.select(&[], &mut rng);
            assert!(expert.knowledge().contains(&name));
        }
    }

    // ============== Insight Tests ==============

    #[test]
    fn test_generate_insight_directive() {
        let expert = physics(0.6);
        let mut rng = StdRng::seed_from_u64(42);
        let insight = expert.generate_insight(&names(&["Aerodynamics", "Fluid Dynamics"]), &mut rng);

        assert_eq!(insight.domain, "Physics");
        assert_eq!(insight.phrasing, Phrasing::Directive);
        assert_eq!(insight.concept.as_deref(), Some("Aerodynamics"));
        assert_eq!(insight.citation.as_deref(), Some("ornithopter sketches and airflow notes"));
        assert!(insight.text.starts_with("Leverage **Aerodynamics**"));
    }

    #[test]
    fn test_generate_insight_exploratory() {
        let expert = physics(0.6);
        let mut rng = StdRng::seed_from_u64(42);
        let insight = expert.generate_insight(&[], &mut rng);

        assert_eq!(insight.phrasing, Phrasing::Exploratory);
        assert!(insight.text.starts_with("Consider **"));
        let concept = insight.concept.unwrap();
        assert!(expert.knowledge().contains(&concept));
    }

    #[test]
    fn test_generate_insight_normalizes_keyword() {
        let expert = physics(0.6);
        let mut rng = StdRng::seed_from_u64(42);
        let insight = expert.generate_insight(&names(&["lever"]), &mut rng);
        assert_eq!(insight.concept.as_deref(), Some("Lever Mechanics"));
    }

    #[test]
    fn test_generate_insight_unknown_keyword_falls_back() {
        let expert = physics(0.6);
        let mut rng = StdRng::seed_from_u64(42);
        let insight = expert.generate_insight(&names(&["Thermodynamics"]), &mut rng);

        // Still phrased as a directive, but the concept comes from the base
        assert_eq!(insight.phrasing, Phrasing::Directive);
        assert!(expert.knowledge().contains(insight.concept.as_deref().unwrap()));
    }

    #[test]
    fn test_generate_insight_reproducible() {
        let expert = physics(0.6);
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        assert_eq!(expert.generate_insight(&[], &mut a), expert.generate_insight(&[], &mut b));
    }
}
