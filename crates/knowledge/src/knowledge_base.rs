//! KnowledgeBase - Ordered concept table for one domain

use shared::{Concept, DuplicateConceptError, Result};

/// Ordered mapping of concept name to citation.
///
/// Insertion order is the tie-break priority used when resolving keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    concepts: Vec<Concept>,
}

impl KnowledgeBase {
    /// Create an empty KnowledgeBase
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, citation)` pairs, rejecting duplicate names
    pub fn from_pairs<'a>(
        domain: &str,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self> {
        let mut kb = Self::new();
        for (name, citation) in pairs {
            kb.insert(domain, Concept::new(name, citation))?;
        }
        Ok(kb)
    }

    /// Append a concept
    pub fn insert(&mut self, domain: &str, concept: Concept) -> Result<()> {
        if self.contains(&concept.name) {
            return Err(DuplicateConceptError {
                domain: domain.to_string(),
                concept: concept.name,
            }
            .into());
        }
        self.concepts.push(concept);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.concepts.iter().any(|c| c.name == name)
    }

    /// Concept names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.concepts.iter().map(|c| c.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.iter()
    }

    pub fn as_slice(&self) -> &[Concept] {
        &self.concepts
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Normalize a keyword phrase back to its canonical concept.
    ///
    /// Case-insensitive; the first concept (insertion order) whose name
    /// equals or contains the keyword wins.
    pub fn resolve(&self, keyword: &str) -> Option<&Concept> {
        let keyword = keyword.to_lowercase();
        self.concepts.iter().find(|c| {
            let name = c.name.to_lowercase();
            name == keyword || name.contains(&keyword)
        })
    }
}
