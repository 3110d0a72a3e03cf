//! Append-only fact store for one run.

use meemoo_rdf::Triple;

/// Facts in emission order. Duplicates are kept.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    facts: Vec<Triple>,
}

impl FactStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fact.
    pub fn push(&mut self, fact: Triple) {
        self.facts.push(fact);
    }

    /// Appends facts in order.
    pub fn extend(&mut self, facts: impl IntoIterator<Item = Triple>) {
        self.facts.extend(facts);
    }

    /// All facts so far.
    #[must_use]
    pub fn as_slice(&self) -> &[Triple] {
        &self.facts
    }

    /// Number of facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// True if nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Consumes the store.
    #[must_use]
    pub fn into_facts(self) -> Vec<Triple> {
        self.facts
    }
}
