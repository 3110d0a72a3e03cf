//! Standard vocabularies.
//!
//! Each sub-module exposes its terms as `const` [`Iri`](crate::Iri) values
//! plus a [`Namespace`] describing its preferred prefix.

pub mod lang;
pub mod owl;
pub mod rdf;
pub mod rdfs;
pub mod sdo;
pub mod sh;
pub mod xsd;

use crate::model::Iri;

/// A vocabulary namespace: preferred prefix and base IRI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    /// Preferred prefix (e.g. `"sdo"`).
    pub prefix: &'static str,
    /// Base IRI (e.g. `"https://schema.org/"`).
    pub iri: &'static str,
}

impl Namespace {
    /// Returns the IRI of a term in this namespace.
    #[must_use]
    pub fn term(&self, local: &str) -> Iri {
        Iri::new(format!("{}{}", self.iri, local))
    }
}

/// `a`, the Turtle shorthand for `rdf:type`.
pub const A: Iri = rdf::TYPE;

/// Returns the standard vocabularies in the order their prefixes are
/// declared in serialized output.
#[must_use]
pub fn standard() -> Vec<Namespace> {
    vec![
        rdf::NAMESPACE,
        rdfs::NAMESPACE,
        xsd::NAMESPACE,
        owl::NAMESPACE,
        sh::NAMESPACE,
        sdo::NAMESPACE,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_prefixes_unique() {
        let mut seen = std::collections::HashSet::new();
        for ns in standard() {
            assert!(seen.insert(ns.prefix), "Duplicate prefix: {}", ns.prefix);
        }
    }

    #[test]
    fn term_appends_local_name() {
        assert_eq!(sdo::NAMESPACE.term("Person"), sdo::PERSON);
    }
}
