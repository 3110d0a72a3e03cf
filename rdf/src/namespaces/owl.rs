//! `owl:`: Web Ontology Language.

use super::Namespace;
use crate::model::iris;
use crate::model::Iri;

/// The `owl:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "owl",
    iri: iris::OWL,
};

/// `owl:Thing`.
pub const THING: Iri = Iri::from_static("http://www.w3.org/2002/07/owl#Thing");
/// `owl:sameAs`.
pub const SAME_AS: Iri = Iri::from_static("http://www.w3.org/2002/07/owl#sameAs");
