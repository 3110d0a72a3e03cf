//! `rdf:`: RDF concepts vocabulary.

use super::Namespace;
use crate::model::iris;
use crate::model::Iri;

/// The `rdf:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "rdf",
    iri: iris::RDF,
};

/// `rdf:type`.
pub const TYPE: Iri = Iri::from_static(iris::RDF_TYPE);
/// `rdf:first`.
pub const FIRST: Iri = Iri::from_static(iris::RDF_FIRST);
/// `rdf:rest`.
pub const REST: Iri = Iri::from_static(iris::RDF_REST);
/// `rdf:nil`.
pub const NIL: Iri = Iri::from_static(iris::RDF_NIL);
/// `rdf:langString`.
pub const LANG_STRING: Iri = Iri::from_static(iris::RDF_LANG_STRING);
