//! `rdfs:`: RDF Schema vocabulary.

use super::Namespace;
use crate::model::iris;
use crate::model::Iri;

/// The `rdfs:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "rdfs",
    iri: iris::RDFS,
};

/// `rdfs:label`.
pub const LABEL: Iri = Iri::from_static("http://www.w3.org/2000/01/rdf-schema#label");
/// `rdfs:comment`.
pub const COMMENT: Iri = Iri::from_static("http://www.w3.org/2000/01/rdf-schema#comment");
/// `rdfs:subClassOf`.
pub const SUB_CLASS_OF: Iri = Iri::from_static(iris::RDFS_SUBCLASS_OF);
/// `rdfs:seeAlso`.
pub const SEE_ALSO: Iri = Iri::from_static("http://www.w3.org/2000/01/rdf-schema#seeAlso");
/// `rdfs:Class`.
pub const CLASS: Iri = Iri::from_static("http://www.w3.org/2000/01/rdf-schema#Class");
