//! `xsd:`: XML Schema datatypes.

use super::Namespace;
use crate::model::iris;
use crate::model::Iri;

/// The `xsd:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "xsd",
    iri: iris::XSD,
};

/// `xsd:string`.
pub const STRING: Iri = Iri::from_static(iris::XSD_STRING);
/// `xsd:integer`.
pub const INTEGER: Iri = Iri::from_static(iris::XSD_INTEGER);
/// `xsd:decimal`.
pub const DECIMAL: Iri = Iri::from_static(iris::XSD_DECIMAL);
/// `xsd:double`.
pub const DOUBLE: Iri = Iri::from_static(iris::XSD_DOUBLE);
/// `xsd:boolean`.
pub const BOOLEAN: Iri = Iri::from_static(iris::XSD_BOOLEAN);
/// `xsd:date`.
pub const DATE: Iri = Iri::from_static(iris::XSD_DATE);
/// `xsd:dateTime`.
pub const DATE_TIME: Iri = Iri::from_static(iris::XSD_DATETIME);
/// `xsd:anyURI`.
pub const ANY_URI: Iri = Iri::from_static("http://www.w3.org/2001/XMLSchema#anyURI");
