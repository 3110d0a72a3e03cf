//! `sh:`: Shapes Constraint Language.

use super::Namespace;
use crate::model::iris;
use crate::model::Iri;

/// The `sh:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "sh",
    iri: iris::SH,
};

/// `sh:NodeShape`.
pub const NODE_SHAPE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#NodeShape");
/// `sh:PropertyShape`.
pub const PROPERTY_SHAPE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#PropertyShape");
/// `sh:property`.
pub const PROPERTY: Iri = Iri::from_static("http://www.w3.org/ns/shacl#property");
/// `sh:path`.
pub const PATH: Iri = Iri::from_static("http://www.w3.org/ns/shacl#path");
/// `sh:inversePath`.
pub const INVERSE_PATH: Iri = Iri::from_static("http://www.w3.org/ns/shacl#inversePath");

/// `sh:targetClass`.
pub const TARGET_CLASS: Iri = Iri::from_static("http://www.w3.org/ns/shacl#targetClass");
/// `sh:targetNode`.
pub const TARGET_NODE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#targetNode");
/// `sh:targetSubjectsOf`.
pub const TARGET_SUBJECTS_OF: Iri =
    Iri::from_static("http://www.w3.org/ns/shacl#targetSubjectsOf");
/// `sh:targetObjectsOf`.
pub const TARGET_OBJECTS_OF: Iri =
    Iri::from_static("http://www.w3.org/ns/shacl#targetObjectsOf");

/// `sh:minCount`.
pub const MIN_COUNT: Iri = Iri::from_static("http://www.w3.org/ns/shacl#minCount");
/// `sh:maxCount`.
pub const MAX_COUNT: Iri = Iri::from_static("http://www.w3.org/ns/shacl#maxCount");
/// `sh:datatype`.
pub const DATATYPE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#datatype");
/// `sh:class`.
pub const CLASS: Iri = Iri::from_static("http://www.w3.org/ns/shacl#class");
/// `sh:nodeKind`.
pub const NODE_KIND: Iri = Iri::from_static("http://www.w3.org/ns/shacl#nodeKind");
/// `sh:pattern`.
pub const PATTERN: Iri = Iri::from_static("http://www.w3.org/ns/shacl#pattern");
/// `sh:flags`.
pub const FLAGS: Iri = Iri::from_static("http://www.w3.org/ns/shacl#flags");
/// `sh:minLength`.
pub const MIN_LENGTH: Iri = Iri::from_static("http://www.w3.org/ns/shacl#minLength");
/// `sh:maxLength`.
pub const MAX_LENGTH: Iri = Iri::from_static("http://www.w3.org/ns/shacl#maxLength");
/// `sh:in`.
pub const IN: Iri = Iri::from_static("http://www.w3.org/ns/shacl#in");
/// `sh:hasValue`.
pub const HAS_VALUE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#hasValue");
/// `sh:languageIn`.
pub const LANGUAGE_IN: Iri = Iri::from_static("http://www.w3.org/ns/shacl#languageIn");
/// `sh:node`.
pub const NODE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#node");
/// `sh:minInclusive`.
pub const MIN_INCLUSIVE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#minInclusive");
/// `sh:maxInclusive`.
pub const MAX_INCLUSIVE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#maxInclusive");
/// `sh:minExclusive`.
pub const MIN_EXCLUSIVE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#minExclusive");
/// `sh:maxExclusive`.
pub const MAX_EXCLUSIVE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#maxExclusive");

/// `sh:name`.
pub const NAME: Iri = Iri::from_static("http://www.w3.org/ns/shacl#name");
/// `sh:description`.
pub const DESCRIPTION: Iri = Iri::from_static("http://www.w3.org/ns/shacl#description");
/// `sh:order`.
pub const ORDER: Iri = Iri::from_static("http://www.w3.org/ns/shacl#order");
/// `sh:group`.
pub const GROUP: Iri = Iri::from_static("http://www.w3.org/ns/shacl#group");
/// `sh:defaultValue`.
pub const DEFAULT_VALUE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#defaultValue");

/// `sh:severity`.
pub const SEVERITY: Iri = Iri::from_static("http://www.w3.org/ns/shacl#severity");
/// `sh:message`.
pub const MESSAGE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#message");
/// `sh:deactivated`.
pub const DEACTIVATED: Iri = Iri::from_static("http://www.w3.org/ns/shacl#deactivated");
/// `sh:Violation`.
pub const VIOLATION: Iri = Iri::from_static("http://www.w3.org/ns/shacl#Violation");
/// `sh:Warning`.
pub const WARNING: Iri = Iri::from_static("http://www.w3.org/ns/shacl#Warning");
/// `sh:Info`.
pub const INFO: Iri = Iri::from_static("http://www.w3.org/ns/shacl#Info");

/// `sh:IRI`.
pub const IRI: Iri = Iri::from_static("http://www.w3.org/ns/shacl#IRI");
/// `sh:BlankNode`.
pub const BLANK_NODE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#BlankNode");
/// `sh:Literal`.
pub const LITERAL: Iri = Iri::from_static("http://www.w3.org/ns/shacl#Literal");
/// `sh:BlankNodeOrIRI`.
pub const BLANK_NODE_OR_IRI: Iri = Iri::from_static("http://www.w3.org/ns/shacl#BlankNodeOrIRI");
/// `sh:BlankNodeOrLiteral`.
pub const BLANK_NODE_OR_LITERAL: Iri =
    Iri::from_static("http://www.w3.org/ns/shacl#BlankNodeOrLiteral");
/// `sh:IRIOrLiteral`.
pub const IRI_OR_LITERAL: Iri = Iri::from_static("http://www.w3.org/ns/shacl#IRIOrLiteral");

/// `sh:ValidationReport`.
pub const VALIDATION_REPORT: Iri = Iri::from_static("http://www.w3.org/ns/shacl#ValidationReport");
/// `sh:ValidationResult`.
pub const VALIDATION_RESULT: Iri = Iri::from_static("http://www.w3.org/ns/shacl#ValidationResult");
/// `sh:conforms`.
pub const CONFORMS: Iri = Iri::from_static("http://www.w3.org/ns/shacl#conforms");
/// `sh:result`.
pub const RESULT: Iri = Iri::from_static("http://www.w3.org/ns/shacl#result");
/// `sh:focusNode`.
pub const FOCUS_NODE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#focusNode");
/// `sh:resultPath`.
pub const RESULT_PATH: Iri = Iri::from_static("http://www.w3.org/ns/shacl#resultPath");
/// `sh:value`.
pub const VALUE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#value");
/// `sh:sourceShape`.
pub const SOURCE_SHAPE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#sourceShape");
/// `sh:sourceConstraintComponent`.
pub const SOURCE_CONSTRAINT_COMPONENT: Iri =
    Iri::from_static("http://www.w3.org/ns/shacl#sourceConstraintComponent");
/// `sh:resultSeverity`.
pub const RESULT_SEVERITY: Iri = Iri::from_static("http://www.w3.org/ns/shacl#resultSeverity");
/// `sh:resultMessage`.
pub const RESULT_MESSAGE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#resultMessage");
