//! Shapes graph model and loader.
//!
//! Supports the SHACL Core subset used by the ETL validation step:
//! the four explicit target kinds plus implicit class targets, predicate
//! and inverse paths, and the value-type, cardinality, value-range, string,
//! enumeration, and `sh:node` constraint components. Any other `sh:`
//! parameter on a shape is rejected when the shapes graph is loaded.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use meemoo_rdf::model::iris;
use meemoo_rdf::namespaces::{rdfs, sh};
use meemoo_rdf::{Iri, Literal, Node, Triple};
use regex::Regex;

use crate::error::ShaclError;
use crate::graph::Graph;
use crate::report::Severity;

/// How a shape selects its focus nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `sh:targetClass`: every instance of the class (or a subclass).
    Class(Iri),
    /// `sh:targetNode`: the given node.
    Node(Node),
    /// `sh:targetSubjectsOf`: every subject of the predicate.
    SubjectsOf(Iri),
    /// `sh:targetObjectsOf`: every object of the predicate.
    ObjectsOf(Iri),
}

/// A property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyPath {
    /// Follow the predicate from subject to object.
    Predicate(Iri),
    /// `sh:inversePath`: follow the predicate from object to subject.
    Inverse(Iri),
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyPath::Predicate(p) => p.fmt(f),
            PropertyPath::Inverse(p) => write!(f, "^{p}"),
        }
    }
}

/// Values of `sh:nodeKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `sh:IRI`.
    Iri,
    /// `sh:BlankNode`.
    BlankNode,
    /// `sh:Literal`.
    Literal,
    /// `sh:BlankNodeOrIRI`.
    BlankNodeOrIri,
    /// `sh:BlankNodeOrLiteral`.
    BlankNodeOrLiteral,
    /// `sh:IRIOrLiteral`.
    IriOrLiteral,
}

impl NodeKind {
    fn from_iri(iri: &Iri) -> Option<Self> {
        [
            (sh::IRI, NodeKind::Iri),
            (sh::BLANK_NODE, NodeKind::BlankNode),
            (sh::LITERAL, NodeKind::Literal),
            (sh::BLANK_NODE_OR_IRI, NodeKind::BlankNodeOrIri),
            (sh::BLANK_NODE_OR_LITERAL, NodeKind::BlankNodeOrLiteral),
            (sh::IRI_OR_LITERAL, NodeKind::IriOrLiteral),
        ]
        .into_iter()
        .find(|(candidate, _)| candidate == iri)
        .map(|(_, kind)| kind)
    }

    /// The `sh:` IRI of this kind.
    #[must_use]
    pub fn iri(self) -> Iri {
        match self {
            NodeKind::Iri => sh::IRI,
            NodeKind::BlankNode => sh::BLANK_NODE,
            NodeKind::Literal => sh::LITERAL,
            NodeKind::BlankNodeOrIri => sh::BLANK_NODE_OR_IRI,
            NodeKind::BlankNodeOrLiteral => sh::BLANK_NODE_OR_LITERAL,
            NodeKind::IriOrLiteral => sh::IRI_OR_LITERAL,
        }
    }

    /// True if `node` is of this kind.
    #[must_use]
    pub fn matches(self, node: &Node) -> bool {
        match (self, node) {
            (NodeKind::Iri, Node::Iri(_)) => true,
            (NodeKind::BlankNode, Node::Blank(_)) => true,
            (NodeKind::Literal, Node::Literal(_)) => true,
            (NodeKind::BlankNodeOrIri, n) => n.is_resource(),
            (NodeKind::BlankNodeOrLiteral, n) => !matches!(n, Node::Iri(_)),
            (NodeKind::IriOrLiteral, n) => !matches!(n, Node::Blank(_)),
            _ => false,
        }
    }
}

/// The four value-range components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    /// `sh:minInclusive`.
    MinInclusive,
    /// `sh:maxInclusive`.
    MaxInclusive,
    /// `sh:minExclusive`.
    MinExclusive,
    /// `sh:maxExclusive`.
    MaxExclusive,
}

impl RangeKind {
    /// True if a value ordered `ord` relative to the bound is in range.
    #[must_use]
    pub fn admits(self, ord: Ordering) -> bool {
        match self {
            RangeKind::MinInclusive => ord != Ordering::Less,
            RangeKind::MaxInclusive => ord != Ordering::Greater,
            RangeKind::MinExclusive => ord == Ordering::Greater,
            RangeKind::MaxExclusive => ord == Ordering::Less,
        }
    }

    /// The comparison operator, for messages.
    #[must_use]
    pub fn operator(self) -> &'static str {
        match self {
            RangeKind::MinInclusive => ">=",
            RangeKind::MaxInclusive => "<=",
            RangeKind::MinExclusive => ">",
            RangeKind::MaxExclusive => "<",
        }
    }
}

/// A single constraint component with its parameters.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// `sh:minCount`.
    MinCount(usize),
    /// `sh:maxCount`.
    MaxCount(usize),
    /// `sh:datatype`.
    Datatype(Iri),
    /// `sh:class`.
    Class(Iri),
    /// `sh:nodeKind`.
    NodeKind(NodeKind),
    /// `sh:pattern` with optional `sh:flags`.
    Pattern {
        /// The pattern as written in the shapes graph.
        pattern: String,
        /// The compiled expression, flags applied.
        regex: Regex,
    },
    /// `sh:minLength`.
    MinLength(usize),
    /// `sh:maxLength`.
    MaxLength(usize),
    /// `sh:in`.
    In(Vec<Node>),
    /// `sh:hasValue`.
    HasValue(Node),
    /// `sh:languageIn`.
    LanguageIn(Vec<String>),
    /// `sh:minInclusive`, `sh:maxInclusive`, `sh:minExclusive`,
    /// `sh:maxExclusive`.
    Range {
        /// Which bound.
        kind: RangeKind,
        /// The bound value.
        bound: Literal,
    },
    /// `sh:node`: every value must conform to the referenced shape.
    Node(Box<Shape>),
}

impl Constraint {
    /// The IRI of the SHACL constraint component this constraint belongs to.
    #[must_use]
    pub fn component(&self) -> Iri {
        let local = match self {
            Constraint::MinCount(_) => "MinCountConstraintComponent",
            Constraint::MaxCount(_) => "MaxCountConstraintComponent",
            Constraint::Datatype(_) => "DatatypeConstraintComponent",
            Constraint::Class(_) => "ClassConstraintComponent",
            Constraint::NodeKind(_) => "NodeKindConstraintComponent",
            Constraint::Pattern { .. } => "PatternConstraintComponent",
            Constraint::MinLength(_) => "MinLengthConstraintComponent",
            Constraint::MaxLength(_) => "MaxLengthConstraintComponent",
            Constraint::In(_) => "InConstraintComponent",
            Constraint::HasValue(_) => "HasValueConstraintComponent",
            Constraint::LanguageIn(_) => "LanguageInConstraintComponent",
            Constraint::Range { kind, .. } => match kind {
                RangeKind::MinInclusive => "MinInclusiveConstraintComponent",
                RangeKind::MaxInclusive => "MaxInclusiveConstraintComponent",
                RangeKind::MinExclusive => "MinExclusiveConstraintComponent",
                RangeKind::MaxExclusive => "MaxExclusiveConstraintComponent",
            },
            Constraint::Node(_) => "NodeConstraintComponent",
        };
        sh::NAMESPACE.term(local)
    }
}

/// A node shape (no path) or property shape (with a path).
#[derive(Debug, Clone)]
pub struct Shape {
    /// The shape's node in the shapes graph.
    pub id: Node,
    /// Focus node selectors. Empty for property shapes nested via `sh:property`.
    pub targets: Vec<Target>,
    /// `Some` for property shapes.
    pub path: Option<PropertyPath>,
    /// Constraints in shapes-graph order.
    pub constraints: Vec<Constraint>,
    /// Nested property shapes (`sh:property`).
    pub properties: Vec<Shape>,
    /// `sh:severity`, default Violation.
    pub severity: Severity,
    /// `sh:message`, overriding generated messages.
    pub message: Option<String>,
    /// `sh:deactivated true`.
    pub deactivated: bool,
}

/// A loaded shapes graph.
#[derive(Debug, Clone, Default)]
pub struct Shapes {
    shapes: Vec<Shape>,
}

impl Shapes {
    /// Parses a Turtle shapes document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid Turtle or a shape is
    /// malformed.
    pub fn parse(turtle: &str) -> Result<Self, ShaclError> {
        let triples = meemoo_rdf::parser::parse_turtle(turtle)?;
        Self::from_triples(&triples)
    }

    /// Builds shapes from an already-parsed shapes graph.
    ///
    /// # Errors
    ///
    /// Returns an error if a shape uses an unsupported path or constraint,
    /// carries an invalid constraint parameter, or refers back to itself
    /// through `sh:property` or `sh:node`.
    pub fn from_triples(triples: &[Triple]) -> Result<Self, ShaclError> {
        let graph = Graph::new(triples);
        let mut shapes = Vec::new();
        let mut loading = HashSet::new();
        for node in graph.subjects_in_order() {
            let is_node_shape = graph.has_type(node, sh::NODE_SHAPE.as_str());
            let has_targets = TARGET_PREDICATES
                .iter()
                .any(|p| graph.object(node, p.as_str()).is_some());
            if is_node_shape || has_targets {
                shapes.push(load_shape(&graph, node, &mut loading)?);
            }
        }
        Ok(Self { shapes })
    }

    /// Top-level shapes in shapes-graph order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Number of top-level shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True if the shapes graph declares no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

const TARGET_PREDICATES: [Iri; 4] = [
    sh::TARGET_CLASS,
    sh::TARGET_NODE,
    sh::TARGET_SUBJECTS_OF,
    sh::TARGET_OBJECTS_OF,
];

/// Shape parameters that carry no constraint.
const NON_VALIDATING: [Iri; 6] = [
    sh::NAME,
    sh::DESCRIPTION,
    sh::ORDER,
    sh::GROUP,
    sh::DEFAULT_VALUE,
    sh::FLAGS,
];

/// Loads the shape at `node`. `loading` holds the shapes currently being
/// loaded further up the `sh:property` / `sh:node` chain.
fn load_shape<'a>(
    graph: &Graph<'a>,
    node: &'a Node,
    loading: &mut HashSet<&'a Node>,
) -> Result<Shape, ShaclError> {
    let shape_name = node.to_string();
    if !loading.insert(node) {
        return Err(ShaclError::RecursiveShape { shape: shape_name });
    }
    let mut shape = Shape {
        id: node.clone(),
        targets: Vec::new(),
        path: None,
        constraints: Vec::new(),
        properties: Vec::new(),
        severity: Severity::Violation,
        message: None,
        deactivated: false,
    };

    if graph.has_type(node, rdfs::CLASS.as_str()) {
        if let Node::Iri(class) = node {
            shape.targets.push(Target::Class(class.clone()));
        }
    }

    for t in graph.outgoing(node) {
        let p = &t.predicate;
        let o = &t.object;
        let invalid = || ShaclError::InvalidParameter {
            shape: shape_name.clone(),
            parameter: p.to_string(),
            value: o.to_string(),
        };

        if *p == sh::TARGET_CLASS {
            shape.targets.push(Target::Class(o.as_iri().ok_or_else(invalid)?.clone()));
        } else if *p == sh::TARGET_NODE {
            shape.targets.push(Target::Node(o.clone()));
        } else if *p == sh::TARGET_SUBJECTS_OF {
            shape
                .targets
                .push(Target::SubjectsOf(o.as_iri().ok_or_else(invalid)?.clone()));
        } else if *p == sh::TARGET_OBJECTS_OF {
            shape
                .targets
                .push(Target::ObjectsOf(o.as_iri().ok_or_else(invalid)?.clone()));
        } else if *p == sh::PATH {
            shape.path = Some(load_path(graph, &shape_name, o)?);
        } else if *p == sh::PROPERTY {
            let property = load_shape(graph, o, loading)?;
            if property.path.is_none() {
                return Err(ShaclError::InvalidParameter {
                    shape: o.to_string(),
                    parameter: sh::PATH.to_string(),
                    value: "(missing)".into(),
                });
            }
            shape.properties.push(property);
        } else if *p == sh::SEVERITY {
            let iri = o.as_iri().ok_or_else(invalid)?;
            shape.severity = Severity::from_iri(iri).ok_or_else(invalid)?;
        } else if *p == sh::MESSAGE {
            if shape.message.is_none() {
                shape.message = Some(o.as_literal().ok_or_else(invalid)?.lexical().to_owned());
            }
        } else if *p == sh::DEACTIVATED {
            shape.deactivated = o.as_literal().map(|l| l.lexical() == "true").unwrap_or(false);
        } else if *p == sh::MIN_COUNT {
            shape.constraints.push(Constraint::MinCount(count(o).ok_or_else(invalid)?));
        } else if *p == sh::MAX_COUNT {
            shape.constraints.push(Constraint::MaxCount(count(o).ok_or_else(invalid)?));
        } else if *p == sh::MIN_LENGTH {
            shape.constraints.push(Constraint::MinLength(count(o).ok_or_else(invalid)?));
        } else if *p == sh::MAX_LENGTH {
            shape.constraints.push(Constraint::MaxLength(count(o).ok_or_else(invalid)?));
        } else if *p == sh::DATATYPE {
            shape
                .constraints
                .push(Constraint::Datatype(o.as_iri().ok_or_else(invalid)?.clone()));
        } else if *p == sh::CLASS {
            shape
                .constraints
                .push(Constraint::Class(o.as_iri().ok_or_else(invalid)?.clone()));
        } else if *p == sh::NODE_KIND {
            let kind = o.as_iri().and_then(NodeKind::from_iri).ok_or_else(invalid)?;
            shape.constraints.push(Constraint::NodeKind(kind));
        } else if *p == sh::PATTERN {
            let pattern = o.as_literal().ok_or_else(invalid)?.lexical().to_owned();
            let flags = graph
                .object(node, sh::FLAGS.as_str())
                .and_then(Node::as_literal)
                .map(|l| l.lexical().to_owned())
                .unwrap_or_default();
            let regex = compile_pattern(&pattern, &flags).map_err(|source| {
                ShaclError::InvalidPattern {
                    shape: shape_name.clone(),
                    pattern: pattern.clone(),
                    source,
                }
            })?;
            shape.constraints.push(Constraint::Pattern { pattern, regex });
        } else if *p == sh::IN {
            let items = list(graph, &shape_name, o)?;
            shape
                .constraints
                .push(Constraint::In(items.into_iter().cloned().collect()));
        } else if *p == sh::HAS_VALUE {
            shape.constraints.push(Constraint::HasValue(o.clone()));
        } else if *p == sh::LANGUAGE_IN {
            let tags = list(graph, &shape_name, o)?
                .into_iter()
                .map(|n| n.as_literal().map(|l| l.lexical().to_ascii_lowercase()))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(invalid)?;
            shape.constraints.push(Constraint::LanguageIn(tags));
        } else if let Some(kind) = range_kind(p) {
            let bound = o.as_literal().ok_or_else(invalid)?.clone();
            shape.constraints.push(Constraint::Range { kind, bound });
        } else if *p == sh::NODE {
            let referenced = load_shape(graph, o, loading)?;
            shape.constraints.push(Constraint::Node(Box::new(referenced)));
        } else if p.as_str().starts_with(iris::SH) && !NON_VALIDATING.contains(p) {
            return Err(ShaclError::UnsupportedConstraint {
                shape: shape_name.clone(),
                parameter: p.to_string(),
            });
        }
    }

    loading.remove(node);
    Ok(shape)
}

fn range_kind(predicate: &Iri) -> Option<RangeKind> {
    [
        (sh::MIN_INCLUSIVE, RangeKind::MinInclusive),
        (sh::MAX_INCLUSIVE, RangeKind::MaxInclusive),
        (sh::MIN_EXCLUSIVE, RangeKind::MinExclusive),
        (sh::MAX_EXCLUSIVE, RangeKind::MaxExclusive),
    ]
    .into_iter()
    .find(|(candidate, _)| candidate == predicate)
    .map(|(_, kind)| kind)
}

fn load_path(graph: &Graph<'_>, shape: &str, node: &Node) -> Result<PropertyPath, ShaclError> {
    let unsupported = || ShaclError::UnsupportedPath {
        shape: shape.to_owned(),
        path: node.to_string(),
    };
    match node {
        Node::Iri(iri) => Ok(PropertyPath::Predicate(iri.clone())),
        Node::Blank(_) => {
            let inverse = graph
                .object(node, sh::INVERSE_PATH.as_str())
                .ok_or_else(unsupported)?;
            match inverse {
                Node::Iri(iri) => Ok(PropertyPath::Inverse(iri.clone())),
                _ => Err(unsupported()),
            }
        }
        Node::Literal(_) => Err(unsupported()),
    }
}

fn list<'a>(graph: &Graph<'a>, shape: &str, head: &'a Node) -> Result<Vec<&'a Node>, ShaclError> {
    graph.list(head).ok_or_else(|| ShaclError::MalformedList {
        shape: shape.to_owned(),
        node: head.to_string(),
    })
}

fn count(node: &Node) -> Option<usize> {
    node.as_literal()?.lexical().trim().parse().ok()
}

fn compile_pattern(pattern: &str, flags: &str) -> Result<Regex, regex::Error> {
    let inline: String = flags
        .chars()
        .filter(|c| matches!(c, 'i' | 'm' | 's' | 'x'))
        .collect();
    if inline.is_empty() {
        Regex::new(pattern)
    } else {
        Regex::new(&format!("(?{inline}){pattern}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
@prefix sh:  <http://www.w3.org/ns/shacl#> .
@prefix sdo: <https://schema.org/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix ex:  <https://example.org/shapes/> .

ex:PersonShape
    a sh:NodeShape ;
    sh:targetClass sdo:Person ;
    sh:property [
        sh:path sdo:name ;
        sh:minCount 1 ;
        sh:maxCount 1 ;
        sh:datatype xsd:string ;
        sh:severity sh:Warning ;
        sh:message "A person needs exactly one name"
    ] ;
    sh:property [
        sh:path [ sh:inversePath sdo:member ] ;
        sh:class sdo:Organization
    ] .

ex:EmailShape
    sh:targetSubjectsOf sdo:email ;
    sh:property [
        sh:path sdo:email ;
        sh:pattern "^[^@]+@[^@]+$" ;
        sh:flags "i" ;
        sh:nodeKind sh:Literal
    ] .
"#;

    #[test]
    fn loads_node_shapes_and_properties() {
        let shapes = Shapes::parse(SCHEMA).unwrap();
        assert_eq!(shapes.len(), 2);

        let person = shapes.iter().next().unwrap();
        assert_eq!(person.targets, vec![Target::Class(meemoo_rdf::namespaces::sdo::PERSON)]);
        assert_eq!(person.properties.len(), 2);

        let name = &person.properties[0];
        assert_eq!(
            name.path,
            Some(PropertyPath::Predicate(meemoo_rdf::namespaces::sdo::NAME))
        );
        assert_eq!(name.constraints.len(), 3);
        assert_eq!(name.severity, Severity::Warning);
        assert_eq!(name.message.as_deref(), Some("A person needs exactly one name"));

        let member = &person.properties[1];
        assert!(matches!(member.path, Some(PropertyPath::Inverse(_))));
    }

    #[test]
    fn shape_with_only_targets_is_loaded() {
        let shapes = Shapes::parse(SCHEMA).unwrap();
        let email = shapes.iter().nth(1).unwrap();
        assert!(matches!(email.targets[0], Target::SubjectsOf(_)));
        assert!(email.properties[0]
            .constraints
            .iter()
            .any(|c| matches!(c, Constraint::Pattern { .. })));
    }

    #[test]
    fn invalid_min_count_is_reported() {
        let err = Shapes::parse(
            r#"@prefix sh: <http://www.w3.org/ns/shacl#> .
               <urn:s> a sh:NodeShape ; sh:property [ sh:path <urn:p> ; sh:minCount "many" ] ."#,
        )
        .unwrap_err();
        assert!(matches!(err, ShaclError::InvalidParameter { .. }));
    }

    #[test]
    fn property_without_path_is_rejected() {
        let err = Shapes::parse(
            r#"@prefix sh: <http://www.w3.org/ns/shacl#> .
               <urn:s> a sh:NodeShape ; sh:property [ sh:minCount 1 ] ."#,
        )
        .unwrap_err();
        assert!(matches!(err, ShaclError::InvalidParameter { .. }));
    }

    #[test]
    fn property_shape_cycle_is_rejected() {
        let err = Shapes::parse(
            r#"@prefix sh: <http://www.w3.org/ns/shacl#> .
               <urn:S> a sh:NodeShape ; sh:targetNode <urn:x> ; sh:property <urn:P> .
               <urn:P> sh:path <urn:p> ; sh:property <urn:P> ."#,
        )
        .unwrap_err();
        assert!(matches!(err, ShaclError::RecursiveShape { ref shape } if shape == "<urn:P>"));
    }

    #[test]
    fn node_reference_cycle_is_rejected() {
        let err = Shapes::parse(
            r#"@prefix sh: <http://www.w3.org/ns/shacl#> .
               <urn:A> a sh:NodeShape ; sh:targetNode <urn:x> ; sh:node <urn:B> .
               <urn:B> sh:node <urn:A> ."#,
        )
        .unwrap_err();
        assert!(matches!(err, ShaclError::RecursiveShape { .. }));
    }

    #[test]
    fn shared_property_shape_is_not_a_cycle() {
        let shapes = Shapes::parse(
            r#"@prefix sh: <http://www.w3.org/ns/shacl#> .
               <urn:A> sh:targetNode <urn:x> ; sh:property <urn:P> .
               <urn:B> sh:targetNode <urn:y> ; sh:property <urn:P> .
               <urn:P> sh:path <urn:p> ; sh:minCount 1 ."#,
        )
        .unwrap();
        assert_eq!(shapes.len(), 2);
    }

    #[test]
    fn unsupported_constraint_is_rejected() {
        let err = Shapes::parse(
            r#"@prefix sh: <http://www.w3.org/ns/shacl#> .
               <urn:s> a sh:NodeShape ; sh:targetNode <urn:x> ; sh:closed true ."#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ShaclError::UnsupportedConstraint { ref parameter, .. }
                if parameter == "<http://www.w3.org/ns/shacl#closed>"
        ));
    }

    #[test]
    fn descriptive_parameters_are_accepted() {
        let shapes = Shapes::parse(
            r#"@prefix sh: <http://www.w3.org/ns/shacl#> .
               <urn:s> a sh:NodeShape ; sh:targetNode <urn:x> ;
                   sh:property [ sh:path <urn:p> ; sh:name "p" ; sh:description "a p" ;
                                 sh:order 1 ; sh:minInclusive 0 ] ."#,
        )
        .unwrap();
        let property = &shapes.iter().next().unwrap().properties[0];
        assert!(matches!(
            property.constraints[..],
            [Constraint::Range { kind: RangeKind::MinInclusive, .. }]
        ));
    }

    #[test]
    fn sequence_path_is_unsupported() {
        let err = Shapes::parse(
            r#"@prefix sh: <http://www.w3.org/ns/shacl#> .
               <urn:s> a sh:NodeShape ; sh:property [ sh:path ( <urn:a> <urn:b> ) ] ."#,
        )
        .unwrap_err();
        assert!(matches!(err, ShaclError::UnsupportedPath { .. }));
    }

    #[test]
    fn node_kind_matching() {
        let lit = Node::Literal(meemoo_rdf::Literal::string("x"));
        assert!(NodeKind::IriOrLiteral.matches(&lit));
        assert!(!NodeKind::BlankNodeOrIri.matches(&lit));
    }
}
