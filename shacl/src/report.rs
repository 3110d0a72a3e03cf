//! Validation report types: results, severity levels, and report aggregation.

use std::fmt;

use meemoo_rdf::namespaces::{sh, xsd, A};
use meemoo_rdf::{BlankNode, Iri, Literal, Node, Triple};

use crate::shapes::PropertyPath;

/// Severity level of a validation result (`sh:severity`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// `sh:Violation` (blocks conformance under a fail-closed policy).
    Violation,
    /// `sh:Warning` (non-blocking).
    Warning,
    /// `sh:Info` (informational).
    Info,
}

impl Severity {
    /// The `sh:` IRI of this severity.
    #[must_use]
    pub fn iri(self) -> Iri {
        match self {
            Severity::Violation => sh::VIOLATION,
            Severity::Warning => sh::WARNING,
            Severity::Info => sh::INFO,
        }
    }

    pub(crate) fn from_iri(iri: &Iri) -> Option<Self> {
        if *iri == sh::VIOLATION {
            Some(Severity::Violation)
        } else if *iri == sh::WARNING {
            Some(Severity::Warning)
        } else if *iri == sh::INFO {
            Some(Severity::Info)
        } else {
            None
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Violation => "Violation",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        })
    }
}

/// A single validation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The focus node that failed the constraint.
    pub focus_node: Node,
    /// The property path, for results from property shapes.
    pub path: Option<PropertyPath>,
    /// The offending value node, when the constraint is per-value.
    pub value: Option<Node>,
    /// The shape that produced this result.
    pub source_shape: Node,
    /// IRI of the constraint component, e.g. `sh:MinCountConstraintComponent`.
    pub component: Iri,
    /// Severity, inherited from the shape.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Returns true if this result has severity `sh:Violation`.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Violation
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.focus_node)?;
        if let Some(path) = &self.path {
            write!(f, " {path}")?;
        }
        if let Some(value) = &self.value {
            write!(f, " = {value}")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Aggregated results of validating a fact set against a shapes graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// All results in deterministic order.
    pub results: Vec<Violation>,
}

impl ValidationReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: Violation) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: ValidationReport) {
        self.results.extend(other.results);
    }

    /// Returns the count of results with severity `sh:Violation`.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// `sh:conforms`: true iff there are no results of any severity.
    #[must_use]
    pub fn conforms(&self) -> bool {
        self.results.is_empty()
    }

    /// Renders the report as a `sh:ValidationReport` graph.
    #[must_use]
    pub fn to_triples(&self) -> Vec<Triple> {
        let report = BlankNode::new("report");
        let mut out = vec![
            Triple::new(report.clone(), A, sh::VALIDATION_REPORT),
            Triple::new(
                report.clone(),
                sh::CONFORMS,
                Literal::typed(self.conforms().to_string(), xsd::BOOLEAN),
            ),
        ];
        for (i, r) in self.results.iter().enumerate() {
            let node = BlankNode::new(format!("result{i}"));
            out.push(Triple::new(report.clone(), sh::RESULT, node.clone()));
            out.push(Triple::new(node.clone(), A, sh::VALIDATION_RESULT));
            out.push(Triple::new(node.clone(), sh::FOCUS_NODE, r.focus_node.clone()));
            match &r.path {
                Some(PropertyPath::Predicate(p)) => {
                    out.push(Triple::new(node.clone(), sh::RESULT_PATH, p.clone()));
                }
                Some(PropertyPath::Inverse(p)) => {
                    let path = BlankNode::new(format!("result{i}path"));
                    out.push(Triple::new(node.clone(), sh::RESULT_PATH, path.clone()));
                    out.push(Triple::new(path, sh::INVERSE_PATH, p.clone()));
                }
                None => {}
            }
            if let Some(value) = &r.value {
                out.push(Triple::new(node.clone(), sh::VALUE, value.clone()));
            }
            out.push(Triple::new(node.clone(), sh::SOURCE_SHAPE, r.source_shape.clone()));
            out.push(Triple::new(
                node.clone(),
                sh::SOURCE_CONSTRAINT_COMPONENT,
                r.component.clone(),
            ));
            out.push(Triple::new(node.clone(), sh::RESULT_SEVERITY, r.severity.iri()));
            out.push(Triple::new(
                node,
                sh::RESULT_MESSAGE,
                Literal::string(r.message.clone()),
            ));
        }
        out
    }
}
