//! Validates an in-memory fact set against a loaded shapes graph.
//!
//! Shapes are evaluated in shapes-graph order, focus nodes in order of
//! first appearance in the data, and constraints in declaration order, so
//! the same inputs always produce the same report.

use std::cmp::Ordering;
use std::collections::HashSet;

use meemoo_rdf::model::iris;
use meemoo_rdf::{Literal, Node, Triple};

use crate::graph::Graph;
use crate::report::{ValidationReport, Violation};
use crate::shapes::{Constraint, PropertyPath, Shape, Shapes, Target};

/// Validates `data` against every active shape in `shapes`.
#[must_use]
pub fn validate(shapes: &Shapes, data: &[Triple]) -> ValidationReport {
    let graph = Graph::new(data);
    let mut report = ValidationReport::new();

    for shape in shapes.iter().filter(|s| !s.deactivated) {
        for focus in focus_nodes(&graph, shape) {
            check_shape(&graph, shape, &focus, &mut report);
        }
    }

    report
}

fn focus_nodes(graph: &Graph<'_>, shape: &Shape) -> Vec<Node> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut add = |node: &Node| {
        if seen.insert(node.clone()) {
            out.push(node.clone());
        }
    };

    for target in &shape.targets {
        match target {
            Target::Class(class) => {
                graph.instances_of(class.as_str()).into_iter().for_each(&mut add);
            }
            Target::Node(node) => add(node),
            Target::SubjectsOf(p) => graph.with_predicate(p.as_str()).for_each(|t| add(&t.subject)),
            Target::ObjectsOf(p) => graph.with_predicate(p.as_str()).for_each(|t| add(&t.object)),
        }
    }
    out
}

fn value_nodes(graph: &Graph<'_>, focus: &Node, path: &PropertyPath) -> Vec<Node> {
    let nodes = match path {
        PropertyPath::Predicate(p) => graph.objects(focus, p.as_str()),
        PropertyPath::Inverse(p) => graph.subjects(p.as_str(), focus),
    };
    let mut seen = HashSet::new();
    nodes
        .into_iter()
        .filter(|n| seen.insert(*n))
        .cloned()
        .collect()
}

fn check_shape(graph: &Graph<'_>, shape: &Shape, focus: &Node, report: &mut ValidationReport) {
    let values = match &shape.path {
        Some(path) => value_nodes(graph, focus, path),
        None => vec![focus.clone()],
    };

    for constraint in &shape.constraints {
        for (value, generated) in check_constraint(graph, constraint, &values) {
            report.push(Violation {
                focus_node: focus.clone(),
                path: shape.path.clone(),
                value,
                source_shape: shape.id.clone(),
                component: constraint.component(),
                severity: shape.severity,
                message: shape.message.clone().unwrap_or(generated),
            });
        }
    }

    // Nested property shapes apply to the focus of a node shape and to each
    // value node of a property shape.
    let nested_focus: &[Node] = if shape.path.is_some() {
        &values
    } else {
        std::slice::from_ref(focus)
    };
    for property in shape.properties.iter().filter(|p| !p.deactivated) {
        for node in nested_focus {
            check_shape(graph, property, node, report);
        }
    }
}

/// Returns `(value, message)` for every failure of `constraint`. A `None`
/// value marks a failure of the value set as a whole.
fn check_constraint(
    graph: &Graph<'_>,
    constraint: &Constraint,
    values: &[Node],
) -> Vec<(Option<Node>, String)> {
    let per_value = |ok: &dyn Fn(&Node) -> bool, message: String| failures(values, ok, message);

    match constraint {
        Constraint::MinCount(n) if values.len() < *n => {
            vec![(None, format!("Less than {n} values"))]
        }
        Constraint::MaxCount(n) if values.len() > *n => {
            vec![(None, format!("More than {n} values"))]
        }
        Constraint::MinCount(_) | Constraint::MaxCount(_) => Vec::new(),
        Constraint::Datatype(dt) => per_value(
            &|v: &Node| {
                v.as_literal().is_some_and(|lit| {
                    lit.datatype_iri() == dt.as_str() && well_formed(dt.as_str(), lit.lexical())
                })
            },
            format!("Value does not have datatype {dt}"),
        ),
        Constraint::Class(class) => per_value(
            &|v: &Node| v.is_resource() && graph.is_instance_of(v, class.as_str()),
            format!("Value does not have class {class}"),
        ),
        Constraint::NodeKind(kind) => per_value(
            &|v: &Node| kind.matches(v),
            format!("Value does not have node kind {}", kind.iri()),
        ),
        Constraint::Pattern { pattern, regex } => per_value(
            &|v: &Node| string_value(v).is_some_and(|s| regex.is_match(s)),
            format!("Value does not match pattern \"{pattern}\""),
        ),
        Constraint::MinLength(n) => per_value(
            &|v: &Node| string_value(v).is_some_and(|s| s.chars().count() >= *n),
            format!("Value has less than {n} characters"),
        ),
        Constraint::MaxLength(n) => per_value(
            &|v: &Node| string_value(v).is_some_and(|s| s.chars().count() <= *n),
            format!("Value has more than {n} characters"),
        ),
        Constraint::In(allowed) => {
            let listed = allowed
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            per_value(
                &|v: &Node| allowed.contains(v),
                format!("Value is not in [{listed}]"),
            )
        }
        Constraint::HasValue(expected) => {
            if values.contains(expected) {
                Vec::new()
            } else {
                vec![(None, format!("Missing expected value {expected}"))]
            }
        }
        Constraint::LanguageIn(tags) => per_value(
            &|v: &Node| {
                v.as_literal()
                    .and_then(|lit| lit.language())
                    .is_some_and(|lang| tags.iter().any(|t| lang_matches(lang, t)))
            },
            format!("Language does not match any of [{}]", tags.join(", ")),
        ),
        Constraint::Range { kind, bound } => per_value(
            &|v: &Node| {
                v.as_literal()
                    .and_then(|lit| compare(lit, bound))
                    .is_some_and(|ord| kind.admits(ord))
            },
            format!("Value is not {} {}", kind.operator(), bound.lexical()),
        ),
        Constraint::Node(shape) => per_value(
            &|v: &Node| conforms_to(graph, shape, v),
            format!("Value does not conform to shape {}", shape.id),
        ),
    }
}

/// True if `node`, taken as the focus node, produces no results for `shape`.
fn conforms_to(graph: &Graph<'_>, shape: &Shape, node: &Node) -> bool {
    if shape.deactivated {
        return true;
    }
    let mut scratch = ValidationReport::new();
    check_shape(graph, shape, node, &mut scratch);
    scratch.results.is_empty()
}

/// Orders two literals: numerically when both are numeric, otherwise
/// lexically when they share a datatype. `None` if incomparable.
fn compare(value: &Literal, bound: &Literal) -> Option<Ordering> {
    match (numeric(value), numeric(bound)) {
        (Some(a), Some(b)) => a.partial_cmp(&b),
        (None, None) if value.datatype_iri() == bound.datatype_iri() => {
            Some(value.lexical().cmp(bound.lexical()))
        }
        _ => None,
    }
}

fn numeric(lit: &Literal) -> Option<f64> {
    const NUMERIC: [&str; 14] = [
        "integer",
        "decimal",
        "double",
        "float",
        "long",
        "int",
        "short",
        "byte",
        "nonNegativeInteger",
        "nonPositiveInteger",
        "positiveInteger",
        "negativeInteger",
        "unsignedLong",
        "unsignedInt",
    ];
    let local = lit.datatype_iri().strip_prefix(iris::XSD)?;
    if !NUMERIC.contains(&local) {
        return None;
    }
    lit.lexical().trim().parse().ok()
}

fn failures(
    values: &[Node],
    ok: &dyn Fn(&Node) -> bool,
    message: String,
) -> Vec<(Option<Node>, String)> {
    values
        .iter()
        .filter(|v| !ok(v))
        .map(|v| (Some(v.clone()), message.clone()))
        .collect()
}

/// The string a pattern or length constraint is evaluated against. Blank
/// nodes have none.
fn string_value(node: &Node) -> Option<&str> {
    match node {
        Node::Iri(iri) => Some(iri.as_str()),
        Node::Literal(lit) => Some(lit.lexical()),
        Node::Blank(_) => None,
    }
}

/// Basic language range matching: `*`, exact, or a `-` separated prefix.
fn lang_matches(lang: &str, range: &str) -> bool {
    range == "*"
        || lang == range
        || lang
            .strip_prefix(range)
            .is_some_and(|rest| rest.starts_with('-'))
}

/// Lexical well-formedness for the numeric and boolean XSD types. Other
/// datatypes accept any lexical form.
fn well_formed(datatype: &str, lexical: &str) -> bool {
    match datatype {
        iris::XSD_INTEGER => {
            let digits = lexical.strip_prefix(['+', '-']).unwrap_or(lexical);
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
        }
        iris::XSD_DECIMAL => {
            let body = lexical.strip_prefix(['+', '-']).unwrap_or(lexical);
            let (int, frac) = body.split_once('.').unwrap_or((body, ""));
            !(int.is_empty() && frac.is_empty())
                && int.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        iris::XSD_DOUBLE => {
            matches!(lexical, "INF" | "+INF" | "-INF" | "NaN")
                || (lexical.parse::<f64>().is_ok()
                    && lexical.bytes().all(|b| b.is_ascii_digit() || b"+-.eE".contains(&b)))
        }
        iris::XSD_BOOLEAN => matches!(lexical, "true" | "false" | "1" | "0"),
        _ => true,
    }
}
