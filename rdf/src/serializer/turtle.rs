//! Turtle 1.1 serializer.
//!
//! Facts are written in the order given. Consecutive facts that share a
//! subject are grouped with `;`. Only prefixes that are actually used are
//! declared, in the order of the prefix table.

use std::collections::HashSet;

use crate::model::{escape_literal, iris, Iri, Node, Triple};
use crate::prefix::PrefixTable;

/// Serializes `triples` to a Turtle string using `prefixes` for compaction.
#[must_use]
pub fn to_turtle(triples: &[Triple], prefixes: &PrefixTable) -> String {
    let mut used: HashSet<&str> = HashSet::new();
    let mut body = String::with_capacity(triples.len() * 64);

    let mut current: Option<&Node> = None;
    for t in triples {
        if current == Some(&t.subject) {
            body.push_str(" ;\n  ");
        } else {
            if current.is_some() {
                body.push_str(" .\n\n");
            }
            body.push_str(&node(&t.subject, prefixes, &mut used));
            body.push_str("\n  ");
            current = Some(&t.subject);
        }
        if t.predicate.as_str() == iris::RDF_TYPE {
            body.push('a');
        } else {
            body.push_str(&iri(&t.predicate, prefixes, &mut used));
        }
        body.push(' ');
        body.push_str(&node(&t.object, prefixes, &mut used));
    }
    if current.is_some() {
        body.push_str(" .\n");
    }

    let mut out = String::with_capacity(body.len() + 256);
    for p in prefixes.iter().filter(|p| used.contains(p.name())) {
        out.push_str(&format!("@prefix {}: <{}> .\n", p.name(), p.base()));
    }
    if !out.is_empty() && !body.is_empty() {
        out.push('\n');
    }
    out.push_str(&body);
    out
}

fn iri<'a>(iri: &'a Iri, prefixes: &'a PrefixTable, used: &mut HashSet<&'a str>) -> String {
    match prefixes.compact(iri.as_str()) {
        Some((prefix, local)) => {
            used.insert(prefix.name());
            format!("{}:{}", prefix.name(), local)
        }
        None => iri.to_string(),
    }
}

fn node<'a>(node: &'a Node, prefixes: &'a PrefixTable, used: &mut HashSet<&'a str>) -> String {
    match node {
        Node::Iri(i) => iri(i, prefixes, used),
        Node::Blank(b) => b.to_string(),
        Node::Literal(lit) => {
            let mut s = format!("\"{}\"", escape_literal(lit.lexical()));
            if let Some(tag) = lit.language() {
                s.push('@');
                s.push_str(tag);
            } else if let Some(dt) = lit.datatype() {
                s.push_str("^^");
                s.push_str(&iri(dt, prefixes, used));
            }
            s
        }
    }
}
