//! Direct mapping of arbitrary JSON into facts.
//!
//! Every JSON object becomes a subject and every member key a predicate in
//! the vocabulary namespace. Scalars become literals, nested objects are
//! linked from their parent, array elements repeat the enclosing key, and
//! `null` members are skipped.

use meemoo_rdf::namespaces::Namespace;
use meemoo_rdf::{BlankNode, Node, Prefix, Triple};
use serde_json::{Map, Value};

use crate::term::json_literal;

/// Default vocabulary for directly mapped keys.
pub const SOURCE: Namespace = Namespace {
    prefix: "source",
    iri: "https://data.hetarchief.be/ns/source#",
};

/// Settings for a `direct_mapping` step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectMapping {
    vocabulary: Prefix,
    instances: Option<Prefix>,
}

impl Default for DirectMapping {
    fn default() -> Self {
        Self::new(Prefix::from(SOURCE))
    }
}

impl DirectMapping {
    /// Maps keys into `vocabulary`; subjects are blank nodes.
    #[must_use]
    pub fn new(vocabulary: Prefix) -> Self {
        Self {
            vocabulary,
            instances: None,
        }
    }

    /// Names subjects `instances` + running counter instead of blank nodes.
    #[must_use]
    pub fn with_instances(mut self, instances: Prefix) -> Self {
        self.instances = Some(instances);
        self
    }

    /// The predicate vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Prefix {
        &self.vocabulary
    }

    /// Maps `value`, numbering subjects from `*counter` onward. Top-level
    /// arrays map each object element; top-level scalars map to nothing.
    pub(crate) fn map(&self, value: &Value, counter: &mut usize) -> Vec<Triple> {
        let mut mapper = Mapper {
            mapping: self,
            counter,
            facts: Vec::new(),
        };
        match value {
            Value::Object(members) => {
                mapper.object(members);
            }
            Value::Array(items) => {
                for item in items {
                    if let Value::Object(members) = item {
                        mapper.object(members);
                    }
                }
            }
            _ => {}
        }
        mapper.facts
    }
}

struct Mapper<'a> {
    mapping: &'a DirectMapping,
    counter: &'a mut usize,
    facts: Vec<Triple>,
}

impl Mapper<'_> {
    fn subject(&mut self) -> Node {
        let n = *self.counter;
        *self.counter += 1;
        match &self.mapping.instances {
            Some(prefix) => Node::Iri(prefix.expand(&n.to_string())),
            None => Node::Blank(BlankNode::new(format!("m{n}"))),
        }
    }

    fn object(&mut self, members: &Map<String, Value>) {
        let subject = self.subject();
        self.members(&subject, members);
    }

    fn members(&mut self, subject: &Node, members: &Map<String, Value>) {
        for (key, value) in members {
            self.member(subject, key, value);
        }
    }

    fn member(&mut self, subject: &Node, key: &str, value: &Value) {
        let predicate = self.mapping.vocabulary.expand(key);
        let object = match value {
            Value::Null => return,
            Value::Array(items) => {
                for item in items {
                    self.member(subject, key, item);
                }
                return;
            }
            Value::Object(members) => {
                // The link precedes the nested object's own facts.
                let child = self.subject();
                self.facts.push(Triple::new(subject.clone(), predicate, child.clone()));
                self.members(&child, members);
                return;
            }
            scalar => match json_literal(scalar) {
                Some(literal) => Node::Literal(literal),
                None => return,
            },
        };
        self.facts.push(Triple::new(subject.clone(), predicate, object));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use meemoo_rdf::namespaces::xsd;
    use meemoo_rdf::{Iri, Literal};
    use serde_json::json;

    fn source(key: &str) -> Iri {
        Iri::new(format!("{}{key}", SOURCE.iri))
    }

    #[test]
    fn nested_objects_and_arrays() {
        let value = json!({
            "name": "Acme",
            "tags": ["a", "b"],
            "contact": { "email": "info@acme.be" },
            "logo": null
        });
        let mut counter = 0;
        let facts = DirectMapping::default().map(&value, &mut counter);

        let root = Node::Blank(BlankNode::new("m0"));
        let contact = Node::Blank(BlankNode::new("m1"));
        assert_eq!(
            facts,
            vec![
                Triple::new(root.clone(), source("name"), Literal::string("Acme")),
                Triple::new(root.clone(), source("tags"), Literal::string("a")),
                Triple::new(root.clone(), source("tags"), Literal::string("b")),
                Triple::new(root, source("contact"), contact.clone()),
                Triple::new(contact, source("email"), Literal::string("info@acme.be")),
            ]
        );
        assert_eq!(counter, 2);
    }

    #[test]
    fn links_precede_nested_facts_at_every_depth() {
        let value = json!({ "a": { "b": { "c": 1 } } });
        let facts = DirectMapping::default().map(&value, &mut 0);
        let predicates: Vec<_> = facts.iter().map(|t| t.predicate.clone()).collect();
        assert_eq!(predicates, vec![source("a"), source("b"), source("c")]);
        assert_eq!(facts[0].object, facts[1].subject);
        assert_eq!(facts[1].object, facts[2].subject);
    }

    #[test]
    fn instances_prefix_names_subjects() {
        let mapping = DirectMapping::default()
            .with_instances(Prefix::new("inst", "https://data.hetarchief.be/id/").unwrap());
        let mut counter = 5;
        let facts = mapping.map(&json!([{ "n": 1 }, 7, { "n": 2 }]), &mut counter);
        assert_eq!(
            facts,
            vec![
                Triple::new(
                    Iri::new("https://data.hetarchief.be/id/5"),
                    source("n"),
                    Literal::typed("1", xsd::INTEGER)
                ),
                Triple::new(
                    Iri::new("https://data.hetarchief.be/id/6"),
                    source("n"),
                    Literal::typed("2", xsd::INTEGER)
                ),
            ]
        );
    }

    #[test]
    fn deterministic_across_calls() {
        let value = json!({ "a": { "b": { "c": [1, 2.5, true] } } });
        let mapping = DirectMapping::default();
        let first = mapping.map(&value, &mut 0);
        let second = mapping.map(&value, &mut 0);
        assert_eq!(first, second);
    }
}
