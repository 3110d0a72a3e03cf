//! Pipeline steps and their builders.
//!
//! A pipeline is an ordered list of [`Step`]s. `for_each` and the
//! conditional steps are scopes: their nested steps run to completion for
//! the current record before the enclosing scope moves on.

use std::fmt;

use crate::mapping::DirectMapping;
use crate::path::KeyPath;
use crate::source::{Destination, Source};
use crate::term::{Term, ValueRef};

/// Test applied by a conditional step to the current record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The key is present and not empty (see [`is_truthy`](crate::record::is_truthy)).
    Present(KeyPath),
    /// The key's scalar text equals the value.
    Equals(KeyPath, String),
    /// Negation.
    Not(Box<Condition>),
}

impl Condition {
    /// The key path the condition reads.
    #[must_use]
    pub fn key_path(&self) -> &KeyPath {
        match self {
            Condition::Present(path) | Condition::Equals(path, _) => path,
            Condition::Not(inner) => inner.key_path(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Present(path) => write!(f, "{path}"),
            Condition::Equals(path, value) => write!(f, "{path} == {value:?}"),
            Condition::Not(inner) => write!(f, "!{inner}"),
        }
    }
}

/// One unit of pipeline work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Loads a JSON document; the current record becomes its root.
    FromJson(Source),
    /// Runs `steps` once per record selected by `path`.
    ForEach {
        /// Selects the collection.
        path: KeyPath,
        /// Nested steps.
        steps: Vec<Step>,
    },
    /// Emits one fact.
    Triple {
        /// Subject; must resolve to an IRI or blank node.
        subject: Term,
        /// Predicate; must resolve to an IRI.
        predicate: Term,
        /// Object.
        object: Term,
    },
    /// Runs `steps` on the current record if `condition` holds.
    When {
        /// The test.
        condition: Condition,
        /// Nested steps.
        steps: Vec<Step>,
    },
    /// Validates the facts emitted so far against a SHACL shapes graph.
    Validate(Source),
    /// Serializes the facts emitted so far.
    ToRdf(Destination),
    /// Binds a derived value on the current record.
    Bind {
        /// Binding name; shadows a document member of the same name.
        key: String,
        /// The value.
        value: ValueRef,
    },
    /// Fails the run unless every named environment variable is set.
    AssertEnv(Vec<String>),
    /// Maps the current record generically into facts.
    DirectMapping(DirectMapping),
}

impl Step {
    /// Nested steps of a scope; empty for leaf steps.
    #[must_use]
    pub fn nested(&self) -> &[Step] {
        match self {
            Step::ForEach { steps, .. } | Step::When { steps, .. } => steps,
            _ => &[],
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::FromJson(source) => write!(f, "from_json({source})"),
            Step::ForEach { path, .. } => write!(f, "for_each({path})"),
            Step::Triple {
                subject,
                predicate,
                object,
            } => write!(f, "triple({subject}, {predicate}, {object})"),
            Step::When { condition, .. } => write!(f, "when({condition})"),
            Step::Validate(source) => write!(f, "validate({source})"),
            Step::ToRdf(destination) => write!(f, "to_rdf({destination})"),
            Step::Bind { key, value } => write!(f, "add({key}, {value})"),
            Step::AssertEnv(names) => write!(f, "assert_env({})", names.join(", ")),
            Step::DirectMapping(mapping) => write!(f, "direct_mapping({})", mapping.vocabulary().base()),
        }
    }
}

/// Loads a JSON document.
#[must_use]
pub fn from_json(source: Source) -> Step {
    Step::FromJson(source)
}

/// Iterates the records selected by `path`.
#[must_use]
pub fn for_each(path: impl Into<KeyPath>, steps: impl IntoIterator<Item = Step>) -> Step {
    Step::ForEach {
        path: path.into(),
        steps: steps.into_iter().collect(),
    }
}

/// Emits the fact `(subject, predicate, object)`.
#[must_use]
pub fn triple(subject: impl Into<Term>, predicate: impl Into<Term>, object: impl Into<Term>) -> Step {
    Step::Triple {
        subject: subject.into(),
        predicate: predicate.into(),
        object: object.into(),
    }
}

/// Runs `steps` when `key` is present and not empty.
#[must_use]
pub fn when(key: impl Into<KeyPath>, steps: impl IntoIterator<Item = Step>) -> Step {
    Step::When {
        condition: Condition::Present(key.into()),
        steps: steps.into_iter().collect(),
    }
}

/// Runs `steps` when the scalar at `key` equals `value`.
#[must_use]
pub fn when_equals(
    key: impl Into<KeyPath>,
    value: impl Into<String>,
    steps: impl IntoIterator<Item = Step>,
) -> Step {
    Step::When {
        condition: Condition::Equals(key.into(), value.into()),
        steps: steps.into_iter().collect(),
    }
}

/// Runs `steps` when `key` is absent or empty.
#[must_use]
pub fn unless(key: impl Into<KeyPath>, steps: impl IntoIterator<Item = Step>) -> Step {
    Step::When {
        condition: Condition::Not(Box::new(Condition::Present(key.into()))),
        steps: steps.into_iter().collect(),
    }
}

/// Validates the facts emitted so far against the shapes at `schema`.
#[must_use]
pub fn validate(schema: Source) -> Step {
    Step::Validate(schema)
}

/// Writes the facts emitted so far to `destination`.
#[must_use]
pub fn to_rdf(destination: Destination) -> Step {
    Step::ToRdf(destination)
}

/// Binds `value` as `key` on the current record.
#[must_use]
pub fn add(key: impl Into<String>, value: impl Into<ValueRef>) -> Step {
    Step::Bind {
        key: key.into(),
        value: value.into(),
    }
}

/// Requires every variable in `names` to be set and non-empty.
#[must_use]
pub fn assert_env<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Step {
    Step::AssertEnv(names.into_iter().map(Into::into).collect())
}

/// Maps the current record with `mapping`.
#[must_use]
pub fn direct_mapping(mapping: DirectMapping) -> Step {
    Step::DirectMapping(mapping)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::term::{env, iri, literal};
    use meemoo_rdf::namespaces::{lang, rdfs, sdo, A};
    use meemoo_rdf::Prefix;

    #[test]
    fn display_names_the_step() {
        let id = Prefix::new("id", "https://data.hetarchief.be/id/").unwrap();
        assert_eq!(
            triple(iri(&id, "id"), A, sdo::PERSON).to_string(),
            "triple(id:{id}, <http://www.w3.org/1999/02/22-rdf-syntax-ns#type>, <https://schema.org/Person>)"
        );
        assert_eq!(
            triple(iri(&id, "id"), rdfs::LABEL, literal(env("TEST"), lang::NL)).to_string(),
            "triple(id:{id}, <http://www.w3.org/2000/01/rdf-schema#label>, env(TEST)@nl)"
        );
        assert_eq!(
            for_each("data.contentpartners", []).to_string(),
            "for_each(data.contentpartners)"
        );
        assert_eq!(unless("label", []).to_string(), "when(!label)");
    }

    #[test]
    fn scopes_expose_nested_steps() {
        let step = for_each("items", [when("label", []), assert_env(["TEST"])]);
        assert_eq!(step.nested().len(), 2);
        assert!(step.nested()[1].nested().is_empty());
    }
}
