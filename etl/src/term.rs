//! Terms and value references, resolved against the current record.
//!
//! A bare string used as a term or value is a key reference: `"label"`
//! reads the `label` member of the current record. Constants are written
//! with [`str`], environment variables with [`env`].

use std::fmt;

use meemoo_rdf::namespaces::lang::Language;
use meemoo_rdf::namespaces::xsd;
use meemoo_rdf::{BlankNode, Iri, Literal, Node, Prefix};
use serde_json::Value;

use crate::env::Environment;
use crate::error::{EtlError, Result};
use crate::path::KeyPath;
use crate::record::Record;

/// Where a value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueRef {
    /// A key path on the current record.
    Key {
        /// The path.
        path: KeyPath,
        /// Used when the key is absent.
        fallback: Option<String>,
    },
    /// A constant string.
    Const(String),
    /// An environment variable from the run's snapshot.
    Env {
        /// Variable name.
        name: String,
        /// Used when the variable is unset or empty.
        fallback: Option<String>,
    },
}

impl ValueRef {
    /// Supplies a fallback for an absent key or unset variable. Has no
    /// effect on constants.
    #[must_use]
    pub fn or(self, fallback: impl Into<String>) -> Self {
        match self {
            ValueRef::Key { path, .. } => ValueRef::Key {
                path,
                fallback: Some(fallback.into()),
            },
            ValueRef::Env { name, .. } => ValueRef::Env {
                name,
                fallback: Some(fallback.into()),
            },
            constant @ ValueRef::Const(_) => constant,
        }
    }

    /// The key path this reference reads, if any.
    #[must_use]
    pub fn key_path(&self) -> Option<&KeyPath> {
        match self {
            ValueRef::Key { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Resolves to a JSON value; `None` when absent with no fallback.
    pub(crate) fn resolve(&self, record: &Record, env: &Environment) -> Result<Option<Value>> {
        Ok(match self {
            ValueRef::Key { path, fallback } => record
                .get(path)?
                .cloned()
                .or_else(|| fallback.clone().map(Value::String)),
            ValueRef::Const(value) => Some(Value::String(value.clone())),
            ValueRef::Env { name, fallback } => env
                .get(name)
                .map(str::to_owned)
                .or_else(|| fallback.clone())
                .map(Value::String),
        })
    }

    /// Like [`ValueRef::resolve`], but absence is a `MissingBinding` error.
    pub(crate) fn require(&self, record: &Record, env: &Environment) -> Result<Value> {
        self.resolve(record, env)?
            .ok_or_else(|| EtlError::missing(self.binding_name()))
    }

    /// Resolves to the lexical text of a scalar.
    pub(crate) fn require_text(&self, record: &Record, env: &Environment) -> Result<String> {
        let value = self.require(record, env)?;
        scalar_text(&value).ok_or_else(|| not_a_scalar(self.binding_name(), &value))
    }

    fn binding_name(&self) -> String {
        match self {
            ValueRef::Key { path, .. } => path.to_string(),
            ValueRef::Const(value) => value.clone(),
            ValueRef::Env { name, .. } => format!("env:{name}"),
        }
    }
}

impl fmt::Display for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fallback = match self {
            ValueRef::Key { path, fallback } => {
                write!(f, "{{{path}}}")?;
                fallback
            }
            ValueRef::Const(value) => return write!(f, "{value:?}"),
            ValueRef::Env { name, fallback } => {
                write!(f, "env({name})")?;
                fallback
            }
        };
        match fallback {
            Some(fallback) => write!(f, ".or({fallback:?})"),
            None => Ok(()),
        }
    }
}

impl From<&str> for ValueRef {
    fn from(key: &str) -> Self {
        key_ref(key)
    }
}

impl From<String> for ValueRef {
    fn from(key: String) -> Self {
        key_ref(key)
    }
}

/// A key reference on the current record.
#[must_use]
pub fn key_ref(path: impl Into<KeyPath>) -> ValueRef {
    ValueRef::Key {
        path: path.into(),
        fallback: None,
    }
}

/// A constant string.
#[must_use]
pub fn str(value: impl Into<String>) -> ValueRef {
    ValueRef::Const(value.into())
}

/// An environment variable. Unset without a fallback is a `MissingBinding`.
#[must_use]
pub fn env(name: impl Into<String>) -> ValueRef {
    ValueRef::Env {
        name: name.into(),
        fallback: None,
    }
}

/// A language tag or datatype for a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Language-tagged.
    Language(String),
    /// Typed.
    Datatype(Iri),
}

impl From<Language> for Annotation {
    fn from(lang: Language) -> Self {
        Annotation::Language(lang.as_str().to_owned())
    }
}

impl From<Iri> for Annotation {
    fn from(datatype: Iri) -> Self {
        Annotation::Datatype(datatype)
    }
}

/// A subject, predicate, or object position in a `triple` step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A constant IRI.
    Iri(Iri),
    /// A prefix applied to a resolved local name.
    Prefixed {
        /// The prefix.
        prefix: Prefix,
        /// The local name.
        local: ValueRef,
    },
    /// A literal; without annotation the JSON type picks the datatype.
    Literal {
        /// The lexical value.
        value: ValueRef,
        /// Language or datatype.
        annotation: Option<Annotation>,
    },
    /// A blank node labelled by a resolved value.
    Blank(ValueRef),
}

impl Term {
    /// True if the term can only resolve to a literal.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }

    /// The key paths this term reads.
    pub fn key_paths(&self) -> impl Iterator<Item = &KeyPath> {
        match self {
            Term::Iri(_) => None,
            Term::Prefixed { local: v, .. } | Term::Literal { value: v, .. } | Term::Blank(v) => {
                v.key_path()
            }
        }
        .into_iter()
    }

    pub(crate) fn resolve(&self, record: &Record, env: &Environment) -> Result<Node> {
        Ok(match self {
            Term::Iri(iri) => Node::Iri(iri.clone()),
            Term::Prefixed { prefix, local } => {
                Node::Iri(prefix.expand(&local.require_text(record, env)?))
            }
            Term::Literal { value, annotation } => {
                let resolved = value.require(record, env)?;
                let literal = match annotation {
                    Some(annotation) => {
                        let text = scalar_text(&resolved)
                            .ok_or_else(|| not_a_scalar(value.binding_name(), &resolved))?;
                        match annotation {
                            Annotation::Language(tag) => Literal::lang(text, tag),
                            Annotation::Datatype(dt) => Literal::typed(text, dt.clone()),
                        }
                    }
                    None => json_literal(&resolved)
                        .ok_or_else(|| not_a_scalar(value.binding_name(), &resolved))?,
                };
                Node::Literal(literal)
            }
            Term::Blank(label) => Node::Blank(BlankNode::new(label.require_text(record, env)?)),
        })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => iri.fmt(f),
            Term::Prefixed { prefix, local } => write!(f, "{}:{local}", prefix.name()),
            Term::Literal { value, annotation } => {
                write!(f, "{value}")?;
                match annotation {
                    Some(Annotation::Language(tag)) => write!(f, "@{tag}"),
                    Some(Annotation::Datatype(dt)) => write!(f, "^^{dt}"),
                    None => Ok(()),
                }
            }
            Term::Blank(label) => write!(f, "_:{label}"),
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

/// A bare string is a plain literal read from that key.
impl From<&str> for Term {
    fn from(key: &str) -> Self {
        Term::Literal {
            value: key.into(),
            annotation: None,
        }
    }
}

impl From<ValueRef> for Term {
    fn from(value: ValueRef) -> Self {
        Term::Literal {
            value,
            annotation: None,
        }
    }
}

/// An IRI built from `prefix` and a local name.
#[must_use]
pub fn iri(prefix: &Prefix, local: impl Into<ValueRef>) -> Term {
    Term::Prefixed {
        prefix: prefix.clone(),
        local: local.into(),
    }
}

/// A language-tagged or typed literal.
#[must_use]
pub fn literal(value: impl Into<ValueRef>, annotation: impl Into<Annotation>) -> Term {
    Term::Literal {
        value: value.into(),
        annotation: Some(annotation.into()),
    }
}

/// A blank node labelled by `label`.
#[must_use]
pub fn blank(label: impl Into<ValueRef>) -> Term {
    Term::Blank(label.into())
}

/// Lexical text of a JSON scalar; `None` for arrays and objects.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// The literal a JSON scalar maps to: strings plain, integers
/// `xsd:integer`, other numbers `xsd:double`, booleans `xsd:boolean`.
pub(crate) fn json_literal(value: &Value) -> Option<Literal> {
    match value {
        Value::String(s) => Some(Literal::string(s.clone())),
        Value::Number(n) if n.is_i64() || n.is_u64() => {
            Some(Literal::typed(n.to_string(), xsd::INTEGER))
        }
        Value::Number(n) => Some(Literal::typed(n.to_string(), xsd::DOUBLE)),
        Value::Bool(b) => Some(Literal::typed(b.to_string(), xsd::BOOLEAN)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn not_a_scalar(key: String, value: &Value) -> EtlError {
    EtlError::NotAScalar {
        step: String::new(),
        key,
        kind: match value {
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
            _ => "a scalar",
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::EtlConfig;
    use meemoo_rdf::namespaces::lang;
    use serde_json::json;
    use std::sync::Arc;

    fn id() -> Prefix {
        Prefix::new("id", "https://data.hetarchief.be/id/").unwrap()
    }

    fn record(value: Value) -> Record {
        Record::root(Arc::new(value))
    }

    fn no_env() -> Environment {
        Environment::snapshot(&EtlConfig::default().inherit_env(false))
    }

    #[test]
    fn prefixed_iri_from_key() {
        let node = iri(&id(), "id")
            .resolve(&record(json!({ "id": "1" })), &no_env())
            .unwrap();
        assert_eq!(node, Node::Iri(Iri::new("https://data.hetarchief.be/id/1")));
    }

    #[test]
    fn numeric_local_names_use_their_lexical_form() {
        let node = iri(&id(), "id")
            .resolve(&record(json!({ "id": 42 })), &no_env())
            .unwrap();
        assert_eq!(node, Node::Iri(Iri::new("https://data.hetarchief.be/id/42")));
    }

    #[test]
    fn blank_label_from_key() {
        let term = blank("id");
        let node = term.resolve(&record(json!({ "id": "org 1" })), &no_env()).unwrap();
        assert_eq!(node, Node::Blank(BlankNode::new("org_1")));
        let node = term.resolve(&record(json!({ "id": "-1" })), &no_env()).unwrap();
        assert_eq!(node.to_string(), "_:_1");
        let err = term.resolve(&record(json!({})), &no_env()).unwrap_err();
        assert!(matches!(err, EtlError::MissingBinding { ref key, .. } if key == "id"));
    }

    #[test]
    fn constant_local_name() {
        let node = iri(&id(), str("Jane")).resolve(&record(json!({})), &no_env()).unwrap();
        assert_eq!(node, Node::Iri(Iri::new("https://data.hetarchief.be/id/Jane")));
    }

    #[test]
    fn json_types_pick_datatypes() {
        let r = record(json!({ "s": "x", "i": 3, "f": 1.5, "b": true }));
        let env = no_env();
        let lit = |key: &str| Term::from(key).resolve(&r, &env).unwrap();
        assert_eq!(lit("s"), Node::Literal(Literal::string("x")));
        assert_eq!(lit("i"), Node::Literal(Literal::typed("3", xsd::INTEGER)));
        assert_eq!(lit("f"), Node::Literal(Literal::typed("1.5", xsd::DOUBLE)));
        assert_eq!(lit("b"), Node::Literal(Literal::typed("true", xsd::BOOLEAN)));
    }

    #[test]
    fn explicit_annotation_wins() {
        let node = literal("i", lang::NL)
            .resolve(&record(json!({ "i": 3 })), &no_env())
            .unwrap();
        assert_eq!(node, Node::Literal(Literal::lang("3", "nl")));
    }

    #[test]
    fn env_fallback_applies_when_unset() {
        let node = literal(env("TEST").or("not found"), lang::NL)
            .resolve(&record(json!({})), &no_env())
            .unwrap();
        assert_eq!(node, Node::Literal(Literal::lang("not found", "nl")));
    }

    #[test]
    fn env_without_fallback_is_missing_binding() {
        let err = Term::from(env("TEST"))
            .resolve(&record(json!({})), &no_env())
            .unwrap_err();
        assert!(matches!(err, EtlError::MissingBinding { ref key, .. } if key == "env:TEST"));
    }

    #[test]
    fn absent_key_is_missing_binding() {
        let err = Term::from("label").resolve(&record(json!({})), &no_env()).unwrap_err();
        assert!(matches!(err, EtlError::MissingBinding { ref key, .. } if key == "label"));
    }

    #[test]
    fn key_fallback() {
        let node = Term::from(key_ref("label").or("unnamed"))
            .resolve(&record(json!({})), &no_env())
            .unwrap();
        assert_eq!(node, Node::Literal(Literal::string("unnamed")));
    }

    #[test]
    fn objects_are_not_scalars() {
        let err = Term::from("org")
            .resolve(&record(json!({ "org": { "id": 1 } })), &no_env())
            .unwrap_err();
        assert!(matches!(err, EtlError::NotAScalar { kind: "an object", .. }));
    }

    #[test]
    fn display() {
        assert_eq!(iri(&id(), "id").to_string(), "id:{id}");
        assert_eq!(
            literal(env("TEST").or("not found"), lang::NL).to_string(),
            "env(TEST).or(\"not found\")@nl"
        );
        assert_eq!(Term::from(str("Jane")).to_string(), "\"Jane\"");
    }
}
