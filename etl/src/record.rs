//! Records: views into the loaded document plus per-record bindings.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::path::{pointer_of, KeyPath, Segment};

/// Binding holding the 0-based position of an iterated record.
pub const INDEX: &str = "$index";

/// The current context of a pipeline run.
///
/// A record points into a shared, immutable document. Bindings added with
/// [`Record::bind`] shadow document members of the same name.
#[derive(Debug, Clone)]
pub struct Record {
    document: Arc<Value>,
    pointer: String,
    bindings: BTreeMap<String, Value>,
}

impl Record {
    /// A record for the root of `document`.
    #[must_use]
    pub fn root(document: Arc<Value>) -> Self {
        Self {
            document,
            pointer: String::new(),
            bindings: BTreeMap::new(),
        }
    }

    /// The JSON pointer of this record within its document.
    #[must_use]
    pub fn pointer(&self) -> &str {
        &self.pointer
    }

    /// The node this record views. A dangling pointer views `null`.
    #[must_use]
    pub fn value(&self) -> &Value {
        self.document.pointer(&self.pointer).unwrap_or(&Value::Null)
    }

    /// Binds `value` under `key` for the rest of this record's scope.
    pub fn bind(&mut self, key: impl Into<String>, value: Value) {
        self.bindings.insert(key.into(), value);
    }

    /// Resolves `path` against this record. `null` counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`EtlError::InvalidPath`](crate::EtlError::InvalidPath) for a
    /// malformed path.
    pub fn get(&self, path: &KeyPath) -> Result<Option<&Value>> {
        let segments = path.segments()?;
        let found = match self.bound(segments) {
            Some((value, rest)) => value.pointer(&pointer_of(rest)),
            None => self
                .document
                .pointer(&format!("{}{}", self.pointer, pointer_of(segments))),
        };
        Ok(found.filter(|v| !v.is_null()))
    }

    /// The records `path` selects for iteration, in document order: each
    /// element of an array, or the node itself otherwise. Absent and `null`
    /// select nothing.
    ///
    /// # Errors
    ///
    /// Returns [`EtlError::InvalidPath`](crate::EtlError::InvalidPath) for a
    /// malformed path.
    pub fn children(&self, path: &KeyPath) -> Result<Option<Vec<Record>>> {
        let segments = path.segments()?;
        let (document, pointer) = match self.bound(segments) {
            Some((value, rest)) => (Arc::new(value.clone()), pointer_of(rest)),
            None => (
                Arc::clone(&self.document),
                format!("{}{}", self.pointer, pointer_of(segments)),
            ),
        };

        let len = match document.pointer(&pointer) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Array(items)) => Some(items.len()),
            Some(_) => None,
        };
        let child = |pointer: String, index: usize| {
            let mut record = Record {
                document: Arc::clone(&document),
                pointer,
                bindings: BTreeMap::new(),
            };
            record.bind(INDEX, Value::from(index));
            record
        };
        Ok(Some(match len {
            Some(len) => (0..len).map(|i| child(format!("{pointer}/{i}"), i)).collect(),
            None => vec![child(pointer.clone(), 0)],
        }))
    }

    /// Finds a binding named by the first segment.
    fn bound<'s, 'p>(&'s self, segments: &'p [Segment]) -> Option<(&'s Value, &'p [Segment])> {
        match segments.split_first() {
            Some((Segment::Key(key), rest)) => self.bindings.get(key).map(|v| (v, rest)),
            _ => None,
        }
    }
}

/// Truthiness used by conditional steps: absent, `null`, `false`, `""`,
/// `[]` and `{}` are empty; everything else, including `0`, passes.
#[must_use]
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(members)) => !members.is_empty(),
        Some(_) => true,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::root(Arc::new(value))
    }

    fn path(raw: &str) -> KeyPath {
        KeyPath::new(raw)
    }

    #[test]
    fn resolves_nested_keys_and_indexes() {
        let r = record(json!({ "data": { "items": [{ "id": "a" }, { "id": "b" }] } }));
        assert_eq!(r.get(&path("data.items.1.id")).unwrap(), Some(&json!("b")));
        assert_eq!(r.get(&path("data.items[0].id")).unwrap(), Some(&json!("a")));
        assert_eq!(r.get(&path("data.missing")).unwrap(), None);
    }

    #[test]
    fn null_is_absent() {
        let r = record(json!({ "label": null }));
        assert_eq!(r.get(&path("label")).unwrap(), None);
    }

    #[test]
    fn bindings_shadow_document() {
        let mut r = record(json!({ "id": "1" }));
        r.bind("id", json!("2"));
        r.bind("meta", json!({ "source": "api" }));
        assert_eq!(r.get(&path("id")).unwrap(), Some(&json!("2")));
        assert_eq!(r.get(&path("meta.source")).unwrap(), Some(&json!("api")));
    }

    #[test]
    fn children_of_array_are_in_document_order() {
        let r = record(json!({ "data": { "contentpartners": [{ "id": "1" }, { "id": "2" }] } }));
        let children = r.children(&path("data.contentpartners")).unwrap().unwrap();
        let ids: Vec<_> = children
            .iter()
            .map(|c| c.get(&path("id")).unwrap().cloned())
            .collect();
        assert_eq!(ids, vec![Some(json!("1")), Some(json!("2"))]);
        assert_eq!(children[1].get(&path(INDEX)).unwrap(), Some(&json!(1)));
        assert_eq!(children[1].pointer(), "/data/contentpartners/1");
    }

    #[test]
    fn object_and_scalar_iterate_once() {
        let r = record(json!({ "org": { "id": "1" }, "name": "Acme" }));
        assert_eq!(r.children(&path("org")).unwrap().unwrap().len(), 1);
        let name = r.children(&path("name")).unwrap().unwrap();
        assert_eq!(name[0].get(&path("$this")).unwrap(), Some(&json!("Acme")));
    }

    #[test]
    fn absent_or_null_iterates_never() {
        let r = record(json!({ "items": null }));
        assert!(r.children(&path("items")).unwrap().is_none());
        assert!(r.children(&path("missing")).unwrap().is_none());
        assert!(r.children(&path("empty")).unwrap().is_none());
        let r = record(json!({ "items": [] }));
        assert!(r.children(&path("items")).unwrap().unwrap().is_empty());
    }

    #[test]
    fn truthiness() {
        for empty in [json!(null), json!(false), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(Some(&empty)), "{empty}");
        }
        for full in [json!(0), json!("0"), json!(true), json!([0]), json!({ "a": null })] {
            assert!(is_truthy(Some(&full)), "{full}");
        }
        assert!(!is_truthy(None));
    }
}
