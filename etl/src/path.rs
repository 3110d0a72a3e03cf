//! Key path expressions: `data.contentpartners`, `items.0.name`,
//! `items[0].name`, `$this`.

use std::fmt;

use crate::error::{EtlError, Result};

/// The path that addresses the current record itself.
pub const THIS: &str = "$this";

/// One step of a key path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object member.
    Key(String),
    /// Array element (or object member named by the digits).
    Index(usize),
}

impl Segment {
    /// The segment as a JSON pointer reference token.
    pub(crate) fn pointer_token(&self) -> String {
        match self {
            Segment::Key(key) => key.replace('~', "~0").replace('/', "~1"),
            Segment::Index(i) => i.to_string(),
        }
    }
}

/// A parsed key path. Construction never fails; a malformed expression is
/// kept with its parse error and reported when the path is used or when the
/// pipeline is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    raw: String,
    parsed: std::result::Result<Vec<Segment>, String>,
}

impl KeyPath {
    /// Parses `raw`.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse(&raw);
        Self { raw, parsed }
    }

    /// The expression as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed segments; empty for `$this`.
    ///
    /// # Errors
    ///
    /// Returns [`EtlError::InvalidPath`] if the expression is malformed.
    pub fn segments(&self) -> Result<&[Segment]> {
        self.parsed
            .as_deref()
            .map_err(|reason| EtlError::invalid_path(&self.raw, reason.as_str()))
    }
}

/// The segments as a JSON pointer (`""` for `$this`).
pub(crate) fn pointer_of(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| format!("/{}", s.pointer_token()))
        .collect()
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for KeyPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for KeyPath {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

fn parse(raw: &str) -> std::result::Result<Vec<Segment>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("empty path".into());
    }
    let body = match raw.strip_prefix(THIS) {
        Some("") => return Ok(Vec::new()),
        Some(rest) => rest
            .strip_prefix('.')
            .ok_or_else(|| format!("unexpected `{rest}` after {THIS}"))?,
        None => raw,
    };

    let mut segments = Vec::new();
    for part in body.split('.') {
        if part.is_empty() {
            return Err("empty segment".into());
        }
        let (name, mut brackets) = match part.find('[') {
            Some(at) => part.split_at(at),
            None => (part, ""),
        };
        if !name.is_empty() {
            segments.push(if name.bytes().all(|b| b.is_ascii_digit()) {
                Segment::Index(index(name)?)
            } else {
                Segment::Key(name.to_owned())
            });
        }
        while !brackets.is_empty() {
            let inner = brackets
                .strip_prefix('[')
                .and_then(|rest| rest.split_once(']'))
                .ok_or_else(|| format!("unbalanced brackets in `{part}`"))?;
            if inner.0.is_empty() || !inner.0.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("`[{}]` is not an array index", inner.0));
            }
            segments.push(Segment::Index(index(inner.0)?));
            brackets = inner.1;
        }
    }
    Ok(segments)
}

fn index(digits: &str) -> std::result::Result<usize, String> {
    digits
        .parse()
        .map_err(|_| format!("index `{digits}` out of range"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn segments(raw: &str) -> Vec<Segment> {
        KeyPath::new(raw).segments().unwrap().to_vec()
    }

    #[test]
    fn dotted_keys() {
        assert_eq!(
            segments("data.contentpartners"),
            vec![
                Segment::Key("data".into()),
                Segment::Key("contentpartners".into())
            ]
        );
    }

    #[test]
    fn numeric_and_bracket_indexes_agree() {
        assert_eq!(segments("items.0.name"), segments("items[0].name"));
        assert_eq!(
            segments("matrix[1][2]"),
            vec![
                Segment::Key("matrix".into()),
                Segment::Index(1),
                Segment::Index(2)
            ]
        );
    }

    #[test]
    fn this_addresses_the_record() {
        assert!(segments("$this").is_empty());
        assert_eq!(segments("$this.id"), vec![Segment::Key("id".into())]);
    }

    #[test]
    fn malformed_paths_are_rejected() {
        for raw in ["", "a..b", "a.", "a[x]", "a[1", "$thisx"] {
            let err = KeyPath::new(raw).segments().unwrap_err();
            assert!(matches!(err, EtlError::InvalidPath { .. }), "{raw}");
        }
    }

    #[test]
    fn pointer_escapes_reserved_characters() {
        assert_eq!(pointer_of(&segments("a/b.c~d")), "/a~1b/c~0d");
    }
}
