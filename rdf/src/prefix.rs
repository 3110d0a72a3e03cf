//! Prefix declarations: short names bound to IRI base strings.

use crate::error::RdfError;
use crate::model::Iri;
use crate::namespaces::Namespace;

/// A name bound to an IRI base. Expansion is pure concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix {
    name: String,
    base: String,
}

impl Prefix {
    /// Creates a prefix. Use [`PrefixTable::declare`] to also register it
    /// for compact serialization.
    ///
    /// # Errors
    ///
    /// Returns [`RdfError::InvalidPrefixName`] if `name` is not a valid
    /// Turtle prefix label.
    pub fn new(name: impl Into<String>, base: impl Into<String>) -> Result<Self, RdfError> {
        let name = name.into();
        if !is_prefix_name(&name) {
            return Err(RdfError::InvalidPrefixName(name));
        }
        Ok(Self {
            name,
            base: base.into(),
        })
    }

    /// The prefix name, e.g. `id`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base IRI, e.g. `https://data.hetarchief.be/id/`.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Expands a local identifier into a full IRI.
    #[must_use]
    pub fn expand(&self, local: &str) -> Iri {
        let mut iri = String::with_capacity(self.base.len() + local.len());
        iri.push_str(&self.base);
        for c in local.chars() {
            if matches!(c, ' ' | '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\')
                || c.is_control()
            {
                let mut buf = [0u8; 4];
                for b in c.encode_utf8(&mut buf).bytes() {
                    iri.push_str(&format!("%{b:02X}"));
                }
            } else {
                iri.push(c);
            }
        }
        Iri::new(iri)
    }
}

impl From<Namespace> for Prefix {
    fn from(ns: Namespace) -> Self {
        Self {
            name: ns.prefix.to_owned(),
            base: ns.iri.to_owned(),
        }
    }
}

/// Ordered set of prefix declarations.
#[derive(Debug, Clone, Default)]
pub struct PrefixTable {
    prefixes: Vec<Prefix>,
}

impl PrefixTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table pre-populated with the standard vocabularies
    /// (`rdf`, `rdfs`, `xsd`, `owl`, `sh`, `sdo`).
    #[must_use]
    pub fn with_standard() -> Self {
        Self {
            prefixes: crate::namespaces::standard()
                .into_iter()
                .map(Prefix::from)
                .collect(),
        }
    }

    /// Declares a prefix and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`RdfError::PrefixConflict`] if the name is already bound to a
    /// different base, or [`RdfError::InvalidPrefixName`] for a bad name.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        base: impl Into<String>,
    ) -> Result<Prefix, RdfError> {
        let prefix = Prefix::new(name, base)?;
        if let Some(existing) = self.get(prefix.name()) {
            if existing.base == prefix.base {
                return Ok(existing.clone());
            }
            return Err(RdfError::PrefixConflict {
                name: prefix.name,
                existing: existing.base.clone(),
                requested: prefix.base,
            });
        }
        self.prefixes.push(prefix.clone());
        Ok(prefix)
    }

    /// Looks up a prefix by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Prefix> {
        self.prefixes.iter().find(|p| p.name == name)
    }

    /// Iterates over prefixes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Prefix> {
        self.prefixes.iter()
    }

    /// Number of declared prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// True if no prefixes are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Splits an IRI into `(prefix, local)` using the longest matching base
    /// whose remainder is a safe Turtle local name.
    #[must_use]
    pub fn compact<'a>(&'a self, iri: &'a str) -> Option<(&'a Prefix, &'a str)> {
        self.prefixes
            .iter()
            .filter(|p| !p.base.is_empty() && iri.starts_with(p.base.as_str()))
            .map(|p| (p, &iri[p.base.len()..]))
            .filter(|(_, local)| is_local_name(local))
            .max_by_key(|(p, _)| p.base.len())
    }
}

fn is_prefix_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        None => true,
        Some(c) if c.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        Some(_) => false,
    }
}

// Conservative subset of PN_LOCAL: no escapes, no dots, no colons.
fn is_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        None => true,
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        Some(_) => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ID: &str = "https://data.hetarchief.be/id/";

    #[test]
    fn expand_concatenates() {
        let p = Prefix::new("id", ID).unwrap();
        assert_eq!(p.expand("1").as_str(), "https://data.hetarchief.be/id/1");
    }

    #[test]
    fn expand_percent_encodes_unsafe_characters() {
        let p = Prefix::new("id", ID).unwrap();
        assert_eq!(
            p.expand("Jane Doe").as_str(),
            "https://data.hetarchief.be/id/Jane%20Doe"
        );
    }

    #[test]
    fn redeclare_same_base_is_idempotent() {
        let mut table = PrefixTable::new();
        table.declare("id", ID).unwrap();
        table.declare("id", ID).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn redeclare_other_base_conflicts() {
        let mut table = PrefixTable::new();
        table.declare("id", ID).unwrap();
        let err = table.declare("id", "https://example.org/").unwrap_err();
        assert!(matches!(err, RdfError::PrefixConflict { .. }));
    }

    #[test]
    fn invalid_prefix_name_rejected() {
        assert!(Prefix::new("1id", ID).is_err());
        assert!(Prefix::new("i d", ID).is_err());
    }

    #[test]
    fn compact_prefers_longest_base() {
        let mut table = PrefixTable::new();
        table.declare("hd", "https://data.hetarchief.be/").unwrap();
        table.declare("id", ID).unwrap();
        let (p, local) = table.compact("https://data.hetarchief.be/id/42").unwrap();
        assert_eq!(p.name(), "id");
        assert_eq!(local, "42");
    }

    #[test]
    fn compact_rejects_unsafe_local() {
        let mut table = PrefixTable::new();
        table.declare("id", ID).unwrap();
        assert!(table.compact("https://data.hetarchief.be/id/a/b").is_none());
        assert!(table.compact("https://example.org/x").is_none());
    }
}
