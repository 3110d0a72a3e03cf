//! Core RDF model types.
//!
//! A [`Triple`] relates a subject [`Node`] to an object [`Node`] through a
//! predicate [`Iri`]. All types are plain owned values; IRIs from the
//! standard vocabularies are `const` and borrow `'static` strings.

use std::borrow::Cow;
use std::fmt;

/// An absolute IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(Cow<'static, str>);

impl Iri {
    /// Wraps a `'static` IRI string without allocating.
    #[must_use]
    pub const fn from_static(iri: &'static str) -> Self {
        Self(Cow::Borrowed(iri))
    }

    /// Wraps an owned IRI string.
    #[must_use]
    pub fn new(iri: impl Into<String>) -> Self {
        Self(Cow::Owned(iri.into()))
    }

    /// Returns the IRI as a string slice (without angle brackets).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// A blank node, identified by a label local to one graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode(String);

impl BlankNode {
    /// Creates a blank node. Characters that are not allowed in a Turtle or
    /// N-Triples blank node label are replaced by `_`; a label may not start
    /// with `-`.
    #[must_use]
    pub fn new(label: impl AsRef<str>) -> Self {
        let label: String = label
            .as_ref()
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if c.is_ascii_alphanumeric() || c == '_' || (c == '-' && i > 0) {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        if label.is_empty() {
            Self("b".to_owned())
        } else {
            Self(label)
        }
    }

    /// Returns the label (without the `_:` prefix).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// An RDF literal.
///
/// A literal carries at most one of a language tag or a datatype. A
/// literal with neither is an `xsd:string`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    lexical: String,
    datatype: Option<Iri>,
    language: Option<String>,
}

impl Literal {
    /// Creates a plain `xsd:string` literal.
    #[must_use]
    pub fn string(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }

    /// Creates a language-tagged literal. The tag is lower-cased.
    #[must_use]
    pub fn lang(lexical: impl Into<String>, tag: impl AsRef<str>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: Some(tag.as_ref().to_ascii_lowercase()),
        }
    }

    /// Creates a typed literal. `xsd:string` normalises to a plain literal.
    #[must_use]
    pub fn typed(lexical: impl Into<String>, datatype: Iri) -> Self {
        let datatype = if datatype.as_str() == iris::XSD_STRING {
            None
        } else {
            Some(datatype)
        };
        Self {
            lexical: lexical.into(),
            datatype,
            language: None,
        }
    }

    /// The lexical form.
    #[must_use]
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// The language tag, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The explicit datatype, if any. Plain and language-tagged literals
    /// return `None`; see [`Literal::datatype_iri`] for the effective one.
    #[must_use]
    pub fn datatype(&self) -> Option<&Iri> {
        self.datatype.as_ref()
    }

    /// The effective datatype IRI: `rdf:langString` for language-tagged
    /// literals, `xsd:string` for plain ones.
    #[must_use]
    pub fn datatype_iri(&self) -> &str {
        match (&self.datatype, &self.language) {
            (Some(dt), _) => dt.as_str(),
            (None, Some(_)) => iris::RDF_LANG_STRING,
            (None, None) => iris::XSD_STRING,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", escape_literal(&self.lexical))?;
        if let Some(tag) = &self.language {
            write!(f, "@{tag}")
        } else if let Some(dt) = &self.datatype {
            write!(f, "^^{dt}")
        } else {
            Ok(())
        }
    }
}

/// Escapes a lexical form for use between double quotes in Turtle and
/// N-Triples.
#[must_use]
pub fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// A node in the graph: the position a subject or object can occupy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    /// A named resource.
    Iri(Iri),
    /// An anonymous resource.
    Blank(BlankNode),
    /// A literal value.
    Literal(Literal),
}

impl Node {
    /// Returns the IRI if this node is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this node is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// True for IRIs and blank nodes.
    #[must_use]
    pub fn is_resource(&self) -> bool {
        !matches!(self, Node::Literal(_))
    }

    /// Short human-readable kind name, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Iri(_) => "IRI",
            Node::Blank(_) => "blank node",
            Node::Literal(_) => "literal",
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => iri.fmt(f),
            Node::Blank(b) => b.fmt(f),
            Node::Literal(lit) => lit.fmt(f),
        }
    }
}

impl From<Iri> for Node {
    fn from(iri: Iri) -> Self {
        Node::Iri(iri)
    }
}

impl From<BlankNode> for Node {
    fn from(b: BlankNode) -> Self {
        Node::Blank(b)
    }
}

impl From<Literal> for Node {
    fn from(lit: Literal) -> Self {
        Node::Literal(lit)
    }
}

/// A single fact: `(subject, predicate, object)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject; an IRI or blank node.
    pub subject: Node,
    /// Predicate IRI.
    pub predicate: Iri,
    /// Object.
    pub object: Node,
}

impl Triple {
    /// Creates a triple.
    #[must_use]
    pub fn new(subject: impl Into<Node>, predicate: Iri, object: impl Into<Node>) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// Standard IRI strings shared by the vocabulary modules and serializers.
pub mod iris {
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// SHACL namespace.
    pub const SH: &str = "http://www.w3.org/ns/shacl#";
    /// schema.org namespace.
    pub const SDO: &str = "https://schema.org/";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:first`.
    pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    /// `rdf:rest`.
    pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    /// `rdf:nil`.
    pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    /// `rdf:langString`.
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:decimal`.
    pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    /// `xsd:double`.
    pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:date`.
    pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    /// `xsd:dateTime`.
    pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_xsd_string_is_plain() {
        let lit = Literal::typed("x", Iri::from_static(iris::XSD_STRING));
        assert_eq!(lit, Literal::string("x"));
        assert_eq!(lit.datatype_iri(), iris::XSD_STRING);
    }

    #[test]
    fn lang_literal_has_lang_string_datatype() {
        let lit = Literal::lang("hallo", "NL");
        assert_eq!(lit.language(), Some("nl"));
        assert_eq!(lit.datatype_iri(), iris::RDF_LANG_STRING);
        assert_eq!(lit.to_string(), "\"hallo\"@nl");
    }

    #[test]
    fn literal_escaping() {
        let lit = Literal::string("a \"quoted\"\nline\\");
        assert_eq!(lit.to_string(), r#""a \"quoted\"\nline\\""#);
    }

    #[test]
    fn blank_node_label_is_sanitised() {
        assert_eq!(BlankNode::new("a b/c").as_str(), "a_b_c");
        assert_eq!(BlankNode::new("").as_str(), "b");
    }

    #[test]
    fn blank_node_label_does_not_start_with_dash() {
        assert_eq!(BlankNode::new("-1").as_str(), "_1");
        assert_eq!(BlankNode::new("a-1").as_str(), "a-1");
        assert_eq!(BlankNode::new("--").as_str(), "_-");
    }

    #[test]
    fn triple_displays_as_ntriples() {
        let t = Triple::new(
            Iri::new("https://data.hetarchief.be/id/1"),
            Iri::from_static(iris::RDF_TYPE),
            Iri::from_static("https://schema.org/Person"),
        );
        assert_eq!(
            t.to_string(),
            "<https://data.hetarchief.be/id/1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <https://schema.org/Person> ."
        );
    }
}
