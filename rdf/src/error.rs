//! Error type for RDF parsing and prefix management.

/// Errors raised by the RDF layer.
#[derive(Debug, thiserror::Error)]
pub enum RdfError {
    /// The input text is not valid Turtle / N-Triples.
    #[error("RDF syntax error: {0}")]
    Syntax(String),

    /// The parser produced a term this data model cannot represent
    /// (quoted triples, variables).
    #[error("unsupported RDF term: {0}")]
    UnsupportedTerm(String),

    /// A prefix name was declared twice with different base IRIs.
    #[error("prefix '{name}' is already bound to <{existing}>, cannot rebind to <{requested}>")]
    PrefixConflict {
        /// The prefix name.
        name: String,
        /// The base IRI it is already bound to.
        existing: String,
        /// The base IRI of the rejected declaration.
        requested: String,
    },

    /// A prefix name is not a valid Turtle prefix label.
    #[error("invalid prefix name '{0}'")]
    InvalidPrefixName(String),
}
