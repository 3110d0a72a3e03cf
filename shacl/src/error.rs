//! Errors raised while loading a shapes graph.

use meemoo_rdf::RdfError;

/// Errors raised while loading or interpreting a shapes graph.
#[derive(Debug, thiserror::Error)]
pub enum ShaclError {
    /// The shapes document is not valid RDF.
    #[error(transparent)]
    Rdf(#[from] RdfError),

    /// A shape uses a property path form that is not supported.
    #[error("shape {shape}: unsupported property path {path}")]
    UnsupportedPath {
        /// The shape carrying the path.
        shape: String,
        /// The offending path node.
        path: String,
    },

    /// A shape carries an `sh:` constraint parameter that is not supported.
    #[error("shape {shape}: unsupported constraint parameter {parameter}")]
    UnsupportedConstraint {
        /// The shape carrying the parameter.
        shape: String,
        /// The parameter IRI.
        parameter: String,
    },

    /// A shape refers back to itself through `sh:property` or `sh:node`.
    #[error("shape {shape} is recursive")]
    RecursiveShape {
        /// The shape reached a second time.
        shape: String,
    },

    /// A constraint parameter has the wrong kind of value.
    #[error("shape {shape}: invalid value {value} for {parameter}")]
    InvalidParameter {
        /// The shape carrying the parameter.
        shape: String,
        /// The constraint parameter IRI, e.g. `sh:minCount`.
        parameter: String,
        /// The offending value.
        value: String,
    },

    /// An `sh:pattern` regular expression does not compile.
    #[error("shape {shape}: invalid sh:pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The shape carrying the pattern.
        shape: String,
        /// The pattern text.
        pattern: String,
        /// The regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// An RDF list (`sh:in`, `sh:languageIn`) is not well-formed.
    #[error("shape {shape}: malformed RDF list at {node}")]
    MalformedList {
        /// The shape carrying the list.
        shape: String,
        /// The list node where traversal failed.
        node: String,
    },
}
