//! RDF data model, prefixes, and serializers for the meemoo ETL engine.
//!
//! The `meemoo-rdf` crate provides the term model ([`Iri`], [`BlankNode`],
//! [`Literal`], [`Node`], [`Triple`]), prefix declarations, the standard
//! vocabularies as `const` IRIs, and serializers that produce Turtle and
//! N-Triples output. Turtle and N-Triples input is parsed with `sophia_turtle`.
//!
//! # Entry Point
//!
//! ```
//! use meemoo_rdf::namespaces::{sdo, A};
//! use meemoo_rdf::{PrefixTable, Triple};
//!
//! let mut prefixes = PrefixTable::with_standard();
//! let id = prefixes.declare("id", "https://data.hetarchief.be/id/").unwrap();
//! let facts = vec![Triple::new(id.expand("1"), A, sdo::PERSON)];
//!
//! let turtle = meemoo_rdf::serializer::turtle::to_turtle(&facts, &prefixes);
//! assert!(turtle.contains("id:1"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod model;
pub mod namespaces;
pub mod parser;
pub mod prefix;
pub mod serializer;

pub use error::RdfError;
pub use model::{BlankNode, Iri, Literal, Node, Triple};
pub use prefix::{Prefix, PrefixTable};
pub use serializer::Format;
