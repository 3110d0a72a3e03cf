//! Declarative JSON-to-RDF pipelines.
//!
//! A pipeline ([`Etl`]) is an ordered list of [`Step`]s run against a
//! loaded JSON document: iterate records with [`for_each`], emit facts with
//! [`triple`], gate optional facts with [`when`], check the result with
//! [`validate`], and write it out with [`to_rdf`].
//!
//! # Entry Point
//!
//! ```
//! use meemoo_etl::{for_each, from_json, iri, triple, when, Etl, Source};
//! use meemoo_rdf::namespaces::{sdo, A};
//!
//! let mut etl = Etl::new();
//! let id = etl.declare_prefix("id", "https://data.hetarchief.be/id/")?;
//! etl.use_steps([
//!     from_json(Source::string(r#"{ "data": { "contentpartners": [{ "id": "1", "label": "Acme" }] } }"#)),
//!     for_each("data.contentpartners", [
//!         triple(iri(&id, "id"), A, sdo::PERSON),
//!         when("label", [triple(iri(&id, "id"), sdo::NAME, "label")]),
//!     ]),
//! ]);
//!
//! let report = etl.run()?;
//! assert_eq!(report.facts.len(), 2);
//! # Ok::<(), meemoo_etl::EtlError>(())
//! ```
//!
//! # Validation Policy
//!
//! By default a `validate` step records violations on the [`RunReport`] and
//! the run continues (fail-open). With [`ValidationPolicy::FailClosed`] any
//! result of severity `sh:Violation` aborts the run.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod env;
pub mod error;
pub mod mapping;
pub mod path;
pub mod pipeline;
pub mod record;
pub mod source;
pub mod step;
pub mod store;
pub mod term;

pub use config::{EtlConfig, ValidationPolicy};
pub use env::Environment;
pub use error::{EtlError, Result};
pub use mapping::DirectMapping;
pub use path::KeyPath;
pub use pipeline::{Etl, RunReport};
pub use record::Record;
pub use source::{Destination, Source};
pub use step::{
    add, assert_env, direct_mapping, for_each, from_json, to_rdf, triple, unless, validate, when,
    when_equals, Condition, Step,
};
pub use store::FactStore;
pub use term::{blank, env, iri, key_ref, literal, str, Annotation, Term, ValueRef};
