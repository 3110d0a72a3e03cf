//! SHACL Core validation for the meemoo ETL engine.
//!
//! Loads a shapes graph from Turtle and validates an in-memory fact set
//! against it, producing a [`ValidationReport`]. The supported subset
//! covers the constraint components used by the meemoo organisation and
//! content partner schemas.
//!
//! | Feature | Supported |
//! |---------|-----------|
//! | Targets | `sh:targetClass`, `sh:targetNode`, `sh:targetSubjectsOf`, `sh:targetObjectsOf`, implicit class targets |
//! | Paths | predicate, `sh:inversePath` |
//! | Cardinality | `sh:minCount`, `sh:maxCount` |
//! | Value type | `sh:datatype`, `sh:class`, `sh:nodeKind` |
//! | String | `sh:pattern` + `sh:flags`, `sh:minLength`, `sh:maxLength`, `sh:languageIn` |
//! | Value range | `sh:minInclusive`, `sh:maxInclusive`, `sh:minExclusive`, `sh:maxExclusive` |
//! | Shape-based | `sh:node` |
//! | Other | `sh:in`, `sh:hasValue`, `sh:severity`, `sh:message`, `sh:deactivated` |
//!
//! Shapes graphs using any other `sh:` constraint parameter fail to load.
//!
//! # Entry Point
//!
//! ```
//! use meemoo_rdf::namespaces::{sdo, A};
//! use meemoo_rdf::{Iri, Triple};
//! use meemoo_shacl::{validate, Shapes};
//!
//! let shapes = Shapes::parse(
//!     "@prefix sh: <http://www.w3.org/ns/shacl#> .
//!      @prefix sdo: <https://schema.org/> .
//!      [] sh:targetClass sdo:Person ;
//!         sh:property [ sh:path sdo:name ; sh:minCount 1 ] .",
//! )?;
//! let data = vec![Triple::new(Iri::new("https://data.hetarchief.be/id/1"), A, sdo::PERSON)];
//!
//! let report = validate(&shapes, &data);
//! assert_eq!(report.failure_count(), 1);
//! # Ok::<(), meemoo_shacl::ShaclError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
mod graph;
pub mod report;
pub mod shapes;
pub mod validator;

pub use error::ShaclError;
pub use report::{Severity, ValidationReport, Violation};
pub use shapes::{Shape, Shapes};
pub use validator::validate;
