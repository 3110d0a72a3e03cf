//! Error taxonomy for pipeline runs.
//!
//! Every fatal error names the step it came from. Errors are created deep in
//! resolution code without that context and labelled on the way out by the
//! orchestrator (see [`EtlError::step`]).

use meemoo_rdf::RdfError;
use meemoo_shacl::{ShaclError, Violation};

use crate::step::Step;

/// Errors that abort a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum EtlError {
    /// The input document or schema is missing or malformed.
    #[error("{step}: cannot read {locator}: {reason}")]
    SourceUnreadable {
        /// The failing step.
        step: String,
        /// File path or `<inline>`.
        locator: String,
        /// What went wrong.
        reason: String,
    },

    /// An unguarded reference resolved to nothing.
    #[error("{step}: no value bound for `{key}`")]
    MissingBinding {
        /// The failing step.
        step: String,
        /// The key path, or `env:NAME` for environment references.
        key: String,
    },

    /// A required precondition (e.g. an environment variable) is not met.
    #[error("{step}: {message}")]
    PreconditionFailure {
        /// The failing step.
        step: String,
        /// Which precondition failed.
        message: String,
    },

    /// Validation found violations and the policy is fail-closed.
    #[error("{step}: {} constraint violation(s) against {schema}", violations.len())]
    ValidationFailed {
        /// The failing step.
        step: String,
        /// The schema locator.
        schema: String,
        /// Results of severity `sh:Violation`.
        violations: Vec<Violation>,
    },

    /// An array or object was used where a scalar is required.
    #[error("{step}: `{key}` holds {kind}, expected a scalar")]
    NotAScalar {
        /// The failing step.
        step: String,
        /// The key path.
        key: String,
        /// `"an array"` or `"an object"`.
        kind: &'static str,
    },

    /// A term cannot occupy its position (literal subject, non-IRI predicate).
    #[error("{step}: {message}")]
    InvalidTerm {
        /// The failing step.
        step: String,
        /// Description of the problem.
        message: String,
    },

    /// A key path expression is malformed.
    #[error("{step}: invalid path `{path}`: {reason}")]
    InvalidPath {
        /// The failing step.
        step: String,
        /// The path as written.
        path: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The schema parsed as RDF but is not a usable shapes graph.
    #[error("{step}: schema {locator}: {source}")]
    Schema {
        /// The failing step.
        step: String,
        /// The schema locator.
        locator: String,
        /// The underlying shapes error.
        #[source]
        source: ShaclError,
    },

    /// Writing serialized output failed.
    #[error("{step}: cannot write {locator}: {source}")]
    Output {
        /// The failing step.
        step: String,
        /// The destination path.
        locator: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A prefix declaration was rejected.
    #[error(transparent)]
    Prefix(#[from] RdfError),
}

impl EtlError {
    pub(crate) fn missing(key: impl Into<String>) -> Self {
        EtlError::MissingBinding {
            step: String::new(),
            key: key.into(),
        }
    }

    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        EtlError::PreconditionFailure {
            step: String::new(),
            message: message.into(),
        }
    }

    pub(crate) fn unreadable(locator: impl Into<String>, reason: impl ToString) -> Self {
        EtlError::SourceUnreadable {
            step: String::new(),
            locator: locator.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn invalid_term(message: impl Into<String>) -> Self {
        EtlError::InvalidTerm {
            step: String::new(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        EtlError::InvalidPath {
            step: String::new(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// The label of the step that raised this error, if any.
    #[must_use]
    pub fn step(&self) -> Option<&str> {
        match self {
            EtlError::SourceUnreadable { step, .. }
            | EtlError::MissingBinding { step, .. }
            | EtlError::PreconditionFailure { step, .. }
            | EtlError::ValidationFailed { step, .. }
            | EtlError::NotAScalar { step, .. }
            | EtlError::InvalidTerm { step, .. }
            | EtlError::InvalidPath { step, .. }
            | EtlError::Schema { step, .. }
            | EtlError::Output { step, .. } => Some(step.as_str()).filter(|s| !s.is_empty()),
            EtlError::Prefix(_) => None,
        }
    }

    /// Labels the error with `step` unless an inner step already did.
    pub(crate) fn in_step(mut self, step: &Step) -> Self {
        match &mut self {
            EtlError::SourceUnreadable { step: label, .. }
            | EtlError::MissingBinding { step: label, .. }
            | EtlError::PreconditionFailure { step: label, .. }
            | EtlError::ValidationFailed { step: label, .. }
            | EtlError::NotAScalar { step: label, .. }
            | EtlError::InvalidTerm { step: label, .. }
            | EtlError::InvalidPath { step: label, .. }
            | EtlError::Schema { step: label, .. }
            | EtlError::Output { step: label, .. } => {
                if label.is_empty() {
                    *label = step.to_string();
                }
            }
            EtlError::Prefix(_) => {}
        }
        self
    }
}

/// A convenience alias for `Result<T, EtlError>`.
pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::assert_env;

    #[test]
    fn innermost_step_label_wins() {
        let inner = assert_env(["TEST"]);
        let outer = assert_env(["OTHER"]);
        let err = EtlError::missing("label").in_step(&inner).in_step(&outer);
        assert_eq!(err.step(), Some("assert_env(TEST)"));
        assert_eq!(err.to_string(), "assert_env(TEST): no value bound for `label`");
    }

    #[test]
    fn unlabelled_error_has_no_step() {
        assert_eq!(EtlError::precondition("x").step(), None);
    }
}
