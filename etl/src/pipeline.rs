//! The pipeline orchestrator.
//!
//! [`Etl::run`] checks the pipeline, takes an environment snapshot, and
//! executes the steps strictly in order against a fresh run state. Scopes
//! (`for_each`, `when`) run their nested steps to completion per record
//! before the enclosing scope advances. The first fatal error aborts the
//! run; output already written by earlier `to_rdf` steps stays on disk.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use meemoo_rdf::{Node, Prefix, PrefixTable, Triple};
use meemoo_shacl::{Shapes, ValidationReport, Violation};
use serde_json::{Map, Value};

use crate::config::{EtlConfig, ValidationPolicy};
use crate::env::Environment;
use crate::error::{EtlError, Result};
use crate::path::{KeyPath, Segment};
use crate::record::{is_truthy, Record};
use crate::source::Source;
use crate::step::{Condition, Step};
use crate::store::FactStore;
use crate::term::{scalar_text, Term};

/// A declared pipeline: configuration, prefixes, and steps.
#[derive(Debug, Clone)]
pub struct Etl {
    config: EtlConfig,
    prefixes: PrefixTable,
    steps: Vec<Step>,
}

/// The outcome of a completed run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Every fact emitted, in emission order.
    pub facts: Vec<Triple>,
    /// Validation results recorded under the fail-open policy.
    pub violations: Vec<Violation>,
    /// Files written by `to_rdf` steps, in order.
    pub outputs: Vec<PathBuf>,
}

impl RunReport {
    /// True if no validation results were recorded.
    #[must_use]
    pub fn conforms(&self) -> bool {
        self.violations.is_empty()
    }
}

impl Default for Etl {
    fn default() -> Self {
        Self::new()
    }
}

impl Etl {
    /// A pipeline with the default configuration and standard prefixes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EtlConfig::default())
    }

    /// A pipeline with `config` and the standard prefixes.
    #[must_use]
    pub fn with_config(config: EtlConfig) -> Self {
        Self {
            config,
            prefixes: PrefixTable::with_standard(),
            steps: Vec::new(),
        }
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &EtlConfig {
        &self.config
    }

    /// Declared prefixes, including the standard vocabularies.
    #[must_use]
    pub fn prefixes(&self) -> &PrefixTable {
        &self.prefixes
    }

    /// The top-level steps.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Declares a prefix for term construction and compact output.
    ///
    /// # Errors
    ///
    /// Returns [`EtlError::Prefix`] if the name is invalid or already bound
    /// to a different base.
    pub fn declare_prefix(
        &mut self,
        name: impl Into<String>,
        base: impl Into<String>,
    ) -> Result<Prefix> {
        Ok(self.prefixes.declare(name, base)?)
    }

    /// Appends steps.
    pub fn use_steps(&mut self, steps: impl IntoIterator<Item = Step>) -> &mut Self {
        self.steps.extend(steps);
        self
    }

    /// Preflight: validates every path and term position, and the prefixes
    /// the run will use, without doing any I/O.
    ///
    /// # Errors
    ///
    /// Returns the first [`EtlError::InvalidPath`] or
    /// [`EtlError::InvalidTerm`] found, labelled with its step, or
    /// [`EtlError::Prefix`] if a `direct_mapping` vocabulary conflicts with a
    /// declared prefix.
    pub fn check(&self) -> Result<()> {
        check_steps(&self.steps)?;
        self.run_prefixes().map(drop)
    }

    /// The prefix table a run uses from its first step on: the declared
    /// prefixes plus the vocabulary of every `direct_mapping` step.
    fn run_prefixes(&self) -> Result<PrefixTable> {
        let mut prefixes = self.prefixes.clone();
        declare_vocabularies(&self.steps, &mut prefixes)?;
        Ok(prefixes)
    }

    /// Checks and runs the pipeline.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error: an unreadable source, a missing
    /// binding, a failed precondition, an unusable schema, a write failure,
    /// or violations under the fail-closed policy.
    pub fn run(&self) -> Result<RunReport> {
        check_steps(&self.steps)?;

        let mut state = RunState {
            etl: self,
            env: Environment::snapshot(&self.config),
            prefixes: self.run_prefixes()?,
            store: FactStore::new(),
            violations: ValidationReport::new(),
            outputs: Vec::new(),
            schemas: HashMap::new(),
            mapped: 0,
        };
        let mut record = Record::root(Arc::new(Value::Object(Map::new())));

        for step in &self.steps {
            tracing::info!(step = %step, "Running step");
            state.execute(step, &mut record)?;
        }

        tracing::info!(
            facts = state.store.len(),
            violations = state.violations.results.len(),
            "Run complete"
        );
        Ok(RunReport {
            facts: state.store.into_facts(),
            violations: state.violations.results,
            outputs: state.outputs,
        })
    }
}

/// Mutable state of one run. Nothing here outlives [`Etl::run`].
struct RunState<'e> {
    etl: &'e Etl,
    env: Environment,
    /// Fixed for the whole run.
    prefixes: PrefixTable,
    store: FactStore,
    violations: ValidationReport,
    outputs: Vec<PathBuf>,
    schemas: HashMap<Source, Shapes>,
    mapped: usize,
}

impl RunState<'_> {
    fn execute(&mut self, step: &Step, record: &mut Record) -> Result<()> {
        self.apply(step, record).map_err(|e| e.in_step(step))
    }

    fn apply(&mut self, step: &Step, record: &mut Record) -> Result<()> {
        let etl = self.etl;
        let config = &etl.config;
        match step {
            Step::FromJson(source) => {
                let text = source.read(config)?;
                let document: Value = serde_json::from_str(&text)
                    .map_err(|e| EtlError::unreadable(source.to_string(), e))?;
                *record = Record::root(Arc::new(document));
            }
            Step::ForEach { path, steps } => {
                let Some(children) = record.children(path)? else {
                    tracing::warn!(path = %path, "Iteration path is absent; nothing to iterate");
                    return Ok(());
                };
                for mut child in children {
                    tracing::debug!(record = child.pointer(), "Processing record");
                    for nested in steps {
                        self.execute(nested, &mut child)?;
                    }
                }
            }
            Step::Triple {
                subject,
                predicate,
                object,
            } => {
                let fact = self.resolve_triple(subject, predicate, object, record)?;
                tracing::debug!(fact = %fact, "Emitting fact");
                self.store.push(fact);
            }
            Step::When { condition, steps } => {
                if holds(condition, record)? {
                    for nested in steps {
                        self.execute(nested, record)?;
                    }
                }
            }
            Step::Validate(schema) => self.validate(schema)?,
            Step::ToRdf(destination) => {
                let format = destination.format();
                let text = format.render(self.store.as_slice(), &self.prefixes);
                let written = destination.write(config, &text)?;
                tracing::info!(
                    path = %written.display(),
                    facts = self.store.len(),
                    format = ?format,
                    "Wrote output"
                );
                self.outputs.push(written);
            }
            Step::Bind { key, value } => {
                let bound = value.require(record, &self.env)?;
                record.bind(key.clone(), bound);
            }
            Step::AssertEnv(names) => self.env.require(names)?,
            Step::DirectMapping(mapping) => {
                let facts = mapping.map(record.value(), &mut self.mapped);
                tracing::debug!(facts = facts.len(), record = record.pointer(), "Mapped record");
                self.store.extend(facts);
            }
        }
        Ok(())
    }

    fn resolve_triple(
        &self,
        subject: &Term,
        predicate: &Term,
        object: &Term,
        record: &Record,
    ) -> Result<Triple> {
        let subject = subject.resolve(record, &self.env)?;
        if !subject.is_resource() {
            return Err(EtlError::invalid_term(format!(
                "subject resolved to a literal: {subject}"
            )));
        }
        let predicate = match predicate.resolve(record, &self.env)? {
            Node::Iri(iri) => iri,
            other => {
                return Err(EtlError::invalid_term(format!(
                    "predicate resolved to a {}: {other}",
                    other.kind()
                )))
            }
        };
        let object = object.resolve(record, &self.env)?;
        Ok(Triple::new(subject, predicate, object))
    }

    fn validate(&mut self, schema: &Source) -> Result<()> {
        let shapes = match self.schemas.entry(schema.clone()) {
            Entry::Occupied(cached) => cached.into_mut(),
            Entry::Vacant(slot) => {
                let text = schema.read(&self.etl.config)?;
                let shapes = Shapes::parse(&text).map_err(|source| EtlError::Schema {
                    step: String::new(),
                    locator: schema.to_string(),
                    source,
                })?;
                slot.insert(shapes)
            }
        };

        let report = meemoo_shacl::validate(shapes, self.store.as_slice());
        for result in &report.results {
            tracing::warn!(
                severity = %result.severity,
                focus = %result.focus_node,
                component = %result.component,
                "{}",
                result.message
            );
        }

        if self.etl.config.validation == ValidationPolicy::FailClosed && report.failure_count() > 0 {
            return Err(EtlError::ValidationFailed {
                step: String::new(),
                schema: schema.to_string(),
                violations: report.results.into_iter().filter(Violation::is_failure).collect(),
            });
        }
        tracing::info!(
            schema = %schema,
            results = report.results.len(),
            conforms = report.conforms(),
            "Validation finished"
        );
        self.violations.extend(report);
        Ok(())
    }
}

fn declare_vocabularies(steps: &[Step], prefixes: &mut PrefixTable) -> Result<()> {
    for step in steps {
        if let Step::DirectMapping(mapping) = step {
            let vocabulary = mapping.vocabulary();
            prefixes.declare(vocabulary.name(), vocabulary.base())?;
        }
        declare_vocabularies(step.nested(), prefixes)?;
    }
    Ok(())
}

fn holds(condition: &Condition, record: &Record) -> Result<bool> {
    Ok(match condition {
        Condition::Present(path) => is_truthy(record.get(path)?),
        Condition::Equals(path, expected) => record
            .get(path)?
            .and_then(scalar_text)
            .is_some_and(|text| text == *expected),
        Condition::Not(inner) => !holds(inner, record)?,
    })
}

fn check_steps(steps: &[Step]) -> Result<()> {
    for step in steps {
        check_step(step).map_err(|e| e.in_step(step))?;
        check_steps(step.nested())?;
    }
    Ok(())
}

fn check_step(step: &Step) -> Result<()> {
    match step {
        Step::ForEach { path, .. } => {
            path.segments()?;
        }
        Step::When { condition, .. } => {
            condition.key_path().segments()?;
        }
        Step::Triple {
            subject,
            predicate,
            object,
        } => {
            if subject.is_literal() {
                return Err(EtlError::invalid_term(format!(
                    "subject {subject} is a literal"
                )));
            }
            if matches!(predicate, Term::Literal { .. } | Term::Blank(_)) {
                return Err(EtlError::invalid_term(format!(
                    "predicate {predicate} is not an IRI"
                )));
            }
            for path in [subject, predicate, object].into_iter().flat_map(|t| t.key_paths()) {
                path.segments()?;
            }
        }
        Step::Bind { key, value } => {
            let path = KeyPath::new(key.as_str());
            if !matches!(path.segments(), Ok([Segment::Key(k)]) if k == key) {
                return Err(EtlError::invalid_path(
                    key.as_str(),
                    "binding names are single object keys",
                ));
            }
            if let Some(path) = value.key_path() {
                path.segments()?;
            }
        }
        Step::FromJson(_)
        | Step::Validate(_)
        | Step::ToRdf(_)
        | Step::AssertEnv(_)
        | Step::DirectMapping(_) => {}
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mapping::{DirectMapping, SOURCE};
    use crate::source::Destination;
    use crate::step::{
        add, direct_mapping, for_each, from_json, to_rdf, triple, unless, when, when_equals,
    };
    use crate::term::{iri, str};
    use meemoo_rdf::namespaces::{rdfs, sdo, A};
    use meemoo_rdf::{Iri, Literal};

    fn etl() -> (Etl, Prefix) {
        let mut etl = Etl::with_config(EtlConfig::default().inherit_env(false));
        let id = etl
            .declare_prefix("id", "https://data.hetarchief.be/id/")
            .unwrap();
        (etl, id)
    }

    fn org(id: &str) -> Iri {
        Iri::new(format!("https://data.hetarchief.be/id/{id}"))
    }

    const ORGS: &str = r#"{ "data": { "contentpartners": [
        { "id": "1", "label": "Acme", "kind": "archive" },
        { "id": "2", "label": "", "kind": "museum" },
        { "id": "3" }
    ] } }"#;

    #[test]
    fn nested_scopes_run_per_record_in_order() {
        let (mut etl, id) = etl();
        etl.use_steps([
            from_json(Source::string(ORGS)),
            for_each(
                "data.contentpartners",
                [
                    triple(iri(&id, "id"), A, sdo::ORGANIZATION),
                    when("label", [triple(iri(&id, "id"), sdo::NAME, "label")]),
                    unless("label", [triple(iri(&id, "id"), sdo::NAME, str("unnamed"))]),
                    when_equals("kind", "museum", [triple(iri(&id, "id"), A, sdo::PERSON)]),
                ],
            ),
        ]);

        let report = etl.run().unwrap();
        assert_eq!(
            report.facts,
            vec![
                Triple::new(org("1"), A, sdo::ORGANIZATION),
                Triple::new(org("1"), sdo::NAME, Literal::string("Acme")),
                Triple::new(org("2"), A, sdo::ORGANIZATION),
                Triple::new(org("2"), sdo::NAME, Literal::string("unnamed")),
                Triple::new(org("2"), A, sdo::PERSON),
                Triple::new(org("3"), A, sdo::ORGANIZATION),
                Triple::new(org("3"), sdo::NAME, Literal::string("unnamed")),
            ]
        );
    }

    #[test]
    fn top_level_steps_see_an_empty_root() {
        let (mut etl, id) = etl();
        etl.use_steps([triple(iri(&id, str("Jane")), rdfs::LABEL, str("Jane"))]);
        let report = etl.run().unwrap();
        assert_eq!(report.facts.len(), 1);
        assert_eq!(report.facts[0].subject, Node::Iri(org("Jane")));
    }

    #[test]
    fn bindings_are_visible_to_later_steps() {
        let (mut etl, id) = etl();
        etl.use_steps([
            from_json(Source::string(ORGS)),
            for_each(
                "data.contentpartners",
                [
                    add("position", "$index"),
                    triple(iri(&id, "id"), sdo::IDENTIFIER, "position"),
                ],
            ),
        ]);
        let report = etl.run().unwrap();
        let objects: Vec<_> = report.facts.iter().map(|t| t.object.to_string()).collect();
        assert_eq!(
            objects,
            vec![
                "\"0\"^^<http://www.w3.org/2001/XMLSchema#integer>",
                "\"1\"^^<http://www.w3.org/2001/XMLSchema#integer>",
                "\"2\"^^<http://www.w3.org/2001/XMLSchema#integer>",
            ]
        );
    }

    #[test]
    fn errors_name_the_innermost_step() {
        let (mut etl, id) = etl();
        etl.use_steps([
            from_json(Source::string(ORGS)),
            for_each(
                "data.contentpartners",
                [triple(iri(&id, "id"), sdo::NAME, "label")],
            ),
        ]);
        let err = etl.run().unwrap_err();
        assert!(matches!(err, EtlError::MissingBinding { ref key, .. } if key == "label"));
        assert_eq!(
            err.step(),
            Some("triple(id:{id}, <https://schema.org/name>, {label})")
        );
    }

    #[test]
    fn malformed_json_is_unreadable() {
        let (mut etl, _) = etl();
        etl.use_steps([from_json(Source::string("{ not json"))]);
        let err = etl.run().unwrap_err();
        assert!(matches!(err, EtlError::SourceUnreadable { .. }));
        assert_eq!(err.step(), Some("from_json(<inline>)"));
    }

    #[test]
    fn check_rejects_empty_path_segments() {
        let (mut etl, _) = etl();
        etl.use_steps([for_each("data..items", [])]);
        assert!(matches!(etl.check(), Err(EtlError::InvalidPath { .. })));
    }

    #[test]
    fn check_rejects_literal_subject() {
        let (mut etl, _) = etl();
        etl.use_steps([triple("label", A, sdo::PERSON)]);
        assert!(matches!(etl.check(), Err(EtlError::InvalidTerm { .. })));
    }

    #[test]
    fn check_rejects_literal_predicate() {
        let (mut etl, id) = etl();
        etl.use_steps([for_each("items", [triple(iri(&id, "id"), "label", "label")])]);
        let err = etl.check().unwrap_err();
        assert!(matches!(err, EtlError::InvalidTerm { .. }));
        assert_eq!(err.step(), Some("triple(id:{id}, {label}, {label})"));
    }

    #[test]
    fn conflicting_prefix_is_rejected() {
        let (mut etl, _) = etl();
        let err = etl
            .declare_prefix("id", "https://example.org/other/")
            .unwrap_err();
        assert!(matches!(err, EtlError::Prefix(_)));
    }

    #[test]
    fn check_rejects_unreachable_binding_names() {
        for key in ["a.b", "a[0]", "0", "$this", "", " a"] {
            let (mut etl, _) = etl();
            etl.use_steps([add(key, str("x"))]);
            assert!(
                matches!(etl.check(), Err(EtlError::InvalidPath { .. })),
                "{key:?}"
            );
        }
        let (mut etl, _) = etl();
        etl.use_steps([add("position", "$index")]);
        assert!(etl.check().is_ok());
    }

    fn scratch() -> (tempfile::TempDir, Etl) {
        let dir = tempfile::tempdir().unwrap();
        let config = EtlConfig::default()
            .inherit_env(false)
            .with_base_dir(dir.path());
        (dir, Etl::with_config(config))
    }

    #[test]
    fn mapping_vocabulary_is_bound_from_the_first_step() {
        let (dir, mut etl) = scratch();
        etl.use_steps([
            from_json(Source::string(r#"{ "email": "info@acme.be" }"#)),
            triple(SOURCE.term("record"), A, sdo::PERSON),
            to_rdf(Destination::file("before.ttl")),
            direct_mapping(DirectMapping::default()),
            to_rdf(Destination::file("after.ttl")),
        ]);
        etl.run().unwrap();

        let before = std::fs::read_to_string(dir.path().join("before.ttl")).unwrap();
        let after = std::fs::read_to_string(dir.path().join("after.ttl")).unwrap();
        assert!(before.contains("source:record\n"), "{before}");
        assert!(after.starts_with(&before[..before.find("\n\n").unwrap()]), "{after}");
    }

    #[test]
    fn conflicting_mapping_vocabulary_fails_before_any_output() {
        let (dir, mut etl) = scratch();
        etl.declare_prefix("source", "https://example.org/other/").unwrap();
        etl.use_steps([
            to_rdf(Destination::file("early.ttl")),
            direct_mapping(DirectMapping::default()),
        ]);
        assert!(matches!(etl.check(), Err(EtlError::Prefix(_))));
        assert!(matches!(etl.run(), Err(EtlError::Prefix(_))));
        assert!(!dir.path().join("early.ttl").exists());
    }
}
