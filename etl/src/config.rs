//! Run configuration, loadable from JSON.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// What a validation step does when the fact set has violations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Record violations on the run report and continue.
    #[default]
    FailOpen,
    /// Abort the run with [`EtlError::ValidationFailed`](crate::EtlError::ValidationFailed).
    FailClosed,
}

/// Pipeline configuration.
///
/// ```
/// use meemoo_etl::{EtlConfig, ValidationPolicy};
///
/// let config = EtlConfig::from_json_str(r#"{ "validation": "fail_closed", "env": { "test": "x" } }"#)?;
/// assert_eq!(config.validation, ValidationPolicy::FailClosed);
/// assert!(config.inherit_env);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EtlConfig {
    /// Validation policy; fail-open unless configured otherwise.
    pub validation: ValidationPolicy,
    /// Directory that relative source and destination paths resolve against.
    pub base_dir: Option<PathBuf>,
    /// Variables overlaid on the environment snapshot. Keys are upper-cased.
    pub env: BTreeMap<String, String>,
    /// Whether the snapshot starts from the process environment.
    pub inherit_env: bool,
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            validation: ValidationPolicy::default(),
            base_dir: None,
            env: BTreeMap::new(),
            inherit_env: true,
        }
    }
}

impl EtlConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or has fields of the
    /// wrong type.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse ETL configuration")
    }

    /// Loads a configuration file. A relative `base_dir` is taken relative to
    /// the file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config = Self::from_json_str(&text)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        if let (Some(base), Some(parent)) = (&config.base_dir, path.parent()) {
            if base.is_relative() {
                config.base_dir = Some(parent.join(base));
            }
        }
        Ok(config)
    }

    /// Sets the validation policy.
    #[must_use]
    pub fn with_validation(mut self, policy: ValidationPolicy) -> Self {
        self.validation = policy;
        self
    }

    /// Sets the base directory for relative locators.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Adds an environment overlay entry.
    #[must_use]
    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Controls whether the process environment is inherited.
    #[must_use]
    pub fn inherit_env(mut self, inherit: bool) -> Self {
        self.inherit_env = inherit;
        self
    }

    /// Resolves a locator against `base_dir`.
    pub(crate) fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EtlConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EtlConfig::default());
        assert_eq!(config.validation, ValidationPolicy::FailOpen);
        assert!(config.inherit_env);
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = EtlConfig::from_json_str(r#"{ "validation": "sometimes" }"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn load_resolves_relative_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("etl.json");
        std::fs::write(&path, r#"{ "base_dir": "input", "inherit_env": false }"#).unwrap();

        let config = EtlConfig::load(&path).unwrap();
        assert_eq!(config.base_dir, Some(dir.path().join("input")));
        assert!(!config.inherit_env);
        assert_eq!(
            config.resolve(Path::new("org.json")),
            dir.path().join("input").join("org.json")
        );
    }

    #[test]
    fn load_names_missing_file() {
        let err = EtlConfig::load(Path::new("/nonexistent/etl.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/etl.json"));
    }
}
