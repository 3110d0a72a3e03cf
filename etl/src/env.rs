//! Environment snapshot taken at the start of a run.

use std::collections::BTreeMap;

use crate::config::EtlConfig;
use crate::error::{EtlError, Result};

/// Read-only view of environment variables for one run.
///
/// Empty values are treated as unset.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Takes a snapshot: the process environment (when `inherit_env` is set)
    /// overlaid with the configuration's `env` map.
    #[must_use]
    pub fn snapshot(config: &EtlConfig) -> Self {
        let mut vars = BTreeMap::new();
        if config.inherit_env {
            vars.extend(
                std::env::vars_os()
                    .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
            );
        }
        for (name, value) in &config.env {
            vars.insert(name.to_uppercase(), value.clone());
        }
        Self { vars }
    }

    /// Returns the value of `name`, or `None` if it is unset or empty.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Checks that every name in `names` is set.
    ///
    /// # Errors
    ///
    /// Returns [`EtlError::PreconditionFailure`] listing the unset names.
    pub fn require<S: AsRef<str>>(&self, names: &[S]) -> Result<()> {
        let missing: Vec<&str> = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| self.get(name).is_none())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(EtlError::precondition(format!(
                "required environment variable(s) not set: {}",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn isolated() -> EtlConfig {
        EtlConfig::default().inherit_env(false)
    }

    #[test]
    fn overlay_keys_are_upper_cased() {
        let env = Environment::snapshot(&isolated().with_env("test", "x"));
        assert_eq!(env.get("TEST"), Some("x"));
        assert_eq!(env.get("test"), None);
    }

    #[test]
    fn empty_value_is_unset() {
        let env = Environment::snapshot(&isolated().with_env("TEST", ""));
        assert_eq!(env.get("TEST"), None);
        assert!(env.require(&["TEST"]).is_err());
    }

    #[test]
    fn require_lists_every_missing_name() {
        let env = Environment::snapshot(&isolated().with_env("TEST", "1"));
        let err = env.require(&["SOMEVAR", "TEST", "OTHER"]).unwrap_err();
        assert!(err.to_string().contains("SOMEVAR, OTHER"));
    }
}
