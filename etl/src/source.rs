//! Input and output locators.

use std::fmt;
use std::path::{Path, PathBuf};

use meemoo_rdf::Format;

use crate::config::EtlConfig;
use crate::error::{EtlError, Result};

/// Where a document or schema comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    /// A file, resolved against the configured base directory when relative.
    File(PathBuf),
    /// Inline content.
    Inline(String),
}

impl Source {
    /// A file source.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Source::File(path.into())
    }

    /// An inline source.
    #[must_use]
    pub fn string(content: impl Into<String>) -> Self {
        Source::Inline(content.into())
    }

    /// Reads the full content.
    pub(crate) fn read(&self, config: &EtlConfig) -> Result<String> {
        match self {
            Source::File(path) => {
                let path = config.resolve(path);
                std::fs::read_to_string(&path)
                    .map_err(|e| EtlError::unreadable(path.display().to_string(), e))
            }
            Source::Inline(content) => Ok(content.clone()),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Inline(_) => f.write_str("<inline>"),
        }
    }
}

/// Where serialized output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    path: PathBuf,
    format: Option<Format>,
}

impl Destination {
    /// A file destination. The format follows the extension (`.nt` for
    /// N-Triples, Turtle otherwise) unless set with [`Destination::with_format`].
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
        }
    }

    /// Overrides the output format.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// The path as given.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The effective output format.
    #[must_use]
    pub fn format(&self) -> Format {
        self.format.unwrap_or_else(|| Format::from_path(&self.path))
    }

    /// Writes `content`, creating parent directories as needed. Returns the
    /// resolved path.
    pub(crate) fn write(&self, config: &EtlConfig, content: &str) -> Result<PathBuf> {
        let path = config.resolve(&self.path);
        let io = |source| EtlError::Output {
            step: String::new(),
            locator: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
        std::fs::write(&path, content).map_err(io)?;
        Ok(path)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_unreadable() {
        let err = Source::file("/nonexistent/org.json")
            .read(&EtlConfig::default())
            .unwrap_err();
        assert!(matches!(err, EtlError::SourceUnreadable { .. }));
    }

    #[test]
    fn relative_paths_use_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("org.json"), "{}").unwrap();
        let config = EtlConfig::default().with_base_dir(dir.path());
        assert_eq!(Source::file("org.json").read(&config).unwrap(), "{}");
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let config = EtlConfig::default().with_base_dir(dir.path());
        let written = Destination::file("output/out.ttl")
            .write(&config, "x")
            .unwrap();
        assert_eq!(written, dir.path().join("output/out.ttl"));
        assert_eq!(std::fs::read_to_string(written).unwrap(), "x");
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(Destination::file("a.nt").format(), Format::NTriples);
        assert_eq!(Destination::file("a.ttl").format(), Format::Turtle);
        assert_eq!(
            Destination::file("a.ttl").with_format(Format::NTriples).format(),
            Format::NTriples
        );
    }
}
