//! Serializers for a fact set.
//!
//! Two formats are supported:
//! - **Turtle** ([`turtle`]): compact, prefixed output for human review
//! - **N-Triples** ([`ntriples`]): one fact per line, for bulk loading and diffs

pub mod ntriples;
pub mod turtle;

use std::path::Path;

use crate::model::Triple;
use crate::prefix::PrefixTable;

/// Output syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Turtle 1.1.
    #[default]
    Turtle,
    /// N-Triples.
    NTriples,
}

impl Format {
    /// Infers the format from a file extension; unknown extensions are Turtle.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("nt") => Format::NTriples,
            _ => Format::Turtle,
        }
    }

    /// Renders `triples` in this format.
    #[must_use]
    pub fn render(self, triples: &[Triple], prefixes: &PrefixTable) -> String {
        match self {
            Format::Turtle => turtle::to_turtle(triples, prefixes),
            Format::NTriples => ntriples::to_ntriples(triples),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("out/output.nt")), Format::NTriples);
        assert_eq!(Format::from_path(Path::new("out/output.ttl")), Format::Turtle);
        assert_eq!(Format::from_path(Path::new("out/output")), Format::Turtle);
    }
}
