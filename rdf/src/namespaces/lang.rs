//! Language tags for language-tagged literals.

/// A BCP 47 language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language(pub &'static str);

impl Language {
    /// The tag as a string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

/// Dutch.
pub const NL: Language = Language("nl");
/// English.
pub const EN: Language = Language("en");
/// French.
pub const FR: Language = Language("fr");
/// German.
pub const DE: Language = Language("de");
