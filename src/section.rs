//! Section representation for constraint files.
//!
//! A section is not part of the constraint language. It is inferred from the comment lines that
//! board vendors use as headers (`# Switches`, `## LEDs`), and groups every signal first declared
//! beneath such a comment.

/// Title of the section that is current before any comment line is seen.
pub const DEFAULT_SECTION: &str = "No section";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Comment-delimited grouping of signal declarations.
pub struct Section {
    /// Comment text with markers and surrounding whitespace removed.
    pub title: String,
    /// Signals first declared while this section was current, in declaration order.
    pub signals: Vec<String>,
}

impl Section {
    #[must_use]
    /// An empty section with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            signals: Vec::new(),
        }
    }

    #[must_use]
    /// Whether this is the implicit section preceding every comment.
    pub fn is_default(&self) -> bool {
        self.title == DEFAULT_SECTION
    }
}
