//! Format trait and the constraint syntax it abstracts over.
//!
//! A format knows how to recognise comment lines, pull a section title out of a comment, find the
//! signal a declaration line constrains and find that line's pin location. The parser and the
//! toggle engine only talk to a format through this trait.

pub mod ucf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
/// Comment prefix written in front of a line when its signal is disabled.
pub enum CommentMarker {
    #[default]
    /// `#`
    Hash,
    /// `//`
    Slashes,
}

impl CommentMarker {
    #[must_use]
    /// The marker characters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hash => "#",
            Self::Slashes => "//",
        }
    }

    #[must_use]
    /// Looks up a marker by its characters, returning `None` for anything unrecognised.
    pub fn parse(marker: &str) -> Option<Self> {
        match marker.trim() {
            "#" => Some(Self::Hash),
            "//" => Some(Self::Slashes),
            _ => None,
        }
    }
}

/// Line-level syntax of a constraint language.
pub trait Format {
    /// Prefixes that start a comment once leading whitespace is removed.
    fn comment_markers(&self) -> &[&'static str];

    /// Whether the line is a comment.
    fn is_comment(&self, line: &str) -> bool {
        let stripped = line.trim_start();
        self.comment_markers()
            .iter()
            .any(|marker| stripped.starts_with(marker))
    }

    /// Title text of a comment line, or `None` for non-comments and bare markers.
    fn section_title<'l>(&self, line: &'l str) -> Option<&'l str>;

    /// Name of the signal a declaration line constrains.
    fn declared_signal<'l>(&self, line: &'l str) -> Option<&'l str>;

    /// Pin location code assigned anywhere on the line.
    fn location<'l>(&self, line: &'l str) -> Option<&'l str>;
}
