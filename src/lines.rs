//! The line store holds a constraint file as an ordered sequence of raw lines.
//!
//! Each line keeps its own terminator so that serialising the store reproduces the original bytes.
//! Lines are never reordered, inserted or removed; the only way a line changes is by deriving a
//! new [`SourceLine`] value at the same position.
//!
//! One policy deviates from strict fidelity: when the final line of a file has no terminator, a
//! terminator in the detected [`LineEnding`] style is synthesised on load, so every file written
//! back out ends with a line break.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Line terminator convention detected for a whole document.
pub enum LineEnding {
    /// Unix-style `\n`.
    Lf,
    /// Windows-style `\r\n`.
    CrLf,
}

impl LineEnding {
    #[must_use]
    /// Any `\r\n` anywhere in the data makes the document CRLF.
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.windows(2).any(|pair| pair == b"\r\n") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    #[must_use]
    /// The terminator characters for this convention.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One line of the document, including its trailing terminator.
pub struct SourceLine {
    /// Zero-based position of the line in the document.
    pub position: usize,
    /// Raw line text with its terminator (if any).
    pub text: String,
}

impl SourceLine {
    #[must_use]
    /// Wraps raw text found at `position`.
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    #[must_use]
    /// Line text without its terminator.
    pub fn content(&self) -> &str {
        let len = self.text.len() - self.terminator().len();
        &self.text[..len]
    }

    #[must_use]
    /// The trailing terminator, or an empty string for an unterminated line.
    pub fn terminator(&self) -> &str {
        if self.text.ends_with("\r\n") {
            "\r\n"
        } else if self.text.ends_with('\n') {
            "\n"
        } else if self.text.ends_with('\r') {
            "\r"
        } else {
            ""
        }
    }

    #[must_use]
    /// Derives a replacement line at the same position.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self::new(self.position, text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// The whole document as raw lines plus its detected line-ending convention.
pub struct LineStore {
    lines: Vec<SourceLine>,
    ending: LineEnding,
}

impl LineStore {
    #[must_use]
    /// Decodes bytes (substituting undecodable sequences) and splits them into lines.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let ending = LineEnding::detect(bytes);
        let text = String::from_utf8_lossy(bytes);

        let mut lines: Vec<SourceLine> = split_keep_endings(&text)
            .into_iter()
            .enumerate()
            .map(|(position, raw)| SourceLine::new(position, raw))
            .collect();

        if let Some(last) = lines.last_mut() {
            if last.terminator().is_empty() {
                last.text.push_str(ending.as_str());
            }
        }

        Self { lines, ending }
    }

    /// Reads the file at `path` into a line store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the file cannot be read. Decoding never fails.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_bytes(&bytes);
        log::debug!(
            "loaded {} lines ({:?}) from {}",
            store.len(),
            store.ending,
            path.display()
        );
        Ok(store)
    }

    #[must_use]
    /// All lines in document order.
    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    #[must_use]
    /// Line-ending convention detected on load.
    pub fn ending(&self) -> LineEnding {
        self.ending
    }

    #[must_use]
    /// Number of lines in the document.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    /// Whether the document has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Splits on `\n`, `\r\n` and lone `\r`, keeping each terminator attached to its line.
fn split_keep_endings(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                pieces.push(&text[start..=i]);
                start = i + 1;
            }
            b'\r' => {
                let end = if bytes.get(i + 1) == Some(&b'\n') {
                    i + 2
                } else {
                    i + 1
                };
                pieces.push(&text[start..end]);
                start = end;
                i = end - 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < bytes.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

#[must_use]
/// Concatenates lines back into document text.
pub fn render(lines: &[SourceLine]) -> String {
    lines.iter().map(|line| line.text.as_str()).collect()
}

/// Writes `lines` to `path` as UTF-8, creating missing parent directories.
///
/// # Errors
///
/// Returns [`Error::Write`] if a directory cannot be created or the file cannot be written.
pub fn write(path: &Path, lines: &[SourceLine]) -> Result<()> {
    let to_write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(to_write_error)?;
        }
    }

    fs::write(path, render(lines)).map_err(to_write_error)?;
    log::debug!("wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}

#[cfg(test)]
#[path = "tests/lines.rs"]
mod tests;
