//! The constraint model: signals, the sections that own them, and the lines they live on.
//!
//! A [`Document`] is built once per open file and only ever read afterwards. Saving derives a new
//! line sequence from it; the document itself never changes.

use crate::error::Result;
use crate::formats::ucf::UcfFormat;
use crate::lines::{LineStore, SourceLine};
use crate::parser;
use crate::section::Section;
use crate::selection::Selection;
use crate::toggle::ToggleEngine;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A constrained signal, keyed by its quoted name.
pub struct Signal {
    /// Name exactly as quoted in the declaration (e.g. `SW<0>`).
    pub name: String,
    /// Zero-based line positions of every declaration, in document order.
    pub positions: Vec<usize>,
    /// First pin location found for this signal.
    pub location: Option<String>,
    /// Title of the section that was current at the first declaration.
    pub section: String,
}

#[derive(Clone, Debug, Default)]
/// Unique signals in first-declaration order.
pub struct SignalIndex {
    signals: HashMap<String, Signal>,
    order: Vec<String>,
}

impl SignalIndex {
    /// Records a declaration, returning `true` when the signal was not seen before.
    pub(crate) fn record(&mut self, name: &str, position: usize, section: &str) -> bool {
        if let Some(signal) = self.signals.get_mut(name) {
            signal.positions.push(position);
            return false;
        }
        self.signals.insert(
            name.to_string(),
            Signal {
                name: name.to_string(),
                positions: vec![position],
                location: None,
                section: section.to_string(),
            },
        );
        self.order.push(name.to_string());
        true
    }

    /// Sets the location unless one was already recorded.
    pub(crate) fn assign_location(&mut self, name: &str, code: &str) {
        if let Some(signal) = self.signals.get_mut(name) {
            signal.location.get_or_insert_with(|| code.to_string());
        }
    }

    #[must_use]
    /// Looks up a signal by exact name.
    pub fn get(&self, name: &str) -> Option<&Signal> {
        self.signals.get(name)
    }

    #[must_use]
    /// Whether a signal with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.signals.contains_key(name)
    }

    /// Signals in first-declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Signal> {
        self.order.iter().filter_map(|name| self.signals.get(name))
    }

    /// Signal names in first-declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    #[must_use]
    /// Number of unique signals.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    /// Whether no signal was declared.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[derive(Clone, Debug)]
/// A parsed constraint file: its lines, sections and signal index.
pub struct Document {
    source: Option<PathBuf>,
    lines: LineStore,
    sections: Vec<Section>,
    signals: SignalIndex,
}

impl Document {
    pub(crate) fn new(
        source: Option<PathBuf>,
        lines: LineStore,
        sections: Vec<Section>,
        signals: SignalIndex,
    ) -> Self {
        Self {
            source,
            lines,
            sections,
            signals,
        }
    }

    /// Reads and parses the constraint file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Read`] if the file cannot be read.
    pub fn open(path: &Path) -> Result<Self> {
        let lines = LineStore::load(path)?;
        let document = parser::parse(lines, &UcfFormat, Some(path.to_path_buf()));
        log::info!(
            "parsed {}: {} signals in {} sections",
            path.display(),
            document.signals.len(),
            document.sections().len()
        );
        Ok(document)
    }

    #[must_use]
    /// Parses in-memory constraint text that has no backing file.
    pub fn parse_bytes(bytes: &[u8]) -> Self {
        parser::parse(LineStore::from_bytes(bytes), &UcfFormat, None)
    }

    #[must_use]
    /// Path the document was opened from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[must_use]
    /// The underlying line store.
    pub fn lines(&self) -> &LineStore {
        &self.lines
    }

    #[must_use]
    /// Sections in first-seen order.
    ///
    /// The default section leads only when something was declared before the first titled
    /// comment.
    pub fn sections(&self) -> &[Section] {
        let skip = self
            .sections
            .first()
            .is_some_and(|section| section.is_default() && section.signals.is_empty());
        &self.sections[usize::from(skip)..]
    }

    /// Section titles in first-seen order.
    pub fn section_titles(&self) -> impl Iterator<Item = &str> {
        self.sections().iter().map(|section| section.title.as_str())
    }

    #[must_use]
    /// Looks up a section by title.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }

    #[must_use]
    /// Signals first declared under the titled section; empty for unknown titles.
    pub fn signals_in(&self, title: &str) -> &[String] {
        self.section(title)
            .map(|section| section.signals.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    /// Looks up a signal by exact name.
    pub fn signal(&self, name: &str) -> Option<&Signal> {
        self.signals.get(name)
    }

    #[must_use]
    /// Recorded pin location of a signal.
    pub fn location(&self, name: &str) -> Option<&str> {
        self.signals.get(name)?.location.as_deref()
    }

    #[must_use]
    /// The full signal index.
    pub fn signal_index(&self) -> &SignalIndex {
        &self.signals
    }

    #[must_use]
    /// Every signal enabled, the state presented right after opening.
    pub fn default_selection(&self) -> Selection {
        Selection::all_enabled(self.signals.names())
    }

    #[must_use]
    /// Lines with every declaration of the `disabled` signals commented out.
    pub fn toggled(&self, engine: &ToggleEngine, disabled: &HashSet<String>) -> Vec<SourceLine> {
        engine.apply(self.lines.lines(), &self.signals, disabled)
    }
}

#[cfg(test)]
#[path = "tests/model.rs"]
mod tests;
