//! Single forward pass from a line store to a constraint document.
//!
//! Comment lines with title text switch the current section (reusing a section whose title was
//! already seen). Declaration lines register their signal under the current section the first
//! time the signal appears and only add a position afterwards. Everything else is skipped, so
//! parsing cannot fail on malformed content.

use crate::formats::Format;
use crate::lines::LineStore;
use crate::model::{Document, SignalIndex};
use crate::section::{Section, DEFAULT_SECTION};
use std::collections::HashMap;
use std::path::PathBuf;

/// Builds the section and signal model for `lines`.
pub fn parse<F: Format>(lines: LineStore, format: &F, source: Option<PathBuf>) -> Document {
    let mut sections = vec![Section::new(DEFAULT_SECTION)];
    let mut slots: HashMap<String, usize> = HashMap::from([(DEFAULT_SECTION.to_string(), 0)]);
    let mut current = 0;
    let mut signals = SignalIndex::default();

    for line in lines.lines() {
        let text = line.content();

        if format.is_comment(text) {
            if let Some(title) = format.section_title(text) {
                current = *slots.entry(title.to_string()).or_insert_with(|| {
                    sections.push(Section::new(title));
                    sections.len() - 1
                });
                log::debug!("line {}: section {title:?}", line.position);
            }
            continue;
        }

        let Some(name) = format.declared_signal(text) else {
            continue;
        };

        let section = &mut sections[current];
        if signals.record(name, line.position, &section.title) {
            section.signals.push(name.to_string());
        }
        if let Some(code) = format.location(text) {
            signals.assign_location(name, code);
        }
        log::debug!("line {}: signal {name:?} in {:?}", line.position, section.title);
    }

    Document::new(source, lines, sections, signals)
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;
