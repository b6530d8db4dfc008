//! The listing renders the document's sections and signals for a person or a script.
//!
//! Filtering matches a case-insensitive query against each signal's name, location and section,
//! keeping section order and dropping sections left with nothing to show.

use crate::model::{Document, Signal};
use crate::selection::Selection;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug)]
/// A section together with the signals that survived filtering.
pub struct SectionView<'d> {
    /// Section title.
    pub title: &'d str,
    /// Matching signals in section order.
    pub signals: Vec<&'d Signal>,
}

#[derive(Serialize, Debug)]
/// Machine-readable listing.
pub struct Listing {
    /// Sections with at least one listed signal.
    pub sections: Vec<ListedSection>,
}

#[derive(Serialize, Debug)]
/// One section of a [`Listing`].
pub struct ListedSection {
    /// Section title.
    pub title: String,
    /// Listed signals.
    pub signals: Vec<ListedSignal>,
}

#[derive(Serialize, Debug)]
/// One signal of a [`ListedSection`].
pub struct ListedSignal {
    /// Signal name.
    pub name: String,
    /// Pin location, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Whether the signal stays active on save.
    pub enabled: bool,
    /// Zero-based line positions of its declarations.
    pub lines: Vec<usize>,
}

#[must_use]
/// Sections and signals matching `query`; an empty query matches everything.
pub fn filter<'d>(document: &'d Document, query: &str) -> Vec<SectionView<'d>> {
    let query = query.trim().to_lowercase();

    document
        .sections()
        .iter()
        .filter_map(|section| {
            let signals: Vec<&Signal> = section
                .signals
                .iter()
                .filter_map(|name| document.signal(name))
                .filter(|signal| {
                    if query.is_empty() {
                        return true;
                    }
                    let location = signal.location.as_deref().unwrap_or_default();
                    let haystack = format!("{} {location} {}", signal.name, section.title);
                    haystack.to_lowercase().contains(&query)
                })
                .collect();

            (!signals.is_empty()).then_some(SectionView {
                title: &section.title,
                signals,
            })
        })
        .collect()
}

#[must_use]
/// Plain-text listing with checkboxes and a closing status line.
pub fn render(views: &[SectionView], selection: &Selection, total: usize) -> String {
    let mut out = String::new();
    let mut shown = 0;

    for view in views {
        let _ = writeln!(out, "{}", view.title);
        for signal in &view.signals {
            let mark = if selection.is_enabled(&signal.name) {
                'x'
            } else {
                ' '
            };
            let _ = write!(out, "  [{mark}] {}", signal.name);
            if let Some(location) = &signal.location {
                let _ = write!(out, "  (LOC={location})");
            }
            out.push('\n');
            shown += 1;
        }
    }

    let _ = writeln!(out, "NET signals: {total} | shown: {shown}");
    out
}

#[must_use]
/// Serialisable form of a filtered listing.
pub fn to_listing(views: &[SectionView], selection: &Selection) -> Listing {
    Listing {
        sections: views
            .iter()
            .map(|view| ListedSection {
                title: view.title.to_string(),
                signals: view
                    .signals
                    .iter()
                    .map(|signal| ListedSignal {
                        name: signal.name.clone(),
                        location: signal.location.clone(),
                        enabled: selection.is_enabled(&signal.name),
                        lines: signal.positions.clone(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "tests/listing.rs"]
mod tests;
