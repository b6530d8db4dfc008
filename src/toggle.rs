//! The toggle engine comments out every declaration of the disabled signals.
//!
//! Disabling is one-way: a line that is already a comment is left alone, and enabled signals are
//! never touched, even when their lines are currently commented out. The output always has the
//! same number of lines as the input, in the same order.

use crate::formats::ucf::UcfFormat;
use crate::formats::{CommentMarker, Format};
use crate::lines::SourceLine;
use crate::model::SignalIndex;
use std::collections::HashSet;

#[derive(Clone, Debug)]
/// Rewrites declaration lines of disabled signals as comments.
pub struct ToggleEngine<F = UcfFormat> {
    format: F,
    marker: CommentMarker,
}

impl ToggleEngine {
    #[must_use]
    /// Engine for `.ucf` files writing `marker` in front of disabled lines.
    pub fn new(marker: CommentMarker) -> Self {
        Self::with_format(UcfFormat, marker)
    }
}

impl Default for ToggleEngine {
    fn default() -> Self {
        Self::new(CommentMarker::default())
    }
}

impl<F: Format> ToggleEngine<F> {
    #[must_use]
    /// Engine for an arbitrary format.
    pub fn with_format(format: F, marker: CommentMarker) -> Self {
        Self { format, marker }
    }

    #[must_use]
    /// The marker written when a line is disabled.
    pub fn marker(&self) -> CommentMarker {
        self.marker
    }

    #[must_use]
    /// Returns a copy of `lines` with every position of a disabled signal commented out.
    ///
    /// Names in `disabled` that are not in `index` are ignored.
    pub fn apply(
        &self,
        lines: &[SourceLine],
        index: &SignalIndex,
        disabled: &HashSet<String>,
    ) -> Vec<SourceLine> {
        let mut output = lines.to_vec();

        for name in disabled {
            let Some(signal) = index.get(name) else {
                log::warn!("cannot disable unknown signal {name:?}");
                continue;
            };

            for &position in &signal.positions {
                let Some(line) = output.get_mut(position) else {
                    continue;
                };
                if self.format.is_comment(&line.text) {
                    continue;
                }
                *line = line.with_text(format!("{} {}", self.marker.as_str(), line.text));
                log::debug!("line {position}: disabled {name:?}");
            }
        }

        output
    }
}

#[cfg(test)]
#[path = "tests/toggle.rs"]
mod tests;
