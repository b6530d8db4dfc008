//! A toggle plan is a serialisable save request: the set of signals to disable.
//!
//! Plans decouple choosing signals from writing files, so a selection made once can be stored as
//! JSON and replayed against the same (or a refreshed) constraint file later.

use crate::lines::SourceLine;
use crate::model::Document;
use crate::selection::Selection;
use crate::toggle::ToggleEngine;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Signals to comment out when saving.
pub struct TogglePlan {
    /// Disabled signal names, sorted for stable output.
    #[serde(default)]
    pub disabled: BTreeSet<String>,
}

impl TogglePlan {
    #[must_use]
    /// Captures the disabled part of a selection.
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            disabled: selection.disabled().into_iter().collect(),
        }
    }

    #[must_use]
    /// The disabled set in the form the toggle engine consumes.
    pub fn disabled_set(&self) -> HashSet<String> {
        self.disabled.iter().cloned().collect()
    }

    /// Applies the plan to a selection, disabling its signals and enabling every other one.
    pub fn restore(&self, selection: &mut Selection) {
        selection.select_all();
        for name in &self.disabled {
            selection.set(name, false);
        }
    }

    #[must_use]
    /// Output lines for `document` under this plan.
    pub fn apply(&self, document: &Document, engine: &ToggleEngine) -> Vec<SourceLine> {
        document.toggled(engine, &self.disabled_set())
    }
}

#[cfg(test)]
#[path = "tests/plan.rs"]
mod tests;
