//! Which signals stay active when the document is saved.
//!
//! A selection starts with every signal enabled. Presets and bulk operations mirror the quick
//! choices a board user makes most often, such as keeping only switches and LEDs so that the
//! toolchain stops warning about unused VGA or PS/2 pins.

use std::collections::{BTreeMap, HashSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Canned selections.
pub enum Preset {
    /// Keep switches and LEDs only.
    SwLed,
    /// Keep switches, LEDs and buttons only.
    SwLedBtn,
    /// Keep everything.
    All,
    /// Disable everything.
    None,
}

impl Preset {
    #[must_use]
    /// Name prefixes kept by a prefix preset; `None` for the bulk presets.
    pub fn prefixes(self) -> Option<&'static [&'static str]> {
        match self {
            Self::SwLed => Some(&["SW<", "LED<"]),
            Self::SwLedBtn => Some(&["SW<", "LED<", "BTN<"]),
            Self::All | Self::None => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Enabled state of every signal in a document.
pub struct Selection {
    states: BTreeMap<String, bool>,
}

impl Selection {
    #[must_use]
    /// A selection with every named signal enabled.
    pub fn all_enabled<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            states: names
                .into_iter()
                .map(|name| (name.to_string(), true))
                .collect(),
        }
    }

    #[must_use]
    /// Whether a signal is enabled. Unknown names are reported as disabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.states.get(name).copied().unwrap_or(false)
    }

    /// Sets the state of a known signal, returning `false` if the name is not a signal.
    pub fn set(&mut self, name: &str, enabled: bool) -> bool {
        match self.states.get_mut(name) {
            Some(state) => {
                *state = enabled;
                true
            }
            None => {
                log::warn!("ignoring unknown signal {name:?}");
                false
            }
        }
    }

    /// Enables every signal.
    pub fn select_all(&mut self) {
        self.states.values_mut().for_each(|state| *state = true);
    }

    /// Disables every signal.
    pub fn select_none(&mut self) {
        self.states.values_mut().for_each(|state| *state = false);
    }

    /// Flips every signal.
    pub fn invert(&mut self) {
        self.states.values_mut().for_each(|state| *state = !*state);
    }

    /// Enables exactly the signals whose names start with one of `prefixes`.
    pub fn keep_prefixes(&mut self, prefixes: &[&str]) {
        for (name, state) in &mut self.states {
            *state = prefixes.iter().any(|prefix| name.starts_with(prefix));
        }
    }

    /// Applies a canned selection.
    pub fn apply_preset(&mut self, preset: Preset) {
        match preset {
            Preset::All => self.select_all(),
            Preset::None => self.select_none(),
            Preset::SwLed | Preset::SwLedBtn => {
                self.keep_prefixes(preset.prefixes().unwrap_or_default());
            }
        }
    }

    #[must_use]
    /// Names of all disabled signals.
    pub fn disabled(&self) -> HashSet<String> {
        self.states
            .iter()
            .filter(|(_, enabled)| !**enabled)
            .map(|(name, _)| name.clone())
            .collect()
    }

    #[must_use]
    /// Number of enabled signals.
    pub fn enabled_count(&self) -> usize {
        self.states.values().filter(|enabled| **enabled).count()
    }

    #[must_use]
    /// Number of signals tracked.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    /// Whether no signals are tracked.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/selection.rs"]
mod tests;
