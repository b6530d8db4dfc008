//! Xilinx user constraint file (`.ucf`) syntax.
//!
//! Only `NET "<signal>" ...;` declarations and their `LOC = "<pin>"` assignments carry meaning.
//! Comments start with `#` or `//`. Everything else is inert text.

use crate::formats::Format;
use regex::Regex;
use std::sync::LazyLock;

static NET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)^\s*NET\s+"([^"]+)""#).unwrap());
static LOC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bLOC\s*=\s*"?([A-Z0-9]+)"?"#).unwrap());

/// Both markers are equivalent for detection.
const COMMENT_MARKERS: [&str; 2] = ["#", "//"];

#[derive(Clone, Copy, Debug, Default)]
/// Line syntax of `.ucf` pin-constraint files.
pub struct UcfFormat;

impl Format for UcfFormat {
    fn comment_markers(&self) -> &[&'static str] {
        &COMMENT_MARKERS
    }

    fn section_title<'l>(&self, line: &'l str) -> Option<&'l str> {
        if !self.is_comment(line) {
            return None;
        }
        let title = line.trim().trim_start_matches(['#', '/']).trim();
        (!title.is_empty()).then_some(title)
    }

    fn declared_signal<'l>(&self, line: &'l str) -> Option<&'l str> {
        NET_RE
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|name| name.as_str())
    }

    fn location<'l>(&self, line: &'l str) -> Option<&'l str> {
        LOC_RE
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|code| code.as_str())
    }
}

#[cfg(test)]
#[path = "../tests/ucf.rs"]
mod tests;
