//! The session is the single owner of the open document and the user's choices about it.
//!
//! Opening a file replaces the previous document wholesale and resets the selection to all
//! enabled. Saving validates the target first, computes the complete output in memory, and only
//! then writes, so a failed write never disturbs the document held here.

use crate::destination::{self, SaveMode};
use crate::error::{Error, Result};
use crate::lines::{self, SourceLine};
use crate::model::Document;
use crate::plan::TogglePlan;
use crate::selection::Selection;
use crate::toggle::ToggleEngine;
use std::path::{Path, PathBuf};

/// Open document, selection and save defaults for one editing session.
pub struct Session {
    /// The parsed document, once a file has been opened.
    pub document: Option<Document>,
    /// Enabled state per signal of the open document.
    pub selection: Selection,
    /// Directory used by [`SaveMode::Named`]; defaults to the opened file's folder.
    pub project_dir: Option<PathBuf>,
    /// File stem used by [`SaveMode::Named`]; defaults to the project directory's name.
    pub project_name: Option<String>,
    /// Status feedback from the last open or save.
    pub message: Option<String>,
    /// Project name used when neither an explicit name nor a directory name is available.
    pub fallback_name: String,
    engine: ToggleEngine,
}

impl Session {
    #[must_use]
    /// A session with nothing open.
    pub fn new(engine: ToggleEngine, fallback_name: impl Into<String>) -> Self {
        Self {
            document: None,
            selection: Selection::default(),
            project_dir: None,
            project_name: None,
            message: None,
            fallback_name: fallback_name.into(),
            engine,
        }
    }

    /// Parses `path`, replacing any previously open document.
    ///
    /// The project directory becomes the file's folder; the project name is taken from that
    /// folder only if no name was set yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the file cannot be read. The previous document is kept in that
    /// case.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let document = Document::open(path)?;

        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        let has_name = self
            .project_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());
        if !has_name {
            self.project_name = dir
                .canonicalize()
                .ok()
                .and_then(|absolute| destination::default_project_name(&absolute))
                .or_else(|| destination::default_project_name(&dir));
        }
        self.project_dir = Some(dir);

        self.selection = document.default_selection();
        self.message = Some(format!(
            "NET signals found: {}",
            document.signal_index().len()
        ));
        self.document = Some(document);
        Ok(())
    }

    #[must_use]
    /// Named save mode built from the session's project directory and name.
    pub fn named_mode(&self) -> SaveMode {
        SaveMode::Named {
            project_dir: self.project_dir.clone().unwrap_or_default(),
            project_name: self.project_name.clone(),
        }
    }

    /// Resolves where `mode` would write.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDocument`] if nothing is open, or [`Error::InvalidDestination`] if the
    /// mode cannot be resolved.
    pub fn destination(&self, mode: &SaveMode) -> Result<PathBuf> {
        let document = self.document.as_ref().ok_or(Error::NoDocument)?;
        destination::resolve(mode, document.source(), &self.fallback_name)
    }

    /// Output lines for the current selection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDocument`] if nothing is open.
    pub fn output_lines(&self) -> Result<Vec<SourceLine>> {
        let document = self.document.as_ref().ok_or(Error::NoDocument)?;
        Ok(document.toggled(&self.engine, &self.selection.disabled()))
    }

    /// Writes the current selection to the destination of `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDocument`] or [`Error::InvalidDestination`] before any file is touched,
    /// and [`Error::Write`] if the destination cannot be written.
    pub fn save(&mut self, mode: &SaveMode) -> Result<PathBuf> {
        let target = self.destination(mode)?;
        let output = self.output_lines()?;

        lines::write(&target, &output)?;

        log::info!(
            "saved {} with {} of {} signals enabled",
            target.display(),
            self.selection.enabled_count(),
            self.selection.len()
        );
        self.message = Some(format!("Saved: {}", target.display()));
        Ok(target)
    }

    #[must_use]
    /// Captures the current selection as a serialisable plan.
    pub fn plan(&self) -> TogglePlan {
        TogglePlan::from_selection(&self.selection)
    }

    /// Restores the selection from a previously captured plan.
    pub fn load_plan(&mut self, plan: &TogglePlan) {
        plan.restore(&mut self.selection);
    }
}

#[cfg(test)]
#[path = "tests/session.rs"]
mod tests;
