//! Where a save goes: a project-named file, the opened file, or an explicit path.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Extension given to project-named outputs.
pub const UCF_EXTENSION: &str = "ucf";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The three save modes, without their parameters.
pub enum SaveModeKind {
    /// `<project_dir>/<project_name>.ucf`
    Named,
    /// The file that was opened.
    Overwrite,
    /// A path chosen by the caller.
    Custom,
}

impl SaveModeKind {
    #[must_use]
    /// Parses `named`, `overwrite` or `custom`.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "named" => Some(Self::Named),
            "overwrite" => Some(Self::Overwrite),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A save mode with everything needed to resolve its destination.
pub enum SaveMode {
    /// Write `<project_dir>/<project_name>.ucf`.
    Named {
        /// Existing directory to write into.
        project_dir: PathBuf,
        /// File stem; defaults to the directory name when blank.
        project_name: Option<String>,
    },
    /// Overwrite the opened file.
    Overwrite,
    /// Write to this exact path.
    Custom(PathBuf),
}

impl SaveMode {
    #[must_use]
    /// Which of the three modes this is.
    pub fn kind(&self) -> SaveModeKind {
        match self {
            Self::Named { .. } => SaveModeKind::Named,
            Self::Overwrite => SaveModeKind::Overwrite,
            Self::Custom(_) => SaveModeKind::Custom,
        }
    }
}

#[must_use]
/// Final component of a directory, used as the default project name.
pub fn default_project_name(dir: &Path) -> Option<String> {
    dir.file_name()
        .map(|name| name.to_string_lossy().trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Resolves the destination of a save without touching the filesystem beyond a directory check.
///
/// # Errors
///
/// Returns [`Error::InvalidDestination`] when the named-mode directory is unset or missing, when
/// there is no opened file to overwrite, or when a custom path is blank.
pub fn resolve(mode: &SaveMode, opened: Option<&Path>, fallback_name: &str) -> Result<PathBuf> {
    match mode {
        SaveMode::Named {
            project_dir,
            project_name,
        } => {
            if project_dir.as_os_str().is_empty() {
                return Err(Error::InvalidDestination(
                    "project directory is not set".to_string(),
                ));
            }
            if !project_dir.is_dir() {
                return Err(Error::InvalidDestination(format!(
                    "{} is not a directory",
                    project_dir.display()
                )));
            }
            let name = project_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .or_else(|| default_project_name(project_dir))
                .unwrap_or_else(|| fallback_name.to_string());
            Ok(project_dir.join(format!("{name}.{UCF_EXTENSION}")))
        }
        SaveMode::Overwrite => opened.map(Path::to_path_buf).ok_or_else(|| {
            Error::InvalidDestination("there is no opened file to overwrite".to_string())
        }),
        SaveMode::Custom(path) => {
            if path.as_os_str().is_empty() {
                Err(Error::InvalidDestination("output path is empty".to_string()))
            } else {
                Ok(path.clone())
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/destination.rs"]
mod tests;
