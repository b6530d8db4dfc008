//! ucfedit: section-aware signal toggling for Xilinx UCF pin-constraint files.
//!
//! A constraint file is parsed into sections (inferred from header comments) and signals (from
//! `NET "<name>"` declarations). Callers choose which signals to disable, and the file is written
//! back with those declarations commented out and every other byte untouched.

pub mod config;
pub mod destination;
pub mod error;
pub mod formats;
pub mod lines;
pub mod listing;
pub mod model;
pub mod parser;
pub mod plan;
pub mod prefs;
pub mod section;
pub mod selection;
pub mod session;
pub mod toggle;

pub use error::{Error, Result};
