//! # Storage Layer
//!
//! This module defines how a [`Catalog`] is read from and written to its
//! line-oriented text form. The [`CatalogStore`] trait lets the API work with
//! different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Loads from a source file and saves to a target file (they may be the same)
//!   - Handles are opened and closed within a single load or save call
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keeps the encoded lines in a `Vec<String>`
//!   - Runs the same decode loop as the file store
//!
//! ## Partial Failure
//!
//! Loading never fails as a whole. Lines that cannot be decoded are skipped and
//! reported as [`LoadWarning`]s next to whatever was loaded. Saving is all or
//! nothing at the encoding step: if any device cannot be encoded, nothing is
//! written.

use crate::catalog::Catalog;
use crate::codec::{decode_line, encode_line, LineError};
use crate::error::{DevcatError, Result};
use std::fmt;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub use fs::{load_catalog, save_catalog};

/// A diagnostic produced while loading.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadWarning {
    /// The source could not be opened; the catalog is empty.
    CannotOpen { path: PathBuf, reason: String },
    /// Reading stopped part way through; earlier lines were kept.
    CannotRead { line_number: usize, reason: String },
    /// A line was skipped.
    Skipped {
        line_number: usize,
        error: LineError,
    },
}

impl LoadWarning {
    pub fn is_parse_error(&self) -> bool {
        matches!(self, LoadWarning::Skipped { error, .. } if error.is_parse_error())
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::CannotOpen { path, reason } => {
                write!(f, "Cannot open file {}: {}", path.display(), reason)
            }
            LoadWarning::CannotRead {
                line_number,
                reason,
            } => write!(f, "Stopped reading at line {}: {}", line_number, reason),
            LoadWarning::Skipped { line_number, error } => {
                write!(f, "Skipped line {}: {}", line_number, error)
            }
        }
    }
}

/// A loaded catalog plus the diagnostics gathered on the way.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub catalog: Catalog,
    pub warnings: Vec<LoadWarning>,
}

impl LoadOutcome {
    pub fn parse_errors(&self) -> usize {
        self.warnings.iter().filter(|w| w.is_parse_error()).count()
    }
}

/// Abstract interface for catalog persistence.
pub trait CatalogStore {
    /// Load the catalog, skipping bad lines
    fn load(&self) -> LoadOutcome;

    /// Persist the whole catalog, replacing previous contents
    fn save(&mut self, catalog: &Catalog) -> Result<()>;

    /// Human readable location, used in messages
    fn describe(&self) -> String;
}

/// Decodes one numbered line into `outcome`.
///
/// Blank lines are ignored. Line numbers are 1-based.
pub(crate) fn decode_into(
    outcome: &mut LoadOutcome,
    line_number: usize,
    line: std::result::Result<&str, LineError>,
) {
    let decoded = line.and_then(|text| {
        if text.trim().is_empty() {
            Ok(None)
        } else {
            decode_line(text).map(Some)
        }
    });
    match decoded {
        Ok(Some(device)) => {
            tracing::debug!(line_number, brand = device.brand(), "decoded device");
            outcome.catalog.append(device);
        }
        Ok(None) => {}
        Err(error) => {
            tracing::warn!(line_number, %error, "skipping line");
            outcome
                .warnings
                .push(LoadWarning::Skipped { line_number, error });
        }
    }
}

/// Encodes every device, failing on the first one that cannot be written.
pub(crate) fn encode_all(catalog: &Catalog) -> Result<Vec<String>> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, device)| {
            encode_line(device).map_err(|source| DevcatError::Unencodable { index, source })
        })
        .collect()
}
