use super::{decode_into, encode_all, CatalogStore, LoadOutcome, LoadWarning};
use crate::catalog::Catalog;
use crate::codec::LineError;
use crate::error::{DevcatError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Reads a catalog file. Never fails: problems end up in the warnings.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> LoadOutcome {
    let path = path.as_ref();
    let mut outcome = LoadOutcome::default();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot open catalog");
            outcome.warnings.push(LoadWarning::CannotOpen {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
            return outcome;
        }
    };

    for (i, chunk) in BufReader::new(file).split(b'\n').enumerate() {
        let line_number = i + 1;
        let bytes = match chunk {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(line_number, error = %e, "read failed");
                outcome.warnings.push(LoadWarning::CannotRead {
                    line_number,
                    reason: e.to_string(),
                });
                break;
            }
        };
        let text = std::str::from_utf8(&bytes)
            .map(|text| if line_number == 1 { strip_bom(text) } else { text })
            .map_err(|_| LineError::InvalidUtf8);
        decode_into(&mut outcome, line_number, text);
    }

    tracing::info!(
        path = %path.display(),
        devices = outcome.catalog.len(),
        skipped = outcome.warnings.len(),
        "catalog loaded"
    );
    outcome
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Writes one line per device, replacing the file.
///
/// Every device is encoded before the file is touched, so an unencodable
/// device leaves any existing file as it was.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let path = path.as_ref();
    let lines = encode_all(catalog)?;

    let file = File::create(path).map_err(DevcatError::Io)?;
    let mut writer = BufWriter::new(file);
    for line in &lines {
        writeln!(writer, "{}", line).map_err(DevcatError::Io)?;
    }
    writer.flush().map_err(DevcatError::Io)?;

    tracing::info!(path = %path.display(), devices = lines.len(), "catalog saved");
    Ok(())
}

pub struct FileStore {
    source: PathBuf,
    target: PathBuf,
}

impl FileStore {
    /// Loads from and saves to the same file.
    pub fn new(path: PathBuf) -> Self {
        Self {
            source: path.clone(),
            target: path,
        }
    }

    pub fn with_target(mut self, target: PathBuf) -> Self {
        self.target = target;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target(&self) -> &Path {
        &self.target
    }
}

impl CatalogStore for FileStore {
    fn load(&self) -> LoadOutcome {
        load_catalog(&self.source)
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        save_catalog(&self.target, catalog)
    }

    fn describe(&self) -> String {
        self.target.display().to_string()
    }
}
