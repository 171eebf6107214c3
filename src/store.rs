// 💾 Flat-file store - progression_data.txt
// One line per entry, fully overwritten on every save

use crate::session::{format_entry, Session};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Default output file, created in the working directory
pub const DEFAULT_DATA_FILE: &str = "progression_data.txt";

/// Non-fatal file failures; the reporter prints them and moves on
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No progression data found in file.")]
    NotFound(PathBuf),

    #[error("Error reading {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Overwrite `path` with every entry in the session.
///
/// The file is created or truncated, written through a buffer, flushed and
/// closed before returning.
pub fn save_session(session: &Session, path: &Path) -> Result<(), StoreError> {
    let write_all = || -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for (record, outcome) in session.entries() {
            writeln!(writer, "{}", format_entry(record, *outcome))?;
        }
        writer.flush()
    };

    write_all().map_err(|source| {
        debug!(path = %path.display(), error = %source, "failed to save session");
        StoreError::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!(path = %path.display(), entries = session.len(), "saved session");
    Ok(())
}

/// Read the saved file back, one trimmed line per entry.
pub fn load_lines(path: &Path) -> Result<Vec<String>, StoreError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound(path.to_path_buf())
        } else {
            StoreError::ReadFailed {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}

// ============================================================================
// TESTS
// ============================================================================
