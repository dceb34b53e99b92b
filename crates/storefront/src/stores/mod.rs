//! In-memory reference data loaded from flat files at startup.
//!
//! Both stores are built once, wrapped in the shared [`AppState`], and never
//! mutated afterwards.
//!
//! [`AppState`]: crate::state::AppState

pub mod catalog;
pub mod customers;

use std::path::{Path, PathBuf};

use thiserror::Error;
use ubermelon_core::RecordError;

pub use catalog::Catalog;
pub use customers::CustomerStore;

/// Label used for records that were not read from a file.
pub const IN_MEMORY: &str = "<memory>";

/// Errors from loading or querying a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the backing file is malformed.
    #[error("{origin}:{line}: {source}")]
    Parse {
        /// File (or [`IN_MEMORY`]) the record came from.
        origin: String,
        /// 1-based line number.
        line: usize,
        #[source]
        source: RecordError,
    },

    /// No record has the requested key.
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },
}

impl StoreError {
    /// Whether this is a lookup miss rather than a load failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Read a whole store file.
fn read_file(path: &Path) -> Result<String, StoreError> {
    std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse every non-blank line of `text` with `parse`, tagging failures with
/// their origin and line number.
fn parse_lines<T, F>(text: &str, origin: &str, parse: F) -> Result<Vec<T>, StoreError>
where
    F: Fn(&str) -> Result<T, RecordError>,
{
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            parse(line).map_err(|source| StoreError::Parse {
                origin: origin.to_string(),
                line: idx + 1,
                source,
            })
        })
        .collect()
}
