//! Pipe-delimited record parsing shared by the flat-file formats.

use crate::types::price::PriceError;

/// Separator between fields of a flat-file record.
pub const FIELD_SEPARATOR: char = '|';

/// Errors that can occur when parsing one flat-file record.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The line did not split into the expected number of fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Number of fields the format requires.
        expected: usize,
        /// Number of fields actually present.
        found: usize,
    },
    /// A price field could not be parsed.
    #[error("bad price: {0}")]
    Price(#[from] PriceError),
    /// A boolean flag field was neither `1`/`0` nor `true`/`false`.
    #[error("bad flag {0:?}")]
    Flag(String),
}

/// Split a record into exactly `N` fields.
///
/// Surrounding whitespace on the line is ignored; fields themselves are kept
/// literally.
///
/// # Errors
///
/// Returns `RecordError::FieldCount` if the line has a different number of
/// fields.
pub fn split_fields<const N: usize>(line: &str) -> Result<[&str; N], RecordError> {
    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
    let found = fields.len();
    fields
        .try_into()
        .map_err(|_| RecordError::FieldCount { expected: N, found })
}

/// Parse a `1`/`0` or `true`/`false` flag.
///
/// # Errors
///
/// Returns `RecordError::Flag` for any other value.
pub fn parse_flag(value: &str) -> Result<bool, RecordError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(RecordError::Flag(value.to_owned())),
    }
}
