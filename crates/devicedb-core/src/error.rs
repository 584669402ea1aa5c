// crates/devicedb-core/src/error.rs
use std::fmt;
use thiserror::Error;

/// Failures that reach the caller of [`DeviceCatalog::load`](crate::DeviceCatalog::load).
///
/// Everything else the loader runs into (an unreachable candidate, a row
/// with the wrong number of fields, a missing column) is logged and
/// recovered from locally.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Every candidate source failed.
    #[error(
        "no device dataset could be loaded, tried: {}; last error: {last_error}",
        attempted.join(", ")
    )]
    SourceUnreachable {
        attempted: Vec<String>,
        last_error: String,
    },

    /// The source was read and parsed but produced no data rows.
    #[error("device dataset parsed without any data rows")]
    EmptyDataset,

    /// The header row itself could not be read.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Why a single candidate source could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP {code} {reason}")]
    Status { code: u16, reason: String },

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("unsupported source: {0}")]
    Unsupported(String),
}

/// A row the parser reported but did not fail on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct MalformedRow {
    /// 1-based line in the source text.
    pub line: u64,
    pub kind: MalformedRowKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedRowKind {
    TooManyFields { expected: usize, found: usize },
    TooFewFields { expected: usize, found: usize },
    Unreadable(String),
}

impl MalformedRowKind {
    pub fn is_too_many_fields(&self) -> bool {
        matches!(self, Self::TooManyFields { .. })
    }
}

impl fmt::Display for MalformedRowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyFields { expected, found } => {
                write!(f, "too many fields: expected {expected}, found {found}")
            }
            Self::TooFewFields { expected, found } => {
                write!(f, "too few fields: expected {expected}, found {found}")
            }
            Self::Unreadable(msg) => write!(f, "unreadable record: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_unreachable_lists_every_attempt() {
        let err = CatalogError::SourceUnreachable {
            attempted: vec!["/a/models.csv".into(), "https://x/models.csv".into()],
            last_error: "HTTP 404 Not Found".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/a/models.csv, https://x/models.csv"));
        assert!(msg.ends_with("HTTP 404 Not Found"));
    }

    #[test]
    fn malformed_row_display() {
        let row = MalformedRow {
            line: 7,
            kind: MalformedRowKind::TooManyFields {
                expected: 8,
                found: 9,
            },
        };
        assert_eq!(row.to_string(), "line 7: too many fields: expected 8, found 9");
        assert!(row.kind.is_too_many_fields());
    }
}
