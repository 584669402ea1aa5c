// crates/devicedb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (fetching from the first reachable candidate,
//! decompression) and delegates to the CSV parser. Validation is minimal:
//! missing columns and malformed rows are logged, rows without `model` or
//! `brand` are dropped, and only an unreachable source or an empty parse
//! result fails the load.

use crate::error::{CatalogError, Result};
use crate::model::record::REQUIRED_COLUMNS;
use crate::model::Dataset;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

mod parse;
mod source;

pub use parse::{
    parse_csv, parse_with_fallback, FieldPolicy, ParsedCsv, TOO_MANY_FIELDS_THRESHOLD,
};
pub use source::{DefaultFetcher, Fetch, SourceLocation, DEFAULT_HTTP_TIMEOUT};

pub const DEFAULT_DATASET_FILENAME: &str = "models.csv";

/// Directory holding the dataset bundled with this crate.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Candidate locations in priority order: the bundled dataset first, then
/// the usual spots relative to the working directory.
pub fn default_sources() -> Vec<SourceLocation> {
    vec![
        SourceLocation::Path(default_data_dir().join(DEFAULT_DATASET_FILENAME)),
        SourceLocation::Path(Path::new("database").join(DEFAULT_DATASET_FILENAME)),
        SourceLocation::Path(Path::new("src/database").join(DEFAULT_DATASET_FILENAME)),
        SourceLocation::Path(Path::new("data").join(DEFAULT_DATASET_FILENAME)),
    ]
}

/// Candidate URLs under a web root: `/database/` first, then `/src/database/`.
pub fn base_url_sources(base_url: &str) -> Vec<SourceLocation> {
    let base = base_url.trim_end_matches('/');
    ["database", "src/database"]
        .iter()
        .map(|dir| SourceLocation::Url(format!("{base}/{dir}/{DEFAULT_DATASET_FILENAME}")))
        .collect()
}

/// Fetches from the first reachable source and builds the dataset.
pub fn load_from_sources(
    sources: &[SourceLocation],
    fetcher: &dyn Fetch,
    too_many_fields_threshold: usize,
) -> Result<Dataset> {
    let (source, text) = fetch_first(sources, fetcher)?;
    build_dataset(&text, source, too_many_fields_threshold)
}

impl Dataset {
    /// Builds a dataset from CSV text already in memory.
    pub fn from_csv_str(text: &str, source: SourceLocation) -> Result<Self> {
        build_dataset(text, source, TOO_MANY_FIELDS_THRESHOLD)
    }

    /// Reads a single CSV (or `.csv.gz`) file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let source = SourceLocation::Path(path.as_ref().to_path_buf());
        load_from_sources(
            std::slice::from_ref(&source),
            &DefaultFetcher::default(),
            TOO_MANY_FIELDS_THRESHOLD,
        )
    }
}

fn fetch_first(sources: &[SourceLocation], fetcher: &dyn Fetch) -> Result<(SourceLocation, String)> {
    let mut last_error = None;

    for source in sources {
        match fetcher.fetch(source) {
            Ok(text) => {
                info!(source = %source, "loaded device dataset");
                return Ok((source.clone(), text));
            }
            Err(e) => {
                warn!(source = %source, error = %e, "could not load device dataset");
                last_error = Some(e.to_string());
            }
        }
    }

    Err(CatalogError::SourceUnreachable {
        attempted: sources.iter().map(ToString::to_string).collect(),
        last_error: last_error.unwrap_or_else(|| "no candidate sources configured".to_string()),
    })
}

fn build_dataset(text: &str, source: SourceLocation, too_many_fields_threshold: usize) -> Result<Dataset> {
    let parsed = parse_with_fallback(text, too_many_fields_threshold)?;

    for row in &parsed.malformed {
        warn!(source = %source, "malformed CSV row, {row}");
    }

    let Some(first) = parsed.rows.first() else {
        return Err(CatalogError::EmptyDataset);
    };

    let missing_columns: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !first.has_field(col))
        .map(|col| col.to_string())
        .collect();
    if !missing_columns.is_empty() {
        warn!(source = %source, missing = ?missing_columns, "CSV is missing expected columns");
    }

    let total_rows = parsed.rows.len();
    let records: Vec<_> = parsed
        .rows
        .into_iter()
        .filter_map(|raw| raw.into_record())
        .collect();

    info!(
        total = total_rows,
        valid = records.len(),
        "device dataset parsed"
    );

    Ok(Dataset {
        records,
        source,
        total_rows,
        malformed: parsed.malformed,
        missing_columns,
    })
}
