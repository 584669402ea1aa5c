#![allow(dead_code)]

use devicedb_core::{Fetch, FetchError, SourceLocation};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const HEADER: &str = "model,dtype,brand,brand_title,code,code_alias,model_name,ver_name";

pub fn bundled_csv_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("models.csv")
}

pub fn bundled_csv() -> String {
    std::fs::read_to_string(bundled_csv_path()).expect("bundled dataset")
}

/// Serves canned bodies by source and counts every fetch attempt.
#[derive(Clone, Default)]
pub struct CountingFetcher {
    bodies: HashMap<SourceLocation, String>,
    calls: Arc<AtomicUsize>,
}

impl CountingFetcher {
    pub fn serving(source: impl Into<SourceLocation>, body: impl Into<String>) -> Self {
        Self::default().with(source, body)
    }

    pub fn with(mut self, source: impl Into<SourceLocation>, body: impl Into<String>) -> Self {
        self.bodies.insert(source.into(), body.into());
        self
    }

    /// Handle that keeps counting after the fetcher moves into a catalog.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Fetch for CountingFetcher {
    fn fetch(&self, source: &SourceLocation) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bodies
            .get(source)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                code: 404,
                reason: "Not Found".into(),
            })
    }
}

pub fn calls(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
