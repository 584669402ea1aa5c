// crates/devicedb-core/src/loader/source.rs
use crate::error::FetchError;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;
#[cfg(feature = "fetch")]
use once_cell::sync::OnceCell;

/// Default timeout for HTTP sources.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// A place the dataset may be read from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SourceLocation {
    Path(PathBuf),
    Url(String),
}

impl SourceLocation {
    /// `http://` and `https://` strings become URLs, anything else a path.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            Self::Url(s.to_string())
        } else {
            Self::Path(PathBuf::from(s))
        }
    }
}

impl From<&str> for SourceLocation {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<PathBuf> for SourceLocation {
    fn from(p: PathBuf) -> Self {
        Self::Path(p)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(p) => write!(f, "{}", p.display()),
            Self::Url(u) => f.write_str(u),
        }
    }
}

/// Turns a [`SourceLocation`] into CSV text.
///
/// The loader calls this once per candidate until one succeeds. Implement
/// it to serve the dataset from somewhere the [`DefaultFetcher`] cannot
/// reach, or to observe fetches in tests.
pub trait Fetch: Send + Sync {
    fn fetch(&self, source: &SourceLocation) -> Result<String, FetchError>;
}

/// Reads local files and, with the `fetch` feature, HTTP(S) URLs.
///
/// Files ending in `.gz` are gunzipped when the `compact` feature is on.
/// Any non-2xx HTTP status is a failure.
#[derive(Debug)]
pub struct DefaultFetcher {
    #[cfg(feature = "fetch")]
    timeout: Duration,
    #[cfg(feature = "fetch")]
    client: OnceCell<reqwest::blocking::Client>,
}

impl Default for DefaultFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_HTTP_TIMEOUT)
    }
}

impl DefaultFetcher {
    pub fn new(timeout: Duration) -> Self {
        #[cfg(not(feature = "fetch"))]
        let _ = timeout;

        Self {
            #[cfg(feature = "fetch")]
            timeout,
            #[cfg(feature = "fetch")]
            client: OnceCell::new(),
        }
    }

    fn read_file(&self, path: &Path) -> Result<String, FetchError> {
        let mut stream = open_stream(path)?;
        let mut text = String::new();
        stream.read_to_string(&mut text)?;
        Ok(text)
    }

    #[cfg(feature = "fetch")]
    fn get_url(&self, url: &str) -> Result<String, FetchError> {
        let client = self
            .client
            .get_or_try_init(|| {
                reqwest::blocking::Client::builder()
                    .timeout(self.timeout)
                    .build()
            })
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let response = client
            .get(url)
            .send()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response.text().map_err(|e| FetchError::Http(e.to_string()))
    }

    #[cfg(not(feature = "fetch"))]
    fn get_url(&self, url: &str) -> Result<String, FetchError> {
        Err(FetchError::Unsupported(format!(
            "{url} (built without the 'fetch' feature)"
        )))
    }
}

impl Fetch for DefaultFetcher {
    fn fetch(&self, source: &SourceLocation) -> Result<String, FetchError> {
        match source {
            SourceLocation::Path(path) => self.read_file(path),
            SourceLocation::Url(url) => self.get_url(url),
        }
    }
}

/// Opens a file, buffers it, and wraps `.gz` files in a Gzip decoder.
/// Returns a generic Reader so the caller doesn't care about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>, FetchError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if path.extension().is_some_and(|ext| ext == "gz") {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}
