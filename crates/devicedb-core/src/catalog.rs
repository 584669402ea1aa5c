// crates/devicedb-core/src/catalog.rs
use crate::common::CatalogStats;
use crate::error::Result;
use crate::loader::{
    self, base_url_sources, default_sources, DefaultFetcher, Fetch, SourceLocation,
    DEFAULT_HTTP_TIMEOUT, TOO_MANY_FIELDS_THRESHOLD,
};
use crate::model::{Brand, BrandTree, Dataset, Device};
use crate::traits::DeviceSearch;
use once_cell::sync::OnceCell;
use std::fmt;
use std::time::Duration;
use tracing::debug;

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// Where to find the dataset and how to read it.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    /// Candidate sources, tried in order.
    pub sources: Vec<SourceLocation>,
    /// Timeout for HTTP sources.
    pub http_timeout: Duration,
    /// See [`TOO_MANY_FIELDS_THRESHOLD`].
    pub too_many_fields_threshold: usize,
}

impl Default for CatalogConfig {
    /// The bundled dataset, then `database/`, `src/database/` and `data/`
    /// under the working directory.
    fn default() -> Self {
        Self {
            sources: default_sources(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            too_many_fields_threshold: TOO_MANY_FIELDS_THRESHOLD,
        }
    }
}

impl CatalogConfig {
    /// `{base_url}/database/models.csv`, then `{base_url}/src/database/models.csv`.
    pub fn for_base_url(base_url: &str) -> Self {
        Self::with_sources(base_url_sources(base_url))
    }

    /// Exactly the given candidates, in order.
    pub fn with_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SourceLocation>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Appends a candidate after the existing ones.
    pub fn source(mut self, source: impl Into<SourceLocation>) -> Self {
        self.sources.push(source.into());
        self
    }

    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn too_many_fields_threshold(mut self, threshold: usize) -> Self {
        self.too_many_fields_threshold = threshold;
        self
    }
}

// -----------------------------------------------------------------------------
// CATALOG
// -----------------------------------------------------------------------------

/// The device catalog: a lazily loaded [`Dataset`] plus its views.
///
/// The dataset is fetched and parsed on first use and kept until
/// [`reset`](Self::reset); the brand listing is cached the same way.
/// Concurrent first callers wait for a single load instead of each
/// fetching. A failed load is not cached, so the next call tries again.
pub struct DeviceCatalog {
    config: CatalogConfig,
    fetcher: Box<dyn Fetch>,
    dataset: OnceCell<Dataset>,
    brands: OnceCell<Vec<Brand>>,
}

impl Default for DeviceCatalog {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

impl fmt::Debug for DeviceCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceCatalog")
            .field("config", &self.config)
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}

impl DeviceCatalog {
    /// Catalog reading files and URLs with the [`DefaultFetcher`].
    pub fn new(config: CatalogConfig) -> Self {
        let fetcher = DefaultFetcher::new(config.http_timeout);
        Self::with_fetcher(config, fetcher)
    }

    /// Catalog reading its sources through `fetcher`.
    pub fn with_fetcher(config: CatalogConfig, fetcher: impl Fetch + 'static) -> Self {
        Self {
            config,
            fetcher: Box::new(fetcher),
            dataset: OnceCell::new(),
            brands: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    /// Loads the dataset on first call and returns the cached one afterwards.
    ///
    /// # Errors
    ///
    /// [`CatalogError::SourceUnreachable`](crate::CatalogError::SourceUnreachable)
    /// when no candidate could be fetched,
    /// [`CatalogError::EmptyDataset`](crate::CatalogError::EmptyDataset) when
    /// the fetched CSV has no data rows.
    pub fn load(&self) -> Result<&Dataset> {
        if let Some(dataset) = self.dataset.get() {
            debug!("device dataset served from cache");
            return Ok(dataset);
        }
        self.dataset.get_or_try_init(|| {
            loader::load_from_sources(
                &self.config.sources,
                self.fetcher.as_ref(),
                self.config.too_many_fields_threshold,
            )
        })
    }

    /// Brand listing, computed once per loaded dataset.
    pub fn list_brands(&self) -> Result<&[Brand]> {
        let dataset = self.load()?;
        Ok(self.brands.get_or_init(|| dataset.brands()).as_slice())
    }

    /// See [`DeviceSearch::search`].
    pub fn search(&self, query: &str) -> Result<Vec<Device>> {
        Ok(self.load()?.search(query))
    }

    /// See [`DeviceSearch::brand_tree`]. `Ok(None)` for an unknown brand.
    pub fn brand_tree(&self, brand_id: &str) -> Result<Option<BrandTree>> {
        Ok(self.load()?.brand_tree(brand_id))
    }

    pub fn stats(&self) -> Result<CatalogStats> {
        Ok(self.load()?.stats())
    }

    /// Drops the cached dataset and brand listing; the next call reloads.
    pub fn reset(&mut self) {
        self.dataset.take();
        self.brands.take();
    }
}
