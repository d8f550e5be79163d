//! Cache-backed loader of named JSON resources.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error};

use super::cache::ContentCache;
use super::source::ContentSource;
use crate::constants::{
    ARTICLES_RESOURCE, EXPERIENCE_RESOURCE, PROFILE_RESOURCE, PROJECTS_RESOURCE,
    WOODWORKING_RESOURCE,
};
use crate::core::FolioError;
use crate::models::{Article, Experience, Profile, Project};

/// Fetches JSON resources from a [`ContentSource`] and keeps every parsed
/// document for the rest of the session.
///
/// Failures never escape: a missing resource, a non-success response or
/// malformed JSON is logged and reported as `None`, which callers treat as
/// "content unavailable".
///
/// The loader is shared by reference between renderers. The cache lock is
/// never held across an `.await`, so concurrent renderers cannot interleave
/// two writes for the same name.
///
/// # Examples
///
/// ```rust,no_run
/// use folio_cli::content::{ContentLoader, FileSource};
///
/// # async fn example() {
/// let loader = ContentLoader::new(FileSource::new("content/"));
///
/// if let Some(articles) = loader.get_articles().await {
///     println!("{} articles", articles.len());
/// }
///
/// // Second call is served from the cache.
/// let _ = loader.get_articles().await;
/// assert_eq!(loader.stats(), (1, 1));
/// # }
/// ```
#[derive(Debug)]
pub struct ContentLoader<S> {
    source: S,
    cache: Mutex<ContentCache>,
}

impl<S: ContentSource> ContentLoader<S> {
    /// Create a loader with an empty cache.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: Mutex::new(ContentCache::new()),
        }
    }

    /// The underlying content source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch `name`, serving it from the cache when possible.
    ///
    /// Returns `None` when the resource is unavailable or not valid JSON;
    /// the cause is logged at error level.
    pub async fn fetch(&self, name: &str) -> Option<Arc<Value>> {
        if let Some(cached) = self.lock_cache().get(name) {
            debug!("Cache hit for {}", name);
            return Some(cached);
        }

        debug!("Cache miss for {}, fetching {}", name, self.source.locate(name));
        match self.load(name).await {
            Ok(value) => Some(self.lock_cache().insert(name, Arc::new(value))),
            Err(e) => {
                error!("Error loading {}: {}", name, e);
                None
            }
        }
    }

    /// Fetch `name` and deserialize it into `T`.
    ///
    /// A document that parses as JSON but does not have the shape of `T` is
    /// logged and yields `None`; the raw document stays cached.
    pub async fn fetch_as<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let value = self.fetch(name).await?;
        match T::deserialize(value.as_ref()) {
            Ok(typed) => Some(typed),
            Err(e) => {
                let err = FolioError::MalformedContent {
                    name: name.to_string(),
                    reason: e.to_string(),
                };
                error!("Error loading {}: {}", name, err);
                None
            }
        }
    }

    /// Like [`fetch`](Self::fetch) but reports why a resource is unavailable.
    ///
    /// Successful results are cached exactly as `fetch` caches them. Used by
    /// diagnostics such as `folio check`; renderers go through `fetch`.
    pub async fn try_fetch(&self, name: &str) -> Result<Arc<Value>, FolioError> {
        if let Some(cached) = self.lock_cache().get(name) {
            return Ok(cached);
        }
        let value = self.load(name).await?;
        Ok(self.lock_cache().insert(name, Arc::new(value)))
    }

    /// Load `profile.json`.
    pub async fn get_profile(&self) -> Option<Profile> {
        self.fetch_as(PROFILE_RESOURCE).await
    }

    /// Load `articles.json`.
    pub async fn get_articles(&self) -> Option<Vec<Article>> {
        self.fetch_as(ARTICLES_RESOURCE).await
    }

    /// Load `experience.json`.
    pub async fn get_experience(&self) -> Option<Vec<Experience>> {
        self.fetch_as(EXPERIENCE_RESOURCE).await
    }

    /// Load `projects.json`.
    pub async fn get_projects(&self) -> Option<Vec<Project>> {
        self.fetch_as(PROJECTS_RESOURCE).await
    }

    /// Load `woodworking.json` as a raw document.
    pub async fn get_woodworking(&self) -> Option<Arc<Value>> {
        self.fetch(WOODWORKING_RESOURCE).await
    }

    /// Whether `name` is already cached.
    pub fn is_cached(&self, name: &str) -> bool {
        self.lock_cache().contains(name)
    }

    /// Cache statistics as `(hits, misses)`.
    pub fn stats(&self) -> (usize, usize) {
        self.lock_cache().stats()
    }

    /// Cache hit rate as a percentage.
    pub fn hit_rate(&self) -> f64 {
        self.lock_cache().hit_rate()
    }

    /// Forget every cached document, as a page reload would.
    pub fn clear(&self) {
        self.lock_cache().clear();
    }

    async fn load(&self, name: &str) -> Result<Value, FolioError> {
        let bytes = self.source.fetch(name).await?;
        serde_json::from_slice(&bytes).map_err(|e| FolioError::MalformedContent {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    fn lock_cache(&self) -> MutexGuard<'_, ContentCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
