//! Test utilities for Folio
//!
//! Helpers shared by the unit tests and the integration suite:
//! - [`init_test_logging`] for opt-in tracing output
//! - [`MemorySource`], an in-memory [`ContentSource`] that counts requests
//! - [`fixtures`], sample content documents and a helper that writes them to
//!   a directory
//!
//! # Example
//!
//! ```rust,no_run
//! use folio_cli::content::ContentLoader;
//! use folio_cli::test_utils::{MemorySource, fixtures};
//!
//! # async fn example() {
//! let source = MemorySource::new();
//! source.insert("articles.json", fixtures::ARTICLES_JSON);
//!
//! let loader = ContentLoader::new(source);
//! loader.get_articles().await;
//! loader.get_articles().await;
//! assert_eq!(loader.source().request_count("articles.json"), 1);
//! # }
//! ```

pub mod fixtures;

use std::collections::HashMap;
use std::sync::{Mutex, Once, PoisonError};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::content::ContentSource;
use crate::core::FolioError;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. With `level` set, that level is used;
/// otherwise logging is enabled only when `RUST_LOG` is set.
///
/// ```bash
/// RUST_LOG=folio_cli=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

#[derive(Debug, Clone)]
enum Response {
    Body(Vec<u8>),
    Status(String),
}

/// In-memory content source.
///
/// Resources are registered with [`insert`](Self::insert); unknown names are
/// reported as unavailable, like a 404. Every request is counted so tests can
/// assert on caching.
#[derive(Debug, Default)]
pub struct MemorySource {
    responses: Mutex<HashMap<String, Response>>,
    requests: Mutex<HashMap<String, usize>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `name`.
    pub fn insert(&self, name: &str, body: &str) {
        self.lock_responses()
            .insert(name.to_string(), Response::Body(body.as_bytes().to_vec()));
    }

    /// Answer requests for `name` with a non-success `status`,
    /// e.g. `"500 Internal Server Error"`.
    pub fn fail_with_status(&self, name: &str, status: &str) {
        self.lock_responses()
            .insert(name.to_string(), Response::Status(status.to_string()));
    }

    /// How many times `name` was requested.
    pub fn request_count(&self, name: &str) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .copied()
            .unwrap_or(0)
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, HashMap<String, Response>> {
        self.responses.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ContentSource for MemorySource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, FolioError> {
        *self
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(name.to_string())
            .or_default() += 1;

        match self.lock_responses().get(name).cloned() {
            Some(Response::Body(bytes)) => Ok(bytes),
            Some(Response::Status(status)) => Err(FolioError::ContentUnavailable {
                name: name.to_string(),
                reason: status,
            }),
            None => Err(FolioError::ContentUnavailable {
                name: name.to_string(),
                reason: "404 Not Found".to_string(),
            }),
        }
    }

    fn locate(&self, name: &str) -> String {
        format!("memory:{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_source_counts_requests() {
        let source = MemorySource::new();
        source.insert("a.json", "{}");

        assert_eq!(source.fetch("a.json").await.unwrap(), b"{}");
        assert!(source.fetch("b.json").await.is_err());
        assert_eq!(source.request_count("a.json"), 1);
        assert_eq!(source.request_count("b.json"), 1);
        assert_eq!(source.request_count("c.json"), 0);
    }
}
