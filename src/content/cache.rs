//! Session cache for parsed content resources.
//!
//! Holds every successfully parsed resource for as long as the owning
//! [`ContentLoader`](super::ContentLoader) lives, so that each resource name
//! reaches the content source at most once per session.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Parsed resources keyed by resource name, with hit/miss statistics.
///
/// Values are shared behind [`Arc`] because several renderers may hold the
/// same snapshot at once. Entries are never updated in place: the first
/// successful parse wins for the rest of the session.
#[derive(Debug, Default)]
pub(crate) struct ContentCache {
    /// Map from resource name to parsed document
    entries: HashMap<String, Arc<Value>>,
    /// Cache statistics
    hits: usize,
    misses: usize,
}

impl ContentCache {
    /// Create a new empty cache
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Get a cached document if available, counting the lookup.
    pub(crate) fn get(&mut self, name: &str) -> Option<Arc<Value>> {
        if let Some(value) = self.entries.get(name) {
            self.hits += 1;
            Some(Arc::clone(value))
        } else {
            self.misses += 1;
            None
        }
    }

    /// Store a parsed document, keeping an existing entry if one raced in first.
    pub(crate) fn insert(&mut self, name: &str, value: Arc<Value>) -> Arc<Value> {
        Arc::clone(self.entries.entry(name.to_string()).or_insert(value))
    }

    /// Whether a resource is cached, without touching the statistics.
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Drop all cached documents and reset statistics
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Get cache statistics as `(hits, misses)`
    pub(crate) fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }

    /// Calculate hit rate as a percentage
    pub(crate) fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hit_and_miss_counting() {
        let mut cache = ContentCache::new();
        assert!(cache.get("articles.json").is_none());

        cache.insert("articles.json", Arc::new(json!([])));
        assert!(cache.get("articles.json").is_some());
        assert!(cache.get("articles.json").is_some());

        assert_eq!(cache.stats(), (2, 1));
        assert!((cache.hit_rate() - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_first_insert_wins() {
        let mut cache = ContentCache::new();
        cache.insert("profile.json", Arc::new(json!({"bio": ["first"]})));
        let kept = cache.insert("profile.json", Arc::new(json!({"bio": ["second"]})));
        assert_eq!(kept["bio"][0], "first");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut cache = ContentCache::new();
        cache.insert("projects.json", Arc::new(json!([])));
        cache.get("projects.json");
        cache.clear();

        assert!(!cache.contains("projects.json"));
        assert_eq!(cache.stats(), (0, 0));
        assert_eq!(cache.hit_rate(), 0.0);
    }
}
