//! Client-side cache of the most recently fetched work list.
//!
//! Written only by the gallery loader (wholesale replacement), read by the
//! detail modal (lookup at click time) and the slideshow (snapshot at init).

use std::sync::Arc;

use parking_lot::RwLock;

use crate::types::Work;

#[derive(Debug, Default)]
struct StoreInner {
    works: Vec<Work>,
    /// Number of successful replacements so far
    generation: u64,
}

/// Shared handle to the work cache. Clones point at the same cache.
#[derive(Debug, Clone, Default)]
pub struct WorkStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl WorkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list. There is no merge and no per-entry update.
    pub fn replace(&self, works: Vec<Work>) {
        let mut inner = self.inner.write();
        inner.works = works;
        inner.generation += 1;
    }

    /// Whether a fetch has ever succeeded (even with an empty list)
    pub fn is_populated(&self) -> bool {
        self.inner.read().generation > 0
    }

    pub fn generation(&self) -> u64 {
        self.inner.read().generation
    }

    pub fn len(&self) -> usize {
        self.inner.read().works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().works.is_empty()
    }

    /// First work whose id equals `id` exactly
    pub fn find(&self, id: &str) -> Option<Work> {
        self.inner
            .read()
            .works
            .iter()
            .find(|w| w.id.as_deref() == Some(id))
            .cloned()
    }

    /// Copy of the current list
    pub fn snapshot(&self) -> Vec<Work> {
        self.inner.read().works.clone()
    }

    /// Scorecard URLs of the first `limit` works, skipping works without one
    pub fn leading_scorecard_urls(&self, limit: usize) -> Vec<String> {
        self.inner
            .read()
            .works
            .iter()
            .take(limit)
            .filter_map(|w| w.scorecard_url().map(str::to_string))
            .collect()
    }
}
