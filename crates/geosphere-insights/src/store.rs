//! Insight Cache.
//!
//! [`InsightStore`] holds the most recently generated batch. It starts
//! empty, is filled on the first read or the first analysis, and is replaced
//! wholesale by every analysis. Batches are shared as immutable
//! [`Arc`] snapshots: readers clone the pointer under a read lock, writers
//! build the full batch first and only take the write lock to swap it in.

use std::ops::RangeInclusive;
use std::sync::Arc;

use chrono::Utc;
use geosphere_types::Insight;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::config::InsightConfig;
use crate::error::InsightError;
use crate::generator::{InsightContext, generate_insights};

/// An immutable generated batch.
pub type InsightBatch = Arc<Vec<Insight>>;

/// Process-wide holder of the current insight batch.
#[derive(Debug)]
pub struct InsightStore {
    /// Batch size bounds.
    count_range: RangeInclusive<usize>,
    /// Terrain the insights describe.
    context: InsightContext,
    /// Seedable source of randomness, shared by every generation.
    rng: Mutex<StdRng>,
    /// `None` until first populated.
    cache: RwLock<Option<InsightBatch>>,
}

impl InsightStore {
    /// Build an empty store from configuration.
    ///
    /// Seeds the RNG from `config.seed` when present, otherwise from OS
    /// entropy.
    pub fn new(config: &InsightConfig, context: InsightContext) -> Result<Self, InsightError> {
        config.validate()?;
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Ok(Self::with_rng(config.count_range(), context, rng))
    }

    /// Build an empty store around an explicit RNG.
    pub fn with_rng(
        count_range: RangeInclusive<usize>,
        context: InsightContext,
        rng: StdRng,
    ) -> Self {
        Self {
            count_range,
            context,
            rng: Mutex::new(rng),
            cache: RwLock::new(None),
        }
    }

    /// The configured batch size bounds.
    pub const fn count_range(&self) -> &RangeInclusive<usize> {
        &self.count_range
    }

    /// The current batch without populating an empty cache.
    pub async fn cached(&self) -> Option<InsightBatch> {
        self.cache.read().await.clone()
    }

    /// Return the current batch, generating one first if the cache is empty.
    ///
    /// Concurrent first reads generate exactly one batch: the check is
    /// repeated under the write lock.
    pub async fn list_insights(&self) -> InsightBatch {
        if let Some(batch) = self.cached().await {
            debug!(count = batch.len(), "insight cache hit");
            return batch;
        }

        let mut cache = self.cache.write().await;
        if let Some(batch) = cache.as_ref() {
            return Arc::clone(batch);
        }
        let batch = Arc::new(self.generate().await);
        *cache = Some(Arc::clone(&batch));
        info!(count = batch.len(), "insight cache populated");
        batch
    }

    /// Generate a new batch, replace the cache with it, and return it.
    pub async fn refresh_insights(&self) -> InsightBatch {
        let batch = Arc::new(self.generate().await);
        let previous = self.cache.write().await.replace(Arc::clone(&batch));
        info!(
            count = batch.len(),
            previous = previous.map_or(0, |old| old.len()),
            "insight cache replaced"
        );
        batch
    }

    async fn generate(&self) -> Vec<Insight> {
        let mut rng = self.rng.lock().await;
        generate_insights(
            &mut *rng,
            self.count_range.clone(),
            &self.context,
            Utc::now(),
        )
    }
}

#[cfg(test)]
mod tests {
    use geosphere_terrain::generate_terrain;

    use super::*;

    fn seeded_store(seed: u64) -> InsightStore {
        let config = InsightConfig::default();
        InsightStore::with_rng(
            config.count_range(),
            InsightContext::from_terrain(&generate_terrain()),
            StdRng::seed_from_u64(seed),
        )
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = seeded_store(1);
        assert!(store.cached().await.is_none());
    }

    #[tokio::test]
    async fn first_list_populates() {
        let store = seeded_store(1);
        let batch = store.list_insights().await;
        assert!(store.count_range().contains(&batch.len()));
        let cached = store.cached().await;
        assert!(cached.is_some_and(|c| Arc::ptr_eq(&c, &batch)));
    }

    #[tokio::test]
    async fn repeated_lists_return_same_batch() {
        let store = seeded_store(2);
        let first = store.list_insights().await;
        let second = store.list_insights().await;
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[tokio::test]
    async fn refresh_replaces_batch() {
        let store = seeded_store(3);
        let before = store.list_insights().await;
        let refreshed = store.refresh_insights().await;
        assert!(!Arc::ptr_eq(&before, &refreshed));
        assert_ne!(*before, *refreshed);

        let after = store.list_insights().await;
        assert!(Arc::ptr_eq(&after, &refreshed));
    }

    #[tokio::test]
    async fn refresh_on_empty_cache_populates() {
        let store = seeded_store(4);
        let refreshed = store.refresh_insights().await;
        let listed = store.list_insights().await;
        assert!(Arc::ptr_eq(&refreshed, &listed));
    }

    #[tokio::test]
    async fn concurrent_first_reads_share_one_batch() {
        let store = Arc::new(seeded_store(5));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.list_insights().await })
            })
            .collect();

        let mut batches = Vec::new();
        for handle in handles {
            if let Ok(batch) = handle.await {
                batches.push(batch);
            }
        }
        assert_eq!(batches.len(), 8);
        let first = batches.first().cloned();
        assert!(first.is_some_and(|f| batches.iter().all(|b| Arc::ptr_eq(&f, b))));
    }

    #[test]
    fn new_accepts_seeded_config() {
        let config = InsightConfig {
            seed: Some(42),
            ..InsightConfig::default()
        };
        let context = InsightContext::from_terrain(&generate_terrain());
        assert!(InsightStore::new(&config, context).is_ok());
    }

    #[test]
    fn new_rejects_bad_range() {
        let config = InsightConfig {
            min_count: 5,
            max_count: 2,
            seed: Some(1),
        };
        let context = InsightContext::from_terrain(&generate_terrain());
        assert!(InsightStore::new(&config, context).is_err());
    }
}
