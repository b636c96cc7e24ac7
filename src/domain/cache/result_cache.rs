use moka::future::Cache;
use serde::{Deserialize, Serialize};

/// Upper bound on the number of keys returned by [`ResultCache::stats`]
const STATS_SAMPLE_SIZE: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheStats {
    pub count: u64,
    pub sample_keys: Vec<String>,
}

/// Memoizes computed results by fingerprint.
///
/// Entries never expire. Without a capacity the cache grows without bound
/// until [`ResultCache::clear`] is called; with one, moka evicts the least
/// valuable entries. A disabled cache never stores anything.
pub struct ResultCache<V> {
    name: &'static str,
    inner: Option<Cache<String, V>>,
}

impl<V> ResultCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str, enabled: bool, max_entries: Option<u64>) -> Self {
        let inner = enabled.then(|| {
            let builder = Cache::builder().name(name);
            match max_entries {
                Some(capacity) => builder.max_capacity(capacity).build(),
                None => builder.build(),
            }
        });

        Self { name, inner }
    }

    pub fn disabled(name: &'static str) -> Self {
        Self::new(name, false, None)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    pub async fn get(&self, fingerprint: &str) -> Option<V> {
        let cache = self.inner.as_ref()?;
        let hit = cache.get(fingerprint).await;
        tracing::debug!(
            cache = self.name,
            fingerprint = fingerprint,
            hit = hit.is_some(),
            "Cache lookup"
        );
        hit
    }

    /// Store a value. Concurrent writers of the same fingerprint store equal
    /// values, so the last write winning is harmless.
    pub async fn put(&self, fingerprint: String, value: V) {
        if let Some(cache) = &self.inner {
            cache.insert(fingerprint, value).await;
        }
    }

    /// Drop every entry, returning how many there were
    pub async fn clear(&self) -> u64 {
        let Some(cache) = &self.inner else {
            return 0;
        };

        cache.run_pending_tasks().await;
        let cleared = cache.entry_count();
        cache.invalidate_all();
        cache.run_pending_tasks().await;

        tracing::info!(cache = self.name, cleared = cleared, "Cache cleared");
        cleared
    }

    pub async fn len(&self) -> u64 {
        match &self.inner {
            Some(cache) => {
                cache.run_pending_tasks().await;
                cache.entry_count()
            }
            None => 0,
        }
    }

    pub async fn stats(&self) -> CacheStats {
        let Some(cache) = &self.inner else {
            return CacheStats {
                count: 0,
                sample_keys: Vec::new(),
            };
        };

        cache.run_pending_tasks().await;
        let mut sample_keys: Vec<String> = cache
            .iter()
            .take(STATS_SAMPLE_SIZE)
            .map(|(key, _)| key.to_string())
            .collect();
        sample_keys.sort();

        CacheStats {
            count: cache.entry_count(),
            sample_keys,
        }
    }
}
