//! Geocode result cache.
//!
//! Route and hotspot searches for the same destination repeat often, so
//! successful geocodes are kept for a while. Failures are never cached.

use async_trait::async_trait;
use dashmap::DashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

use roadsafe_core::{GeoPoint, Geocoder, ProviderError};

pub trait CacheEntry {
    fn fetched_at(&self) -> Instant;
}

pub fn prune_cache<K, V>(cache: &DashMap<K, V>, max_entries: usize, max_age: Duration)
where
    K: Clone + Eq + Hash,
    V: CacheEntry,
{
    let now = Instant::now();
    let mut entries: Vec<(K, Instant)> = cache
        .iter()
        .map(|entry| (entry.key().clone(), entry.value().fetched_at()))
        .collect();

    for (key, fetched_at) in &entries {
        if now.duration_since(*fetched_at) > max_age {
            cache.remove(key);
        }
    }

    if cache.len() <= max_entries {
        return;
    }

    entries.sort_by_key(|(_, fetched_at)| *fetched_at);
    for (key, _) in entries {
        if cache.len() <= max_entries {
            break;
        }
        cache.remove(&key);
    }
}

#[derive(Debug, Clone)]
struct GeocodeCacheEntry {
    fetched_at: Instant,
    point: GeoPoint,
}

impl CacheEntry for GeocodeCacheEntry {
    fn fetched_at(&self) -> Instant {
        self.fetched_at
    }
}

/// Geocoder wrapper that remembers successful lookups.
pub struct CachedGeocoder {
    inner: Arc<dyn Geocoder>,
    entries: DashMap<String, GeocodeCacheEntry>,
    ttl: Duration,
    max_entries: usize,
}

impl CachedGeocoder {
    pub fn new(inner: Arc<dyn Geocoder>, ttl: Duration, max_entries: usize) -> Self {
        Self {
            inner,
            entries: DashMap::new(),
            ttl,
            max_entries,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn cache_key(address: &str) -> String {
    address.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

#[async_trait]
impl Geocoder for CachedGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, ProviderError> {
        let key = cache_key(address);
        if let Some(entry) = self.entries.get(&key) {
            if entry.fetched_at.elapsed() <= self.ttl {
                tracing::debug!("Geocode cache hit for '{}'", key);
                return Ok(entry.point);
            }
        }

        let point = self.inner.geocode(address).await?;
        self.entries.insert(
            key,
            GeocodeCacheEntry {
                fetched_at: Instant::now(),
                point,
            },
        );
        prune_cache(&self.entries, self.max_entries, self.ttl);
        Ok(point)
    }
}
