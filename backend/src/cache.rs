//! In-memory response cache
//!
//! Maps deterministic request keys to cached JSON payloads with a
//! fixed-duration expiry checked on read. Stale entries stay in the map
//! until the next miss overwrites them; there is no eviction. Key
//! cardinality is bounded by endpoint, coordinates, and plant id.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use riego_shared::Coordinates;

struct CacheEntry {
    payload: serde_json::Value,
    stored_at: Instant,
}

/// Process-local cache shared across request handlers.
///
/// RwLock allows concurrent readers while writes take exclusive access.
/// A read racing a write of the same key serves the previous payload;
/// payloads are idempotent recomputations of the same upstream query.
#[derive(Clone, Default)]
pub struct ResponseCache {
    inner: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the payload stored under `key` if it is younger than `ttl`.
    ///
    /// An expired entry behaves as a miss but is not removed; the caller
    /// overwrites it with `put` after refetching.
    pub async fn get(&self, key: &str, ttl: Duration) -> Option<serde_json::Value> {
        let guard = self.inner.read().await;
        let entry = guard.get(key)?;
        if entry.stored_at.elapsed() < ttl {
            Some(entry.payload.clone())
        } else {
            None
        }
    }

    /// Store `payload` under `key`, overwriting any previous entry.
    pub async fn put(&self, key: impl Into<String>, payload: serde_json::Value) {
        let entry = CacheEntry {
            payload,
            stored_at: Instant::now(),
        };
        self.inner.write().await.insert(key.into(), entry);
    }

    /// Number of entries in the map, stale ones included.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

/// Cache key for the watering calculation. Two requests with the same
/// coordinates and plant id must map to the same key.
pub fn watering_key(coords: Coordinates, plant_id: &str) -> String {
    format!("watering-{}-{}-{}", coords.lat, coords.lon, plant_id)
}

/// Cache key for the astronomy picture of the day.
pub fn apod_key() -> String {
    "apod-today".to_string()
}

/// Cache key for the 7-day temperature history.
pub fn temperature_alert_key(coords: Coordinates) -> String {
    format!("temperature-alert-{}-{}", coords.lat, coords.lon)
}
