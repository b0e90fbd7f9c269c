//! Time-to-live cache for upstream documents.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tracing::debug;

/// How long a cached entry stays valid unless configured otherwise.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug)]
struct Entry<V> {
    value: V,
    stored_at: Instant,
}

/// A keyed cache whose entries expire `ttl` after they were stored.
///
/// Expired entries are dropped lazily, on the next access to their key.
/// The lock is not held while a value is being fetched, so two callers that
/// miss on the same key at the same time both fetch; the later store wins.
#[derive(Debug)]
pub struct TtlCache<V, C = SystemClock> {
    ttl: Duration,
    clock: C,
    entries: Mutex<HashMap<String, Entry<V>>>,
}

impl<V: Clone> TtlCache<V, SystemClock> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<V: Clone> Default for TtlCache<V, SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<V: Clone, C: Clock> TtlCache<V, C> {
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            ttl,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, Entry<V>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a fresh value for `key`.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let mut entries = self.entries();
        let fresh = match entries.get(key) {
            Some(entry) => now.saturating_duration_since(entry.stored_at) < self.ttl,
            None => return None,
        };
        if fresh {
            return entries.get(key).map(|entry| entry.value.clone());
        }
        debug!(key, "cache entry expired");
        entries.remove(key);
        None
    }

    pub fn insert(&self, key: impl Into<String>, value: V) {
        let stored_at = self.clock.now();
        self.entries()
            .insert(key.into(), Entry { value, stored_at });
    }

    /// Remove `key`, returning whether an entry was present.
    pub fn invalidate(&self, key: &str) -> bool {
        self.entries().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    /// Number of stored entries, including expired ones not yet dropped.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Return the fresh value for `key`, or run `fetch` and cache its result.
    ///
    /// A failed fetch is returned as is and leaves the cache untouched.
    pub fn get_or_try_insert_with<E, F>(&self, key: &str, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(key) {
            debug!(key, "cache hit");
            return Ok(value);
        }
        debug!(key, "cache miss");
        let value = fetch()?;
        self.insert(key, value.clone());
        Ok(value)
    }
}
