//! Application-wide query cache.
//!
//! One [`QueryClient`] is created by the App Shell and shared through
//! context. Values are stored as JSON keyed by a query key and count as
//! fresh for `stale_time_secs`; a stale time of zero means every read
//! refetches.

use chrono::{DateTime, Duration, Utc};
use dioxus::prelude::*;
use serde::{de::DeserializeOwned, Serialize};
use shared_types::{QueryConfig, ShellError};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
struct CacheEntry {
    value: serde_json::Value,
    stored_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryCache {
    stale_time: Duration,
    retry: u32,
    entries: HashMap<String, CacheEntry>,
}

impl QueryCache {
    pub fn new(config: &QueryConfig) -> Self {
        Self {
            stale_time: i64::try_from(config.stale_time_secs)
                .ok()
                .and_then(Duration::try_seconds)
                .unwrap_or(Duration::MAX),
            retry: config.retry,
            entries: HashMap::new(),
        }
    }

    pub fn stale_time(&self) -> Duration {
        self.stale_time
    }

    pub fn retry(&self) -> u32 {
        self.retry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_fresh(&self, key: &str, now: DateTime<Utc>) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| now - entry.stored_at < self.stale_time)
    }

    /// Fresh value for `key`, if one exists and still decodes as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, now: DateTime<Utc>) -> Option<T> {
        if !self.is_fresh(key, now) {
            return None;
        }
        let entry = self.entries.get(key)?;
        serde_json::from_value(entry.value.clone()).ok()
    }

    pub fn put<T: Serialize>(&mut self, key: &str, value: &T, now: DateTime<Utc>) {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.entries.insert(
                    key.to_string(),
                    CacheEntry {
                        value,
                        stored_at: now,
                    },
                );
            }
            Err(e) => tracing::debug!(key, error = %e, "value not cacheable"),
        }
    }

    /// Serve `key` from cache, or run `fetch` (with `retry` extra attempts)
    /// and cache the result. The last error is returned if every attempt fails.
    pub fn fetch<T, F>(&mut self, key: &str, now: DateTime<Utc>, mut fetch: F) -> Result<T, ShellError>
    where
        T: Serialize + DeserializeOwned,
        F: FnMut() -> Result<T, ShellError>,
    {
        if let Some(hit) = self.get(key, now) {
            return Ok(hit);
        }
        let mut attempt = 0;
        loop {
            match fetch() {
                Ok(value) => {
                    self.put(key, &value, now);
                    return Ok(value);
                }
                Err(e) if attempt < self.retry => {
                    attempt += 1;
                    tracing::debug!(key, attempt, error = %e, "query failed, retrying");
                }
                Err(e) => {
                    tracing::warn!(key, error = %e, "query failed");
                    return Err(e);
                }
            }
        }
    }

    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Copyable handle to the shared [`QueryCache`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueryClient {
    cache: Signal<QueryCache>,
}

impl QueryClient {
    pub fn new(config: &QueryConfig) -> Self {
        Self {
            cache: Signal::new(QueryCache::new(config)),
        }
    }

    pub fn fetch<T, F>(&mut self, key: &str, fetch: F) -> Result<T, ShellError>
    where
        T: Serialize + DeserializeOwned,
        F: FnMut() -> Result<T, ShellError>,
    {
        self.cache.write().fetch(key, Utc::now(), fetch)
    }

    pub fn invalidate(&mut self, key: &str) {
        self.cache.write().invalidate(key);
    }

    pub fn clear(&mut self) {
        self.cache.write().clear();
    }

    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn stale_time_secs(&self) -> i64 {
        self.cache.read().stale_time().num_seconds()
    }

    pub fn retry(&self) -> u32 {
        self.cache.read().retry()
    }
}

/// Hook to access the root query client.
pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>()
}
