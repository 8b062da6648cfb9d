//! Response cache for identical prompts.
//!
//! DESIGN
//! ======
//! Keyed by the SHA-256 of the prompt text. Entries carry their insertion
//! instant and are checked for staleness on every read; a stale hit is
//! evicted and reported as a miss. Every insert also sweeps stale entries, so
//! prompts that are never asked again do not accumulate. The mutex is never
//! held across an await.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use sha2::{Digest, Sha256};

pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

struct CachedResponse {
    value: String,
    inserted_at: Instant,
}

pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CachedResponse>>,
}

impl ResponseCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: Mutex::new(HashMap::new()) }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn key(prompt: &str) -> String {
        format!("{:x}", Sha256::digest(prompt.as_bytes()))
    }

    #[must_use]
    pub fn get(&self, prompt: &str) -> Option<String> {
        self.get_at(prompt, Instant::now())
    }

    fn get_at(&self, prompt: &str, now: Instant) -> Option<String> {
        let key = Self::key(prompt);
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let fresh = entries
            .get(&key)
            .map(|entry| now.saturating_duration_since(entry.inserted_at) < self.ttl)?;
        if fresh {
            entries.get(&key).map(|entry| entry.value.clone())
        } else {
            entries.remove(&key);
            None
        }
    }

    pub fn insert(&self, prompt: &str, value: String) {
        self.insert_at(prompt, value, Instant::now());
    }

    fn insert_at(&self, prompt: &str, value: String, now: Instant) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.retain(|_, entry| now.saturating_duration_since(entry.inserted_at) < self.ttl);
        entries.insert(Self::key(prompt), CachedResponse { value, inserted_at: now });
    }

    /// Drop every stale entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    fn purge_expired_at(&self, now: Instant) -> usize {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|_, entry| now.saturating_duration_since(entry.inserted_at) < self.ttl);
        before - entries.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
