//! Time-expiring cache of location → trip membership lookups.
//!
//! Resolving which trips contain a location requires one fetch per trip from
//! the document store, so the UI caches the answer per (user, location) for a
//! few minutes. This is an explicit cache object owned by the caller, with no
//! ambient global state, and entries are invalidated eagerly whenever a
//! location is added to or removed from a trip.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use explora_core::logging::SUBSYSTEM_CACHE;

/// Default entry lifetime: five minutes.
pub const DEFAULT_TTL_SECS: i64 = 5 * 60;

#[derive(Debug, Clone)]
struct CacheEntry {
    trip_ids: Vec<String>,
    cached_at: DateTime<Utc>,
}

/// Cache of trip-id lists keyed by (user id, location id).
#[derive(Debug)]
pub struct TripLocationCache {
    entries: HashMap<(String, String), CacheEntry>,
    ttl: Duration,
}

impl Default for TripLocationCache {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_TTL_SECS))
    }
}

impl TripLocationCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Cached trip ids for the location, or `None` when absent or expired.
    pub fn get(&self, user_id: &str, location_id: &str) -> Option<&[String]> {
        self.get_at(user_id, location_id, Utc::now())
    }

    /// As [`get`](Self::get), with an explicit clock for deterministic tests.
    pub fn get_at(
        &self,
        user_id: &str,
        location_id: &str,
        now: DateTime<Utc>,
    ) -> Option<&[String]> {
        let entry = self
            .entries
            .get(&(user_id.to_string(), location_id.to_string()))?;
        if now - entry.cached_at >= self.ttl {
            debug!(
                subsystem = SUBSYSTEM_CACHE,
                user_id, location_id, "cache entry expired"
            );
            return None;
        }
        Some(&entry.trip_ids)
    }

    /// Store the trip list for a (user, location) pair.
    pub fn insert(&mut self, user_id: &str, location_id: &str, trip_ids: Vec<String>) {
        self.insert_at(user_id, location_id, trip_ids, Utc::now());
    }

    /// As [`insert`](Self::insert), with an explicit clock.
    pub fn insert_at(
        &mut self,
        user_id: &str,
        location_id: &str,
        trip_ids: Vec<String>,
        now: DateTime<Utc>,
    ) {
        self.entries.insert(
            (user_id.to_string(), location_id.to_string()),
            CacheEntry {
                trip_ids,
                cached_at: now,
            },
        );
    }

    /// Drop the entry for one location, or every entry of the user when
    /// `location_id` is `None`. Called when trip membership changes.
    pub fn invalidate(&mut self, user_id: &str, location_id: Option<&str>) {
        let before = self.entries.len();
        match location_id {
            Some(location_id) => {
                self.entries
                    .remove(&(user_id.to_string(), location_id.to_string()));
            }
            None => {
                self.entries.retain(|(user, _), _| user != user_id);
            }
        }
        debug!(
            subsystem = SUBSYSTEM_CACHE,
            user_id,
            removed = before - self.entries.len(),
            "cache invalidated"
        );
    }

    /// Remove every expired entry.
    pub fn purge_expired(&mut self) {
        self.purge_expired_at(Utc::now());
    }

    /// As [`purge_expired`](Self::purge_expired), with an explicit clock.
    pub fn purge_expired_at(&mut self, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.entries.retain(|_, entry| now - entry.cached_at < ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
