//! Bounded, expiring cache for optimized segment sequences.
//!
//! The cache is an explicit, injectable object owned by its optimizer — there
//! is no module-level singleton, so optimizer instances are independently
//! testable and resettable. Entries are immutable once inserted and are
//! evicted by TTL (checked on access) or by oldest insertion order when the
//! capacity is exceeded.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use crate::optimize::optimizer::OptimizeStats;
use crate::segment::Segment;

// ---------------------------------------------------------------------------
// CacheConfig
// ---------------------------------------------------------------------------

/// Capacity and expiry settings for an [`OptimizerCache`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries. A capacity of zero disables caching.
    pub capacity: usize,
    /// Entry time-to-live, measured from insertion.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            ttl: Duration::from_secs(300),
        }
    }
}

// ---------------------------------------------------------------------------
// CacheEntry
// ---------------------------------------------------------------------------

/// One cached optimization result. Never mutated in place.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The optimized segment sequence.
    pub segments: Vec<Segment>,
    /// Statistics recorded when the sequence was first optimized.
    pub stats: OptimizeStats,
    inserted_at: Instant,
}

impl CacheEntry {
    fn expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() >= ttl
    }
}

// ---------------------------------------------------------------------------
// OptimizerCache
// ---------------------------------------------------------------------------

/// Fingerprint-keyed cache with TTL expiry and insertion-order eviction.
#[derive(Debug)]
pub struct OptimizerCache {
    config: CacheConfig,
    entries: HashMap<String, CacheEntry>,
    /// Fingerprints in insertion order; front is oldest.
    order: VecDeque<String>,
}

impl OptimizerCache {
    /// Create a cache with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    /// The cache configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Look up a fingerprint, purging expired entries first.
    pub fn get(&mut self, fingerprint: &str) -> Option<&CacheEntry> {
        self.purge_expired();
        self.entries.get(fingerprint)
    }

    /// Insert an optimization result under its fingerprint.
    ///
    /// Re-inserting an existing fingerprint replaces the entry (and its
    /// position in the insertion order) with a fresh one. When the capacity
    /// is reached, the oldest entry by insertion order is evicted.
    pub fn insert(&mut self, fingerprint: String, segments: Vec<Segment>, stats: OptimizeStats) {
        if self.config.capacity == 0 {
            return;
        }
        self.purge_expired();

        if self.entries.remove(&fingerprint).is_some() {
            self.order.retain(|fp| fp != &fingerprint);
        }
        while self.entries.len() >= self.config.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }

        self.order.push_back(fingerprint.clone());
        self.entries.insert(
            fingerprint,
            CacheEntry {
                segments,
                stats,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Number of live entries (expired entries may still be counted until
    /// the next access purges them).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Drop expired entries from the front of the insertion order.
    ///
    /// Insertion order is also insertion-time order, so expired entries are
    /// always a prefix of the queue.
    fn purge_expired(&mut self) {
        while let Some(front) = self.order.front() {
            let expired = self
                .entries
                .get(front)
                .is_none_or(|entry| entry.expired(self.config.ttl));
            if !expired {
                break;
            }
            if let Some(front) = self.order.pop_front() {
                self.entries.remove(&front);
            }
        }
    }
}

impl Default for OptimizerCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
