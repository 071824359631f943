//! Parsed-template cache
//!
//! Keyed by the exact (shorthand-expanded) template text. When full, the
//! oldest inserted entry is evicted first. A capacity of 0 disables caching.

use crate::ast::Message;
use inline_i18n_log::trace;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

struct Entries {
    map: HashMap<String, Arc<Message>>,
    order: VecDeque<String>,
    capacity: usize,
}

impl Entries {
    fn evict_to(&mut self, capacity: usize) {
        while self.map.len() > capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.map.remove(&oldest);
            trace!(target: "inline_i18n::cache", "evicted parsed template ({} bytes)", oldest.len());
        }
    }
}

/// Cache hit/miss counters.
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheStats {
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

/// FIFO cache of parsed messages.
///
/// ```
/// use inline_i18n_core::ParseCache;
/// use std::sync::Arc;
///
/// let cache = ParseCache::new(2);
/// cache.insert("a", Arc::new(Vec::new()));
/// cache.insert("b", Arc::new(Vec::new()));
/// cache.insert("c", Arc::new(Vec::new()));
///
/// assert!(cache.get("a").is_none());
/// assert_eq!(cache.len(), 2);
/// ```
pub struct ParseCache {
    entries: Mutex<Entries>,
    stats: CacheStats,
}

impl ParseCache {
    /// Create a cache holding at most `capacity` templates.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(Entries {
                map: HashMap::with_capacity(capacity.min(64)),
                order: VecDeque::new(),
                capacity,
            }),
            stats: CacheStats::default(),
        }
    }

    /// Look up a parsed template.
    pub fn get(&self, template: &str) -> Option<Arc<Message>> {
        let found = self.entries.lock().map.get(template).cloned();
        let counter = if found.is_some() {
            &self.stats.hits
        } else {
            &self.stats.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Store a parsed template, evicting the oldest entries at capacity.
    pub fn insert(&self, template: &str, message: Arc<Message>) {
        self.insert_if(template, message, || true);
    }

    /// Store a parsed template only if `still_valid` holds.
    ///
    /// `still_valid` runs under the cache lock, so a concurrent
    /// [`clear`](Self::clear) happens either before the check or after the
    /// insert. Returns whether the entry was stored.
    pub fn insert_if<F>(&self, template: &str, message: Arc<Message>, still_valid: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        let mut entries = self.entries.lock();
        if entries.capacity == 0 || !still_valid() {
            return false;
        }
        if entries.map.contains_key(template) {
            entries.map.insert(template.to_string(), message);
            return true;
        }

        let capacity = entries.capacity;
        entries.evict_to(capacity - 1);
        entries.order.push_back(template.to_string());
        entries.map.insert(template.to_string(), message);
        true
    }

    /// Change the capacity, evicting the oldest entries that no longer fit.
    pub fn resize(&self, capacity: usize) {
        let mut entries = self.entries.lock();
        entries.capacity = capacity;
        entries.evict_to(capacity);
    }

    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        entries.map.clear();
        entries.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.entries.lock().capacity
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl std::fmt::Debug for ParseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.lock();
        f.debug_struct("ParseCache")
            .field("len", &entries.map.len())
            .field("capacity", &entries.capacity)
            .field("stats", &self.stats)
            .finish()
    }
}
