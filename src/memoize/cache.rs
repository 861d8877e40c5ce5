//! Concurrent memo cache.
//!
//! [`MemoCache`] maps call keys to once-initialised slots held in a sharded
//! concurrent map. Looking up or creating a slot only takes a shard lock for
//! the duration of the map operation; evaluating a missing value happens
//! outside every shard lock, inside the slot's own initialisation. Callers
//! racing on the same key wait for that single evaluation, callers on other
//! keys are never blocked by it.
//!
//! # Invariants
//!
//! - A slot's value is written at most once and never overwritten.
//! - A filled slot is never removed.
//! - A failed (panicking) evaluation leaves the slot empty, so the next
//!   caller evaluates again. An empty slot nobody else holds is removed
//!   while unwinding, so keys that keep failing do not accumulate.

use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, OnceLock};
use std::thread;

use dashmap::DashMap;

/// Hasher used by every memo cache.
///
/// Selected by feature flag: `fxhash` uses `rustc-hash`, `ahash` uses
/// `ahash`, otherwise the standard library's randomly seeded hasher.
/// `fxhash` takes precedence when both are enabled.
#[cfg(feature = "fxhash")]
pub(crate) type CacheHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type CacheHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type CacheHasher = std::hash::RandomState;

type Slot<V> = Arc<OnceLock<V>>;

/// A thread-safe, grow-only map from call keys to computed values.
///
/// # Examples
///
/// ```rust
/// use lambdakit::memoize::MemoCache;
///
/// let cache: MemoCache<(i32, i32), i32> = MemoCache::new();
///
/// assert_eq!(cache.get_or_compute((2, 3), || 5), 5);
/// // The value is cached: the second closure is never run.
/// assert_eq!(cache.get_or_compute((2, 3), || unreachable!()), 5);
/// assert_eq!(cache.len(), 1);
/// ```
pub struct MemoCache<K, V> {
    entries: DashMap<K, Slot<V>, CacheHasher>,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(CacheHasher::default()),
        }
    }

    /// Creates an empty cache with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity_and_hasher(capacity, CacheHasher::default()),
        }
    }

    /// Returns a clone of the cached value for `key`, if any.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.entries.get(key).and_then(|slot| slot.get().cloned())
    }

    /// Returns `true` if a value is cached for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries
            .get(key)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Returns the cached value for `key`, evaluating `compute` on a miss.
    ///
    /// `compute` runs at most once per key over the lifetime of the cache,
    /// even when several threads miss on the same key at the same time: one
    /// of them evaluates, the others wait and observe its result. If
    /// `compute` panics, nothing is stored and the panic propagates.
    ///
    /// `compute` must not re-enter the cache with the same key.
    pub fn get_or_compute<Compute>(&self, key: K, compute: Compute) -> V
    where
        K: Clone,
        V: Clone,
        Compute: FnOnce() -> V,
    {
        // Declared before the slot so that it drops after it.
        let _vacate = VacateOnUnwind {
            entries: &self.entries,
            key: key.clone(),
        };
        let slot = self.slot(key);
        slot.get_or_init(|| {
            tracing::trace!("memo cache miss, evaluating");
            compute()
        })
        .clone()
    }

    /// Stores `value` under `key` unless a value is already cached.
    ///
    /// Returns `true` if the value was stored.
    pub fn insert(&self, key: K, value: V) -> bool {
        self.slot(key).set(value).is_ok()
    }

    /// Returns the number of cached values.
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.value().get().is_some())
            .count()
    }

    /// Returns `true` if no value is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, key: K) -> Slot<V> {
        let entry = self
            .entries
            .entry(key)
            .or_insert_with(|| Arc::new(OnceLock::new()));
        Arc::clone(entry.value())
    }
}

/// Removes the key's slot if an evaluation unwinds and leaves it empty.
struct VacateOnUnwind<'cache, K, V>
where
    K: Eq + Hash,
{
    entries: &'cache DashMap<K, Slot<V>, CacheHasher>,
    key: K,
}

impl<K, V> Drop for VacateOnUnwind<'_, K, V>
where
    K: Eq + Hash,
{
    fn drop(&mut self) {
        if !thread::panicking() {
            return;
        }
        // A slot still shared with a waiting caller stays: that caller
        // evaluates into it next.
        let removed = self.entries.remove_if(&self.key, |_, slot| {
            slot.get().is_none() && Arc::strong_count(slot) == 1
        });
        if removed.is_some() {
            tracing::trace!("evaluation unwound, empty memo slot removed");
        }
    }
}

impl<K, V> Default for MemoCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for MemoCache<K, V>
where
    K: Eq + Hash,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MemoCache")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
