//! Per-key serialization for read-then-write store sequences.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// A registry of async mutexes, one per key.
///
/// Two tasks acquiring the same key run one after the other; distinct keys
/// do not contend. A lock cell lives only while some task holds or awaits
/// it: the last guard to release a key removes its cell, so the registry
/// stays bounded by current contention, not by every key ever seen.
pub struct KeyedLocks<K> {
    cells: Mutex<HashMap<K, Arc<AsyncMutex<()>>>>,
}

/// Holds a key's lock; releasing it evicts the cell when no other task
/// holds or awaits the same key.
pub struct KeyedGuard<'a, K>
where
    K: Eq + Hash + Clone,
{
    registry: &'a KeyedLocks<K>,
    key: K,
    guard: Option<OwnedMutexGuard<()>>,
}

impl<K> Drop for KeyedGuard<'_, K>
where
    K: Eq + Hash + Clone,
{
    fn drop(&mut self) {
        // Release the mutex before inspecting the cell's refcount: the
        // guard itself keeps the Arc alive.
        self.guard.take();

        let mut cells = lock_registry(&self.registry.cells);
        if let Some(cell) = cells.get(&self.key) {
            // One reference left means only the map itself: nobody holds
            // the lock and nobody is queued on it. A task that cloned the
            // cell but has not locked it yet still counts, so it is never
            // evicted out from under a waiter.
            if Arc::strong_count(cell) == 1 {
                cells.remove(&self.key);
            }
        }
    }
}

impl<K> KeyedLocks<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            cells: Mutex::new(HashMap::new()),
        }
    }

    /// Acquire the lock for `key`, waiting if another task holds it
    pub async fn acquire(&self, key: K) -> KeyedGuard<'_, K> {
        let cell = {
            let mut cells = lock_registry(&self.cells);
            Arc::clone(cells.entry(key.clone()).or_default())
        };
        let guard = cell.lock_owned().await;
        KeyedGuard {
            registry: self,
            key,
            guard: Some(guard),
        }
    }

    /// Number of live lock cells
    #[cfg(test)]
    pub(crate) fn cell_count(&self) -> usize {
        lock_registry(&self.cells).len()
    }
}

impl<K> Default for KeyedLocks<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

fn lock_registry<K>(
    cells: &Mutex<HashMap<K, Arc<AsyncMutex<()>>>>,
) -> std::sync::MutexGuard<'_, HashMap<K, Arc<AsyncMutex<()>>>> {
    match cells.lock() {
        Ok(guard) => guard,
        // A poisoned registry only means a panic elsewhere; the map
        // itself is still usable.
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_key_serializes() {
        let locks = Arc::new(KeyedLocks::new());
        let in_critical = Arc::new(AtomicUsize::new(0));
        let max_seen = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let locks = Arc::clone(&locks);
            let in_critical = Arc::clone(&in_critical);
            let max_seen = Arc::clone(&max_seen);
            handles.push(tokio::spawn(async move {
                let _guard = locks.acquire("k").await;
                let now = in_critical.fetch_add(1, Ordering::SeqCst) + 1;
                max_seen.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5)).await;
                in_critical.fetch_sub(1, Ordering::SeqCst);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_distinct_keys_do_not_contend() {
        let locks = KeyedLocks::new();
        let _a = locks.acquire("a").await;
        // Must not deadlock while "a" is held
        let _b = locks.acquire("b").await;
    }

    #[tokio::test]
    async fn test_released_cells_are_evicted() {
        let locks = KeyedLocks::new();

        for key in 0..10_000u32 {
            let guard = locks.acquire(key).await;
            drop(guard);
        }

        assert_eq!(locks.cell_count(), 0);
    }

    #[tokio::test]
    async fn test_held_cell_survives_other_releases() {
        let locks = KeyedLocks::new();

        let held = locks.acquire("held").await;
        drop(locks.acquire("other").await);

        assert_eq!(locks.cell_count(), 1);
        drop(held);
        assert_eq!(locks.cell_count(), 0);
    }

    #[tokio::test]
    async fn test_eviction_does_not_break_waiters() {
        let locks = Arc::new(KeyedLocks::new());
        let entered = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let locks = Arc::clone(&locks);
            let entered = Arc::clone(&entered);
            handles.push(tokio::spawn(async move {
                let _guard = locks.acquire("k").await;
                entered.fetch_add(1, Ordering::SeqCst);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(entered.load(Ordering::SeqCst), 8);
        assert_eq!(locks.cell_count(), 0);
    }
}
