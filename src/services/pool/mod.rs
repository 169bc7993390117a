// Pool module
// Explicit free list for reusable visual elements keyed by event id

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Hands out reusable elements and takes them back at layout boundaries.
///
/// Elements in use are keyed (typically by event id); released elements sit
/// on a free list until the next `acquire`. The pool is plain data with no
/// interior mutability and is meant to be driven from the thread that runs
/// layout.
#[derive(Debug)]
pub struct ReusePool<K, T> {
    in_use: HashMap<K, T>,
    available: Vec<T>,
}

impl<K: Eq + Hash + Clone, T> ReusePool<K, T> {
    pub fn new() -> Self {
        Self {
            in_use: HashMap::new(),
            available: Vec::new(),
        }
    }

    /// Element for `key`: the one already in use, a recycled one, or a new
    /// one from `create`.
    pub fn acquire<F>(&mut self, key: K, create: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.in_use.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(self.available.pop().unwrap_or_else(create)),
        }
    }

    /// Return the element for `key` to the free list.
    pub fn release(&mut self, key: &K) -> bool {
        match self.in_use.remove(key) {
            Some(element) => {
                self.available.push(element);
                true
            }
            None => false,
        }
    }

    /// Release every element whose key is not accepted by `keep`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K) -> bool,
    {
        let stale: Vec<K> = self.in_use.keys().filter(|key| !keep(key)).cloned().collect();
        for key in stale {
            self.release(&key);
        }
    }

    pub fn release_all(&mut self) {
        self.available.extend(self.in_use.drain().map(|(_, element)| element));
    }

    pub fn get(&self, key: &K) -> Option<&T> {
        self.in_use.get(key)
    }

    pub fn in_use(&self) -> usize {
        self.in_use.len()
    }

    pub fn available(&self) -> usize {
        self.available.len()
    }
}

impl<K: Eq + Hash + Clone, T> Default for ReusePool<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_creates_then_reuses() {
        let mut pool: ReusePool<i64, String> = ReusePool::new();
        let mut created = 0;

        pool.acquire(1, || {
            created += 1;
            "first".to_string()
        });
        pool.release(&1);
        let element = pool.acquire(2, || {
            created += 1;
            "second".to_string()
        });

        assert_eq!(element, "first");
        assert_eq!(created, 1);
        assert_eq!(pool.in_use(), 1);
        assert_eq!(pool.available(), 0);
    }

    #[test]
    fn test_acquire_same_key_returns_same_element() {
        let mut pool: ReusePool<i64, Vec<u8>> = ReusePool::new();
        pool.acquire(1, Vec::new).push(7);
        let element = pool.acquire(1, || vec![0; 3]);
        assert_eq!(element, &vec![7u8]);
        assert_eq!(pool.in_use(), 1);
    }

    #[test]
    fn test_release_unknown_key() {
        let mut pool: ReusePool<i64, u32> = ReusePool::new();
        assert!(!pool.release(&42));
    }

    #[test]
    fn test_retain_releases_stale_elements() {
        let mut pool: ReusePool<i64, u32> = ReusePool::new();
        for id in 1..=4 {
            pool.acquire(id, || id as u32);
        }

        pool.retain(|id| id % 2 == 0);

        assert_eq!(pool.in_use(), 2);
        assert_eq!(pool.available(), 2);
        assert!(pool.get(&2).is_some());
        assert!(pool.get(&3).is_none());
    }

    #[test]
    fn test_release_all() {
        let mut pool: ReusePool<i64, u32> = ReusePool::new();
        pool.acquire(1, || 1);
        pool.acquire(2, || 2);
        pool.release_all();
        assert_eq!(pool.in_use(), 0);
        assert_eq!(pool.available(), 2);
    }
}
