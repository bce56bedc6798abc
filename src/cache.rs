use std::{
    collections::HashMap,
    hash::{DefaultHasher, Hash, Hasher},
    sync::{LazyLock, RwLock}
};

use tracing::warn;

use crate::canonical::canonicalize;

/// Global canonical form cache
static CANONICAL_CACHE: LazyLock<RwLock<CanonicalCache>> =
    LazyLock::new(|| RwLock::new(CanonicalCache::new(4096)));

/// Bounded memo of canonical forms keyed by the raw SQL text.
///
/// Reference SQL repeats a lot across evaluation examples; the cache only
/// avoids recomputation and never changes a result.
pub struct CanonicalCache {
    cache:    HashMap<u64, (String, String)>,
    max_size: usize
}

impl CanonicalCache {
    pub fn new(max_size: usize) -> Self {
        Self {
            cache: HashMap::with_capacity(max_size),
            max_size
        }
    }

    fn hash_key(sql: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        sql.hash(&mut hasher);
        hasher.finish()
    }

    pub fn get(&self, sql: &str) -> Option<String> {
        let key = Self::hash_key(sql);
        self.cache
            .get(&key)
            .filter(|(raw, _)| raw == sql)
            .map(|(_, canonical)| canonical.clone())
    }

    pub fn insert(&mut self, sql: &str, canonical: String) {
        // Simple eviction: clear half when full
        if self.cache.len() >= self.max_size {
            let keys: Vec<_> = self.cache.keys().take(self.max_size / 2).copied().collect();
            for key in keys {
                self.cache.remove(&key);
            }
        }

        let key = Self::hash_key(sql);
        self.cache.insert(key, (sql.to_string(), canonical));
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Get a cached canonical form or None
pub fn get_cached(sql: &str) -> Option<String> {
    CANONICAL_CACHE.read().ok()?.get(sql)
}

/// Cache a canonical form
pub fn cache_canonical(sql: &str, canonical: String) {
    match CANONICAL_CACHE.write() {
        Ok(mut cache) => cache.insert(sql, canonical),
        Err(_) => warn!("canonical cache lock poisoned, skipping insert")
    }
}

/// [`canonicalize`] with the global cache in front.
pub fn canonicalize_cached(sql: &str) -> String {
    if let Some(cached) = get_cached(sql) {
        return cached;
    }
    let canonical = canonicalize(sql);
    cache_canonical(sql, canonical.clone());
    canonical
}
