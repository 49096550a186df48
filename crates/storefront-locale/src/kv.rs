//! Key-Value store wrapper with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::CacheError;

/// Type-safe cache backed by Spin's Key-Value Store.
///
/// Without the `spin` feature every opened cache is an isolated in-process map,
/// which is what the tests run against. Clones share the same store.
#[derive(Clone)]
pub struct Cache {
    #[cfg(feature = "spin")]
    store: std::rc::Rc<spin_sdk::key_value::Store>,
    #[cfg(not(feature = "spin"))]
    entries: std::sync::Arc<
        std::sync::Mutex<std::collections::HashMap<String, Vec<u8>>>,
    >,
}

#[cfg(feature = "spin")]
impl Cache {
    /// Open the default Key-Value store.
    pub fn open_default() -> Result<Self, CacheError> {
        let store = spin_sdk::key_value::Store::open_default()
            .map_err(|e| CacheError::OpenError(e.to_string()))?;
        Ok(Self {
            store: std::rc::Rc::new(store),
        })
    }

    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.store
            .get(key)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }

    fn set_bytes(&self, key: &str, bytes: Vec<u8>) -> Result<(), CacheError> {
        self.store
            .set(key, &bytes)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store
            .delete(key)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store
            .get_keys()
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }
}

#[cfg(not(feature = "spin"))]
impl Cache {
    /// Open an empty in-process store.
    pub fn open_default() -> Result<Self, CacheError> {
        Ok(Self::in_memory())
    }

    /// Create an empty in-process store.
    pub fn in_memory() -> Self {
        Self {
            entries: Default::default(),
        }
    }

    fn with_entries<R>(
        &self,
        f: impl FnOnce(&mut std::collections::HashMap<String, Vec<u8>>) -> R,
    ) -> Result<R, CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CacheError::StoreError("store lock poisoned".to_string()))?;
        Ok(f(&mut entries))
    }

    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set_bytes(&self, key: &str, bytes: Vec<u8>) -> Result<(), CacheError> {
        self.with_entries(|entries| {
            entries.insert(key.to_string(), bytes);
        })
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.with_entries(|entries| entries.keys().cloned().collect())
    }
}

impl Cache {
    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.get_bytes(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.set_bytes(key, bytes)
    }
}

/// Helper to build cache keys with namespacing.
///
/// ```rust,ignore
/// let key = cache_key!("locale", session_id);
/// // Returns "locale:sess_abc"
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}
