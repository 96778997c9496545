//! Persisted credentials in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access token is the only durable session state: its presence means
//! "try to hydrate", its absence means logged out. Every reader and writer
//! goes through [`Credentials`] so there is exactly one storage key.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::types::TokenPair;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Minimal string key/value store.
pub trait KeyValueStorage: Clone + 'static {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// `window.localStorage`. Holds nothing outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// Typed view over the persisted access and refresh tokens.
#[derive(Clone, Debug, Default)]
pub struct Credentials<S> {
    storage: S,
}

impl<S: KeyValueStorage> Credentials<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Bearer credential; an empty stored value counts as absent.
    pub fn access_token(&self) -> Option<String> {
        self.storage.get_item(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Stored alongside the access token but never exchanged for a new one.
    #[cfg(test)]
    pub(crate) fn refresh_token(&self) -> Option<String> {
        self.storage.get_item(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn persist(&self, tokens: &TokenPair) {
        self.storage.set_item(ACCESS_TOKEN_KEY, &tokens.access);
        match &tokens.refresh {
            Some(refresh) => self.storage.set_item(REFRESH_TOKEN_KEY, refresh),
            None => self.storage.remove_item(REFRESH_TOKEN_KEY),
        }
    }

    pub fn clear(&self) {
        self.storage.remove_item(ACCESS_TOKEN_KEY);
        self.storage.remove_item(REFRESH_TOKEN_KEY);
    }
}
