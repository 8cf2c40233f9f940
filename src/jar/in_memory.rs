use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use anyhow::Result;
use serde_json::Value;

use crate::cookies::CookieOptions;
use crate::jar::{CookieJar, CookieJarHandle};

/// In-memory cookie jar (no persistence).
///
/// Every store keeps the full option bag, so callers can inspect the metadata
/// a cookie was written with. Deletes are remembered together with their options.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCookieJar {
    entries: HashMap<String, CookieOptions>,
    deleted: HashMap<String, CookieOptions>,
}

impl InMemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a jar that already holds the given plain values, as if the
    /// browser had sent them with the request.
    pub fn with_values<I, K>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let entries = values
            .into_iter()
            .map(|(name, value)| {
                let options = CookieOptions {
                    value: Some(value),
                    ..CookieOptions::default()
                };
                (name.into(), options)
            })
            .collect();

        Self {
            entries,
            deleted: HashMap::new(),
        }
    }

    /// Wraps the jar into a shared handle, keeping the concrete type visible.
    pub fn into_shared(self) -> Arc<RwLock<InMemoryCookieJar>> {
        Arc::new(RwLock::new(self))
    }

    /// Wraps the jar into a type-erased [`CookieJarHandle`].
    pub fn into_handle(self) -> CookieJarHandle {
        self.into_shared()
    }

    /// Options the cookie `name` was last stored with.
    pub fn metadata_for(&self, name: &str) -> Option<&CookieOptions> {
        self.entries.get(name)
    }

    /// Value currently stored under `name`.
    pub fn value_of(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).and_then(|o| o.value.as_ref())
    }

    /// Returns `true` if `name` was deleted and not stored again since.
    pub fn is_deleted(&self, name: &str) -> bool {
        self.deleted.contains_key(name)
    }

    /// Options the cookie `name` was deleted with.
    pub fn deletion_for(&self, name: &str) -> Option<&CookieOptions> {
        self.deleted.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Names of all stored cookies, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl CookieJar for InMemoryCookieJar {
    fn get(&self, name: &str) -> Result<Option<Value>> {
        Ok(self.value_of(name).cloned())
    }

    fn set(&mut self, name: &str, options: CookieOptions) -> Result<()> {
        self.deleted.remove(name);
        self.entries.insert(name.to_string(), options);
        Ok(())
    }

    fn delete(&mut self, name: &str, options: CookieOptions) -> Result<()> {
        self.entries.remove(name);
        self.deleted.insert(name.to_string(), options);
        Ok(())
    }
}
