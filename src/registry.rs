//! Lookup of cookie definitions by storage name.
//!
//! Definitions land here when they are sealed with a storage name. The
//! registry is meant for enumeration and administration (listing every cookie
//! an application may set, clearing them all on logout, ...), not for the hot
//! path of reading and writing cookies.
//!
//! Registration is expected to happen at startup and [`CookieRegistry::clear`]
//! only in test setup. The map is lock-protected, so concurrent use is safe,
//! but interleaving `clear` with registration is not meaningful.

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::cookies::CookieDefinition;

lazy_static! {
    static ref GLOBAL_REGISTRY: CookieRegistry = CookieRegistry::new();
}

#[derive(Debug, Default)]
pub struct CookieRegistry {
    definitions: RwLock<HashMap<String, Arc<CookieDefinition>>>,
}

impl CookieRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry used by [`CookieDefinitionBuilder::build`].
    ///
    /// [`CookieDefinitionBuilder::build`]: crate::cookies::CookieDefinitionBuilder::build
    pub fn global() -> &'static CookieRegistry {
        &GLOBAL_REGISTRY
    }

    /// Registers `definition` under its storage name. A later registration for
    /// the same name replaces the earlier one. Unnamed definitions are ignored.
    pub fn register(&self, definition: Arc<CookieDefinition>) {
        let Some(name) = definition.storage_name().map(str::to_lowercase) else {
            log::warn!("ignoring registration of an unnamed cookie definition");
            return;
        };

        log::debug!("registering cookie definition {name:?}");
        if self.write().insert(name.clone(), definition).is_some() {
            log::warn!("cookie definition {name:?} replaced an earlier registration");
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<CookieDefinition>> {
        self.read().get(&name.to_lowercase()).cloned()
    }

    /// All registered definitions, in no particular order.
    pub fn all(&self) -> Vec<Arc<CookieDefinition>> {
        self.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Forgets every registration.
    pub fn clear(&self) {
        log::debug!("clearing cookie registry");
        self.write().clear();
    }

    // The map is never left half-updated, so a poisoned lock still holds consistent data.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<CookieDefinition>>> {
        self.definitions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<CookieDefinition>>> {
        self.definitions.write().unwrap_or_else(|e| e.into_inner())
    }
}
