//! Cookie jar abstraction.
//!
//! A **cookie jar** is the host's request-scoped key/value store of cookies.
//! Typed cookies never own a jar: they are handed a [`CookieJarHandle`] and
//! read, store and delete their single entry through it, passing along the
//! [`CookieOptions`] computed by the definition's option pipeline.
//!
//! The jar decides how options end up on the wire (`Set-Cookie` attributes,
//! framework cookie objects, ...). That transport is out of scope here.
//!
//! [`InMemoryCookieJar`] is a reference implementation that keeps everything in
//! memory and remembers the options of every store and delete, which makes it
//! the jar of choice in tests.

mod in_memory;

use crate::cookies::CookieOptions;
use anyhow::Result;
use serde_json::Value;
use std::sync::{Arc, RwLock};

pub use in_memory::InMemoryCookieJar;

/// A handle to a cookie jar.
///
/// Take a **read lock** for lookups and a **write lock** for stores and deletes.
pub type CookieJarHandle = Arc<RwLock<dyn CookieJar + Send + Sync>>;

/// Key/value cookie storage as seen by a typed cookie.
pub trait CookieJar: Send + Sync {
    /// Returns the value stored under `name`, or `None` when there is no such cookie.
    fn get(&self, name: &str) -> Result<Option<Value>>;

    /// Stores `options` (value plus metadata) under `name`, replacing any previous entry.
    fn set(&mut self, name: &str, options: CookieOptions) -> Result<()>;

    /// Removes the cookie `name`. `options` carries the metadata needed to expire it client side.
    fn delete(&mut self, name: &str, options: CookieOptions) -> Result<()>;
}
