use std::sync::{Arc, RwLockWriteGuard};
use std::time::Duration;

use serde_json::Value;
use time::OffsetDateTime;

use crate::cookies::definition::{CookieDefinition, CookieKind};
use crate::cookies::options::{CookieDomain, CookieOptions};
use crate::cookies::request::CookieRequest;
use crate::errors::CookieError;
use crate::jar::{CookieJar, CookieJarHandle};

/// Per-instance options.
#[derive(Debug, Clone, Default)]
pub struct InstanceOptions {
    /// Overrides the declared storage name (e.g. for legacy cookie names).
    pub cookie_name: Option<String>,
    /// Whether the current request is secure. When `None`, [`Cookie::find`]
    /// derives it from the request scheme.
    pub secure_request: Option<bool>,
}

/// A cookie of a declared type, bound to one jar.
///
/// Creating a `Cookie` never touches the jar; every access is a fresh jar
/// round trip.
#[derive(Clone)]
pub struct Cookie {
    definition: Arc<CookieDefinition>,
    jar: CookieJarHandle,
    name: String,
    secure_request: Option<bool>,
}

impl std::fmt::Debug for Cookie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cookie")
            .field("name", &self.name)
            .field("secure_request", &self.secure_request)
            .field("definition", &self.definition)
            .finish_non_exhaustive()
    }
}

impl Cookie {
    /// Binds a cookie of type `definition` to the jar of `request`.
    ///
    /// When `options.secure_request` is not given it is set from the request
    /// scheme; an explicit value always wins.
    pub fn find<R>(
        definition: &Arc<CookieDefinition>,
        request: &R,
        mut options: InstanceOptions,
    ) -> Result<Self, CookieError>
    where
        R: CookieRequest + ?Sized,
    {
        let jar = request.cookie_jar().ok_or(CookieError::MissingJar)?;
        if options.secure_request.is_none() {
            options.secure_request = Some(request.scheme() == definition.secure_scheme());
        }
        Self::new(definition.clone(), jar, options)
    }

    pub fn new(
        definition: Arc<CookieDefinition>,
        jar: CookieJarHandle,
        options: InstanceOptions,
    ) -> Result<Self, CookieError> {
        let name = options
            .cookie_name
            .as_deref()
            .or(definition.storage_name())
            .ok_or(CookieError::MissingCookieName)?
            .to_lowercase();

        Ok(Self {
            definition,
            jar,
            name,
            secure_request: options.secure_request,
        })
    }

    /// Effective (lower-cased) cookie name in the jar.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &Arc<CookieDefinition> {
        &self.definition
    }

    /// Whether this cookie belongs to a secure request. Unknown counts as secure.
    pub fn is_secure_request(&self) -> bool {
        self.secure_request.unwrap_or(true)
    }

    pub fn is_secure(&self) -> bool {
        self.definition.is_secure()
    }

    pub fn is_http_only(&self) -> bool {
        self.definition.is_http_only()
    }

    pub fn domain(&self) -> Option<&CookieDomain> {
        self.definition.domain()
    }

    pub fn lifetime(&self) -> Option<Duration> {
        self.definition.lifetime()
    }

    /// Current value of a single-valued cookie.
    ///
    /// Fails with [`CookieError::AccessDenied`] once the type declares attributes.
    pub fn value(&self) -> Result<Option<Value>, CookieError> {
        self.ensure_single_valued()?;
        self.read()
    }

    /// Stores `value`, with all declared policies applied.
    ///
    /// Fails with [`CookieError::AccessDenied`] once the type declares attributes.
    pub fn set_value(&self, value: impl Into<Value>) -> Result<(), CookieError> {
        self.ensure_single_valued()?;
        self.write(value.into())
    }

    /// Removes the cookie. The declared policies still run so the jar can
    /// expire it with matching domain and flags.
    pub fn delete(&self) -> Result<(), CookieError> {
        let mut options = CookieOptions::default();
        self.definition.pipeline().apply(&mut options, OffsetDateTime::now_utc());

        log::trace!("deleting cookie {:?}", self.name);
        self.lock_jar()?.delete(&self.name, options)?;
        Ok(())
    }

    fn ensure_single_valued(&self) -> Result<(), CookieError> {
        match self.definition.kind() {
            CookieKind::SingleValued => Ok(()),
            CookieKind::MultiValued => Err(CookieError::AccessDenied {
                cookie: self.name.clone(),
            }),
        }
    }

    /// Raw value in the jar. Owned, so a nested mapping is a copy of the jar's.
    pub(crate) fn read(&self) -> Result<Option<Value>, CookieError> {
        let jar = self.jar.read().map_err(|_| CookieError::JarLockPoisoned)?;
        Ok(jar.get(&self.name)?)
    }

    pub(crate) fn write(&self, value: Value) -> Result<(), CookieError> {
        let mut jar = self.lock_jar()?;
        self.store(&mut *jar, value)
    }

    /// Write lock on the jar, for read-modify-write sequences that must not interleave.
    pub(crate) fn lock_jar(
        &self,
    ) -> Result<RwLockWriteGuard<'_, dyn CookieJar + Send + Sync + 'static>, CookieError> {
        self.jar.write().map_err(|_| CookieError::JarLockPoisoned)
    }

    /// Applies the pipeline to `value` and stores it into an already locked jar.
    pub(crate) fn store(
        &self,
        jar: &mut (dyn CookieJar + Send + Sync + 'static),
        value: Value,
    ) -> Result<(), CookieError> {
        let mut options = CookieOptions {
            value: Some(value),
            secure_request: Some(self.is_secure_request()),
            ..CookieOptions::default()
        };
        self.definition.pipeline().apply(&mut options, OffsetDateTime::now_utc());

        log::trace!(
            "storing cookie {:?} ({} rules applied)",
            self.name,
            self.definition.pipeline().len()
        );
        jar.set(&self.name, options)?;
        Ok(())
    }
}
