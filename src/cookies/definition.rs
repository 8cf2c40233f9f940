use std::sync::Arc;
use std::time::Duration;

use crate::config::CookieConfig;
use crate::cookies::attribute::{AttributeDescriptor, AttributeOptions};
use crate::cookies::options::{CookieDomain, OptionPipeline, OptionRule};
use crate::errors::CookieError;
use crate::registry::CookieRegistry;

/// How values of a cookie type are accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieKind {
    /// One value, read and written through `value` / `set_value`.
    SingleValued,
    /// Named attributes packed into one cookie.
    MultiValued,
}

/// Declared metadata of one cookie type.
///
/// Built once with a [`CookieDefinitionBuilder`], then shared (read-only) by
/// every [`Cookie`](crate::cookies::Cookie) of that type.
#[derive(Debug, Clone)]
pub struct CookieDefinition {
    storage_name: Option<String>,
    domain: Option<CookieDomain>,
    lifetime: Option<Duration>,
    secure_requests_only: bool,
    http_only: bool,
    multi_valued: bool,
    attributes: Vec<AttributeDescriptor>,
    pipeline: OptionPipeline,
    secure_scheme: String,
}

impl CookieDefinition {
    /// Entry point to start declaring a cookie type.
    pub fn builder() -> CookieDefinitionBuilder {
        CookieDefinitionBuilder::with_config(CookieConfig::default())
    }

    /// Declared storage name, lower-cased.
    pub fn storage_name(&self) -> Option<&str> {
        self.storage_name.as_deref()
    }

    pub fn domain(&self) -> Option<&CookieDomain> {
        self.domain.as_ref()
    }

    pub fn lifetime(&self) -> Option<Duration> {
        self.lifetime
    }

    /// Returns `true` if the cookie is only marked secure on secure requests.
    pub fn is_secure(&self) -> bool {
        self.secure_requests_only
    }

    pub fn is_http_only(&self) -> bool {
        self.http_only
    }

    pub fn is_multi_valued(&self) -> bool {
        self.multi_valued || self.has_attributes()
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Access mode of this type. Only declared attributes switch a type to
    /// [`CookieKind::MultiValued`]; the bare `multi_valued` marker does not.
    pub fn kind(&self) -> CookieKind {
        if self.has_attributes() {
            CookieKind::MultiValued
        } else {
            CookieKind::SingleValued
        }
    }

    /// Declared attributes, in declaration order.
    pub fn attributes(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    pub fn pipeline(&self) -> &OptionPipeline {
        &self.pipeline
    }

    /// Scheme that marks a request as secure.
    pub fn secure_scheme(&self) -> &str {
        &self.secure_scheme
    }
}

/// Sequential declarations that make up a [`CookieDefinition`].
///
/// Every policy declaration appends one rule to the option pipeline, so the
/// order of calls is the order rules are applied in.
///
/// ```
/// use std::time::Duration;
/// use gosub_cookies::cookies::{AttributeOptions, CookieDefinition, CookieDomain};
///
/// let prefs = CookieDefinition::builder()
///     .store_as("prefs")
///     .domain(CookieDomain::All)
///     .lifetime(Duration::from_secs(3600))
///     .http_only()
///     .attribute("theme", AttributeOptions::default())?
///     .attribute("language", AttributeOptions::store_as("lang"))?
///     .build();
///
/// assert!(prefs.is_multi_valued());
/// # Ok::<(), gosub_cookies::CookieError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CookieDefinitionBuilder {
    config: CookieConfig,
    definition: CookieDefinition,
}

impl CookieDefinitionBuilder {
    pub fn with_config(config: CookieConfig) -> Self {
        let definition = CookieDefinition {
            storage_name: None,
            domain: None,
            lifetime: None,
            secure_requests_only: false,
            http_only: false,
            multi_valued: false,
            attributes: Vec::new(),
            pipeline: OptionPipeline::new(),
            secure_scheme: config.secure_scheme.clone(),
        };
        Self { config, definition }
    }

    /// Name of the cookie in the jar. The definition is registered under it
    /// only once sealed with [`build`](Self::build) or [`build_in`](Self::build_in);
    /// a builder that is never sealed registers nothing.
    pub fn store_as(mut self, name: impl Into<String>) -> Self {
        self.definition.storage_name = Some(name.into().to_lowercase());
        self
    }

    pub fn domain(mut self, domain: impl Into<CookieDomain>) -> Self {
        let domain = domain.into();
        self.definition.domain = Some(domain.clone());
        self.definition.pipeline.push(OptionRule::Domain(domain));
        self
    }

    /// Cookie expires `lifetime` after each write. Without it the cookie lives for the session.
    pub fn lifetime(mut self, lifetime: Duration) -> Self {
        self.definition.lifetime = Some(lifetime);
        self.definition.pipeline.push(OptionRule::Lifetime(lifetime));
        self
    }

    /// Shorthand for a lifetime of [`CookieConfig::permanent_lifetime`].
    pub fn permanent(self) -> Self {
        let lifetime = self.config.permanent_lifetime();
        self.lifetime(lifetime)
    }

    pub fn secure_requests_only(mut self) -> Self {
        self.definition.secure_requests_only = true;
        self.definition.pipeline.push(OptionRule::SecureRequestsOnly);
        self
    }

    pub fn http_only(mut self) -> Self {
        self.definition.http_only = true;
        self.definition.pipeline.push(OptionRule::HttpOnly);
        self
    }

    /// Marks the type as multi-valued even before any attribute is declared.
    pub fn multi_valued(mut self) -> Self {
        self.definition.multi_valued = true;
        self
    }

    /// Declares a named attribute. From the first attribute on, the single
    /// value of the cookie is no longer accessible from the outside.
    pub fn attribute(mut self, name: &str, options: AttributeOptions) -> Result<Self, CookieError> {
        let attribute = AttributeDescriptor::new(name, options)?;
        if self.definition.attribute(attribute.name()).is_some() {
            return Err(CookieError::DuplicateAttribute(attribute.name().to_string()));
        }
        self.definition.attributes.push(attribute);
        Ok(self)
    }

    /// Seals the definition and registers it (when named) in the process-wide registry.
    pub fn build(self) -> Arc<CookieDefinition> {
        self.build_in(CookieRegistry::global())
    }

    /// Seals the definition and registers it (when named) in `registry`.
    pub fn build_in(self, registry: &CookieRegistry) -> Arc<CookieDefinition> {
        let definition = self.build_unregistered();
        if definition.storage_name().is_some() {
            registry.register(definition.clone());
        }
        definition
    }

    /// Seals the definition without registering it anywhere.
    pub fn build_unregistered(self) -> Arc<CookieDefinition> {
        log::trace!(
            "sealing cookie definition {:?} ({} rules, {} attributes)",
            self.definition.storage_name,
            self.definition.pipeline.len(),
            self.definition.attributes.len()
        );
        Arc::new(self.definition)
    }
}
