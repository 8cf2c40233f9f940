//! Typed cookies: definitions, instances and the option pipeline.
//!
//! A [`CookieDefinition`] describes one kind of cookie: its name in the jar,
//! the policies applied whenever it is written or deleted (domain, lifetime,
//! secure, http-only) and, for multi-valued cookies, the named attributes
//! packed into it. Definitions are declared once with a
//! [`CookieDefinitionBuilder`] and shared behind an `Arc`.
//!
//! A [`Cookie`] binds a definition to the jar of the current request.
//!
//! # Single- and multi-valued cookies
//! - Without attributes a cookie holds one value, accessed with
//!   [`Cookie::value`] / [`Cookie::set_value`].
//! - Once an attribute is declared, the value becomes a JSON object keyed by
//!   storage key and only [`Cookie::attribute`] / [`Cookie::set_attribute`]
//!   (or a wrapper generated by [`cookie_attributes!`](crate::cookie_attributes))
//!   may touch it. The single-value accessors then fail with
//!   [`CookieError::AccessDenied`](crate::CookieError::AccessDenied).
//!
//! # Example
//! ```
//! use gosub_cookies::cookies::{Cookie, CookieDefinition, InstanceOptions, RequestContext};
//! use gosub_cookies::jar::InMemoryCookieJar;
//! use gosub_cookies::registry::CookieRegistry;
//! use url::Url;
//!
//! let registry = CookieRegistry::new();
//! let visits = CookieDefinition::builder()
//!     .store_as("visits")
//!     .permanent()
//!     .secure_requests_only()
//!     .build_in(&registry);
//!
//! let jar = InMemoryCookieJar::new().into_handle();
//! let request = RequestContext::new(Url::parse("https://example.com/").unwrap(), jar);
//!
//! let cookie = Cookie::find(&visits, &request, InstanceOptions::default())?;
//! cookie.set_value(1)?;
//! assert_eq!(cookie.value()?, Some(1.into()));
//! # Ok::<(), gosub_cookies::CookieError>(())
//! ```

mod attribute;
mod cookie;
mod definition;
mod macros;
mod multi_value;
mod options;
mod request;

pub use attribute::{AttributeDescriptor, AttributeOptions};
pub use cookie::{Cookie, InstanceOptions};
pub use definition::{CookieDefinition, CookieDefinitionBuilder, CookieKind};
pub use options::{CookieDomain, CookieOptions, OptionPipeline, OptionRule};
pub use request::{CookieRequest, RequestContext};

/// Values stored in cookies.
pub use serde_json::Value;
