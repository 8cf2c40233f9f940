//! Option bag and the ordered rule pipeline that fills it.

use serde_json::Value;
use std::time::Duration;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Domain a cookie is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieDomain {
    /// The request host and all of its subdomains.
    All,
    /// An explicit domain such as `"example.com"`.
    Name(String),
}

impl From<&str> for CookieDomain {
    fn from(s: &str) -> Self {
        CookieDomain::Name(s.to_string())
    }
}

impl From<String> for CookieDomain {
    fn from(s: String) -> Self {
        CookieDomain::Name(s)
    }
}

/// Options handed to the jar on every store and delete.
///
/// `None` means "not set"; jars must not invent defaults for absent fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieOptions {
    /// Value to store. Always `None` for deletes.
    pub value: Option<Value>,

    /// Whether the request this cookie belongs to came in over a secure scheme.
    pub secure_request: Option<bool>,

    /// `Secure` attribute.
    pub secure: Option<bool>,

    /// `HttpOnly` attribute.
    pub http_only: Option<bool>,

    /// `Domain` attribute.
    pub domain: Option<CookieDomain>,

    /// Expiration timestamp. Session cookies have `None`.
    pub expires: Option<OffsetDateTime>,
}

/// One declared policy, applied to an option bag.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionRule {
    Domain(CookieDomain),
    /// Expires the cookie this long after the moment of the write (or delete).
    Lifetime(Duration),
    /// Marks the cookie secure, but only when the bag says the request was secure.
    SecureRequestsOnly,
    HttpOnly,
}

impl OptionRule {
    /// Applies the rule to `bag`. Rules only add or overwrite fields.
    pub fn apply(&self, bag: &mut CookieOptions, now: OffsetDateTime) {
        match self {
            OptionRule::Domain(domain) => bag.domain = Some(domain.clone()),
            OptionRule::Lifetime(lifetime) => bag.expires = Some(expiry_after(now, *lifetime)),
            OptionRule::SecureRequestsOnly => {
                if bag.secure_request == Some(true) {
                    bag.secure = Some(true);
                }
            }
            OptionRule::HttpOnly => bag.http_only = Some(true),
        }
    }
}

/// `now + lifetime`, saturating at the latest representable timestamp.
fn expiry_after(now: OffsetDateTime, lifetime: Duration) -> OffsetDateTime {
    time::Duration::try_from(lifetime)
        .ok()
        .and_then(|lifetime| now.checked_add(lifetime))
        .unwrap_or_else(|| PrimitiveDateTime::MAX.assume_utc())
}

/// Rules in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionPipeline {
    rules: Vec<OptionRule>,
}

impl OptionPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, rule: OptionRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[OptionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule against `bag`, in declaration order, with a single clock reading.
    pub fn apply(&self, bag: &mut CookieOptions, now: OffsetDateTime) {
        for rule in &self.rules {
            rule.apply(bag, now);
        }
    }
}
