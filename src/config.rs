use serde::Deserialize;
use std::time::Duration;

/// Twenty years of 365.25 days, in seconds.
const DEFAULT_PERMANENT_LIFETIME_SECS: u64 = 60 * 60 * 24 * 36525 / 100 * 20;
const DEFAULT_SECURE_SCHEME: &str = "https";

/// Configuration shared by cookie definitions built from the same builder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CookieConfig {
    /// Lifetime (in seconds) given to cookies declared as permanent
    pub permanent_lifetime: u64,
    /// Request scheme that marks a request as secure when none is given explicitly
    pub secure_scheme: String,
}

impl CookieConfig {
    pub fn permanent_lifetime(&self) -> Duration {
        Duration::from_secs(self.permanent_lifetime)
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            permanent_lifetime: DEFAULT_PERMANENT_LIFETIME_SECS,
            secure_scheme: DEFAULT_SECURE_SCHEME.to_string(),
        }
    }
}
