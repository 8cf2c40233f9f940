pub mod config;
pub mod cookies;
pub mod errors;
pub mod jar;
pub mod registry;

pub use config::CookieConfig;
pub use cookies::{Cookie, CookieDefinition, InstanceOptions};
pub use errors::CookieError;
pub use jar::{CookieJar, CookieJarHandle, InMemoryCookieJar};
pub use registry::CookieRegistry;
