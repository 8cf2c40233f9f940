//! The only bits of a live request a typed cookie needs: its scheme and its cookie jar.

use url::Url;

use crate::jar::CookieJarHandle;

/// A request typed cookies can be found on.
pub trait CookieRequest {
    /// URL scheme the request came in over (`"http"`, `"https"`, ...).
    fn scheme(&self) -> &str;

    /// The jar holding this request's cookies, if the host attached one.
    fn cookie_jar(&self) -> Option<CookieJarHandle>;
}

/// A request URL paired with its cookie jar.
#[derive(Clone)]
pub struct RequestContext {
    url: Url,
    jar: CookieJarHandle,
}

impl RequestContext {
    pub fn new(url: Url, jar: CookieJarHandle) -> Self {
        Self { url, jar }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

impl CookieRequest for RequestContext {
    fn scheme(&self) -> &str {
        self.url.scheme()
    }

    fn cookie_jar(&self) -> Option<CookieJarHandle> {
        Some(self.jar.clone())
    }
}

/// Hosts built on the `http` crate attach the jar as a request extension.
///
/// Requests whose URI carries no scheme (origin-form, as seen by most servers)
/// report an empty scheme and are therefore treated as insecure.
impl<B> CookieRequest for http::Request<B> {
    fn scheme(&self) -> &str {
        self.uri().scheme_str().unwrap_or_default()
    }

    fn cookie_jar(&self) -> Option<CookieJarHandle> {
        self.extensions().get::<CookieJarHandle>().cloned()
    }
}
