#[derive(Debug, thiserror::Error)]
pub enum CookieError {
    #[error("Invalid attribute name: {0:?} is not a symbolic identifier")]
    InvalidAttributeName(String),

    #[error("Attribute {0:?} is already declared")]
    DuplicateAttribute(String),

    #[error("Cookie {cookie:?} is multi-valued; use its named attributes")]
    AccessDenied { cookie: String },

    #[error("Cookie {cookie:?} has no attribute named {attribute:?}")]
    UnknownAttribute { cookie: String, attribute: String },

    #[error("No cookie name declared or supplied")]
    MissingCookieName,

    #[error("Request carries no cookie jar")]
    MissingJar,

    #[error("Cookie jar lock is poisoned")]
    JarLockPoisoned,

    #[error("Cookie jar error: {0}")]
    Jar(#[from] anyhow::Error),
}
