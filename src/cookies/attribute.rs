use crate::errors::CookieError;

/// Options for a declared attribute.
#[derive(Debug, Clone, Default)]
pub struct AttributeOptions {
    /// Key the attribute is stored under inside the cookie. Defaults to the attribute name.
    pub store_as: Option<String>,
}

impl AttributeOptions {
    pub fn store_as(key: impl Into<String>) -> Self {
        Self {
            store_as: Some(key.into()),
        }
    }
}

/// A named sub-value of a multi-valued cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    name: String,
    storage_key: String,
}

impl AttributeDescriptor {
    pub(crate) fn new(name: &str, options: AttributeOptions) -> Result<Self, CookieError> {
        if !is_symbol(name) {
            return Err(CookieError::InvalidAttributeName(name.to_string()));
        }

        let storage_key = options.store_as.unwrap_or_else(|| name.to_string());
        Ok(Self {
            name: name.to_string(),
            storage_key,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}

/// Attribute names must be plain identifiers: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_symbol(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_defaults_to_name() {
        let attr = AttributeDescriptor::new("value1", AttributeOptions::default()).unwrap();
        assert_eq!(attr.name(), "value1");
        assert_eq!(attr.storage_key(), "value1");
    }

    #[test]
    fn storage_key_can_be_overridden() {
        let attr = AttributeDescriptor::new("value2", AttributeOptions::store_as("val2")).unwrap();
        assert_eq!(attr.name(), "value2");
        assert_eq!(attr.storage_key(), "val2");
    }

    #[test]
    fn rejects_non_identifier_names() {
        for bad in ["", "1abc", "with space", "dash-ed", "émoji", "a.b"] {
            let err = AttributeDescriptor::new(bad, AttributeOptions::default()).unwrap_err();
            assert!(matches!(err, CookieError::InvalidAttributeName(ref n) if n == bad));
        }
    }

    #[test]
    fn accepts_identifier_names() {
        for good in ["a", "_private", "user_id", "Value2"] {
            assert!(AttributeDescriptor::new(good, AttributeOptions::default()).is_ok());
        }
    }
}
