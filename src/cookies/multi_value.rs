//! Named attributes packed into one cookie.
//!
//! A multi-valued cookie stores a single JSON object in the jar. Each declared
//! attribute owns one key of that object (its storage key). Every attribute
//! write stores the whole object again with all declared policies applied,
//! under a single write lock on the jar.

use serde_json::{Map, Value};

use crate::cookies::attribute::AttributeDescriptor;
use crate::cookies::cookie::Cookie;
use crate::errors::CookieError;

impl Cookie {
    /// Current value of the attribute `name`.
    pub fn attribute(&self, name: &str) -> Result<Option<Value>, CookieError> {
        let key = self.descriptor(name)?.storage_key().to_string();
        let mut values = attribute_map(self.read()?);
        Ok(values.remove(&key))
    }

    /// Stores `value` for the attribute `name`, keeping all other attributes.
    ///
    /// The jar stays write-locked from reading the current attributes until the
    /// updated mapping is stored, so concurrent writers of other attributes on
    /// the same jar cannot drop this one.
    pub fn set_attribute(&self, name: &str, value: impl Into<Value>) -> Result<(), CookieError> {
        let key = self.descriptor(name)?.storage_key().to_string();

        let mut jar = self.lock_jar()?;
        let mut values = attribute_map(jar.get(self.name())?);
        values.insert(key, value.into());
        self.store(&mut *jar, Value::Object(values))
    }

    fn descriptor(&self, name: &str) -> Result<&AttributeDescriptor, CookieError> {
        self.definition()
            .attribute(name)
            .ok_or_else(|| CookieError::UnknownAttribute {
                cookie: self.name().to_string(),
                attribute: name.to_string(),
            })
    }
}

/// Stored attribute mapping, keyed by storage key. Anything other than an
/// object in the jar reads as no attributes at all.
fn attribute_map(stored: Option<Value>) -> Map<String, Value> {
    match stored {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::{AttributeOptions, CookieDefinition, CookieDomain, InstanceOptions};
    use crate::jar::{CookieJarHandle, InMemoryCookieJar};
    use serde_json::json;
    use std::sync::{Arc, RwLock};

    fn multi_valued() -> Arc<CookieDefinition> {
        CookieDefinition::builder()
            .store_as("mvc")
            .attribute("value1", AttributeOptions::default())
            .unwrap()
            .attribute("value2", AttributeOptions::store_as("val2"))
            .unwrap()
            .build_unregistered()
    }

    fn cookie(def: Arc<CookieDefinition>) -> (Arc<RwLock<InMemoryCookieJar>>, Cookie) {
        let shared = InMemoryCookieJar::new().into_shared();
        let handle: CookieJarHandle = shared.clone();
        (shared, Cookie::new(def, handle, InstanceOptions::default()).unwrap())
    }

    #[test]
    fn attribute_update_lands_in_the_jar() {
        let (shared, cookie) = cookie(multi_valued());
        cookie.set_attribute("value1", "myval").unwrap();
        assert_eq!(shared.read().unwrap().value_of("mvc"), Some(&json!({ "value1": "myval" })));
    }

    #[test]
    fn attributes_are_independently_readable() {
        let (_, cookie) = cookie(multi_valued());
        cookie.set_attribute("value1", "myval1").unwrap();
        cookie.set_attribute("value2", "myval2").unwrap();
        cookie.set_attribute("value1", "again").unwrap();

        assert_eq!(cookie.attribute("value1").unwrap(), Some(json!("again")));
        assert_eq!(cookie.attribute("value2").unwrap(), Some(json!("myval2")));
    }

    #[test]
    fn store_as_overrides_the_key_in_the_jar() {
        let (shared, cookie) = cookie(multi_valued());
        cookie.set_attribute("value1", "a").unwrap();
        cookie.set_attribute("value2", "b").unwrap();

        let jar = shared.read().unwrap();
        assert_eq!(jar.names(), vec!["mvc".to_string()]);
        assert_eq!(jar.value_of("mvc"), Some(&json!({ "value1": "a", "val2": "b" })));
    }

    #[test]
    fn unset_attribute_reads_as_none() {
        let (_, cookie) = cookie(multi_valued());
        assert_eq!(cookie.attribute("value1").unwrap(), None);
        cookie.set_attribute("value2", "only me").unwrap();
        assert_eq!(cookie.attribute("value1").unwrap(), None);
    }

    #[test]
    fn undeclared_attribute_is_rejected() {
        let (shared, cookie) = cookie(multi_valued());
        let err = cookie.set_attribute("value3", "x").unwrap_err();
        assert!(matches!(
            err,
            CookieError::UnknownAttribute { ref cookie, ref attribute }
                if cookie == "mvc" && attribute == "value3"
        ));
        assert!(matches!(cookie.attribute("val2"), Err(CookieError::UnknownAttribute { .. })));
        assert!(shared.read().unwrap().is_empty());
    }

    #[test]
    fn every_attribute_write_applies_the_pipeline() {
        let def = CookieDefinition::builder()
            .store_as("prefs")
            .domain(CookieDomain::All)
            .http_only()
            .attribute("theme", AttributeOptions::default())
            .unwrap()
            .build_unregistered();
        let (shared, cookie) = cookie(def);

        cookie.set_attribute("theme", "dark").unwrap();

        let jar = shared.read().unwrap();
        let metadata = jar.metadata_for("prefs").unwrap();
        assert_eq!(metadata.domain, Some(CookieDomain::All));
        assert_eq!(metadata.http_only, Some(true));
        assert_eq!(metadata.value, Some(json!({ "theme": "dark" })));
    }

    #[test]
    fn non_object_value_reads_as_empty() {
        let handle =
            InMemoryCookieJar::with_values([("mvc", json!("legacy plain value"))]).into_handle();
        let cookie = Cookie::new(multi_valued(), handle, InstanceOptions::default()).unwrap();

        assert_eq!(cookie.attribute("value1").unwrap(), None);
        cookie.set_attribute("value1", "fresh").unwrap();
        assert_eq!(cookie.attribute("value1").unwrap(), Some(json!("fresh")));
    }

    #[test]
    fn delete_removes_all_attributes() {
        let (shared, cookie) = cookie(multi_valued());
        cookie.set_attribute("value1", "a").unwrap();
        cookie.delete().unwrap();

        assert!(shared.read().unwrap().is_deleted("mvc"));
        assert_eq!(cookie.attribute("value1").unwrap(), None);
    }

    #[test]
    fn clones_on_one_jar_keep_each_others_attributes() {
        let (shared, first) = cookie(multi_valued());
        let second = first.clone();

        first.set_attribute("value1", "from first").unwrap();
        second.set_attribute("value2", "from second").unwrap();

        assert_eq!(
            shared.read().unwrap().value_of("mvc"),
            Some(&json!({ "value1": "from first", "val2": "from second" }))
        );
    }

    #[test]
    fn concurrent_attribute_writes_are_not_lost() {
        let names: Vec<String> = (0..8).map(|i| format!("field{i}")).collect();
        let mut builder = CookieDefinition::builder().store_as("shared");
        for name in &names {
            builder = builder.attribute(name, AttributeOptions::default()).unwrap();
        }
        let (shared, cookie) = cookie(builder.build_unregistered());

        std::thread::scope(|s| {
            for name in &names {
                let cookie = cookie.clone();
                s.spawn(move || {
                    for round in 0..20 {
                        cookie.set_attribute(name, round).unwrap();
                    }
                });
            }
        });

        let jar = shared.read().unwrap();
        let stored = jar.value_of("shared").unwrap().as_object().unwrap();
        assert_eq!(stored.len(), names.len());
        for name in &names {
            assert_eq!(stored.get(name), Some(&json!(19)));
        }
    }
}
