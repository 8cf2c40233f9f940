/// Generates a typed wrapper around a multi-valued [`Cookie`](crate::cookies::Cookie)
/// with one getter and one setter per attribute.
///
/// ```
/// use gosub_cookies::cookie_attributes;
/// use gosub_cookies::cookies::{AttributeOptions, Cookie, CookieDefinition, InstanceOptions};
/// use gosub_cookies::jar::InMemoryCookieJar;
///
/// cookie_attributes! {
///     pub struct Preferences {
///         theme => set_theme,
///         language => set_language,
///     }
/// }
///
/// let def = CookieDefinition::builder()
///     .store_as("prefs")
///     .attribute("theme", AttributeOptions::default())?
///     .attribute("language", AttributeOptions::store_as("lang"))?
///     .build_unregistered();
///
/// let jar = InMemoryCookieJar::new().into_handle();
/// let prefs = Preferences::from(Cookie::new(def, jar, InstanceOptions::default())?);
/// prefs.set_theme("dark")?;
/// assert_eq!(prefs.theme()?, Some("dark".into()));
/// # Ok::<(), gosub_cookies::CookieError>(())
/// ```
#[macro_export]
macro_rules! cookie_attributes {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($attribute:ident => $setter:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name($crate::cookies::Cookie);

        impl $name {
            /// The untyped cookie underneath.
            #[allow(dead_code)]
            pub fn cookie(&self) -> &$crate::cookies::Cookie {
                &self.0
            }

            #[allow(dead_code)]
            pub fn delete(&self) -> ::core::result::Result<(), $crate::CookieError> {
                self.0.delete()
            }

            $(
                #[allow(dead_code)]
                pub fn $attribute(
                    &self,
                ) -> ::core::result::Result<
                    ::core::option::Option<$crate::cookies::Value>,
                    $crate::CookieError,
                > {
                    self.0.attribute(stringify!($attribute))
                }

                #[allow(dead_code)]
                pub fn $setter(
                    &self,
                    value: impl ::core::convert::Into<$crate::cookies::Value>,
                ) -> ::core::result::Result<(), $crate::CookieError> {
                    self.0.set_attribute(stringify!($attribute), value)
                }
            )*
        }

        impl ::core::convert::From<$crate::cookies::Cookie> for $name {
            fn from(cookie: $crate::cookies::Cookie) -> Self {
                Self(cookie)
            }
        }
    };
}
