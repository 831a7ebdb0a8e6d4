/// A macro that generates the string-backed ID newtypes our models are keyed
/// by. Provider-assigned ids come to us over the wire as strings, so the
/// newtypes are `#[serde(transparent)]` wrappers that keep the wire shape
/// while making it impossible to hand a product id to a warehouse lookup.
#[macro_export]
macro_rules! model_id {
    (
        $(#[$struct_meta:meta])*
        pub struct $name:ident
    ) => {
        $(#[$struct_meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new<T: Into<String>>(id: T) -> Self {
                Self(id.into())
            }

            /// Return a string ref for this ID
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            /// An id the host platform never filled in. Treated as absent,
            /// not as a real key.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Make a random id. Great for testing.
            #[cfg(test)]
            pub(crate) fn create() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }
        }

        impl std::convert::From<$name> for String {
            fn from(id: $name) -> Self {
                let $name(val) = id;
                val
            }
        }

        impl std::convert::From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::convert::From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    }
}
