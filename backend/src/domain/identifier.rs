//! UUID-backed identifier newtypes for directory entities.

use thiserror::Error;

/// Validation errors returned when parsing an entity identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdValidationError {
    /// Input was empty.
    #[error("identifier must not be empty")]
    Empty,
    /// Input was padded or not a UUID.
    #[error("identifier must be a valid UUID")]
    Invalid,
}

/// Defines an opaque identifier newtype wrapping a [`uuid::Uuid`].
///
/// Generated types are `Copy`, compare by UUID value, display in hyphenated
/// form, and serialise as strings.
macro_rules! define_entity_id {
    (
        $(#[$outer:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$outer])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Parse an identifier from its textual form.
            pub fn new(
                id: impl AsRef<str>,
            ) -> Result<Self, $crate::domain::IdValidationError> {
                let raw = id.as_ref();
                if raw.is_empty() {
                    return Err($crate::domain::IdValidationError::Empty);
                }
                if raw.trim() != raw {
                    return Err($crate::domain::IdValidationError::Invalid);
                }
                ::uuid::Uuid::parse_str(raw)
                    .map(Self)
                    .map_err(|_| $crate::domain::IdValidationError::Invalid)
            }

            /// Generate a fresh random identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: ::uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Borrow the underlying UUID.
            #[must_use]
            pub fn as_uuid(&self) -> &::uuid::Uuid {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::IdValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::domain::IdValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

pub(crate) use define_entity_id;
