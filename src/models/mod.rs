//! Request and response bodies for the Datadog v2 API.
//!
//! Three shapes appear throughout:
//! - plain structs, where optional members are skipped when unset;
//! - closed string enums, validated on deserialization (see [`string_enum!`]);
//! - oneOf unions, which keep the raw JSON in an `UnparsedObject` variant
//!   unless exactly one alternative decodes.

use thiserror::Error;

/// Returned when a string is not in an enum's allowed value set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value {value:?} for {type_name}, allowed values are {allowed:?}")]
pub struct InvalidEnumValue {
    pub type_name: &'static str,
    pub value: String,
    pub allowed: &'static [&'static str],
}

/// Declares a closed string enum with its wire values.
///
/// Serialization writes the wire value; deserialization rejects anything
/// outside the allowed set.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALLOWED_VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $value ),+
                }
            }

            pub fn is_valid(value: &str) -> bool {
                Self::ALLOWED_VALUES.contains(&value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::models::InvalidEnumValue;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $( $value => Ok(Self::$variant), )+
                    other => Err($crate::models::InvalidEnumValue {
                        type_name: stringify!($name),
                        value: other.to_string(),
                        allowed: Self::ALLOWED_VALUES,
                    }),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                value.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

/// Makes response item models decode leniently.
///
/// The model derives its serde impls with `#[serde(remote = "Self")]`, which
/// leaves them as inherent functions, and carries a skipped
/// `unparsed_object: Option<serde_json::Value>`. A payload the derived impl
/// rejects is kept whole in `unparsed_object` and serialized back verbatim.
macro_rules! unparsed_fallback {
    ($($name:ident),+ $(,)?) => {$(
        impl $name {
            /// Whether the payload did not match the model and was kept raw.
            pub fn is_unparsed(&self) -> bool {
                self.unparsed_object.is_some()
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match &self.unparsed_object {
                    Some(raw) => ::serde::Serialize::serialize(raw, serializer),
                    None => $name::serialize(self, serializer),
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                match $name::deserialize(&raw) {
                    Ok(parsed) => Ok(parsed),
                    Err(e) => {
                        ::log::debug!("Keeping unparsed {}: {}", stringify!($name), e);
                        Ok(Self {
                            unparsed_object: Some(raw),
                            ..Default::default()
                        })
                    }
                }
            }
        }
    )+};
}

mod common;
mod incident_teams;
mod logs;
mod metrics;
mod nullable;
mod one_of;
mod query;
mod roles;
mod service_definition;

pub use common::*;
pub use incident_teams::*;
pub use logs::*;
pub use metrics::*;
pub use nullable::Nullable;
pub use query::*;
pub use roles::*;
pub use service_definition::*;

pub(crate) use one_of::{exactly_one, try_variant};
