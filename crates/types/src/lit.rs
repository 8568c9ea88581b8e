//! Literal types for fixed wire values.
//!
//! The API tags every object with a constant `object` string and marks
//! tombstones with `deleted: true`. The types generated here serialize to
//! exactly that constant and refuse anything else on the way in, so a
//! payload for the wrong resource never deserializes into the wrong struct.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Declares a unit struct standing for one `object` discriminator.
///
/// `lit_str!(PlanObject, "plan")` gives a `PlanObject` whose only wire form
/// is `"plan"`. Decoding `"price"` into it is an error, which is what keeps
/// an untagged union from picking the wrong resource. `VALUE` exposes the
/// string for `Object::object` impls.
macro_rules! lit_str {
    ($(#[$meta:meta])* $struct_name:ident, $val:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $struct_name;

        impl $struct_name {
            pub const VALUE: &'static str = $val;
        }

        impl AsRef<str> for $struct_name {
            fn as_ref(&self) -> &str {
                Self::VALUE
            }
        }

        impl std::str::FromStr for $struct_name {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s == Self::VALUE {
                    Ok($struct_name)
                } else {
                    Err(format!("expected '{}', got '{}'", Self::VALUE, s))
                }
            }
        }

        impl serde::Serialize for $struct_name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(Self::VALUE)
            }
        }

        impl<'de> serde::Deserialize<'de> for $struct_name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                if s == Self::VALUE {
                    Ok($struct_name)
                } else {
                    Err(serde::de::Error::custom(format!(
                        "expected '{}', got '{}'",
                        Self::VALUE,
                        s
                    )))
                }
            }
        }

        impl std::fmt::Display for $struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(Self::VALUE)
            }
        }
    };
}

/// Declares a closed set of wire strings as a Rust enum.
///
/// Used for the unions that are too long to maintain as
/// `#[serde(rename = "...")]` attributes (API versions, event names). The
/// enum gets `as_str`, `ALL`, `FromStr`, `Display` and serde impls; any
/// string outside the set fails to parse.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Get the wire representation
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $val ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $val => Ok($name::$variant), )+
                    other => Err(format!("unknown {} '{}'", stringify!($name), other)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

/// The `true` literal carried by every deleted-object tombstone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LitTrue;

impl Serialize for LitTrue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

impl<'de> Deserialize<'de> for LitTrue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Ok(LitTrue)
        } else {
            Err(serde::de::Error::custom("expected 'true', got 'false'"))
        }
    }
}

impl Display for LitTrue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("true")
    }
}

lit_str!(
    /// Discriminator of the pagination wrapper.
    ListObject,
    "list"
);
lit_str!(
    /// The empty string the API reads as "clear this field".
    EmptyString,
    ""
);
lit_str!(
    /// `up_to: 'inf'` on the last pricing tier.
    Inf,
    "inf"
);
lit_str!(Now, "now");
lit_str!(Unchanged, "unchanged");
lit_str!(Minimum, "minimum");
