//! Value types consumed by the client.
//!
//! Regions, locales, genders and audio formats are closed tables of identifiers with no
//! behavior of their own; the service is the authority on which combinations are valid.
//! [`Region`] and [`Locale`] accept unlisted values through a `Custom` variant so that
//! new service regions and locales need no code change.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Region`] | Cloud region used to derive endpoints |
//! | [`Locale`] | Language tag placed in the SSML payload |
//! | [`Gender`] | Voice gender placed in the SSML payload |
//! | [`AudioOutput`] | Output format sent as a request header |
//! | [`VoiceRequest`] | Per-call text, voice, locale and gender |

/// Declares an identifier table backed by string literals, with a `Custom` escape hatch.
macro_rules! string_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Value not present in the built-in table.
            Custom(String),
        }

        impl $name {
            /// The identifier as the service expects it.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Custom(value) => value.as_str(),
                }
            }

            /// Every built-in value, in table order.
            pub fn known() -> Vec<Self> {
                vec![$(Self::$variant,)+]
            }

            pub fn is_custom(&self) -> bool {
                matches!(self, Self::Custom(_))
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            /// Case-insensitive lookup; unknown values become `Custom`.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($value) {
                        return Ok(Self::$variant);
                    }
                )+
                Ok(Self::Custom(s.to_string()))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.parse() {
                    Ok(parsed) => parsed,
                    Err(never) => match never {},
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Custom(value) => value,
                    other => other.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod audio;
pub mod locale;
pub mod region;
pub mod voice;

pub use audio::AudioOutput;
pub use locale::Locale;
pub use region::Region;
pub use voice::{Gender, VoiceRequest};
