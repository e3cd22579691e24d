//! Per-call voice parameters.

use super::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of the synthesized voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(crate::Error::configuration_with_context(
                format!("unknown gender: {}", s),
                crate::ErrorContext::new()
                    .with_field_path("gender")
                    .with_details("expected Male or Female"),
            )),
        }
    }
}

/// What to say and how to say it.
///
/// Nothing here is validated locally: an unsupported voice/locale/gender combination is
/// reported by the service as a remote error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceRequest {
    /// Text to speak, inserted verbatim into the payload.
    pub text: String,
    /// Voice name, e.g. `en-US-AvaMultilingualNeural`.
    pub voice: String,
    pub locale: Locale,
    pub gender: Gender,
}

impl VoiceRequest {
    pub fn new(
        text: impl Into<String>,
        voice: impl Into<String>,
        locale: impl Into<Locale>,
        gender: Gender,
    ) -> Self {
        Self {
            text: text.into(),
            voice: voice.into(),
            locale: locale.into(),
            gender,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }
}
