//! Voice catalogue entries.

use crate::types::{Gender, Locale};
use serde::{Deserialize, Serialize};

/// One entry of the region's voice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VoiceInfo {
    /// Fully qualified service name.
    pub name: String,
    /// Name to use in the SSML `name` attribute, e.g. `en-US-AvaMultilingualNeural`.
    pub short_name: String,
    /// `Male`, `Female` or `Neutral`.
    pub gender: String,
    pub locale: Locale,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub local_name: Option<String>,
    #[serde(default)]
    pub sample_rate_hertz: Option<String>,
    #[serde(default)]
    pub voice_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl VoiceInfo {
    /// The voice's gender, if it is one the payload can express.
    pub fn gender(&self) -> Option<Gender> {
        match self.gender.as_str() {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }
}
