//! Output formats for synthesized audio.
//!
//! The format identifier travels in the `X-Microsoft-OutputFormat` request header and is
//! otherwise opaque to the client.

use crate::{Error, ErrorContext};
use std::fmt;
use std::str::FromStr;

/// Encoding, sample rate and bitrate of the synthesized audio.
///
/// `riff-*` formats are complete WAV files and cannot be streamed; every other format is a
/// streamable encoding.
///
/// See <https://learn.microsoft.com/en-us/azure/ai-services/speech-service/rest-text-to-speech#audio-outputs>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AudioOutput {
    AmrWb16000hz,
    Audio16khz16bit32kbpsMonoOpus,
    Audio16khz32kbitrateMonoMp3,
    Audio16khz64kbitrateMonoMp3,
    Audio16khz128kbitrateMonoMp3,
    Audio24khz16bit24kbpsMonoOpus,
    Audio24khz16bit48kbpsMonoOpus,
    Audio24khz48kbitrateMonoMp3,
    Audio24khz96kbitrateMonoMp3,
    Audio24khz160kbitrateMonoMp3,
    Audio48khz96kbitrateMonoMp3,
    Audio48khz192kbitrateMonoMp3,
    Ogg16khz16bitMonoOpus,
    Ogg24khz16bitMonoOpus,
    Ogg48khz16bitMonoOpus,
    Raw8khz8bitMonoAlaw,
    Raw8khz8bitMonoMulaw,
    Raw8khz16bitMonoPcm,
    Raw16khz16bitMonoPcm,
    Raw16khz16bitMonoTruesilk,
    Raw22050hz16bitMonoPcm,
    Raw24khz16bitMonoPcm,
    Raw24khz16bitMonoTruesilk,
    Raw44100hz16bitMonoPcm,
    Raw48khz16bitMonoPcm,
    Webm16khz16bitMonoOpus,
    Webm24khz16bit24kbpsMonoOpus,
    Webm24khz16bitMonoOpus,
    Riff8khz8bitMonoAlaw,
    Riff8khz8bitMonoMulaw,
    Riff8khz16bitMonoPcm,
    Riff22050hz16bitMonoPcm,
    Riff24khz16bitMonoPcm,
    Riff44100hz16bitMonoPcm,
    Riff48khz16bitMonoPcm,
}

impl AudioOutput {
    /// Every supported format, streaming formats first.
    pub const ALL: [AudioOutput; 35] = [
        Self::AmrWb16000hz,
        Self::Audio16khz16bit32kbpsMonoOpus,
        Self::Audio16khz32kbitrateMonoMp3,
        Self::Audio16khz64kbitrateMonoMp3,
        Self::Audio16khz128kbitrateMonoMp3,
        Self::Audio24khz16bit24kbpsMonoOpus,
        Self::Audio24khz16bit48kbpsMonoOpus,
        Self::Audio24khz48kbitrateMonoMp3,
        Self::Audio24khz96kbitrateMonoMp3,
        Self::Audio24khz160kbitrateMonoMp3,
        Self::Audio48khz96kbitrateMonoMp3,
        Self::Audio48khz192kbitrateMonoMp3,
        Self::Ogg16khz16bitMonoOpus,
        Self::Ogg24khz16bitMonoOpus,
        Self::Ogg48khz16bitMonoOpus,
        Self::Raw8khz8bitMonoAlaw,
        Self::Raw8khz8bitMonoMulaw,
        Self::Raw8khz16bitMonoPcm,
        Self::Raw16khz16bitMonoPcm,
        Self::Raw16khz16bitMonoTruesilk,
        Self::Raw22050hz16bitMonoPcm,
        Self::Raw24khz16bitMonoPcm,
        Self::Raw24khz16bitMonoTruesilk,
        Self::Raw44100hz16bitMonoPcm,
        Self::Raw48khz16bitMonoPcm,
        Self::Webm16khz16bitMonoOpus,
        Self::Webm24khz16bit24kbpsMonoOpus,
        Self::Webm24khz16bitMonoOpus,
        Self::Riff8khz8bitMonoAlaw,
        Self::Riff8khz8bitMonoMulaw,
        Self::Riff8khz16bitMonoPcm,
        Self::Riff22050hz16bitMonoPcm,
        Self::Riff24khz16bitMonoPcm,
        Self::Riff44100hz16bitMonoPcm,
        Self::Riff48khz16bitMonoPcm,
    ];

    /// The header value for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AmrWb16000hz => "amr-wb-16000hz",
            Self::Audio16khz16bit32kbpsMonoOpus => "audio-16khz-16bit-32kbps-mono-opus",
            Self::Audio16khz32kbitrateMonoMp3 => "audio-16khz-32kbitrate-mono-mp3",
            Self::Audio16khz64kbitrateMonoMp3 => "audio-16khz-64kbitrate-mono-mp3",
            Self::Audio16khz128kbitrateMonoMp3 => "audio-16khz-128kbitrate-mono-mp3",
            Self::Audio24khz16bit24kbpsMonoOpus => "audio-24khz-16bit-24kbps-mono-opus",
            Self::Audio24khz16bit48kbpsMonoOpus => "audio-24khz-16bit-48kbps-mono-opus",
            Self::Audio24khz48kbitrateMonoMp3 => "audio-24khz-48kbitrate-mono-mp3",
            Self::Audio24khz96kbitrateMonoMp3 => "audio-24khz-96kbitrate-mono-mp3",
            Self::Audio24khz160kbitrateMonoMp3 => "audio-24khz-160kbitrate-mono-mp3",
            Self::Audio48khz96kbitrateMonoMp3 => "audio-48khz-96kbitrate-mono-mp3",
            Self::Audio48khz192kbitrateMonoMp3 => "audio-48khz-192kbitrate-mono-mp3",
            Self::Ogg16khz16bitMonoOpus => "ogg-16khz-16bit-mono-opus",
            Self::Ogg24khz16bitMonoOpus => "ogg-24khz-16bit-mono-opus",
            Self::Ogg48khz16bitMonoOpus => "ogg-48khz-16bit-mono-opus",
            Self::Raw8khz8bitMonoAlaw => "raw-8khz-8bit-mono-alaw",
            Self::Raw8khz8bitMonoMulaw => "raw-8khz-8bit-mono-mulaw",
            Self::Raw8khz16bitMonoPcm => "raw-8khz-16bit-mono-pcm",
            Self::Raw16khz16bitMonoPcm => "raw-16khz-16bit-mono-pcm",
            Self::Raw16khz16bitMonoTruesilk => "raw-16khz-16bit-mono-truesilk",
            Self::Raw22050hz16bitMonoPcm => "raw-22050hz-16bit-mono-pcm",
            Self::Raw24khz16bitMonoPcm => "raw-24khz-16bit-mono-pcm",
            Self::Raw24khz16bitMonoTruesilk => "raw-24khz-16bit-mono-truesilk",
            Self::Raw44100hz16bitMonoPcm => "raw-44100hz-16bit-mono-pcm",
            Self::Raw48khz16bitMonoPcm => "raw-48khz-16bit-mono-pcm",
            Self::Webm16khz16bitMonoOpus => "webm-16khz-16bit-mono-opus",
            Self::Webm24khz16bit24kbpsMonoOpus => "webm-24khz-16bit-24kbps-mono-opus",
            Self::Webm24khz16bitMonoOpus => "webm-24khz-16bit-mono-opus",
            Self::Riff8khz8bitMonoAlaw => "riff-8khz-8bit-mono-alaw",
            Self::Riff8khz8bitMonoMulaw => "riff-8khz-8bit-mono-mulaw",
            Self::Riff8khz16bitMonoPcm => "riff-8khz-16bit-mono-pcm",
            Self::Riff22050hz16bitMonoPcm => "riff-22050hz-16bit-mono-pcm",
            Self::Riff24khz16bitMonoPcm => "riff-24khz-16bit-mono-pcm",
            Self::Riff44100hz16bitMonoPcm => "riff-44100hz-16bit-mono-pcm",
            Self::Riff48khz16bitMonoPcm => "riff-48khz-16bit-mono-pcm",
        }
    }

    /// Whether the service can stream this format (everything except `riff-*`).
    pub fn is_streaming(&self) -> bool {
        !matches!(
            self,
            Self::Riff8khz8bitMonoAlaw
                | Self::Riff8khz8bitMonoMulaw
                | Self::Riff8khz16bitMonoPcm
                | Self::Riff22050hz16bitMonoPcm
                | Self::Riff24khz16bitMonoPcm
                | Self::Riff44100hz16bitMonoPcm
                | Self::Riff48khz16bitMonoPcm
        )
    }

    /// MIME type of the encoded audio.
    pub fn mime_type(&self) -> &'static str {
        let id = self.as_str();
        if id.starts_with("riff-") {
            "audio/wav"
        } else if id.ends_with("-mp3") {
            "audio/mpeg"
        } else if id.starts_with("ogg-") {
            "audio/ogg"
        } else if id.starts_with("webm-") {
            "audio/webm"
        } else if id.starts_with("amr-wb") {
            "audio/amr-wb"
        } else if id.starts_with("audio-") {
            "audio/opus"
        } else {
            "application/octet-stream"
        }
    }
}

impl FromStr for AudioOutput {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "unsupported audio output format",
                    ErrorContext::new()
                        .with_field_path("audio_output")
                        .with_details(s.to_string()),
                )
            })
    }
}

impl TryFrom<String> for AudioOutput {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AudioOutput> for String {
    fn from(value: AudioOutput) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for AudioOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
