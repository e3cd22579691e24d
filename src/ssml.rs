//! SSML payload rendering.
//!
//! The synthesis endpoint takes a single `<speak>` document with one `<voice>` child.
//! Request values are inserted verbatim: text containing `<`, `&` or quotes produces a
//! malformed document, which the service rejects with a 400. Callers that pass untrusted
//! text can run it through [`escape_xml`] first.
//!
//! ```rust
//! use azure_tts::ssml;
//! use azure_tts::types::{Gender, Locale, VoiceRequest};
//!
//! let request = VoiceRequest::new("Hello", "ar-EG-Hoda", Locale::EnUs, Gender::Female);
//! assert_eq!(
//!     ssml::render(&request).unwrap(),
//!     "<speak version='1.0' xml:lang='en-US'><voice xml:lang='en-US' xml:gender='Female' name='ar-EG-Hoda'>Hello</voice></speak>"
//! );
//! ```

use crate::types::VoiceRequest;
use crate::{Error, ErrorContext, Result};
use std::borrow::Cow;
use std::fmt::Write as _;

/// Fixed markup around the request values.
const TEMPLATE_OVERHEAD: usize = 110;

/// Render the SSML document for a request.
///
/// Pure and deterministic; the only failure is a formatter fault.
pub fn render(request: &VoiceRequest) -> Result<String> {
    let locale = request.locale.as_str();
    let mut out = String::with_capacity(
        TEMPLATE_OVERHEAD + 2 * locale.len() + request.voice.len() + request.text.len(),
    );
    write!(
        out,
        "<speak version='1.0' xml:lang='{locale}'><voice xml:lang='{locale}' xml:gender='{gender}' name='{voice}'>{text}</voice></speak>",
        locale = locale,
        gender = request.gender,
        voice = request.voice,
        text = request.text,
    )
    .map_err(|e| {
        Error::configuration_with_context(
            format!("failed to render SSML payload: {}", e),
            ErrorContext::new().with_source("ssml"),
        )
    })?;
    Ok(out)
}

/// Escape the five XML special characters.
///
/// Borrowed when nothing needs escaping.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['<', '>', '&', '\'', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
