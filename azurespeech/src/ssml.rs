//! SSML document construction.

use std::borrow::Cow;
use std::fmt;

use super::types::DEFAULT_LANGUAGE;

/// Escapes the five XML reserved characters.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// A single-voice SSML document.
///
/// Renders via [`fmt::Display`]; the text is escaped at render time.
#[derive(Debug, Clone)]
pub struct Ssml<'a> {
    voice: &'a str,
    text: &'a str,
    language: &'a str,
}

impl<'a> Ssml<'a> {
    /// Creates a document speaking `text` with `voice`, declared as fr-FR.
    pub fn new(voice: &'a str, text: &'a str) -> Self {
        Self {
            voice,
            text,
            language: DEFAULT_LANGUAGE,
        }
    }

    /// Overrides the declared document and voice language.
    pub fn language(mut self, language: &'a str) -> Self {
        self.language = language;
        self
    }
}

impl fmt::Display for Ssml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<speak version='1.0' xml:lang='{lang}'><voice xml:lang='{lang}' name='{voice}'>{text}</voice></speak>",
            lang = escape_xml(self.language),
            voice = escape_xml(self.voice),
            text = escape_xml(self.text),
        )
    }
}
