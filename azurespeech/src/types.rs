//! Common types for the Azure Speech API.

/// Language declared on the SSML document and voice element.
pub const DEFAULT_LANGUAGE: &str = "fr-FR";

/// Audio output format, sent as the `X-Microsoft-OutputFormat` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// MP3, 16 kHz, 128 kbit/s, mono.
    #[default]
    Audio16Khz128KbitrateMonoMp3,
    /// MP3, 24 kHz, 96 kbit/s, mono.
    Audio24Khz96KbitrateMonoMp3,
    /// MP3, 48 kHz, 192 kbit/s, mono.
    Audio48Khz192KbitrateMonoMp3,
    /// WAV/PCM, 16 kHz, 16 bit, mono.
    Riff16Khz16BitMonoPcm,
}

impl OutputFormat {
    /// Returns the header value.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Audio16Khz128KbitrateMonoMp3 => "audio-16khz-128kbitrate-mono-mp3",
            OutputFormat::Audio24Khz96KbitrateMonoMp3 => "audio-24khz-96kbitrate-mono-mp3",
            OutputFormat::Audio48Khz192KbitrateMonoMp3 => "audio-48khz-192kbitrate-mono-mp3",
            OutputFormat::Riff16Khz16BitMonoPcm => "riff-16khz-16bit-mono-pcm",
        }
    }

    /// Returns the MIME subtype used in data URLs.
    pub fn mime_subtype(&self) -> &'static str {
        match self {
            OutputFormat::Riff16Khz16BitMonoPcm => "wav",
            _ => "mp3",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
