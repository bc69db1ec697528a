//! Voice selector table.

/// Voice used when the selector is absent or unknown.
pub const DEFAULT_VOICE: &str = "fr-FR-DeniseNeural";

/// Selector keys and the Azure neural voices they map to.
pub const VOICES: &[(&str, &str)] = &[
    ("denise", "fr-FR-DeniseNeural"),
    ("henri", "fr-FR-HenriNeural"),
    ("vivienne", "fr-FR-VivienneMultilingualNeural"),
];

/// Maps a caller-supplied selector to an Azure voice name.
///
/// Keys are matched exactly; anything else yields [`DEFAULT_VOICE`].
pub fn resolve_voice(key: Option<&str>) -> &'static str {
    key.and_then(|k| VOICES.iter().find(|(name, _)| *name == k))
        .map(|(_, voice)| *voice)
        .unwrap_or(DEFAULT_VOICE)
}
