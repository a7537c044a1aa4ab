//! File format classification by extension.

/// Known audio extensions and their canonical format labels.
const KNOWN_FORMATS: &[(&str, &str)] = &[
    ("wav", "WAV"),
    ("aac", "AAC"),
    ("mp3", "MP3"),
    ("m4a", "M4A"),
    ("ogg", "OGG"),
];

/// Map a file path to a canonical format label.
///
/// The portion after the last `.` in the path string is compared
/// case-insensitively against the known audio extensions; a path with
/// no dot is treated as all extension. Unknown extensions (including
/// the empty one) are echoed back uppercased rather than rejected, so
/// this never fails.
///
/// # Examples
///
/// ```
/// use audioforge_av::classify_format;
///
/// assert_eq!(classify_format("/tmp/recording.m4a"), "M4A");
/// assert_eq!(classify_format("song.MP3"), "MP3");
/// assert_eq!(classify_format("mystery.xyz"), "XYZ");
/// ```
pub fn classify_format(path: &str) -> String {
    let ext = match path.rfind('.') {
        Some(idx) => &path[idx + 1..],
        None => path,
    };

    let lowered = ext.to_lowercase();
    KNOWN_FORMATS
        .iter()
        .find(|(known, _)| *known == lowered)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| ext.to_uppercase())
}
