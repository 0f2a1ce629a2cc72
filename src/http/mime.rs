//! MIME type detection based on file extensions.

/// Content type used when an extension is not in [`MIME_TYPES`].
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Lowercase extension (no dot) to content type.
pub const MIME_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("webp", "image/webp"),
    ("ico", "image/x-icon"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("txt", "text/plain"),
    ("js", "text/javascript"),
    ("json", "application/json"),
];

/// Returns the text after the last `.` of `file_name`, lowercased.
///
/// Names without a `.` have no extension and yield an empty string.
///
/// ```
/// # use webby::http::mime::extension_of;
/// assert_eq!(extension_of("photo.JPG"), "jpg");
/// assert_eq!(extension_of("archive.tar.gz"), "gz");
/// assert_eq!(extension_of("README"), "");
/// ```
pub fn extension_of(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    }
}

/// Looks up the content type for `file_name` by extension.
///
/// Unknown extensions resolve to `""`; callers pick their own fallback
/// (see [`DEFAULT_MIME_TYPE`]).
pub fn mime_type_for(file_name: &str) -> &'static str {
    let ext = extension_of(file_name);
    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or("")
}
