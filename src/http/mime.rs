//! MIME type detection from file extensions.

use std::path::Path;

/// Returns the Content-Type for a file based on its extension.
///
/// The extension is compared case-insensitively. Anything outside the image
/// table, including no extension at all, is served as an opaque byte stream.
///
/// # Examples
/// ```
/// use agartha::http::mime::guess_mime_type;
/// use std::path::Path;
/// assert_eq!(guess_mime_type(Path::new("shot.PNG")), "image/png");
/// assert_eq!(guess_mime_type(Path::new("notes")), "application/octet-stream");
/// ```
pub fn guess_mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}
