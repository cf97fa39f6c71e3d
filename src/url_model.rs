//! Local filename derivation from image URLs.

use url::Url;

/// Fallback when the URL path yields no usable name.
const DEFAULT_FILENAME: &str = "image.bin";

/// Derives a safe local filename from the last path segment of `url`.
///
/// The segment is kept percent-encoded as it appears in the URL, then
/// sanitized for Linux filesystems. Falls back to [`DEFAULT_FILENAME`]
/// when the URL has no usable path segment.
pub fn derive_filename(url: &str) -> String {
    let segment = Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string))
        })
        .filter(|s| !s.is_empty());

    let raw = match segment {
        Some(s) => s,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let name = sanitize(&raw);
    if name.is_empty() || name == "." || name == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        name
    }
}

/// Replaces path separators, NUL, and control characters with `_`, trims
/// leading/trailing dots and spaces, and caps the result at 255 bytes
/// (Linux NAME_MAX).
fn sanitize(raw: &str) -> String {
    const NAME_MAX: usize = 255;

    let cleaned: String = raw
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c == '\0' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = cleaned.trim_matches(|c: char| c == '.' || c == ' ');
    let mut end = trimmed.len().min(NAME_MAX);
    while end > 0 && !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_of_enlarge_url() {
        assert_eq!(
            derive_filename(
                "http://www.getty.edu/art/collections/images/enlarge/00094701.jpg"
            ),
            "00094701.jpg"
        );
    }

    #[test]
    fn deep_path_takes_last_segment() {
        assert_eq!(
            derive_filename("http://www.getty.edu/art/collections/images/enlarge/a/b/c.jpg"),
            "c.jpg"
        );
    }

    #[test]
    fn rootless_or_empty_path_falls_back() {
        assert_eq!(derive_filename("http://www.getty.edu/"), "image.bin");
        assert_eq!(derive_filename("http://www.getty.edu"), "image.bin");
        assert_eq!(derive_filename("not a url"), "image.bin");
    }

    #[test]
    fn dot_segments_fall_back() {
        assert_eq!(derive_filename("http://example.com/.."), "image.bin");
    }

    #[test]
    fn sanitizes_control_characters() {
        assert_eq!(sanitize("file\x00name.jpg"), "file_name.jpg");
    }

    #[test]
    fn trims_trailing_dots() {
        assert_eq!(sanitize("picture.jpg..."), "picture.jpg");
    }
}
