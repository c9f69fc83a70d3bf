//! Image-list editing on a product draft.
//!
//! A product's images are an ordered list of URIs, primary first: index 0 is
//! the catalog thumbnail, and every mutation here must preserve that meaning.
//! Remote images enter as `http(s)` URLs; uploaded files are embedded as
//! base64 `data:` URIs, which is what eventually eats the storage quota, hence
//! the per-file size cap. File validation is per-item: one bad file is
//! reported and the rest of the batch still lands.

use crate::errors::{Error, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Default per-file cap for embedded images: 2 MiB.
///
/// Large enough for a product photo, small enough that a handful of uploads
/// does not exhaust the storage quota. Overridable through `AppConfig`.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// An uploaded file: display name plus raw bytes.
#[derive(Clone, Debug)]
pub struct ImageFile {
    /// Original file name, used in rejection messages.
    pub name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// Why one file of a batch was rejected. The rest of the batch is unaffected.
#[derive(Debug)]
pub struct ImageRejection {
    /// File name as submitted.
    pub name: String,
    /// The validation error for this file.
    pub reason: Error,
}

/// Appends a remote image URL.
///
/// Only `http(s)`-prefixed strings are accepted; anything else is a
/// validation error. A URL already in the list is de-duplicated silently.
///
/// # Errors
/// Returns [`Error::Validation`] for a non-http URL.
pub fn add_image_by_url(images: &mut Vec<String>, url: &str) -> Result<()> {
    let url = url.trim();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(Error::validation(format!(
            "image URL must start with http:// or https://: '{url}'"
        )));
    }
    if !images.iter().any(|existing| existing == url) {
        images.push(url.to_string());
    }
    Ok(())
}

/// Embeds a batch of uploaded files as base64 data URIs.
///
/// Each file is validated independently: oversized files and files that are
/// not a recognized image format are skipped and reported, while the valid
/// files in the same batch are still appended in order.
pub fn add_images_from_files(
    images: &mut Vec<String>,
    files: &[ImageFile],
    max_bytes: usize,
) -> Vec<ImageRejection> {
    let mut rejections = Vec::new();
    for file in files {
        match encode_file(file, max_bytes) {
            Ok(uri) => images.push(uri),
            Err(reason) => rejections.push(ImageRejection {
                name: file.name.clone(),
                reason,
            }),
        }
    }
    rejections
}

fn encode_file(file: &ImageFile, max_bytes: usize) -> Result<String> {
    if file.bytes.len() > max_bytes {
        return Err(Error::validation(format!(
            "'{}' is {} bytes, over the {} byte limit",
            file.name,
            file.bytes.len(),
            max_bytes
        )));
    }
    let mime = sniff_image_mime(&file.bytes).ok_or_else(|| {
        Error::validation(format!("'{}' is not a recognized image format", file.name))
    })?;
    Ok(format!("data:{mime};base64,{}", BASE64.encode(&file.bytes)))
}

/// Identifies an image format from its magic bytes.
#[must_use]
pub fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if bytes.starts_with(b"\xff\xd8\xff") {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

/// Removes the image at `index`. Returns `false` for an out-of-range index.
pub fn remove_image(images: &mut Vec<String>, index: usize) -> bool {
    if index >= images.len() {
        return false;
    }
    images.remove(index);
    true
}

/// Makes the image at `index` the primary by moving it to the front; the
/// relative order of every other image is preserved. Returns `false` for an
/// out-of-range index.
pub fn set_primary(images: &mut Vec<String>, index: usize) -> bool {
    if index >= images.len() {
        return false;
    }
    let image = images.remove(index);
    images.insert(0, image);
    true
}

/// Moves one image from `from` to `to`, shifting the images in between.
/// Returns `false` when either index is out of range.
pub fn reorder(images: &mut Vec<String>, from: usize, to: usize) -> bool {
    if from >= images.len() || to >= images.len() {
        return false;
    }
    let image = images.remove(from);
    images.insert(to, image);
    true
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n rest of file";
    const JPEG: &[u8] = b"\xff\xd8\xff\xe0 rest of file";

    fn list(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn url_must_be_http_prefixed() {
        let mut images = Vec::new();
        assert!(add_image_by_url(&mut images, "https://cdn.example.com/a.png").is_ok());
        assert!(add_image_by_url(&mut images, "http://cdn.example.com/b.png").is_ok());
        assert!(add_image_by_url(&mut images, "ftp://cdn.example.com/c.png").is_err());
        assert!(add_image_by_url(&mut images, "javascript:alert(1)").is_err());
        assert_eq!(images.len(), 2);
    }

    #[test]
    fn duplicate_url_is_ignored() {
        let mut images = list(&["https://cdn.example.com/a.png"]);
        add_image_by_url(&mut images, "https://cdn.example.com/a.png").unwrap();
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn one_bad_file_does_not_abort_the_batch() {
        let mut images = Vec::new();
        let files = vec![
            ImageFile { name: "ok.png".into(), bytes: PNG.to_vec() },
            ImageFile { name: "huge.jpg".into(), bytes: vec![0xff; 64] },
            ImageFile { name: "notes.txt".into(), bytes: b"plain text".to_vec() },
            ImageFile { name: "ok.jpg".into(), bytes: JPEG.to_vec() },
        ];
        let rejections = add_images_from_files(&mut images, &files, 32);

        assert_eq!(images.len(), 2);
        assert!(images[0].starts_with("data:image/png;base64,"));
        assert!(images[1].starts_with("data:image/jpeg;base64,"));

        assert_eq!(rejections.len(), 2);
        assert_eq!(rejections[0].name, "huge.jpg");
        assert_eq!(rejections[1].name, "notes.txt");
    }

    #[test]
    fn sniffs_common_formats() {
        assert_eq!(sniff_image_mime(PNG), Some("image/png"));
        assert_eq!(sniff_image_mime(JPEG), Some("image/jpeg"));
        assert_eq!(sniff_image_mime(b"GIF89a..."), Some("image/gif"));
        assert_eq!(sniff_image_mime(b"RIFF\x00\x00\x00\x00WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_image_mime(b"<svg></svg>"), None);
    }

    #[test]
    fn set_primary_moves_to_front_preserving_rest() {
        let mut images = list(&["a", "b", "c", "d"]);
        assert!(set_primary(&mut images, 2));
        assert_eq!(images, list(&["c", "a", "b", "d"]));

        // index 0 is already primary
        assert!(set_primary(&mut images, 0));
        assert_eq!(images, list(&["c", "a", "b", "d"]));

        assert!(!set_primary(&mut images, 9));
    }

    #[test]
    fn reorder_shifts_neighbors() {
        let mut images = list(&["a", "b", "c", "d"]);
        assert!(reorder(&mut images, 0, 2));
        assert_eq!(images, list(&["b", "c", "a", "d"]));
        assert!(reorder(&mut images, 3, 0));
        assert_eq!(images, list(&["d", "b", "c", "a"]));
        assert!(!reorder(&mut images, 9, 0));
        assert!(!reorder(&mut images, 0, 9));
    }

    #[test]
    fn remove_image_is_bounds_checked() {
        let mut images = list(&["a", "b"]);
        assert!(remove_image(&mut images, 1));
        assert_eq!(images, list(&["a"]));
        assert!(!remove_image(&mut images, 5));
    }
}
