//! Image intake and base64 encoding
//!
//! Reads a user-supplied image file, sniffs the format from magic bytes, and
//! produces the base64 payload Gemini expects. Formats other than PNG, JPEG,
//! and WebP are rejected here, before any network call is attempted.

use crate::{Error, Result};
use base64::Engine as _;
use std::path::Path;

/// A base64-encoded image ready to embed in a JSON request.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub data: String,
    pub mime_type: &'static str,
}

impl EncodedImage {
    /// Encode raw image bytes, sniffing the MIME type from magic bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mime_type = detect_image_mime(bytes)?;
        Ok(Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            mime_type,
        })
    }

    /// Read and encode an image file. I/O failures surface to the caller.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

/// Sniff the image MIME type from the leading magic bytes.
///
/// Only the three formats the model accepts are recognized; anything else is
/// an [`Error::UnsupportedFormat`].
pub fn detect_image_mime(bytes: &[u8]) -> Result<&'static str> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Ok("image/jpeg"),
        [0x89, 0x50, 0x4E, 0x47, ..] => Ok("image/png"),
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Ok("image/webp"),
        _ => {
            tracing::warn!(
                "Unrecognized image format (first 4 bytes: {:02X?})",
                &bytes[..bytes.len().min(4)]
            );
            Err(Error::UnsupportedFormat(format!(
                "first bytes {:02X?}",
                &bytes[..bytes.len().min(4)]
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A];

    #[test]
    fn test_detect_png() {
        assert_eq!(detect_image_mime(PNG_MAGIC).unwrap(), "image/png");
    }

    #[test]
    fn test_detect_jpeg() {
        assert_eq!(
            detect_image_mime(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap(),
            "image/jpeg"
        );
    }

    #[test]
    fn test_detect_webp() {
        assert_eq!(
            detect_image_mime(&[
                0x52, 0x49, 0x46, 0x46, 0x00, 0x00, 0x00, 0x00, 0x57, 0x45, 0x42, 0x50
            ])
            .unwrap(),
            "image/webp"
        );
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = detect_image_mime(&[0x00, 0x01, 0x02, 0x03]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(detect_image_mime(&[]).is_err());
    }

    #[test]
    fn test_from_bytes_encodes_base64() {
        let encoded = EncodedImage::from_bytes(PNG_MAGIC).unwrap();
        assert_eq!(encoded.mime_type, "image/png");

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&encoded.data)
            .unwrap();
        assert_eq!(decoded, PNG_MAGIC);
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("question.png");
        std::fs::write(&path, PNG_MAGIC).unwrap();

        let encoded = EncodedImage::from_path(&path).unwrap();
        assert_eq!(encoded.mime_type, "image/png");
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let err = EncodedImage::from_path(Path::new("/nonexistent/question.png")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
