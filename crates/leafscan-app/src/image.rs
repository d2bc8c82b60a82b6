//! Image acquisition: validation, async loading, and transport encoding.
//!
//! Mirrors what a browser file input would enforce: the file must actually
//! be an image and must stay under the upload cap. Validation failures are
//! recoverable and leave any previously displayed result untouched.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tokio::io::AsyncReadExt;

use leafscan_core::prelude::*;

/// Upload size cap. Exactly this many bytes is still accepted.
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// How many leading bytes are needed to identify all supported formats.
const SNIFF_LEN: usize = 16;

/// A validated, fully loaded image ready for analysis and preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub path: PathBuf,
    /// Detected content type, e.g. `"image/png"`.
    pub mime: &'static str,
    /// Raw size on disk.
    pub byte_len: u64,
    /// Base64 transport encoding of the raw bytes, as handed to the analyzer.
    pub data: String,
}

impl LoadedImage {
    /// File name for display, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Identify an image content type from its magic bytes.
///
/// There is no browser to report a MIME type, so the leading bytes stand in
/// for it. Unknown content maps to `InvalidFileType` at the call site.
pub fn sniff_mime(header: &[u8]) -> Option<&'static str> {
    if header.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("image/png")
    } else if header.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if header.starts_with(b"GIF87a") || header.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if header.len() >= 12 && &header[0..4] == b"RIFF" && &header[8..12] == b"WEBP" {
        Some("image/webp")
    } else if header.starts_with(b"BM") {
        Some("image/bmp")
    } else if header.starts_with(&[0x49, 0x49, 0x2A, 0x00])
        || header.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
    {
        Some("image/tiff")
    } else {
        None
    }
}

/// Quick extension check used by the file picker to pre-filter directory
/// listings. Content is still sniffed on load; this only trims the list.
pub fn has_image_extension(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref(),
        Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "tif" | "tiff")
    )
}

/// Validate and load an image file.
///
/// Checks run in the same order the original upload handler applied them:
/// content type first, then the size cap, then the full read. Each failure
/// maps to its own recoverable error kind.
pub async fn load_image(path: &Path) -> Result<LoadedImage> {
    let mut file = tokio::fs::File::open(path)
        .await
        .map_err(|e| Error::read(format!("{}: {e}", path.display())))?;

    let mut header = [0u8; SNIFF_LEN];
    let n = file
        .read(&mut header)
        .await
        .map_err(|e| Error::read(format!("{}: {e}", path.display())))?;
    let mime = sniff_mime(&header[..n]).ok_or_else(|| {
        Error::invalid_file_type(
            path.extension()
                .and_then(|e| e.to_str())
                .map(|e| format!("unrecognized content (.{e})"))
                .unwrap_or_else(|| "unrecognized content".to_string()),
        )
    })?;

    let byte_len = file
        .metadata()
        .await
        .map_err(|e| Error::read(format!("{}: {e}", path.display())))?
        .len();
    if byte_len > MAX_IMAGE_BYTES {
        return Err(Error::file_too_large(byte_len, MAX_IMAGE_BYTES));
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::read(format!("{}: {e}", path.display())))?;

    debug!(
        path = %path.display(),
        mime,
        byte_len,
        "image loaded and encoded"
    );

    Ok(LoadedImage {
        path: path.to_path_buf(),
        mime,
        byte_len,
        data: BASE64.encode(&bytes),
    })
}
