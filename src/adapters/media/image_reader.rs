//! Implements ImageReader. Reads a picture from disk into a base64 `data:` URL.
//!
//! The MIME type comes from the file extension; anything that is not a known
//! image type is rejected before the file is opened.

use crate::domain::DomainError;
use crate::ports::ImageReader;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Filesystem image reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsImageReader;

impl FsImageReader {
    pub fn new() -> Self {
        Self
    }
}

/// `image/*` MIME type for a path, by extension (case-insensitive).
pub fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => return None,
    };
    Some(mime)
}

#[async_trait::async_trait]
impl ImageReader for FsImageReader {
    async fn read_as_data_url(&self, path: &Path) -> Result<String, DomainError> {
        let mime = image_mime(path).ok_or_else(|| {
            DomainError::InvalidImage(format!("{} is not an image", path.display()))
        })?;
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DomainError::InvalidImage(format!(
                    "{} does not exist",
                    path.display()
                )));
            }
            Err(e) => return Err(DomainError::InvalidImage(e.to_string())),
        };
        if bytes.is_empty() {
            return Err(DomainError::InvalidImage(format!(
                "{} is empty",
                path.display()
            )));
        }
        debug!(path = %path.display(), mime, size = bytes.len(), "image read");
        Ok(format!("data:{};base64,{}", mime, STANDARD.encode(&bytes)))
    }
}
