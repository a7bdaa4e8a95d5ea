//! Data URL encoding and image dimension decoding

use crate::error::PhotoGalleryError;
use base64::{engine::general_purpose, Engine as _};
use std::io::Cursor;
use std::path::Path;

const DATA_URL_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Guesses a MIME type from the file content, falling back to the extension
pub fn guess_mime_type(name: &str, bytes: &[u8]) -> &'static str {
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type();
    }

    match Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("heic") | Some("heif") => "image/heic",
        _ => "application/octet-stream",
    }
}

/// Encodes the full file content as a base64 `data:` URL
pub fn encode_data_url(name: &str, bytes: &[u8]) -> String {
    let mime = guess_mime_type(name, bytes);
    let encoded = general_purpose::STANDARD.encode(bytes);
    format!("{}{}{}{}", DATA_URL_PREFIX, mime, BASE64_MARKER, encoded)
}

/// Extracts the binary payload of a base64 `data:` URL
pub fn parse_data_url(url: &str) -> Result<Vec<u8>, PhotoGalleryError> {
    let rest = url
        .strip_prefix(DATA_URL_PREFIX)
        .ok_or_else(|| PhotoGalleryError::DecodeFailure("not a data URL".to_string()))?;

    let (_mime, payload) = rest.split_once(BASE64_MARKER).ok_or_else(|| {
        PhotoGalleryError::DecodeFailure("data URL is not base64 encoded".to_string())
    })?;

    general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| PhotoGalleryError::DecodeFailure(format!("invalid base64 payload: {}", e)))
}

/// A data URL whose image has been decoded
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

/// Decodes the image behind a data URL to learn its pixel dimensions.
///
/// The whole bitmap is decoded, so a file with a valid header but broken
/// pixel data is a `DecodeFailure`. Runs on the blocking pool; the data URL
/// is handed back inside the result to avoid copying it.
pub async fn decode_dimensions(data_url: String) -> Result<DecodedImage, PhotoGalleryError> {
    tokio::task::spawn_blocking(move || {
        let bytes = parse_data_url(&data_url)?;
        let (width, height) = decode_image(&bytes)?;
        Ok(DecodedImage {
            data_url,
            width,
            height,
        })
    })
    .await
    .map_err(|e| PhotoGalleryError::DecodeFailure(format!("Task join error: {}", e)))?
}

fn decode_image(bytes: &[u8]) -> Result<(u32, u32), PhotoGalleryError> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| PhotoGalleryError::DecodeFailure(e.to_string()))?;

    let img = reader.decode()?;
    Ok((img.width(), img.height()))
}
