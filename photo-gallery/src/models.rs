use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// Default upload ceiling: 500 MiB
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 500 * 1024 * 1024;

/// Label stamped on freshly uploaded photos
pub const DEFAULT_PLACEHOLDER_DATE: &str = "Today";

/// Represents a stored photo with its inline image data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: f64,
    pub date: String,
    /// Full file content as a `data:` URL
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_uploaded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl Photo {
    /// Builds the record for a locally uploaded file once its dimensions are known
    pub fn uploaded(
        id: f64,
        date: &str,
        src: String,
        alt: &str,
        (width, height): (u32, u32),
        file_size: u64,
    ) -> Self {
        Self {
            id,
            date: date.to_string(),
            src,
            alt: alt.to_string(),
            width: Some(width),
            height: Some(height),
            is_uploaded: Some(true),
            file_size: Some(file_size),
        }
    }
}

impl TryFrom<&Row<'_>> for Photo {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        let is_uploaded: Option<i64> = row.get("is_uploaded")?;
        let file_size: Option<i64> = row.get("file_size")?;

        Ok(Photo {
            id: row.get("id")?,
            date: row.get("date")?,
            src: row.get("src")?,
            alt: row.get("alt")?,
            width: row.get("width")?,
            height: row.get("height")?,
            is_uploaded: is_uploaded.map(|v| v != 0),
            file_size: file_size.map(|v| v as u64),
        })
    }
}

/// Fresh photo id: wall-clock milliseconds plus a random fraction.
///
/// Two ids generated in the same millisecond only collide if the random
/// fractions match as well.
pub fn generate_photo_id() -> f64 {
    use rand::Rng;

    let millis = chrono::Utc::now().timestamp_millis() as f64;
    millis + rand::rng().random::<f64>()
}

/// Configuration for photo gallery initialization
#[derive(Debug, Clone)]
pub struct PhotoGalleryConfig {
    /// SQLite file holding the photo collection; empty means in-memory
    pub database_path: String,
    /// Uploads larger than this are rejected before any read
    pub max_file_size_bytes: u64,
    /// Value written to `date` for new uploads
    pub placeholder_date: String,
    /// Read buffer size used while streaming an upload
    pub read_chunk_size: usize,
}

impl Default for PhotoGalleryConfig {
    fn default() -> Self {
        Self {
            database_path: String::new(),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            placeholder_date: DEFAULT_PLACEHOLDER_DATE.to_string(),
            read_chunk_size: 64 * 1024,
        }
    }
}
