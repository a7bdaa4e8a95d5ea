/// Error type for photo gallery operations
#[derive(Debug)]
pub enum PhotoGalleryError {
    /// Upload rejected before any I/O
    SizeLimitExceeded { size_bytes: u64, limit_bytes: u64 },
    ReadFailure(std::io::Error),
    DecodeFailure(String),
    StorageOpenFailure(rusqlite::Error),
    StorageWriteFailure(rusqlite::Error),
    StorageReadFailure(rusqlite::Error),
}

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

impl std::fmt::Display for PhotoGalleryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhotoGalleryError::SizeLimitExceeded {
                size_bytes,
                limit_bytes,
            } => write!(
                f,
                "File size ({:.2}MB) exceeds maximum allowed size of {}MB",
                *size_bytes as f64 / BYTES_PER_MIB,
                *limit_bytes as f64 / BYTES_PER_MIB
            ),
            PhotoGalleryError::ReadFailure(e) => write!(f, "Failed to read file: {}", e),
            PhotoGalleryError::DecodeFailure(msg) => write!(f, "Failed to load image: {}", msg),
            PhotoGalleryError::StorageOpenFailure(e) => {
                write!(f, "Failed to open photo database: {}", e)
            }
            PhotoGalleryError::StorageWriteFailure(e) => {
                write!(f, "Failed to write photo database: {}", e)
            }
            PhotoGalleryError::StorageReadFailure(e) => {
                write!(f, "Failed to load photos: {}", e)
            }
        }
    }
}

impl std::error::Error for PhotoGalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PhotoGalleryError::ReadFailure(e) => Some(e),
            PhotoGalleryError::StorageOpenFailure(e)
            | PhotoGalleryError::StorageWriteFailure(e)
            | PhotoGalleryError::StorageReadFailure(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PhotoGalleryError {
    fn from(err: std::io::Error) -> Self {
        PhotoGalleryError::ReadFailure(err)
    }
}

impl From<image::ImageError> for PhotoGalleryError {
    fn from(err: image::ImageError) -> Self {
        PhotoGalleryError::DecodeFailure(err.to_string())
    }
}
