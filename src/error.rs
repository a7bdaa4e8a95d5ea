use photo_gallery::PhotoGalleryError;
use std::fmt;

/// Central error types for the gallery stores
#[derive(Debug)]
pub enum AppError {
    /// Database error (rusqlite)
    Database(rusqlite::Error),
    /// Filesystem error
    Filesystem(std::io::Error),
    /// Stored JSON could not be (de)serialized
    Serialization(serde_json::Error),
    /// Configuration file could not be parsed
    Config(String),
    /// Validation error (e.g. invalid inputs)
    Validation(String),
    /// Resource not found
    NotFound(String),
    /// Photo pipeline error
    Photo(PhotoGalleryError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Serialization(e) => write!(f, "Serialization error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Photo(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Database(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<PhotoGalleryError> for AppError {
    fn from(e: PhotoGalleryError) -> Self {
        AppError::Photo(e)
    }
}

/// User-friendly error messages for the UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(_) => "A database error occurred. Please try again.".to_string(),
            AppError::Filesystem(_) => {
                "Error accessing files. Please check permissions.".to_string()
            }
            AppError::Serialization(_) => "Stored data could not be read.".to_string(),
            AppError::Config(msg) => format!("Invalid configuration: {}", msg),
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(msg) => format!("{} was not found.", msg),
            AppError::Photo(PhotoGalleryError::SizeLimitExceeded { .. }) => self.to_string(),
            AppError::Photo(PhotoGalleryError::ReadFailure(_)) => {
                "Failed to read file".to_string()
            }
            AppError::Photo(PhotoGalleryError::DecodeFailure(_)) => {
                "Failed to load image".to_string()
            }
            AppError::Photo(_) => "Photo storage is unavailable. Please try again.".to_string(),
        }
    }
}
