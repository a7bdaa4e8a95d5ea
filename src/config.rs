//! Application configuration, read from an optional TOML file

use crate::error::AppError;
use photo_gallery::{PhotoGalleryConfig, DEFAULT_MAX_FILE_SIZE_BYTES, DEFAULT_PLACEHOLDER_DATE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const BYTES_PER_MIB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Key-value database for albums, album photos and theme
    pub database_path: PathBuf,
    /// Photo collection database
    pub photo_database_path: PathBuf,
    /// Per-file upload ceiling in MiB
    pub max_upload_mib: u64,
    /// `date` label given to new uploads
    pub placeholder_date: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("./data/gallery.db"),
            photo_database_path: PathBuf::from(format!(
                "./data/{}.db",
                photo_gallery::PHOTO_DB_NAME
            )),
            max_upload_mib: DEFAULT_MAX_FILE_SIZE_BYTES / BYTES_PER_MIB,
            placeholder_date: DEFAULT_PLACEHOLDER_DATE.to_string(),
        }
    }
}

impl AppConfig {
    /// Parses a TOML document; missing keys keep their defaults
    pub fn from_toml_str(raw: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                let raw = std::fs::read_to_string(path)?;
                Self::from_toml_str(&raw)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_upload_mib == 0 {
            return Err(AppError::Validation(
                "max_upload_mib must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Settings for the photo pipeline
    pub fn photo_gallery_config(&self) -> PhotoGalleryConfig {
        PhotoGalleryConfig {
            database_path: self.photo_database_path.to_string_lossy().to_string(),
            max_file_size_bytes: self.max_upload_mib.saturating_mul(BYTES_PER_MIB),
            placeholder_date: self.placeholder_date.clone(),
            ..PhotoGalleryConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_pipeline_defaults() {
        let config = AppConfig::default().photo_gallery_config();
        assert_eq!(config.max_file_size_bytes, 500 * 1024 * 1024);
        assert_eq!(config.placeholder_date, "Today");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            photo_database_path = "/tmp/photos.db"
            max_upload_mib = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.photo_database_path, PathBuf::from("/tmp/photos.db"));
        assert_eq!(config.max_upload_mib, 10);
        assert_eq!(config.database_path, AppConfig::default().database_path);
        assert_eq!(
            config.photo_gallery_config().max_file_size_bytes,
            10 * 1024 * 1024
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml_str("max_upload_mib = \"lots\"").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let err = AppConfig::from_toml_str("max_upload_mib = 0").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallery.toml");
        std::fs::write(&path, "placeholder_date = \"Now\"\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.placeholder_date, "Now");
    }
}
