use crate::config::AppConfig;
use crate::error::AppError;
use photo_gallery::{GalleryState, Photo, PhotoGalleryError, PhotoGalleryService, UploadFile};
use std::path::Path;

/// Application-facing wrapper around the photo pipeline
pub struct PhotoService {
    inner: PhotoGalleryService,
}

impl PhotoService {
    pub fn new(config: &AppConfig, state: GalleryState) -> Result<Self, AppError> {
        let gallery_config = config.photo_gallery_config();

        // The photo store opens lazily, so its directory has to exist up front
        if let Some(parent) = config.photo_database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(Self {
            inner: PhotoGalleryService::new(gallery_config, state),
        })
    }

    pub fn state(&self) -> &GalleryState {
        self.inner.state()
    }

    /// Loads stored photos and marks the gallery as initialized
    pub async fn init(&self) -> Vec<Photo> {
        self.inner.init().await
    }

    /// Snapshot of the published photos, most recent upload first
    pub fn photos(&self) -> Vec<Photo> {
        self.inner.state().photos.get()
    }

    /// Uploads the files at `paths` one after another
    pub async fn upload_paths<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<Photo>, AppError> {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let file = UploadFile::from_path(path)
                .await
                .map_err(PhotoGalleryError::ReadFailure)?;
            files.push(file);
        }

        Ok(self.inner.upload_photos(files).await?)
    }

    pub async fn upload_photo(&self, file: UploadFile) -> Result<Photo, AppError> {
        Ok(self.inner.upload_photo(file).await?)
    }

    pub async fn delete_photo(&self, id: f64) -> Result<(), AppError> {
        Ok(self.inner.delete_photo(id).await?)
    }

    pub async fn clear_all_photos(&self) -> Result<(), AppError> {
        Ok(self.inner.clear_all_photos().await?)
    }

    pub async fn reload_from_db(&self) -> Vec<Photo> {
        self.inner.reload_from_db().await
    }
}
