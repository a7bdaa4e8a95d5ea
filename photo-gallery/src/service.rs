use crate::decode::{decode_dimensions, encode_data_url};
use crate::error::PhotoGalleryError;
use crate::models::{generate_photo_id, Photo, PhotoGalleryConfig};
use crate::state::GalleryState;
use crate::store::{PhotoStore, SqlitePhotoStore};
use crate::upload::{UploadFile, UploadStage};

/// Photo Gallery Service
///
/// Owns the photo store and publishes its contents through a
/// [`GalleryState`]. Every mutating operation leaves the published list in
/// step with what the store holds.
pub struct PhotoGalleryService<S: PhotoStore = SqlitePhotoStore> {
    config: PhotoGalleryConfig,
    store: S,
    state: GalleryState,
}

impl PhotoGalleryService<SqlitePhotoStore> {
    /// Service backed by the SQLite database named in `config`
    pub fn new(config: PhotoGalleryConfig, state: GalleryState) -> Self {
        let store = SqlitePhotoStore::new(config.database_path.clone());
        Self::with_store(config, store, state)
    }
}

impl<S: PhotoStore> PhotoGalleryService<S> {
    pub fn with_store(config: PhotoGalleryConfig, store: S, state: GalleryState) -> Self {
        Self {
            config,
            store,
            state,
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &PhotoGalleryConfig {
        &self.config
    }

    /// Initial load: publishes the stored photos and flags the state ready
    pub async fn init(&self) -> Vec<Photo> {
        let photos = self.load_photos().await;
        log::info!("Loaded {} photos from storage", photos.len());
        self.state.photos.set(photos.clone());
        self.state.is_initialized.set(true);
        photos
    }

    /// Every stored photo; storage errors are logged and yield an empty list
    pub async fn load_photos(&self) -> Vec<Photo> {
        match self.store.get_all().await {
            Ok(photos) => photos,
            Err(e) => {
                log::error!("Error loading photos from database: {}", e);
                Vec::new()
            }
        }
    }

    /// Re-reads the store and replaces the published list with its contents
    pub async fn reload_from_db(&self) -> Vec<Photo> {
        let photos = self.load_photos().await;
        self.state.photos.set(photos.clone());
        photos
    }

    /// Validates, reads, decodes and stores a single file.
    ///
    /// The new photo is published before the write completes and withdrawn
    /// again if the write fails. Upload progress is back at 0 when this
    /// returns, whatever the outcome.
    pub async fn upload_photo(&self, file: UploadFile) -> Result<Photo, PhotoGalleryError> {
        let result = self.run_upload(file).await;
        self.state.upload_progress.set(0.0);
        result
    }

    async fn run_upload(&self, mut file: UploadFile) -> Result<Photo, PhotoGalleryError> {
        log_stage(&file, UploadStage::Pending);

        if file.size() > self.config.max_file_size_bytes {
            log::warn!("Rejecting {}: {} bytes", file.name(), file.size());
            return Err(PhotoGalleryError::SizeLimitExceeded {
                size_bytes: file.size(),
                limit_bytes: self.config.max_file_size_bytes,
            });
        }

        log_stage(&file, UploadStage::Reading);
        let progress = self.state.upload_progress.clone();
        let bytes = file
            .read_all(self.config.read_chunk_size, |p| progress.set(p))
            .await?;
        let data_url = encode_data_url(file.name(), &bytes);
        drop(bytes);

        log_stage(&file, UploadStage::Decoding);
        let decoded = decode_dimensions(data_url).await?;

        let photo = Photo::uploaded(
            generate_photo_id(),
            &self.config.placeholder_date,
            decoded.data_url,
            file.name(),
            (decoded.width, decoded.height),
            file.size(),
        );

        log_stage(&file, UploadStage::PublishingOptimistic);
        self.stage(&photo);

        log_stage(&file, UploadStage::Persisting);
        if let Err(e) = self.store.add(&photo).await {
            self.rollback(photo.id);
            log_stage(&file, UploadStage::RolledBack);
            log::error!("Failed to save photo {}: {}", file.name(), e);
            return Err(e);
        }

        log_stage(&file, UploadStage::Committed);
        Ok(photo)
    }

    /// Phase one: show the candidate at the head of the list
    fn stage(&self, photo: &Photo) {
        let staged = photo.clone();
        self.state.photos.update(move |photos| {
            let mut next = Vec::with_capacity(photos.len() + 1);
            next.push(staged);
            next.extend(photos.iter().cloned());
            next
        });
    }

    /// Inverse of [`Self::stage`]
    fn rollback(&self, id: f64) {
        self.remove_published(id);
    }

    fn remove_published(&self, id: f64) {
        self.state
            .photos
            .update(|photos| photos.iter().filter(|p| p.id != id).cloned().collect());
    }

    /// Uploads files one after another.
    ///
    /// The first failure stops the batch: photos uploaded before it stay
    /// stored and published, later files are never touched. Progress tracks
    /// completed files and returns to 0 at the end.
    pub async fn upload_photos(
        &self,
        files: Vec<UploadFile>,
    ) -> Result<Vec<Photo>, PhotoGalleryError> {
        let total = files.len();
        let mut uploaded = Vec::with_capacity(total);
        let mut outcome = Ok(());

        for (index, file) in files.into_iter().enumerate() {
            match self.upload_photo(file).await {
                Ok(photo) => {
                    uploaded.push(photo);
                    self.state
                        .upload_progress
                        .set((index + 1) as f64 / total as f64 * 100.0);
                }
                Err(e) => {
                    log::warn!(
                        "Batch upload stopped at file {} of {}: {}",
                        index + 1,
                        total,
                        e
                    );
                    outcome = Err(e);
                    break;
                }
            }
        }

        self.state.upload_progress.set(0.0);
        outcome.map(|()| uploaded)
    }

    /// Deletes from storage first, then from the published list
    pub async fn delete_photo(&self, id: f64) -> Result<(), PhotoGalleryError> {
        self.store.delete(id).await?;
        self.remove_published(id);
        Ok(())
    }

    /// Empties storage first, then the published list
    pub async fn clear_all_photos(&self) -> Result<(), PhotoGalleryError> {
        self.store.clear().await?;
        self.state.photos.set(Vec::new());
        Ok(())
    }
}

fn log_stage(file: &UploadFile, stage: UploadStage) {
    log::debug!("Upload {}: {}", file.name(), stage);
}
