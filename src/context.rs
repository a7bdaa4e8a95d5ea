use crate::config::AppConfig;
use crate::database;
use crate::error::AppError;
use crate::services::{AlbumStore, PhotoService, ThemeStore};
use photo_gallery::GalleryState;
use rusqlite::Connection;

/// Every store of the application, opened from one configuration.
///
/// Components receive this context instead of reaching for globals.
pub struct GalleryContext {
    pub conn: Connection,
    pub photos: PhotoService,
    pub albums: AlbumStore,
    pub theme: ThemeStore,
}

impl GalleryContext {
    /// Opens the key-value database and loads every store.
    ///
    /// The photo store finishes loading in [`GalleryContext::init`].
    pub fn open(config: &AppConfig) -> Result<Self, AppError> {
        let conn = database::init_database(&config.database_path)?;
        let photos = PhotoService::new(config, GalleryState::new())?;
        let albums = AlbumStore::load(&conn);
        let theme = ThemeStore::load(&conn);

        Ok(Self {
            conn,
            photos,
            albums,
            theme,
        })
    }

    /// Loads stored photos; the gallery reports itself initialized afterwards
    pub async fn init(&self) {
        let photos = self.photos.init().await;
        log::info!(
            "Gallery ready: {} photos, {} albums, {} theme",
            photos.len(),
            self.albums.albums.get().len(),
            self.theme.get()
        );
    }
}
