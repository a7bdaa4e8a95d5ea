//! # Photo Gallery
//!
//! Local photo persistence pipeline for a gallery front-end.
//!
//! This crate provides:
//! - A versioned SQLite photo collection keyed by numeric id, indexed by date
//! - Upload of files into validated, dimensioned photo records (data URLs)
//! - Optimistic publishing with rollback when the durable write fails
//! - Observable photo list, upload progress and initialization flag
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use photo_gallery::{GalleryState, PhotoGalleryConfig, PhotoGalleryService, UploadFile};
//!
//! let state = GalleryState::new();
//! let service = PhotoGalleryService::new(PhotoGalleryConfig::default(), state.clone());
//! service.init().await;
//!
//! let photo = service.upload_photo(UploadFile::from_path("holiday.jpg").await?).await?;
//! assert_eq!(state.photos.get()[0], photo);
//! ```

pub mod decode;
pub mod error;
pub mod models;
pub mod schema;
pub mod service;
pub mod state;
pub mod store;
pub mod upload;

pub use decode::{decode_dimensions, encode_data_url, parse_data_url, DecodedImage};
pub use error::PhotoGalleryError;
pub use models::{
    generate_photo_id, Photo, PhotoGalleryConfig, DEFAULT_MAX_FILE_SIZE_BYTES,
    DEFAULT_PLACEHOLDER_DATE,
};
pub use schema::{init_photo_schema, PHOTO_DB_NAME, PHOTO_DB_VERSION};
pub use service::PhotoGalleryService;
pub use state::{GalleryState, Observable};
pub use store::{PhotoStore, SqlitePhotoStore};
pub use upload::{UploadFile, UploadStage};
