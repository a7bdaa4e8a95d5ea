//! # Gallery Stores
//!
//! Local state stores behind a photo gallery front-end:
//! - photos, via the [`photo_gallery`] pipeline
//! - albums and album membership, as JSON lists in a key-value table
//! - the UI theme preference
//!
//! Every store publishes its state through a [`photo_gallery::Observable`].

pub mod config;
pub mod context;
pub mod database;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use context::GalleryContext;
pub use error::AppError;
