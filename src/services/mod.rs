pub mod album_photo_service;
pub mod album_service;
pub mod photo_service;
pub mod theme_service;

pub use album_service::AlbumStore;
pub use photo_service::PhotoService;
pub use theme_service::ThemeStore;
