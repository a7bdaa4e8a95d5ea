pub mod album;
pub mod album_photo;
pub mod theme;

pub use album::{Album, AlbumUpdate, NewAlbum};
pub use album_photo::AlbumPhoto;
pub use theme::Theme;

/// Current time as an ISO-8601 UTC string with millisecond precision
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
