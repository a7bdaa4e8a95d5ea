use crate::error::AppError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Owner recorded on albums created on this device
pub const LOCAL_USER_ID: &str = "local_user";

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 7;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub cover_photo_id: Option<String>,
    pub is_shared: bool,
    pub created_at: String,
    pub updated_at: String,
    pub user_id: String,
}

/// Input for creating an album
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAlbum {
    pub name: String,
    pub description: Option<String>,
    pub cover_photo_id: Option<String>,
}

/// Partial update of an album.
///
/// `None` leaves a field untouched; for the nullable fields `Some(None)`
/// clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlbumUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub cover_photo_id: Option<Option<String>>,
}

impl Album {
    /// Creates a fresh, unshared local album
    pub fn new(data: NewAlbum) -> Self {
        let now = super::now_iso();
        Self {
            id: generate_album_id(),
            name: data.name,
            description: data.description,
            cover_photo_id: data.cover_photo_id,
            is_shared: false,
            created_at: now.clone(),
            updated_at: now,
            user_id: LOCAL_USER_ID.to_string(),
        }
    }

    /// Returns a copy with `update` applied and `updated_at` refreshed
    pub fn with_update(&self, update: &AlbumUpdate) -> Self {
        Self {
            name: update.name.clone().unwrap_or_else(|| self.name.clone()),
            description: update
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            cover_photo_id: update
                .cover_photo_id
                .clone()
                .unwrap_or_else(|| self.cover_photo_id.clone()),
            updated_at: super::now_iso(),
            ..self.clone()
        }
    }
}

impl NewAlbum {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// An album needs a non-blank name
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Album name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// `album_<millis>_<7 base36 chars>`
pub fn generate_album_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("album_{}_{}", chrono::Utc::now().timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_album_defaults() {
        let album = Album::new(NewAlbum::named("Summer"));
        assert_eq!(album.name, "Summer");
        assert!(!album.is_shared);
        assert_eq!(album.user_id, LOCAL_USER_ID);
        assert_eq!(album.created_at, album.updated_at);
        assert!(album.created_at.ends_with('Z'));
    }

    #[test]
    fn test_album_id_format() {
        let id = generate_album_id();
        let parts: Vec<_> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "album");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), ID_SUFFIX_LEN);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_update_can_clear_nullable_fields() {
        let album = Album::new(NewAlbum {
            name: "Trip".to_string(),
            description: Some("Alps".to_string()),
            cover_photo_id: Some("42".to_string()),
        });

        let updated = album.with_update(&AlbumUpdate {
            description: Some(None),
            ..AlbumUpdate::default()
        });

        assert_eq!(updated.name, "Trip");
        assert_eq!(updated.description, None);
        assert_eq!(updated.cover_photo_id, Some("42".to_string()));
        assert_eq!(updated.id, album.id);
        assert_eq!(updated.created_at, album.created_at);
    }

    #[test]
    fn test_blank_name_is_invalid() {
        assert!(NewAlbum::named("  ").validate().is_err());
        assert!(NewAlbum::named("ok").validate().is_ok());
    }
}
