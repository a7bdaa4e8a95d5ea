use serde::{Deserialize, Serialize};

/// Membership of a photo in an album
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumPhoto {
    pub album_id: String,
    pub photo_id: f64,
    pub added_at: String,
}
