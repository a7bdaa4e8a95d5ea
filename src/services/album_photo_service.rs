use crate::database::local_storage;
use crate::models::{now_iso, AlbumPhoto};
use rusqlite::Connection;

/// Storage key of the serialized album membership list
pub const ALBUM_PHOTOS_KEY: &str = "album_photos";

fn load_all(conn: &Connection) -> Vec<AlbumPhoto> {
    match local_storage::get_json::<Vec<AlbumPhoto>>(conn, ALBUM_PHOTOS_KEY) {
        Ok(list) => list.unwrap_or_default(),
        Err(e) => {
            log::error!("Failed to load album photos: {}", e);
            Vec::new()
        }
    }
}

fn save_all(conn: &Connection, list: &[AlbumPhoto]) {
    if let Err(e) = local_storage::set_json(conn, ALBUM_PHOTOS_KEY, list) {
        log::error!("Failed to save album photos: {}", e);
    }
}

/// Ids of the photos in `album_id`, in insertion order
pub fn get_album_photos(conn: &Connection, album_id: &str) -> Vec<f64> {
    load_all(conn)
        .into_iter()
        .filter(|ap| ap.album_id == album_id)
        .map(|ap| ap.photo_id)
        .collect()
}

/// Replaces the photo set of `album_id` with `photo_ids`
pub fn add_photos_to_album(conn: &Connection, album_id: &str, photo_ids: &[f64]) {
    let now = now_iso();
    let mut next: Vec<AlbumPhoto> = load_all(conn)
        .into_iter()
        .filter(|ap| ap.album_id != album_id)
        .collect();

    next.extend(photo_ids.iter().map(|&photo_id| AlbumPhoto {
        album_id: album_id.to_string(),
        photo_id,
        added_at: now.clone(),
    }));

    log::debug!("Album {} now holds {} photos", album_id, photo_ids.len());
    save_all(conn, &next);
}

pub fn remove_photo_from_album(conn: &Connection, album_id: &str, photo_id: f64) {
    let next: Vec<AlbumPhoto> = load_all(conn)
        .into_iter()
        .filter(|ap| !(ap.album_id == album_id && ap.photo_id == photo_id))
        .collect();
    save_all(conn, &next);
}

pub fn remove_all_photos_from_album(conn: &Connection, album_id: &str) {
    let next: Vec<AlbumPhoto> = load_all(conn)
        .into_iter()
        .filter(|ap| ap.album_id != album_id)
        .collect();
    save_all(conn, &next);
}

pub fn get_photo_count(conn: &Connection, album_id: &str) -> usize {
    get_album_photos(conn, album_id).len()
}
