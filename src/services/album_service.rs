use crate::database::local_storage;
use crate::error::AppError;
use crate::models::{Album, AlbumUpdate, NewAlbum};
use photo_gallery::Observable;
use rusqlite::Connection;

/// Storage key of the serialized album list
pub const ALBUMS_KEY: &str = "local_albums";

/// Reads the stored albums; unreadable data is logged and treated as empty
pub fn load_albums(conn: &Connection) -> Vec<Album> {
    match local_storage::get_json::<Vec<Album>>(conn, ALBUMS_KEY) {
        Ok(albums) => albums.unwrap_or_default(),
        Err(e) => {
            log::error!("Failed to load albums: {}", e);
            Vec::new()
        }
    }
}

fn save_albums(conn: &Connection, albums: &[Album]) {
    if let Err(e) = local_storage::set_json(conn, ALBUMS_KEY, albums) {
        log::error!("Failed to save albums: {}", e);
    }
}

/// Album list published to the UI, kept in step with local storage
#[derive(Debug, Clone)]
pub struct AlbumStore {
    pub albums: Observable<Vec<Album>>,
}

impl AlbumStore {
    /// Creates the store with the albums currently in storage
    pub fn load(conn: &Connection) -> Self {
        Self {
            albums: Observable::new(load_albums(conn)),
        }
    }

    /// Re-reads storage, e.g. after another process changed it
    pub fn reload(&self, conn: &Connection) {
        self.albums.set(load_albums(conn));
    }

    /// Creates an album at the head of the list and persists the list
    pub fn create_album(&self, conn: &Connection, data: NewAlbum) -> Result<Album, AppError> {
        data.validate()?;
        let album = Album::new(data);
        log::info!("Creating album {} ({})", album.name, album.id);

        self.albums.update(|prev| {
            let mut next = Vec::with_capacity(prev.len() + 1);
            next.push(album.clone());
            next.extend(prev.iter().cloned());
            save_albums(conn, &next);
            next
        });

        Ok(album)
    }

    /// Applies `update` to the album with `id`; unknown ids change nothing
    pub fn update_album(&self, conn: &Connection, id: &str, update: &AlbumUpdate) {
        self.albums.update(|prev| {
            let next: Vec<Album> = prev
                .iter()
                .map(|a| {
                    if a.id == id {
                        a.with_update(update)
                    } else {
                        a.clone()
                    }
                })
                .collect();
            save_albums(conn, &next);
            next
        });
    }

    pub fn delete_album(&self, conn: &Connection, id: &str) {
        self.albums.update(|prev| {
            let next: Vec<Album> = prev.iter().filter(|a| a.id != id).cloned().collect();
            save_albums(conn, &next);
            next
        });
    }

    pub fn get_album(&self, id: &str) -> Option<Album> {
        self.albums.get().into_iter().find(|a| a.id == id)
    }
}
