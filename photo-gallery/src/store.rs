//! Persistent photo collection.
//!
//! [`PhotoStore`] is the seam between the upload pipeline and durable
//! storage. [`SqlitePhotoStore`] is the production backend: one `photos`
//! table keyed by `id` with a secondary index on `date`.

use crate::error::PhotoGalleryError;
use crate::models::Photo;
use crate::schema::init_photo_schema;
use rusqlite::{params, Connection};
use std::sync::{Mutex, MutexGuard};
use tokio::sync::OnceCell;

/// Durable storage for photo records
#[allow(async_fn_in_trait)]
pub trait PhotoStore {
    /// Every stored record, in no particular order
    async fn get_all(&self) -> Result<Vec<Photo>, PhotoGalleryError>;

    /// Inserts a new record; an existing id is a write failure
    async fn add(&self, photo: &Photo) -> Result<(), PhotoGalleryError>;

    /// Removes a record by id; absent ids are not an error
    async fn delete(&self, id: f64) -> Result<(), PhotoGalleryError>;

    /// Removes every record
    async fn clear(&self) -> Result<(), PhotoGalleryError>;
}

/// SQLite-backed photo collection, opened lazily on first use
pub struct SqlitePhotoStore {
    database_path: String,
    conn: OnceCell<Mutex<Connection>>,
}

impl SqlitePhotoStore {
    /// Store backed by the SQLite file at `database_path` (empty = in-memory)
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
            conn: OnceCell::new(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(String::new())
    }

    /// Opened database handle.
    ///
    /// The first call opens the database and applies the schema. Callers
    /// arriving while that is in flight wait for the same handle; later
    /// calls return it immediately. A failed open is not cached.
    pub async fn connection(&self) -> Result<&Mutex<Connection>, PhotoGalleryError> {
        self.conn
            .get_or_try_init(|| async { self.open().map(Mutex::new) })
            .await
    }

    fn open(&self) -> Result<Connection, PhotoGalleryError> {
        let conn = if self.database_path.is_empty() {
            log::debug!("Opening in-memory photo database");
            Connection::open_in_memory()
        } else {
            log::debug!("Opening photo database at {}", self.database_path);
            Connection::open(&self.database_path)
        }
        .map_err(PhotoGalleryError::StorageOpenFailure)?;

        init_photo_schema(&conn).map_err(PhotoGalleryError::StorageOpenFailure)?;
        log::info!("Photo database ready");

        Ok(conn)
    }

    async fn lock(&self) -> Result<MutexGuard<'_, Connection>, PhotoGalleryError> {
        let conn = self.connection().await?;
        // A panic while holding the lock cannot leave SQLite half-written
        Ok(conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}

impl PhotoStore for SqlitePhotoStore {
    async fn get_all(&self) -> Result<Vec<Photo>, PhotoGalleryError> {
        let conn = self.lock().await?;
        let mut stmt = conn
            .prepare(
                "SELECT id, date, src, alt, width, height, is_uploaded, file_size FROM photos",
            )
            .map_err(PhotoGalleryError::StorageReadFailure)?;

        let rows = stmt
            .query_map([], |row| Photo::try_from(row))
            .map_err(PhotoGalleryError::StorageReadFailure)?;

        let photos = rows
            .collect::<Result<Vec<_>, _>>()
            .map_err(PhotoGalleryError::StorageReadFailure)?;

        Ok(photos)
    }

    async fn add(&self, photo: &Photo) -> Result<(), PhotoGalleryError> {
        let conn = self.lock().await?;
        conn.execute(
            "INSERT INTO photos (id, date, src, alt, width, height, is_uploaded, file_size)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                photo.id,
                &photo.date,
                &photo.src,
                &photo.alt,
                photo.width,
                photo.height,
                photo.is_uploaded,
                photo.file_size.map(|s| s as i64),
            ],
        )
        .map_err(PhotoGalleryError::StorageWriteFailure)?;

        Ok(())
    }

    async fn delete(&self, id: f64) -> Result<(), PhotoGalleryError> {
        let conn = self.lock().await?;
        let rows = conn
            .execute("DELETE FROM photos WHERE id = ?1", params![id])
            .map_err(PhotoGalleryError::StorageWriteFailure)?;

        if rows == 0 {
            log::debug!("Photo {} not in store, nothing deleted", id);
        }

        Ok(())
    }

    async fn clear(&self) -> Result<(), PhotoGalleryError> {
        let conn = self.lock().await?;
        let rows = conn
            .execute("DELETE FROM photos", [])
            .map_err(PhotoGalleryError::StorageWriteFailure)?;

        log::debug!("Cleared {} photos", rows);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: f64) -> Photo {
        Photo::uploaded(id, "Today", "data:image/png;base64,AA==".into(), "a.png", (1, 2), 3)
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_handle() {
        let store = SqlitePhotoStore::in_memory();
        let (a, b) = tokio::join!(store.connection(), store.connection());
        let a = a.unwrap();
        let b = b.unwrap();
        assert!(std::ptr::eq(a, b));

        let c = store.connection().await.unwrap();
        assert!(std::ptr::eq(a, c));
    }

    #[tokio::test]
    async fn test_add_get_delete_clear() {
        let store = SqlitePhotoStore::in_memory();
        store.add(&sample(1.25)).await.unwrap();
        store.add(&sample(2.5)).await.unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&sample(1.25)));

        store.delete(1.25).await.unwrap();
        assert_eq!(store.get_all().await.unwrap(), vec![sample(2.5)]);

        // Absent ids are a no-op
        store.delete(99.0).await.unwrap();

        store.clear().await.unwrap();
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_write_failure() {
        let store = SqlitePhotoStore::in_memory();
        store.add(&sample(7.0)).await.unwrap();

        let err = store.add(&sample(7.0)).await.unwrap_err();
        assert!(matches!(err, PhotoGalleryError::StorageWriteFailure(_)));
    }

    #[tokio::test]
    async fn test_open_failure_is_reported() {
        let store = SqlitePhotoStore::new("/nonexistent-dir/for/sure/photos.db");
        let err = store.get_all().await.unwrap_err();
        assert!(matches!(err, PhotoGalleryError::StorageOpenFailure(_)));
    }

    #[tokio::test]
    async fn test_file_backed_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photos.db");
        let path = path.to_str().unwrap().to_string();

        {
            let store = SqlitePhotoStore::new(path.clone());
            store.add(&sample(3.0)).await.unwrap();
        }

        let reopened = SqlitePhotoStore::new(path);
        assert_eq!(reopened.get_all().await.unwrap(), vec![sample(3.0)]);
    }
}
