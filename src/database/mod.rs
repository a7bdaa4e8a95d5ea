pub mod local_storage;
pub mod schema;

use crate::error::AppError;
use rusqlite::Connection;
use std::path::Path;

/// Opens the key-value database at `db_path` and applies the schema.
///
/// An empty path opens an in-memory database.
pub fn init_database(db_path: &Path) -> Result<Connection, AppError> {
    let conn = if db_path.as_os_str().is_empty() {
        Connection::open_in_memory()?
    } else {
        // Make sure the directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        log::debug!("Opening database at {}", db_path.display());
        Connection::open(db_path)?
    };

    schema::init_schema(&conn)?;

    Ok(conn)
}
