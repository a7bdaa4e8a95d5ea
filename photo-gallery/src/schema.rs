use rusqlite::{Connection, Result};

/// Name of the photo database file when none is configured
pub const PHOTO_DB_NAME: &str = "PhotoGalleryDB";

/// Current photo schema version
pub const PHOTO_DB_VERSION: i32 = 1;

/// Initialize photo gallery database schema
///
/// Safe to call on every open: versions already applied are skipped.
pub fn init_photo_schema(conn: &Connection) -> Result<()> {
    // Schema version table for photo gallery
    conn.execute(
        "CREATE TABLE IF NOT EXISTS photo_schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    let current_version = photo_schema_version(conn)?;

    if current_version < PHOTO_DB_VERSION {
        log::info!("Creating photo schema v{}", PHOTO_DB_VERSION);
        create_photo_schema_v1(conn)?;
        conn.execute(
            "INSERT INTO photo_schema_version (version) VALUES (?1)",
            [PHOTO_DB_VERSION],
        )?;
    }

    Ok(())
}

/// Returns the highest applied photo schema version (0 on a fresh database)
pub fn photo_schema_version(conn: &Connection) -> Result<i32> {
    let version: Option<i32> = conn.query_row(
        "SELECT MAX(version) FROM photo_schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version.unwrap_or(0))
}

/// Create photo gallery schema version 1
fn create_photo_schema_v1(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS photos (
            id REAL PRIMARY KEY NOT NULL,
            date TEXT NOT NULL,
            src TEXT NOT NULL,
            alt TEXT NOT NULL,
            width INTEGER,
            height INTEGER,
            is_uploaded INTEGER CHECK(is_uploaded IN (0,1)),
            file_size INTEGER
        )",
        [],
    )?;

    // Non-unique secondary index on the date label
    conn.execute(
        "CREATE INDEX IF NOT EXISTS dateIndex ON photos(date)",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_photo_schema(&conn).unwrap();
        init_photo_schema(&conn).unwrap();

        assert_eq!(photo_schema_version(&conn).unwrap(), PHOTO_DB_VERSION);
        let versions: i32 = conn
            .query_row("SELECT COUNT(*) FROM photo_schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(versions, 1);
    }

    #[test]
    fn test_date_index_is_not_unique() {
        let conn = Connection::open_in_memory().unwrap();
        init_photo_schema(&conn).unwrap();

        let unique: i32 = conn
            .query_row(
                "SELECT \"unique\" FROM pragma_index_list('photos') WHERE name = 'dateIndex'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(unique, 0);
    }
}
