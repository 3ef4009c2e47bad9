//! Record store
//!
//! SQLite connection pool and schema migrations.

pub mod connection;
pub mod migrations;

pub use connection::{Database, DbError, DbResult};

/// Open (creating if needed) the database at `path` and bring its schema current.
pub fn open<P: AsRef<std::path::Path>>(path: P) -> DbResult<Database> {
    let database = Database::new(path)?;
    database.with_conn(|conn| {
        migrations::run_migrations(conn)?;
        let version = migrations::get_schema_version(conn)?;
        tracing::info!(version, "database schema ready");
        Ok(())
    })?;
    Ok(database)
}
