use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Initialize the database.
/// Tables are created if absent on every startup; all schema work lives in
/// the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    Ok(())
}
