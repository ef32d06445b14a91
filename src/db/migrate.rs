use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the three data tables if absent.
///
/// Column names match databases written by the desktop version of the app
/// (`history.name` holds the timestamp, `favourite.name` the label).
fn create_data_tables(conn: &Connection) -> Result<()> {
    for (table, ddl) in [
        (
            "devices",
            r#"
            CREATE TABLE IF NOT EXISTS devices (
                id    INTEGER PRIMARY KEY,
                name  VARCHAR NOT NULL,
                power INTEGER NOT NULL
            );
            "#,
        ),
        (
            "history",
            r#"
            CREATE TABLE IF NOT EXISTS history (
                id    INTEGER PRIMARY KEY,
                name  DATETIME NOT NULL,
                data  VARCHAR NOT NULL
            );
            "#,
        ),
        (
            "favourite",
            r#"
            CREATE TABLE IF NOT EXISTS favourite (
                id    INTEGER PRIMARY KEY,
                name  VARCHAR NOT NULL,
                data  VARCHAR NOT NULL
            );
            "#,
        ),
    ] {
        if !table_exists(conn, table)? {
            conn.execute_batch(ddl)?;
            success(format!("Created {} table.", table));
        }
    }
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Lookup indexes for duplicate checks and delete-by-key.
fn migrate_add_lookup_indexes(conn: &Connection) -> Result<()> {
    let version = "20251016_0001_add_lookup_indexes";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_history_name   ON history(name);
        CREATE INDEX IF NOT EXISTS idx_history_data   ON history(data);
        CREATE INDEX IF NOT EXISTS idx_favourite_name ON favourite(name);
        "#,
    )?;

    mark_applied(conn, version, "Added lookup indexes on history and favourite")?;

    success(format!(
        "Migration applied: {} → indexes on history(name, data), favourite(name)",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() every time a database is opened.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_data_tables(conn)?;
    migrate_add_lookup_indexes(conn)?;
    Ok(())
}
