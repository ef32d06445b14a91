//! Storage operations on the `devices`, `history` and `favourite` tables.

use crate::errors::{AppError, AppResult};
use crate::models::device::Device;
use crate::models::record::{FavouriteRecord, HistoryRecord};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// Devices
// ---------------------------

pub fn insert_device(conn: &Connection, name: &str, power_watts: i64) -> AppResult<Device> {
    conn.execute(
        "INSERT INTO devices (name, power) VALUES (?1, ?2)",
        params![name, power_watts],
    )?;

    Ok(Device {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        power_watts,
    })
}

/// All devices in storage order.
pub fn load_devices(conn: &Connection) -> AppResult<Vec<Device>> {
    let mut stmt = conn.prepare("SELECT id, name, power FROM devices ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Device {
            id: row.get("id")?,
            name: row.get("name")?,
            power_watts: row.get("power")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// History
// ---------------------------

fn map_history(row: &Row) -> Result<HistoryRecord> {
    Ok(HistoryRecord {
        id: row.get("id")?,
        timestamp: row.get("name")?,
        data: row.get("data")?,
    })
}

pub fn history_contains(conn: &Connection, data: &str) -> AppResult<bool> {
    let found = conn
        .query_row("SELECT 1 FROM history WHERE data = ?1 LIMIT 1", [data], |_| {
            Ok(())
        })
        .optional()?;
    Ok(found.is_some())
}

/// Insert a history record unless an identical record is already stored.
///
/// Returns `true` when a row was written.
pub fn add_history(conn: &Connection, timestamp: &str, data: &str) -> AppResult<bool> {
    if history_contains(conn, data)? {
        return Ok(false);
    }

    conn.execute(
        "INSERT INTO history (name, data) VALUES (?1, ?2)",
        params![timestamp, data],
    )?;
    Ok(true)
}

/// Most recently inserted first.
pub fn list_history(conn: &Connection) -> AppResult<Vec<HistoryRecord>> {
    let mut stmt = conn.prepare("SELECT id, name, data FROM history ORDER BY id DESC")?;
    let rows = stmt.query_map([], map_history)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_history(conn: &Connection, timestamp: &str) -> AppResult<Option<HistoryRecord>> {
    let rec = conn
        .query_row(
            "SELECT id, name, data FROM history WHERE name = ?1 ORDER BY id ASC LIMIT 1",
            [timestamp],
            map_history,
        )
        .optional()?;
    Ok(rec)
}

/// Delete the history row with this timestamp. Absent rows are not an error.
pub fn delete_history(conn: &Connection, timestamp: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM history WHERE name = ?1", [timestamp])?;
    Ok(n > 0)
}

// ---------------------------
// Favourites
// ---------------------------

fn map_favourite(row: &Row) -> Result<FavouriteRecord> {
    Ok(FavouriteRecord {
        id: row.get("id")?,
        label: row.get("name")?,
        data: row.get("data")?,
    })
}

/// Insert a favourite. An existing label is never overwritten.
pub fn add_favourite(conn: &Connection, label: &str, data: &str) -> AppResult<()> {
    if label.trim().is_empty() {
        return Err(AppError::InvalidInput("favourite label is empty".into()));
    }

    if find_favourite(conn, label)?.is_some() {
        return Err(AppError::DuplicateFavourite(label.to_string()));
    }

    conn.execute(
        "INSERT INTO favourite (name, data) VALUES (?1, ?2)",
        params![label, data],
    )?;
    Ok(())
}

/// Most recently inserted first.
pub fn list_favourites(conn: &Connection) -> AppResult<Vec<FavouriteRecord>> {
    let mut stmt = conn.prepare("SELECT id, name, data FROM favourite ORDER BY id DESC")?;
    let rows = stmt.query_map([], map_favourite)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_favourite(conn: &Connection, label: &str) -> AppResult<Option<FavouriteRecord>> {
    let rec = conn
        .query_row(
            "SELECT id, name, data FROM favourite WHERE name = ?1 ORDER BY id ASC LIMIT 1",
            [label],
            map_favourite,
        )
        .optional()?;
    Ok(rec)
}

/// Delete the favourite with this label. Absent rows are not an error.
pub fn delete_favourite(conn: &Connection, label: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM favourite WHERE name = ?1", [label])?;
    Ok(n > 0)
}

// ---------------------------
// Counters
// ---------------------------

pub fn count_rows(conn: &Connection, table: &str) -> Result<i64> {
    // table names come from a fixed list in the callers
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
}
