//! Browsing stored calculations: list, reopen into a session, delete.

use crate::codec::RecordFormat;
use crate::core::session::CalcSession;
use crate::db::log::ttlog_or_warn;
use crate::db::queries::{
    delete_favourite, delete_history, find_favourite, find_history, list_favourites, list_history,
};
use crate::errors::{AppError, AppResult};
use crate::models::record::{FavouriteRecord, HistoryRecord};
use rusqlite::Connection;

/// A stored record reopened as a calculation session.
///
/// `format` is the format the record was stored in, so re-printing it does not
/// produce a second history row for the same data.
#[derive(Debug)]
pub struct LoadedRecord {
    pub session: CalcSession,
    pub format: RecordFormat,
}

fn load(data: &str) -> AppResult<LoadedRecord> {
    let mut session = CalcSession::new();
    session.load_record(data)?;
    Ok(LoadedRecord {
        session,
        format: RecordFormat::detect(data),
    })
}

pub struct HistoryLogic;

impl HistoryLogic {
    pub fn list(conn: &Connection) -> AppResult<Vec<HistoryRecord>> {
        list_history(conn)
    }

    pub fn open(conn: &Connection, timestamp: &str) -> AppResult<LoadedRecord> {
        let rec = find_history(conn, timestamp)?
            .ok_or_else(|| AppError::NotFound(format!("history record '{}'", timestamp)))?;
        load(&rec.data)
    }

    /// Returns `false` when nothing matched.
    pub fn delete(conn: &Connection, timestamp: &str) -> AppResult<bool> {
        let deleted = delete_history(conn, timestamp)?;
        if deleted {
            ttlog_or_warn(conn, "history_del", timestamp, "History record deleted");
        }
        Ok(deleted)
    }
}

pub struct FavouriteLogic;

impl FavouriteLogic {
    pub fn list(conn: &Connection) -> AppResult<Vec<FavouriteRecord>> {
        list_favourites(conn)
    }

    pub fn open(conn: &Connection, label: &str) -> AppResult<LoadedRecord> {
        let rec = find_favourite(conn, label)?
            .ok_or_else(|| AppError::NotFound(format!("favourite '{}'", label)))?;
        load(&rec.data)
    }

    /// Returns `false` when nothing matched.
    pub fn delete(conn: &Connection, label: &str) -> AppResult<bool> {
        let deleted = delete_favourite(conn, label)?;
        if deleted {
            ttlog_or_warn(conn, "fav_del", label, "Favourite deleted");
        }
        Ok(deleted)
    }
}
