//! Owned SQLite handle passed explicitly to the logic that needs storage.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;
use std::fs;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database at `path` and make sure the schema exists.
    pub fn new(path: &str) -> AppResult<Self> {
        let path = expand_tilde(path);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory database with the full schema (tests, dry runs).
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}
