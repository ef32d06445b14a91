use crate::db::pool::DbPool;
use crate::db::queries::count_rows;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    for (table, label) in [
        ("devices", "Devices"),
        ("history", "History records"),
        ("favourite", "Favourites"),
    ] {
        let count = count_rows(&pool.conn, table)?;
        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, count, RESET);
    }

    //
    // 3) HISTORY RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT name FROM history ORDER BY id ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT name FROM history ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• History range:{}", CYAN, RESET);
    println!("    oldest: {}", fmt_first);
    println!("    newest: {}", fmt_last);

    println!();
    Ok(())
}
