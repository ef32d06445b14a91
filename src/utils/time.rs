//! Timestamps used as history keys.

use chrono::{DateTime, Local};

/// Same layout the desktop version of the app stores (`2025-10-16 09:41:07.123456`).
pub const HISTORY_TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn format_history_ts(dt: &DateTime<Local>) -> String {
    dt.format(HISTORY_TS_FORMAT).to_string()
}

pub fn now_history_ts() -> String {
    format_history_ts(&Local::now())
}
