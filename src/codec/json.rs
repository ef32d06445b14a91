//! Versioned JSON record format: `{"v":2,"rows":[{"qty":..,"duration":..,"device":..}]}`.

use crate::errors::{AppError, AppResult};
use crate::models::usage::{Ledger, UsageRow};
use serde::{Deserialize, Serialize};

/// Version tag written into every JSON record (version 1 is the pipe format).
pub const RECORD_VERSION: u32 = 2;

#[derive(Serialize)]
struct RecordOut<'a> {
    v: u32,
    rows: &'a [UsageRow],
}

#[derive(Deserialize)]
struct RecordIn {
    v: u32,
    rows: Vec<UsageRow>,
}

pub fn encode_json(ledger: &Ledger) -> AppResult<String> {
    let rec = RecordOut {
        v: RECORD_VERSION,
        rows: ledger.rows(),
    };
    serde_json::to_string(&rec).map_err(|e| AppError::Other(format!("record encoding failed: {e}")))
}

pub fn decode_json(text: &str) -> AppResult<Ledger> {
    let rec: RecordIn =
        serde_json::from_str(text).map_err(|e| AppError::MalformedRecord(e.to_string()))?;

    if rec.v != RECORD_VERSION {
        return Err(AppError::MalformedRecord(format!(
            "unsupported record version {}",
            rec.v
        )));
    }

    Ok(Ledger::from(rec.rows))
}
