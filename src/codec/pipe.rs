//! Legacy pipe-delimited record format.
//!
//! `"<count>|<qty_1>|<duration_1>|<device_1>|...|<qty_n>|<duration_n>|<device_n>|"`
//!
//! Fields are not escaped: a `|` inside a device label or numeric field
//! corrupts the record. New records use the JSON format unless configured
//! otherwise.

use crate::errors::{AppError, AppResult};
use crate::models::usage::{Ledger, UsageRow};

const SEP: char = '|';

pub fn encode_pipe(ledger: &Ledger) -> String {
    let mut out = format!("{}{}", ledger.len(), SEP);
    for row in ledger {
        out.push_str(&row.quantity);
        out.push(SEP);
        out.push_str(&row.duration);
        out.push(SEP);
        out.push_str(&row.device_label);
        out.push(SEP);
    }
    out
}

pub fn decode_pipe(text: &str) -> AppResult<Ledger> {
    let mut tokens: Vec<&str> = text.split(SEP).collect();

    // A well-formed record ends with the separator; a missing trailer is tolerated.
    if tokens.last() == Some(&"") {
        tokens.pop();
    }

    let (count_tok, fields) = tokens
        .split_first()
        .ok_or_else(|| AppError::MalformedRecord("empty record".into()))?;

    let count: usize = count_tok.trim().parse().map_err(|_| {
        AppError::MalformedRecord(format!("row count '{}' is not an integer", count_tok))
    })?;

    let expected = count
        .checked_mul(3)
        .ok_or_else(|| AppError::MalformedRecord(format!("row count {} is too large", count)))?;

    if fields.len() != expected {
        return Err(AppError::MalformedRecord(format!(
            "declared {} rows ({} fields) but found {} fields",
            count,
            expected,
            fields.len()
        )));
    }

    Ok(fields
        .chunks_exact(3)
        .map(|t| UsageRow::new(t[0], t[1], t[2]))
        .collect())
}
