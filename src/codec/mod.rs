// src/codec/mod.rs

//! Record codec: turns a [`Ledger`] into the single text value stored in the
//! `history.data` / `favourite.data` columns, and back.

mod json;
mod pipe;

pub use json::{decode_json, encode_json};
pub use pipe::{decode_pipe, encode_pipe};

use crate::errors::AppResult;
use crate::models::usage::Ledger;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Format used when writing new records. Reading always auto-detects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// Legacy `count|qty|duration|device|...|` string
    Pipe,
    /// Versioned JSON object
    #[default]
    Json,
}

impl RecordFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordFormat::Pipe => "pipe",
            RecordFormat::Json => "json",
        }
    }

    /// Format of an already-encoded record.
    pub fn detect(text: &str) -> Self {
        if text.trim_start().starts_with('{') {
            RecordFormat::Json
        } else {
            RecordFormat::Pipe
        }
    }
}

pub fn encode(ledger: &Ledger, format: RecordFormat) -> AppResult<String> {
    match format {
        RecordFormat::Pipe => Ok(encode_pipe(ledger)),
        RecordFormat::Json => encode_json(ledger),
    }
}

pub fn decode(text: &str) -> AppResult<Ledger> {
    match RecordFormat::detect(text) {
        RecordFormat::Pipe => decode_pipe(text),
        RecordFormat::Json => decode_json(text),
    }
}
