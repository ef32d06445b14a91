//! In-memory state of one calculation: the ledger being edited and the
//! results of its last successful computation.

use crate::codec::{self, RecordFormat};
use crate::core::calculator::{Calculation, compute};
use crate::db::log::ttlog_or_warn;
use crate::db::queries::{add_favourite, add_history};
use crate::errors::{AppError, AppResult};
use crate::models::device::Device;
use crate::models::usage::{Ledger, UsageRow};
use crate::utils::time::now_history_ts;
use rusqlite::Connection;

/// Result of the "print" action: compute, then record history if new.
#[derive(Debug)]
pub struct PrintOutcome {
    pub calculation: Calculation,
    pub record: String,
    pub timestamp: String,
    pub history_inserted: bool,
}

/// Result of the "save" action. The favourite may be rejected as a duplicate
/// while the history insert still goes through.
#[derive(Debug)]
pub struct SaveOutcome {
    pub print: PrintOutcome,
    pub favourite: AppResult<()>,
}

#[derive(Debug, Default)]
pub struct CalcSession {
    ledger: Ledger,
    results: Vec<Option<f64>>,
    total: Option<f64>,
}

impl CalcSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ledger(ledger: Ledger) -> Self {
        let results = vec![None; ledger.len()];
        Self {
            ledger,
            results,
            total: None,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn rows(&self) -> &[UsageRow] {
        self.ledger.rows()
    }

    pub fn add_row(&mut self, row: UsageRow) {
        self.ledger.push(row);
        self.results.push(None);
    }

    pub fn remove_row(&mut self, index: usize) -> Option<UsageRow> {
        let removed = self.ledger.remove(index)?;
        self.results.remove(index);
        Some(removed)
    }

    /// Per-row kWh shown for `index`, if it was ever computed.
    pub fn row_result(&self, index: usize) -> Option<f64> {
        self.results.get(index).copied().flatten()
    }

    pub fn last_total(&self) -> Option<f64> {
        self.total
    }

    /// Replace the ledger with a stored record. On a decoding error the
    /// session is left untouched.
    pub fn load_record(&mut self, text: &str) -> AppResult<()> {
        let ledger = codec::decode(text)?;
        *self = Self::from_ledger(ledger);
        Ok(())
    }

    /// Compute the ledger. Displayed results change only on success.
    pub fn calculate(&mut self, devices: &[Device]) -> AppResult<Calculation> {
        let calc = compute(&self.ledger, devices)?;
        self.results = calc.rows.iter().map(|r| Some(r.energy_kwh)).collect();
        self.total = Some(calc.total_kwh);
        Ok(calc)
    }

    pub fn encode(&self, format: RecordFormat) -> AppResult<String> {
        codec::encode(&self.ledger, format)
    }

    fn record_history(
        &self,
        conn: &Connection,
        calculation: Calculation,
        record: String,
    ) -> AppResult<PrintOutcome> {
        let timestamp = now_history_ts();
        let history_inserted = add_history(conn, &timestamp, &record)?;
        if history_inserted {
            ttlog_or_warn(
                conn,
                "history_add",
                &timestamp,
                &format!("{} rows, {} kWh", self.ledger.len(), calculation.total_kwh),
            );
        }

        Ok(PrintOutcome {
            calculation,
            record,
            timestamp,
            history_inserted,
        })
    }

    pub fn print(
        &mut self,
        conn: &Connection,
        devices: &[Device],
        format: RecordFormat,
    ) -> AppResult<PrintOutcome> {
        let calculation = self.calculate(devices)?;
        let record = self.encode(format)?;
        self.record_history(conn, calculation, record)
    }

    pub fn save(
        &mut self,
        conn: &Connection,
        devices: &[Device],
        format: RecordFormat,
        label: &str,
    ) -> AppResult<SaveOutcome> {
        if label.trim().is_empty() {
            return Err(AppError::InvalidInput("favourite label is empty".into()));
        }

        let calculation = self.calculate(devices)?;
        let record = self.encode(format)?;

        let favourite = match add_favourite(conn, label, &record) {
            Ok(()) => {
                ttlog_or_warn(conn, "fav_add", label, &format!("{} rows", self.ledger.len()));
                Ok(())
            }
            Err(e @ AppError::DuplicateFavourite(_)) => Err(e),
            Err(e) => return Err(e),
        };

        let print = self.record_history(conn, calculation, record)?;
        Ok(SaveOutcome { print, favourite })
    }
}
