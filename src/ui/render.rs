//! Terminal views of a calculation session and of stored records.

use crate::codec;
use crate::core::calculator::compute;
use crate::core::session::{CalcSession, PrintOutcome};
use crate::models::device::Device;
use crate::ui::messages::{info, success};
use crate::utils::colors::{RESET, color_for_kwh};
use crate::utils::formatting::{bold, format_optional_kwh};
use crate::utils::table::{Column, Table};

/// Rows of the session with their last computed values, then the total.
pub fn print_session(session: &CalcSession, decimals: usize) {
    let mut table = Table::new(vec![
        Column::right("#"),
        Column::right("Qty"),
        Column::right("Duration"),
        Column::left("Device"),
        Column::right("Energy"),
    ]);

    for (i, row) in session.rows().iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            row.quantity.clone(),
            row.duration.clone(),
            row.device_label.clone(),
            format_optional_kwh(session.row_result(i), decimals),
        ]);
    }

    print!("{}", table.render());

    let total = session.last_total();
    println!(
        "{} {}{}{}",
        bold("Result:"),
        color_for_kwh(total),
        format_optional_kwh(total, decimals),
        RESET
    );
}

pub fn report_history(outcome: &PrintOutcome) {
    if outcome.history_inserted {
        success(format!("Saved to history as '{}'", outcome.timestamp));
    } else {
        info("Identical calculation already in history; nothing added.");
    }
}

/// Row count and total of a stored record, for list views.
///
/// A record that cannot be decoded or computed is shown as such instead of
/// failing the whole listing.
pub fn summarize_record(data: &str, devices: &[Device], decimals: usize) -> (String, String) {
    match codec::decode(data) {
        Ok(ledger) => {
            let total = compute(&ledger, devices)
                .map(|c| format_optional_kwh(Some(c.total_kwh), decimals))
                .unwrap_or_else(|_| "invalid".to_string());
            (ledger.len().to_string(), total)
        }
        Err(_) => ("?".to_string(), "malformed".to_string()),
    }
}
