use super::power::resolve_power;
use crate::errors::{AppError, AppResult};
use crate::models::device::Device;
use crate::models::usage::Ledger;

#[derive(Debug, Clone, PartialEq)]
pub struct RowEnergy {
    pub power_watts: i64,
    pub energy_wh: i64,
    pub energy_kwh: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculation {
    pub rows: Vec<RowEnergy>,
    pub total_kwh: f64,
}

fn parse_field(raw: &str, what: &str, row: usize) -> AppResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        AppError::InvalidInput(format!("row {}: {} '{}' is not an integer", row, what, raw))
    })
}

/// Reduce a ledger to per-row and total energy.
///
/// `energy_wh = quantity * duration * power`, `energy_kwh = energy_wh / 1000`.
/// The first invalid row aborts the whole computation.
pub fn compute(ledger: &Ledger, devices: &[Device]) -> AppResult<Calculation> {
    let mut calc = Calculation::default();

    for (i, row) in ledger.iter().enumerate() {
        let n = i + 1;
        let quantity = parse_field(&row.quantity, "quantity", n)?;
        if quantity < 0 {
            return Err(AppError::InvalidInput(format!(
                "row {}: quantity {} is negative",
                n, quantity
            )));
        }
        let duration = parse_field(&row.duration, "duration", n)?;
        let power_watts = resolve_power(row, devices)
            .map_err(|e| AppError::InvalidInput(format!("row {}: {}", n, inner_message(&e))))?;

        let energy_wh = quantity
            .checked_mul(duration)
            .and_then(|v| v.checked_mul(power_watts))
            .ok_or_else(|| AppError::InvalidInput(format!("row {}: energy value overflows", n)))?;

        let energy_kwh = energy_wh as f64 / 1000.0;
        calc.total_kwh += energy_kwh;
        calc.rows.push(RowEnergy {
            power_watts,
            energy_wh,
            energy_kwh,
        });
    }

    Ok(calc)
}

fn inner_message(e: &AppError) -> String {
    match e {
        AppError::InvalidInput(msg) => msg.clone(),
        other => other.to_string(),
    }
}
