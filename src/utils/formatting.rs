//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `6.000 kWh` with the configured number of decimals.
pub fn format_kwh(value: f64, decimals: usize) -> String {
    format!("{:.*} kWh", decimals, value)
}

/// Per-row cell: the value when computed, a dash otherwise.
pub fn format_optional_kwh(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format_kwh(v, decimals),
        None => "- kWh".to_string(),
    }
}
