use crate::errors::{AppError, AppResult};
use crate::models::device::Device;
use crate::models::usage::UsageRow;
use regex::Regex;
use std::sync::LazyLock;

/// `"<name> <power> W"`; the name may contain spaces, the power is the last number.
static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<name>.*\S)\s+(?P<power>\d+)\s*W$").unwrap());

/// Extract the rated power (W) from a device label such as `"Washing machine 2000 W"`.
pub fn parse_power_from_label(label: &str) -> Option<i64> {
    LABEL_RE
        .captures(label.trim())
        .and_then(|c| c.name("power"))
        .and_then(|m| m.as_str().parse().ok())
}

/// Power of the device a row refers to.
///
/// An explicit `device_id` wins and must exist in `devices`; rows without one
/// (records written by older versions) fall back to the label.
pub fn resolve_power(row: &UsageRow, devices: &[Device]) -> AppResult<i64> {
    if let Some(id) = row.device_id {
        return devices
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.power_watts)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown device id #{}", id)));
    }

    parse_power_from_label(&row.device_label).ok_or_else(|| {
        AppError::InvalidInput(format!(
            "device '{}' has no '<name> <power> W' power term",
            row.device_label
        ))
    })
}
