use crate::db::log::ttlog_or_warn;
use crate::db::queries::{insert_device, load_devices};
use crate::errors::{AppError, AppResult};
use crate::models::device::Device;
use crate::models::usage::UsageRow;
use crate::ui::messages::warning;
use rusqlite::Connection;

/// Device catalog: append-only list of named devices with their rated power.
pub struct CatalogLogic;

impl CatalogLogic {
    /// Add a device from raw form input.
    ///
    /// Returns `Ok(None)` without touching storage when either field is empty.
    pub fn add_device(conn: &Connection, name: &str, power: &str) -> AppResult<Option<Device>> {
        let name = name.trim();
        let power = power.trim();

        if name.is_empty() || power.is_empty() {
            return Ok(None);
        }

        let watts: i64 = power.parse().map_err(|_| {
            AppError::InvalidInput(format!("device power '{}' is not an integer", power))
        })?;
        if watts <= 0 {
            return Err(AppError::InvalidInput(format!(
                "device power must be positive, got {}",
                watts
            )));
        }

        if name.contains('|') {
            warning(
                "Device names containing '|' cannot be stored in the legacy pipe record format.",
            );
        }

        let dev = insert_device(conn, name, watts)?;
        ttlog_or_warn(
            conn,
            "device_add",
            &dev.label(),
            &format!("Added device #{}", dev.id),
        );

        Ok(Some(dev))
    }

    pub fn list_devices(conn: &Connection) -> AppResult<Vec<Device>> {
        load_devices(conn)
    }

    /// `"<name> <power> W"` labels in storage order.
    pub fn labels(devices: &[Device]) -> Vec<String> {
        devices.iter().map(Device::label).collect()
    }

    /// Map a device argument to `(label, device_id)`.
    ///
    /// Accepted forms, in order: `#<id>`, an exact label, an exact name (first
    /// match in storage order). New rows always carry a device id; labels
    /// without one only come from decoded legacy records.
    pub fn resolve(devices: &[Device], text: &str) -> AppResult<(String, i64)> {
        let text = text.trim();

        if let Some(raw_id) = text.strip_prefix('#') {
            let id: i64 = raw_id
                .parse()
                .map_err(|_| AppError::InvalidInput(format!("invalid device id '{}'", text)))?;
            let dev = devices
                .iter()
                .find(|d| d.id == id)
                .ok_or_else(|| AppError::InvalidInput(format!("unknown device id #{}", id)))?;
            return Ok((dev.label(), dev.id));
        }

        if let Some(dev) = devices.iter().find(|d| d.label() == text) {
            return Ok((dev.label(), dev.id));
        }

        if let Some(dev) = devices.iter().find(|d| d.name == text) {
            return Ok((dev.label(), dev.id));
        }

        Err(AppError::InvalidInput(format!(
            "unknown device '{}' (add it with `device add` first)",
            text
        )))
    }

    /// Parse a `QTY:DURATION:DEVICE` row argument.
    pub fn parse_row_spec(spec: &str, devices: &[Device]) -> AppResult<UsageRow> {
        let mut parts = spec.splitn(3, ':');
        let (Some(qty), Some(duration), Some(device)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(AppError::InvalidInput(format!(
                "row '{}' must be QTY:DURATION:DEVICE",
                spec
            )));
        };

        let (label, id) = Self::resolve(devices, device)?;
        Ok(UsageRow::new(qty.trim(), duration.trim(), &label).with_device_id(id))
    }
}
