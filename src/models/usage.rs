//! Usage rows and the ordered ledger being edited in a calculation session.

use serde::{Deserialize, Serialize};

/// One line of a calculation: how many devices, for how long, and which device.
///
/// Quantity and duration are kept as the raw text the user entered; they are
/// only validated when the ledger is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRow {
    #[serde(rename = "qty")]
    pub quantity: String,
    pub duration: String,
    #[serde(rename = "device")]
    pub device_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<i64>,
}

impl UsageRow {
    pub fn new(quantity: &str, duration: &str, device_label: &str) -> Self {
        Self {
            quantity: quantity.to_string(),
            duration: duration.to_string(),
            device_label: device_label.to_string(),
            device_id: None,
        }
    }

    /// Attach an explicit reference to a catalog device.
    pub fn with_device_id(mut self, id: i64) -> Self {
        self.device_id = Some(id);
        self
    }
}

/// Ordered sequence of usage rows. Order is significant and survives encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    rows: Vec<UsageRow>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: UsageRow) {
        self.rows.push(row);
    }

    pub fn remove(&mut self, index: usize) -> Option<UsageRow> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    pub fn rows(&self) -> &[UsageRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UsageRow> {
        self.rows.iter()
    }
}

impl From<Vec<UsageRow>> for Ledger {
    fn from(rows: Vec<UsageRow>) -> Self {
        Self { rows }
    }
}

impl FromIterator<UsageRow> for Ledger {
    fn from_iter<I: IntoIterator<Item = UsageRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a UsageRow;
    type IntoIter = std::slice::Iter<'a, UsageRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
