#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: i64,          // ⇔ devices.id
    pub name: String,     // ⇔ devices.name
    pub power_watts: i64, // ⇔ devices.power (W)
}

impl Device {
    /// Display label used in selection lists and stored records: `"<name> <power> W"`.
    pub fn label(&self) -> String {
        format_label(&self.name, self.power_watts)
    }
}

pub fn format_label(name: &str, power_watts: i64) -> String {
    format!("{} {} W", name, power_watts)
}
