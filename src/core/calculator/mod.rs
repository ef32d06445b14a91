pub mod energy;
pub mod power;

pub use energy::{Calculation, RowEnergy, compute};
pub use power::{parse_power_from_label, resolve_power};
