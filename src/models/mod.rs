pub mod device;
pub mod record;
pub mod usage;
