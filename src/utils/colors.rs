/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey when the value is not computed yet, green when it is positive.
pub fn color_for_kwh(value: Option<f64>) -> &'static str {
    match value {
        Some(v) if v > 0.0 => GREEN,
        Some(_) => RESET,
        None => GREY,
    }
}
