//! rkwhcalc main entrypoint.

use rkwhcalc::run;
use rkwhcalc::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
