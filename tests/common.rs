#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch dir so a real
/// ~/.rkwhcalc/rkwhcalc.conf never leaks into the run.
pub fn rkw() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rkwhcalc_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rkwhcalc");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rkwhcalc.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize DB and add a couple of devices useful for many tests
pub fn init_db_with_devices(db_path: &str) {
    rkw()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rkw()
        .args(["--db", db_path, "device", "add", "Kettle", "2000"])
        .assert()
        .success();

    rkw()
        .args(["--db", db_path, "device", "add", "LED lamp", "10"])
        .assert()
        .success();
}
