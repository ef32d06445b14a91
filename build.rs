#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    println!("cargo:rerun-if-changed=res/rkwhcalc.ico");

    let mut res = WindowsResource::new();
    // Icon is optional.
    if std::path::Path::new("res/rkwhcalc.ico").exists() {
        res.set_icon("res/rkwhcalc.ico");
    }
    res.set("FileDescription", "rkwhcalc CLI")
        .set("ProductName", "rkwhcalc")
        .set("OriginalFilename", "rkwhcalc.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed Windows resources");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
