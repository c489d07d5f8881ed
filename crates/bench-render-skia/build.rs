// File: crates/bench-render-skia/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU expect.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Build scripts run on the host; check the target instead of cfg!(windows).
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW, RegQueryInfoKeyW, ...
        println!("cargo:rustc-link-lib=advapi32");
    }
}
