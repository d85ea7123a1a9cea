// File: crates/index-chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW from the font registry lookup.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
