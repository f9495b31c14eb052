// File: crates/waves-render-skia/build.rs
// Summary: Links the Windows system libraries Skia's font manager depends on.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry access (RegOpenKeyExW and friends) for system font discovery.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
