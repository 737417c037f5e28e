fn main() {
    // Version tag shown in the boot banner
    let version = format!(
        "{}+{}",
        env!("CARGO_PKG_VERSION"),
        chrono::Utc::now().format("%Y%m%d%H%M")
    );
    println!("cargo:rustc-env=BUILD_VERSION={}", version);

    println!("cargo:rustc-link-arg=-Tlinkall.x");
    println!("cargo:rerun-if-changed=build.rs");
}
