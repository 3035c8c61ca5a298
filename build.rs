fn main() {
    // The footer's copyright year comes from when the site was built
    let stamp = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={stamp}");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
