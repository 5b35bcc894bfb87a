//! Embeds a per-checkout build counter and the build time.

use std::fs;
use std::path::Path;

const COUNTER_FILE: &str = "build_number.txt";

fn next_build_number(counter: &Path) -> u64 {
    let previous = fs::read_to_string(counter)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0);
    let next = previous + 1;

    // A read-only checkout still builds, it just keeps the old number
    let _ = fs::write(counter, next.to_string());
    next
}

fn main() {
    println!("cargo:rerun-if-changed=src");

    let build_number = next_build_number(Path::new(COUNTER_FILE));
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");

    println!("cargo:rustc-env=SCOOPS_BUILD_NUMBER={build_number}");
    println!("cargo:rustc-env=SCOOPS_BUILD_TIMESTAMP={timestamp}");
}
