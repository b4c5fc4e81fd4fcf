//! Build script to capture build information.
//!
//! Sets environment variables at compile time:
//! - BUILD_HOST: hostname of the build machine
//! - BUILD_COMMIT: short git commit SHA
//! - BUILD_TIMESTAMP: ISO 8601 timestamp

use std::process::Command;

/// Run a command and return its trimmed stdout, or "unknown".
fn capture(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    let hostname = capture("hostname", &["-s"]);
    let commit = capture("git", &["rev-parse", "--short", "HEAD"]);
    let timestamp = capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]);

    println!("cargo:rustc-env=BUILD_HOST={hostname}");
    println!("cargo:rustc-env=BUILD_COMMIT={commit}");
    println!("cargo:rustc-env=BUILD_TIMESTAMP={timestamp}");

    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=build.rs");
}
