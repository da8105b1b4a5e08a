//! Stamps `BREWLOG_VERSION` for `brewlog --version`.
//!
//! Builds from a git checkout report `git describe` output (with a `-dirty`
//! suffix for uncommitted changes); anything else reports the crate version.

use std::process::Command;

fn main() {
    // Workspace root relative to this crate; HEAD moves on commit and checkout.
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");

    let version = git_describe().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=BREWLOG_VERSION={version}");
}

fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;

    let described = String::from_utf8(output.stdout).ok()?;
    // Release tags are `v1.2.3`; the CLI prints bare numbers.
    let described = described.trim().trim_start_matches('v');

    (!described.is_empty()).then(|| described.to_string())
}
