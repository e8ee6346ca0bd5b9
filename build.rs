//! Build script stamping the shell banner with version and commit.
//!
//! - DOGCLUB_VERSION: release version, else CARGO_PKG_VERSION
//! - DOGCLUB_GIT_SHA: short commit, else GITHUB_SHA (shortened), else
//!   `git rev-parse --short HEAD`, else "unknown"

use std::env;
use std::path::Path;
use std::process::Command;

fn main() {
    let version = env::var("DOGCLUB_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "unknown".into());
    println!("cargo:rustc-env=DOGCLUB_VERSION={}", version);

    let git_sha = env::var("DOGCLUB_GIT_SHA")
        .ok()
        .or_else(|| env::var("GITHUB_SHA").ok().map(|s| short_sha(&s)))
        .or_else(git_rev_parse)
        .unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=DOGCLUB_GIT_SHA={}", git_sha);

    println!("cargo:rerun-if-env-changed=DOGCLUB_VERSION");
    println!("cargo:rerun-if-env-changed=DOGCLUB_GIT_SHA");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
    // New commits move HEAD or the branch ref it points at
    if Path::new(".git/HEAD").exists() {
        println!("cargo:rerun-if-changed=.git/HEAD");
        println!("cargo:rerun-if-changed=.git/refs/heads");
    }
}

fn short_sha(sha: &str) -> String {
    sha.chars().take(7).collect()
}

fn git_rev_parse() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8(output.stdout).ok()?;
    let sha = sha.trim();
    (!sha.is_empty()).then(|| sha.to_string())
}
