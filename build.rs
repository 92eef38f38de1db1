//! Generates `build_info.rs`, read by `utils::build_info::version_line`.
//!
//! Flappy Bob is often built from a source tarball or a packaged crate with
//! no `.git`, so the commit falls back to "unknown" rather than failing the
//! build. Packagers can pin both values through `BUILD_COMMIT` and
//! `BUILD_DATE` for reproducible output.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

const UNKNOWN_COMMIT: &str = "unknown";

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?.trim().to_string();
    // A non-hex or short answer means we are not in our own checkout
    (hash.len() == 7 && hash.chars().all(|c| c.is_ascii_hexdigit())).then_some(hash)
}

fn main() {
    let commit = env::var("BUILD_COMMIT")
        .ok()
        .or_else(git_short_hash)
        .unwrap_or_else(|| UNKNOWN_COMMIT.to_string());
    let date = env::var("BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let generated = format!(
        "pub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
        commit, date
    );
    fs::write(Path::new(&out_dir).join("build_info.rs"), generated)
        .expect("failed to write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
