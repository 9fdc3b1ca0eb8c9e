use cargo_lock::Lockfile;
use serde::Serialize;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// One locked package, as shown by `suntimes --show-build-info`.
#[derive(Serialize)]
struct LockedDep {
    name: String,
    version: String,
    checksum: Option<String>,
    source: Option<String>,
}

fn git_hash() -> String {
    match Command::new("git").args(["rev-parse", "--short=12", "HEAD"]).output() {
        Ok(o) if o.status.success() => {
            String::from_utf8_lossy(&o.stdout).trim().to_string()
        }
        _ => "unknown".to_string(),
    }
}

fn locked_deps(lock_path: &Path) -> Vec<LockedDep> {
    // A crate built from a packaged tarball may not have a lock file next to it.
    let Ok(lockfile) = Lockfile::load(lock_path) else {
        return Vec::new();
    };
    lockfile
        .packages
        .into_iter()
        .map(|pkg| LockedDep {
            name: pkg.name.as_str().to_string(),
            version: pkg.version.to_string(),
            checksum: pkg.checksum.map(|c| c.to_string()),
            source: pkg.source.map(|s| s.to_string()),
        })
        .collect()
}

fn main() {
    println!("cargo:rustc-env=APP_GIT_HASH={}", git_hash());
    println!("cargo:rerun-if-changed=.git/HEAD");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo");
    let lock_path = Path::new(&manifest_dir).join("Cargo.lock");
    println!("cargo:rerun-if-changed=Cargo.lock");

    let deps = locked_deps(&lock_path);
    let json = serde_json::to_string(&deps).expect("dependency list serializes");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("locked_deps.json");
    fs::write(&dest, json).expect("failed to write locked_deps.json");
    println!("cargo:rustc-env=LOCKED_DEPS_PATH={}", dest.display());
}
