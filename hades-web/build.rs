use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=hades/index.tmpl");
    println!("cargo:rerun-if-changed=hades/dist");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let bundle_dir = manifest_dir.join("hades");
    let assets_dir = bundle_dir.join("dist").join("assets");

    assert!(
        bundle_dir.join("index.tmpl").exists(),
        "shell template missing at {}",
        bundle_dir.join("index.tmpl").display()
    );

    if has_built_assets(&assets_dir) {
        return;
    }

    if !bundle_dir.join("package.json").exists() {
        panic!(
            "No built assets at {} and no package.json to build them from",
            assets_dir.display()
        );
    }

    ensure_bun_available();
    run_bun(&bundle_dir, &["install"]);
    run_bun(&bundle_dir, &["run", "build"]);

    if !has_built_assets(&assets_dir) {
        panic!(
            "Frontend build did not produce dist assets at {}",
            assets_dir.display()
        );
    }
}

fn has_built_assets(assets_dir: &Path) -> bool {
    assets_dir
        .read_dir()
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}

fn ensure_bun_available() {
    let status = Command::new("bun")
        .arg("--version")
        .status()
        .expect("Failed to execute `bun --version`");
    assert!(
        status.success(),
        "bun is required to build the embedded frontend assets"
    );
}

fn run_bun(bundle_dir: &Path, args: &[&str]) {
    let status = Command::new("bun")
        .args(args)
        .current_dir(bundle_dir)
        .status()
        .unwrap_or_else(|error| panic!("Failed to execute bun {args:?}: {error}"));

    assert!(
        status.success(),
        "bun {:?} failed in {}",
        args,
        bundle_dir.display()
    );
}
