use std::process::Command;
use vergen::EmitBuilder;

fn main() {
    let inside_git_checkout = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);

    let mut builder = EmitBuilder::builder();
    builder.build_timestamp();
    if inside_git_checkout {
        builder.git_sha(true);
    }

    // /api/version falls back to "unknown" for anything not emitted here
    if let Err(e) = builder.emit() {
        println!("cargo:warning=build metadata unavailable: {e}");
    }
}
