use std::process::Command;

fn main() {
    // Capture Git values during compilation (not at runtime)
    let git_hash = git(&["rev-parse", "--short", "HEAD"]);
    let git_date = git(&["log", "-1", "--format=%ci"]);

    println!("cargo:rustc-env=GIT_HASH={}", git_hash);
    println!("cargo:rustc-env=GIT_DATE={}", git_date);
    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn git(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
