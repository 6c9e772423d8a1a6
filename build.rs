use std::process::Command;

fn git_output(args: &[&str]) -> String {
    let output = Command::new("git").args(args).output();
    match output {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .unwrap_or_else(|_| "unknown".to_string())
            .trim()
            .to_string(),
        _ => "unknown".to_string(),
    }
}

fn main() {
    // Capture the git commit hash at build time; main.rs folds it into --version
    let git_hash = git_output(&["rev-parse", "--short", "HEAD"]);
    println!("cargo:rustc-env=GIT_HASH={git_hash}");

    // also capture the full hash for reference
    let git_hash_full = git_output(&["rev-parse", "HEAD"]);
    println!("cargo:rustc-env=GIT_HASH_FULL={git_hash_full}");

    // rerun build script if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
}
