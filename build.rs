//! Embeds the git revision and build date so `easyjump --version` can report
//! which plugin checkout tmux is loading. Falls back to "unknown" outside a
//! git tree (for example a tarball install).

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-env-changed=EASYJUMP_BUILD_REVISION");
    println!("cargo:rerun-if-env-changed=EASYJUMP_BUILD_DATE");

    let revision = env::var("EASYJUMP_BUILD_REVISION")
        .ok()
        .or_else(|| capture("git", &["describe", "--always", "--dirty"]))
        .unwrap_or_else(|| "unknown".to_string());
    let date = env::var("EASYJUMP_BUILD_DATE")
        .ok()
        .or_else(|| capture("date", &["-u", "+%Y-%m-%d"]))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=EASYJUMP_BUILD_REVISION={revision}");
    println!("cargo:rustc-env=EASYJUMP_BUILD_DATE={date}");
}

fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
