//! Private tmux server for the live integration tests.
//!
//! Each server runs on its own `-L` socket with no config file, so the
//! user's sessions and key tables are never touched.

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

pub type HarnessResult<T> = Result<T, String>;

/// A detached tmux server that is killed on drop.
pub struct TmuxServer {
    pub socket_name: String,
}

impl TmuxServer {
    pub fn start() -> HarnessResult<Self> {
        command_exists("tmux")?;
        let server = Self {
            socket_name: format!("easyjump-test-{}", unique_suffix()),
        };
        server.run(["-f", "/dev/null", "new-session", "-d", "-s", "harness"])?;
        Ok(server)
    }

    pub fn set_option(&self, name: &str, value: &str) -> HarnessResult<()> {
        self.run(["set-option", "-g", name, value]).map(|_| ())
    }

    /// `list-keys` output for one key, or an empty string when it is unbound.
    pub fn list_key(&self, table: &str, key: &str) -> String {
        self.run(["list-keys", "-T", table, key]).unwrap_or_default()
    }

    pub fn run<I, S>(&self, args: I) -> HarnessResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let collected = args
            .into_iter()
            .map(|value| value.as_ref().to_string())
            .collect::<Vec<_>>();
        let output = Command::new("tmux")
            .arg("-L")
            .arg(&self.socket_name)
            .args(&collected)
            .output()
            .map_err(|e| format!("failed to run tmux {collected:?}: {e}"))?;
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if output.status.success() {
            Ok(stdout)
        } else {
            Err(format!(
                "tmux {collected:?} failed with status {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            ))
        }
    }
}

impl Drop for TmuxServer {
    fn drop(&mut self) {
        let _ = self.run(["kill-server"]);
    }
}

fn command_exists(name: &str) -> HarnessResult<()> {
    which::which(name)
        .map(|_| ())
        .map_err(|e| format!("required command `{name}` not found in PATH: {e}"))
}

fn unique_suffix() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("{}-{now}", std::process::id())
}
