//! tmux-backed host: every call shells out to the tmux client and waits for it.

use async_trait::async_trait;
use tracing::trace;

use super::process::{ensure_success, run_process};
use super::{BindingSink, KeyTable, OptionStore, VersionProbe, VersionedTool};
use crate::error::HostError;

/// Talks to the tmux server through its command-line client.
#[derive(Clone, Debug)]
pub struct TmuxHost {
    program: String,
    socket_name: Option<String>,
}

impl TmuxHost {
    pub fn new(program: impl Into<String>, socket_name: Option<String>) -> Self {
        Self {
            program: program.into(),
            socket_name,
        }
    }

    /// Arguments for one tmux invocation, with `-L <socket>` when configured.
    fn command_args<'a>(&self, args: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut full = Vec::new();
        if let Some(socket) = &self.socket_name {
            full.push("-L".to_string());
            full.push(socket.clone());
        }
        full.extend(args.into_iter().map(str::to_string));
        full
    }

    async fn run(&self, args: Vec<String>) -> Result<String, HostError> {
        trace!(program = %self.program, ?args, "running tmux command");
        let output = run_process(&self.program, &args).await?;
        let output = ensure_success(output, &self.program, &args)?;
        Ok(output.stdout)
    }

    pub(crate) fn bind_args(&self, trigger: &str, table: KeyTable, command: &str) -> Vec<String> {
        let mut args = vec!["bind-key"];
        if let Some(name) = table.table_name() {
            args.push("-T");
            args.push(name);
        }
        args.extend([trigger, "run-shell", "-b", command]);
        self.command_args(args)
    }
}

#[async_trait]
impl OptionStore for TmuxHost {
    async fn get_option(&self, name: &str) -> Result<String, HostError> {
        let stdout = self
            .run(self.command_args(["show-option", "-gqv", name]))
            .await?;
        Ok(strip_line_ending(&stdout).to_string())
    }
}

#[async_trait]
impl BindingSink for TmuxHost {
    async fn register_binding(
        &self,
        trigger: &str,
        table: KeyTable,
        command: &str,
    ) -> Result<(), HostError> {
        self.run(self.bind_args(trigger, table, command)).await?;
        Ok(())
    }
}

#[async_trait]
impl VersionProbe for TmuxHost {
    async fn version_output(&self, tool: &VersionedTool) -> Result<String, HostError> {
        // The tmux probe goes through the configured socket like every other
        // tmux call; other tools are run as-is.
        let args: Vec<String> = if tool.program == self.program {
            self.command_args(tool.version_args.iter().copied())
        } else {
            tool.version_args.iter().map(|a| a.to_string()).collect()
        };
        let output = run_process(&tool.program, &args).await?;
        let output = ensure_success(output, &tool.program, &args)?;
        // Python 2 printed its version on stderr.
        if output.stdout.trim().is_empty() {
            Ok(output.stderr)
        } else {
            Ok(output.stdout)
        }
    }
}

/// tmux terminates option values with a single newline.
fn strip_line_ending(value: &str) -> &str {
    value
        .strip_suffix("\r\n")
        .or_else(|| value.strip_suffix('\n'))
        .unwrap_or(value)
}
