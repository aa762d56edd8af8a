//! Subprocess helpers shared by the tmux host.

use std::process::Stdio;
use tokio::process::Command;

use crate::error::HostError;

/// Captured result of one host command.
#[derive(Debug)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Spawn `program` and wait for it to exit, capturing both streams.
pub async fn run_process(program: &str, args: &[String]) -> Result<ProcessOutput, HostError> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| HostError::Spawn {
            program: program.to_string(),
            source,
        })?;

    Ok(ProcessOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Turn a non-zero exit into a [`HostError::Failed`] naming the command.
pub fn ensure_success(
    output: ProcessOutput,
    program: &str,
    args: &[String],
) -> Result<ProcessOutput, HostError> {
    if output.exit_code == 0 {
        return Ok(output);
    }

    let mut details = if output.stderr.trim().is_empty() {
        output.stdout.trim().to_string()
    } else {
        output.stderr.trim().to_string()
    };
    if details.is_empty() {
        details = "no output".to_string();
    }

    Err(HostError::Failed {
        command: describe_command(program, args),
        status: output.exit_code,
        details,
    })
}

/// Short command description for error messages: the program and its first
/// two arguments, which is enough to tell `show-option` from `bind-key`. A
/// leading `-L <socket>` pair is skipped so the subcommand is always shown.
fn describe_command(program: &str, args: &[String]) -> String {
    let args = match args {
        [flag, _socket, rest @ ..] if flag == "-L" => rest,
        _ => args,
    };
    let mut parts = vec![program];
    parts.extend(args.iter().take(2).map(String::as_str));
    parts.join(" ")
}
