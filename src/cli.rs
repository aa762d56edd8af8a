//! CLI argument parsing via clap.

use clap::Parser;
use std::path::PathBuf;

use easyjump::build_info::CLI_VERSION;
use easyjump::config::SettingsOverrides;
use easyjump::host::DryRunFormat;

/// Register easyjump key bindings in the running tmux server.
///
/// Meant to be run once per plugin load (for example from TPM). Reads the
/// `@easyjump-*` options from tmux and binds the jump helper to the
/// configured keys.
#[derive(Debug, Parser)]
#[command(name = "easyjump", version = CLI_VERSION)]
pub struct Args {
    /// Use the legacy option set (`@easyjump-word-key-binding`, ...) with
    /// its fallback keys j, J and C-j.
    #[arg(long = "legacy")]
    pub legacy: bool,

    /// Print the bindings instead of registering them.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Output format for --dry-run.
    #[arg(long = "format", value_enum, default_value_t = DryRunFormat::Text, requires = "dry_run")]
    pub format: DryRunFormat,

    /// tmux client program (default: tmux).
    #[arg(long = "tmux", value_name = "PROGRAM")]
    pub tmux: Option<String>,

    /// tmux server socket name, as for `tmux -L`.
    #[arg(short = 'L', long = "socket-name", value_name = "NAME")]
    pub socket_name: Option<String>,

    /// Interpreter for the helper script (default: python3 from PATH).
    #[arg(long = "interpreter", value_name = "PATH")]
    pub interpreter: Option<String>,

    /// Directory containing easyjump.py (default: this executable's directory).
    #[arg(long = "plugin-dir", value_name = "DIR")]
    pub plugin_dir: Option<PathBuf>,

    /// Directory for helper log files (default: the system temp dir).
    #[arg(long = "log-dir", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Skip the tmux and interpreter version checks.
    #[arg(long = "skip-preflight")]
    pub skip_preflight: bool,

    /// Log each binding to stderr.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            legacy: self.legacy,
            tmux_program: self.tmux.clone(),
            socket_name: self.socket_name.clone(),
            interpreter: self.interpreter.clone(),
            plugin_dir: self.plugin_dir.clone(),
            log_dir: self.log_dir.clone(),
            skip_preflight: self.skip_preflight,
        }
    }
}
