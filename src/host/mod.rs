//! Narrow contracts over the multiplexer host.
//!
//! The binding logic only ever needs three things from tmux: read a global
//! option, report a tool version, and bind a key to a background shell command.
//! Keeping those behind traits lets the whole load sequence run against the
//! in-memory [`MemoryHost`] in tests.

pub mod dry_run;
pub mod memory;
pub mod process;
pub mod tmux;

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use crate::error::HostError;

pub use dry_run::{DryRunFormat, DryRunHost};
pub use memory::{MemoryHost, Registration};
pub use tmux::TmuxHost;

/// Key table a binding is registered into.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyTable {
    /// The default table reached through the tmux prefix key.
    Prefix,
    /// Copy mode with emacs keys.
    CopyMode,
    /// Copy mode with vi keys.
    CopyModeVi,
}

impl KeyTable {
    /// Both copy-mode tables, in registration order.
    pub const COPY_MODES: [KeyTable; 2] = [KeyTable::CopyMode, KeyTable::CopyModeVi];

    /// Table name for `bind-key -T`, or `None` for the prefix table.
    pub fn table_name(self) -> Option<&'static str> {
        match self {
            Self::Prefix => None,
            Self::CopyMode => Some("copy-mode"),
            Self::CopyModeVi => Some("copy-mode-vi"),
        }
    }
}

impl fmt::Display for KeyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name().unwrap_or("prefix"))
    }
}

/// A host tool whose version is checked before any binding is made.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VersionedTool {
    /// Human name, also the first word of the version banner (`tmux`, `Python`).
    pub name: &'static str,
    /// Program to run.
    pub program: String,
    /// Arguments that make the program print its version.
    pub version_args: &'static [&'static str],
}

/// Read access to the host's global options.
#[async_trait]
pub trait OptionStore: Send + Sync {
    /// Value of a global option, or an empty string when it is unset.
    async fn get_option(&self, name: &str) -> Result<String, HostError>;
}

/// Write-only sink for key bindings.
#[async_trait]
pub trait BindingSink: Send + Sync {
    /// Bind `trigger` in `table` to run `command` in the background.
    async fn register_binding(
        &self,
        trigger: &str,
        table: KeyTable,
        command: &str,
    ) -> Result<(), HostError>;
}

/// Version reporting for prerequisite checks.
#[async_trait]
pub trait VersionProbe: Send + Sync {
    /// Raw version output of `tool` (stdout, falling back to stderr).
    async fn version_output(&self, tool: &VersionedTool) -> Result<String, HostError>;
}

/// Everything the load sequence needs from a host.
pub trait Host: OptionStore + BindingSink + VersionProbe {}

impl<T: OptionStore + BindingSink + VersionProbe> Host for T {}
