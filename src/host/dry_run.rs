//! Dry-run host: reads options and versions from a real host but prints the
//! bindings instead of registering them.

use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;

use super::{BindingSink, KeyTable, OptionStore, Registration, VersionProbe, VersionedTool};
use crate::error::HostError;

/// Output format for printed bindings.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum DryRunFormat {
    /// One `bind-key ...` tmux command per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Wraps `inner`, forwarding reads and printing each binding to `out`.
pub struct DryRunHost<H> {
    inner: H,
    format: DryRunFormat,
    out: Mutex<Box<dyn Write + Send>>,
}

impl<H> DryRunHost<H> {
    pub fn new(inner: H, format: DryRunFormat, out: Box<dyn Write + Send>) -> Self {
        Self {
            inner,
            format,
            out: Mutex::new(out),
        }
    }

    /// Dry run printing to stdout.
    pub fn stdout(inner: H, format: DryRunFormat) -> Self {
        Self::new(inner, format, Box::new(std::io::stdout()))
    }
}

/// Render one binding as a tmux command line.
pub fn render_text(trigger: &str, table: KeyTable, command: &str) -> String {
    let mut words = vec!["bind-key"];
    if let Some(name) = table.table_name() {
        words.extend(["-T", name]);
    }
    words.extend([trigger, "run-shell", "-b", command]);
    shell_words::join(words)
}

fn render_json(trigger: &str, table: KeyTable, command: &str) -> String {
    let registration = Registration {
        trigger: trigger.to_string(),
        table,
        command: command.to_string(),
    };
    // Serializing a struct of strings cannot fail.
    serde_json::to_string(&registration).unwrap_or_default()
}

#[async_trait]
impl<H: OptionStore> OptionStore for DryRunHost<H> {
    async fn get_option(&self, name: &str) -> Result<String, HostError> {
        self.inner.get_option(name).await
    }
}

#[async_trait]
impl<H: VersionProbe> VersionProbe for DryRunHost<H> {
    async fn version_output(&self, tool: &VersionedTool) -> Result<String, HostError> {
        self.inner.version_output(tool).await
    }
}

#[async_trait]
impl<H: Send + Sync> BindingSink for DryRunHost<H> {
    async fn register_binding(
        &self,
        trigger: &str,
        table: KeyTable,
        command: &str,
    ) -> Result<(), HostError> {
        let line = match self.format {
            DryRunFormat::Text => render_text(trigger, table, command),
            DryRunFormat::Json => render_json(trigger, table, command),
        };
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(out, "{line}").map_err(|source| HostError::Spawn {
            program: "stdout".to_string(),
            source,
        })
    }
}
