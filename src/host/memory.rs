//! In-memory host used by tests and by callers that want to inspect the
//! generated bindings without a tmux server.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{BindingSink, KeyTable, OptionStore, VersionProbe, VersionedTool};
use crate::error::HostError;

/// One recorded `register_binding` call.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Registration {
    pub trigger: String,
    pub table: KeyTable,
    pub command: String,
}

/// Option values, version banners and a registration log held in memory.
///
/// Every call is recorded in order, so tests can assert both which bindings
/// were made and which options were read.
#[derive(Debug, Default)]
pub struct MemoryHost {
    options: HashMap<String, String>,
    versions: HashMap<&'static str, String>,
    fail_bind_after: Option<usize>,
    reads: Mutex<Vec<String>>,
    registrations: Mutex<Vec<Registration>>,
}

impl MemoryHost {
    /// Host reporting tmux 3.4 and Python 3.12 with no options set.
    pub fn new() -> Self {
        Self::default()
            .with_version("tmux", "tmux 3.4\n")
            .with_version("Python", "Python 3.12.1\n")
    }

    pub fn with_option(mut self, name: &str, value: &str) -> Self {
        self.options.insert(name.to_string(), value.to_string());
        self
    }

    /// Version banner returned for the tool with this name.
    pub fn with_version(mut self, tool: &'static str, banner: &str) -> Self {
        self.versions.insert(tool, banner.to_string());
        self
    }

    /// Make every `register_binding` call after the first `count` fail.
    pub fn failing_binds_after(mut self, count: usize) -> Self {
        self.fail_bind_after = Some(count);
        self
    }

    /// Bindings registered so far, in call order.
    pub fn registrations(&self) -> Vec<Registration> {
        lock(&self.registrations).clone()
    }

    /// Option names read so far, in call order.
    pub fn reads(&self) -> Vec<String> {
        lock(&self.reads).clone()
    }

    /// The binding tmux would end up with for `trigger` in `table`: later
    /// registrations of the same pair replace earlier ones.
    pub fn effective_binding(&self, trigger: &str, table: KeyTable) -> Option<Registration> {
        lock(&self.registrations)
            .iter()
            .rev()
            .find(|r| r.trigger == trigger && r.table == table)
            .cloned()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl OptionStore for MemoryHost {
    async fn get_option(&self, name: &str) -> Result<String, HostError> {
        lock(&self.reads).push(name.to_string());
        Ok(self.options.get(name).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl BindingSink for MemoryHost {
    async fn register_binding(
        &self,
        trigger: &str,
        table: KeyTable,
        command: &str,
    ) -> Result<(), HostError> {
        let mut registrations = lock(&self.registrations);
        if self
            .fail_bind_after
            .is_some_and(|limit| registrations.len() >= limit)
        {
            return Err(HostError::Failed {
                command: format!("bind-key {trigger}"),
                status: 1,
                details: "binding table is read-only".to_string(),
            });
        }
        registrations.push(Registration {
            trigger: trigger.to_string(),
            table,
            command: command.to_string(),
        });
        Ok(())
    }
}

#[async_trait]
impl VersionProbe for MemoryHost {
    async fn version_output(&self, tool: &VersionedTool) -> Result<String, HostError> {
        self.versions
            .get(tool.name)
            .cloned()
            .ok_or_else(|| HostError::Spawn {
                program: tool.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
            })
    }
}
