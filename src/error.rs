//! Unified error types for the plugin loader.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// HostError
// ---------------------------------------------------------------------------

/// Failures of a host (tmux or interpreter) command invocation.
#[derive(Debug, Error)]
pub enum HostError {
    /// The program could not be started at all.
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The program ran and exited non-zero.
    #[error("`{command}` exited with status {status}: {details}")]
    Failed {
        command: String,
        status: i32,
        details: String,
    },
}

// ---------------------------------------------------------------------------
// PrerequisiteError
// ---------------------------------------------------------------------------

/// A `major.minor` version as reported by a host tool.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Runtime requirements that are not met.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrerequisiteError {
    #[error("{tool} {found} is too old; easyjump requires {tool} {minimum} or newer")]
    TooOld {
        tool: &'static str,
        found: Version,
        minimum: Version,
    },
    /// Version output did not match the expected banner.
    #[error("could not determine the {tool} version from {output:?}")]
    Unrecognized { tool: &'static str, output: String },
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors while resolving loader settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("helper interpreter `{name}` not found: {source}")]
    Interpreter {
        name: String,
        #[source]
        source: which::Error,
    },
    #[error("cannot determine the plugin directory: {0}")]
    PluginDir(#[source] std::io::Error),
    #[error("cannot make `{}` absolute: {source}", path.display())]
    Absolute {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid value {value:?} for {name}: expected on, off, true, false, yes, no, 1 or 0")]
    InvalidFlag { name: String, value: String },
}

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Top-level error returned by the plugin load sequence.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("prerequisite: {0}")]
    Prerequisite(#[from] PrerequisiteError),
    #[error("host command: {0}")]
    Host(#[from] HostError),
}
