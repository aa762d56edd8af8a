//! Environment overrides for loader settings.
//!
//! CLI flags win over these; these win over built-in defaults.

use crate::error::ConfigError;

pub const TMUX_PROGRAM: &str = "EASYJUMP_TMUX";
pub const TMUX_SOCKET: &str = "EASYJUMP_TMUX_SOCKET";
pub const INTERPRETER: &str = "EASYJUMP_INTERPRETER";
pub const PLUGIN_DIR: &str = "EASYJUMP_PLUGIN_DIR";
pub const LOG_DIR: &str = "EASYJUMP_LOG_DIR";
pub const SKIP_PREFLIGHT: &str = "EASYJUMP_SKIP_PREFLIGHT";

/// Non-empty value of `name`. An exported-but-empty variable counts as unset.
pub(super) fn env_value<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Boolean variable, `false` when unset.
pub(super) fn env_flag<FEnv>(env_lookup: &FEnv, name: &str) -> Result<bool, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let Some(value) = env_value(env_lookup, name) else {
        return Ok(false);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Ok(true),
        "0" | "off" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name: name.to_string(),
            value,
        }),
    }
}
