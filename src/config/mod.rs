//! Loader settings: where tmux and the helper live and which option set to use.
//!
//! These are settings of the loader process itself, not the user's tmux
//! options (those are read from tmux during the load). Each setting resolves
//! in this order of precedence (highest wins):
//! 1. CLI flags
//! 2. Environment variables (`EASYJUMP_*`, see [`env`])
//! 3. Built-in defaults (see [`defaults`])

pub mod defaults;
pub mod env;

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::options::Variant;

/// Values supplied on the command line; `None` falls through to the
/// environment and then the defaults.
#[derive(Clone, Debug, Default)]
pub struct SettingsOverrides {
    pub legacy: bool,
    pub tmux_program: Option<String>,
    pub socket_name: Option<String>,
    pub interpreter: Option<String>,
    pub plugin_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub skip_preflight: bool,
}

/// Fully resolved loader settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoaderSettings {
    pub variant: Variant,
    pub tmux_program: String,
    /// tmux server socket name (`tmux -L`); `None` uses the default server.
    pub socket_name: Option<String>,
    /// Absolute path of the helper's interpreter.
    pub interpreter: PathBuf,
    /// Absolute directory holding the helper script.
    pub plugin_dir: PathBuf,
    /// Directory for helper log files.
    pub log_dir: PathBuf,
    pub skip_preflight: bool,
}

impl LoaderSettings {
    /// Absolute path of the helper script inside the plugin directory.
    pub fn helper_script(&self) -> PathBuf {
        self.plugin_dir.join(defaults::HELPER_SCRIPT_NAME)
    }
}

/// Resolve settings against the process environment.
pub fn resolve_settings(overrides: SettingsOverrides) -> Result<LoaderSettings, ConfigError> {
    resolve_settings_with(
        overrides,
        |name| std::env::var(name).ok(),
        std::env::current_exe,
        |name| which::which(name),
    )
}

pub(crate) fn resolve_settings_with<FEnv, FExe, FWhich>(
    overrides: SettingsOverrides,
    env_lookup: FEnv,
    current_exe: FExe,
    find_program: FWhich,
) -> Result<LoaderSettings, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
    FExe: FnOnce() -> std::io::Result<PathBuf>,
    FWhich: Fn(&str) -> Result<PathBuf, which::Error>,
{
    let variant = if overrides.legacy {
        Variant::Legacy
    } else {
        Variant::Extended
    };

    let tmux_program = overrides
        .tmux_program
        .or_else(|| env::env_value(&env_lookup, env::TMUX_PROGRAM))
        .unwrap_or_else(|| defaults::DEFAULT_TMUX_PROGRAM.to_string());
    let socket_name = overrides
        .socket_name
        .or_else(|| env::env_value(&env_lookup, env::TMUX_SOCKET));

    // Resolved now so the bound command never depends on PATH at key-press time.
    let interpreter_name = overrides
        .interpreter
        .or_else(|| env::env_value(&env_lookup, env::INTERPRETER))
        .unwrap_or_else(|| defaults::DEFAULT_INTERPRETER.to_string());
    let interpreter = find_program(&interpreter_name).map_err(|source| {
        ConfigError::Interpreter {
            name: interpreter_name.clone(),
            source,
        }
    })?;
    let interpreter = make_absolute(&interpreter)?;

    let plugin_dir = match overrides
        .plugin_dir
        .or_else(|| env::env_value(&env_lookup, env::PLUGIN_DIR).map(PathBuf::from))
    {
        Some(dir) => dir,
        None => executable_dir(current_exe().map_err(ConfigError::PluginDir)?)?,
    };
    let plugin_dir = make_absolute(&plugin_dir)?;

    let log_dir = overrides
        .log_dir
        .or_else(|| env::env_value(&env_lookup, env::LOG_DIR).map(PathBuf::from))
        .unwrap_or_else(std::env::temp_dir);

    let skip_preflight =
        overrides.skip_preflight || env::env_flag(&env_lookup, env::SKIP_PREFLIGHT)?;

    Ok(LoaderSettings {
        variant,
        tmux_program,
        socket_name,
        interpreter,
        plugin_dir,
        log_dir,
        skip_preflight,
    })
}

fn executable_dir(exe: PathBuf) -> Result<PathBuf, ConfigError> {
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ConfigError::PluginDir(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("`{}` has no parent directory", exe.display()),
        ))
    })
}

fn make_absolute(path: &Path) -> Result<PathBuf, ConfigError> {
    std::path::absolute(path).map_err(|source| ConfigError::Absolute {
        path: path.to_path_buf(),
        source,
    })
}
