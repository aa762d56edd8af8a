//! Command line for the jump helper that each binding runs.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use crate::options::{CommonOptions, ExtendedOptions, Variant};

/// Helper mode selecting the copy-mode driven jump.
const MODE: &str = "xcopy";

/// Builds helper argument vectors for one load.
#[derive(Clone, Debug)]
pub struct HelperArgs {
    /// Absolute interpreter path.
    pub interpreter: PathBuf,
    /// Absolute path of the helper script.
    pub script: PathBuf,
    pub variant: Variant,
}

impl HelperArgs {
    /// Ordered helper arguments for one binding.
    pub fn build(&self, common: &CommonOptions, extended: &ExtendedOptions) -> Vec<String> {
        let mut args = vec![
            self.interpreter.display().to_string(),
            self.script.display().to_string(),
            "--mode".to_string(),
            MODE.to_string(),
        ];

        let mut push = |flag: &str, value: &str| {
            args.push(flag.to_string());
            args.push(value.to_string());
        };
        push("--smart-case", &common.smart_case);
        push("--label-chars", &common.label_chars);
        push("--label-attrs", &common.label_attrs);
        push("--text-attrs", &common.text_attrs);
        if self.variant == Variant::Extended {
            push("--auto-begin-selection", &common.auto_begin_selection);
            push("--copy-mode-bindings", &common.copy_mode_bindings);
            push("--copy-mode-prefix", &common.copy_mode_prefix);
        }
        if let Some(scope) = extended.copy_scope {
            push(scope.flag(), "on");
        }
        if extended.paste_after {
            push("--paste-after", "on");
        }
        args
    }
}

/// Shell command for `run-shell`: the escaped helper invocation with both
/// output streams appended to `log_path`. The trailing `|| true` keeps a
/// failing helper from surfacing as a tmux error.
///
/// tmux expands `#` formats in `run-shell` commands, so every `#` is doubled
/// and reaches the shell as a single literal `#`.
pub fn shell_command(args: &[String], log_path: &Path) -> String {
    let log = log_path.display().to_string();
    let command = format!(
        "{} >>{} 2>&1 || true",
        shell_words::join(args),
        shell_words::quote(&log)
    );
    escape_formats(&command)
}

fn escape_formats(command: &str) -> String {
    command.replace('#', "##")
}

/// Log file for helper output, unique to the microsecond so quick successive
/// reloads do not share a file.
pub fn log_file_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("easyjump_{}.log", now.format("%Y-%m-%d-%H-%M-%S-%6f")))
}
