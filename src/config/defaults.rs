//! Default constants: tmux option names, fallback keys and version floors.
//!
//! Keeping every user-facing option name here means the extended and legacy
//! loaders cannot drift apart on spelling.

use crate::error::Version;

/// Option holding the primary jump key (both variants).
pub const KEY_BINDING: &str = "@easyjump-key-binding";

// Extended option set.
pub const COPY_WORD_KEY_BINDING: &str = "@easyjump-copy-word-key-binding";
pub const COPY_UNTIL_SPACE_KEY_BINDING: &str = "@easyjump-copy-until-space-key-binding";
pub const COPY_LINE_KEY_BINDING: &str = "@easyjump-copy-line-key-binding";
pub const SMART_CASE: &str = "@easyjump-smart-case";
pub const LABEL_CHARS: &str = "@easyjump-label-chars";
pub const LABEL_ATTRS: &str = "@easyjump-label-attrs";
pub const TEXT_ATTRS: &str = "@easyjump-text-attrs";
pub const AUTO_BEGIN_SELECTION: &str = "@easyjump-auto-begin-selection";
pub const COPY_MODE_BINDINGS: &str = "@easyjump-copy-mode-bindings";
pub const COPY_MODE_PREFIX: &str = "@easyjump-copy-mode-prefix";

// Legacy option set.
pub const LEGACY_WORD_KEY_BINDING: &str = "@easyjump-word-key-binding";
pub const LEGACY_LINE_KEY_BINDING: &str = "@easyjump-line-key-binding";
pub const LEGACY_DEFAULT_KEY: &str = "j";
pub const LEGACY_DEFAULT_WORD_KEY: &str = "J";
pub const LEGACY_DEFAULT_LINE_KEY: &str = "C-j";

/// Value the host uses for a true flag.
pub const ON: &str = "on";

/// Helper script shipped next to the plugin executable.
pub const HELPER_SCRIPT_NAME: &str = "easyjump.py";
/// Interpreter looked up on `PATH` when none is configured.
pub const DEFAULT_INTERPRETER: &str = "python3";
pub const DEFAULT_TMUX_PROGRAM: &str = "tmux";

/// Oldest tmux with `bind-key -T copy-mode-vi` and `run-shell -b` semantics
/// the helper relies on.
pub const MIN_TMUX_VERSION: Version = Version::new(3, 0);
/// The helper uses `shlex.join`, added in Python 3.8.
pub const MIN_PYTHON_VERSION: Version = Version::new(3, 8);
