//! Runtime prerequisite validation.
//!
//! These checks run before any option is read so an unsupported tmux or helper
//! interpreter fails the load with an actionable message instead of leaving
//! behind bindings that can never work.

use regex::Regex;

use crate::config::defaults::{MIN_PYTHON_VERSION, MIN_TMUX_VERSION};
use crate::error::{LoadError, PrerequisiteError, Version};
use crate::host::{VersionProbe, VersionedTool};

/// A tool together with the oldest version the plugin supports.
#[derive(Clone, Debug)]
pub struct Requirement {
    pub tool: VersionedTool,
    pub minimum: Version,
}

impl Requirement {
    /// tmux, reporting e.g. `tmux 3.3a` or `tmux next-3.4`.
    pub fn tmux(program: &str) -> Self {
        Self {
            tool: VersionedTool {
                name: "tmux",
                program: program.to_string(),
                version_args: &["-V"],
            },
            minimum: MIN_TMUX_VERSION,
        }
    }

    /// The helper's Python interpreter, reporting e.g. `Python 3.11.4`.
    pub fn python(interpreter: &str) -> Self {
        Self {
            tool: VersionedTool {
                name: "Python",
                program: interpreter.to_string(),
                version_args: &["--version"],
            },
            minimum: MIN_PYTHON_VERSION,
        }
    }
}

/// Check every requirement in order, stopping at the first failure.
pub async fn validate<P>(probe: &P, requirements: &[Requirement]) -> Result<(), LoadError>
where
    P: VersionProbe + ?Sized,
{
    for requirement in requirements {
        let output = probe.version_output(&requirement.tool).await?;
        check_version(requirement, &output)?;
    }
    Ok(())
}

/// Compare a version banner against the requirement. Output that does not
/// match the expected banner counts as unmet.
pub fn check_version(requirement: &Requirement, output: &str) -> Result<Version, PrerequisiteError> {
    let tool = requirement.tool.name;
    let found = parse_version(tool, output).ok_or_else(|| PrerequisiteError::Unrecognized {
        tool,
        output: output.trim().to_string(),
    })?;
    if found < requirement.minimum {
        return Err(PrerequisiteError::TooOld {
            tool,
            found,
            minimum: requirement.minimum,
        });
    }
    Ok(found)
}

/// Parse `<tool> [next-]<major>.<minor>` from the start of `output`.
pub fn parse_version(tool: &str, output: &str) -> Option<Version> {
    let pattern = format!(r"^{} (next-)?(\d+)\.(\d+)", regex::escape(tool));
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(output.trim_start())?;
    let major = caps.get(2)?.as_str().parse().ok()?;
    let minor = caps.get(3)?.as_str().parse().ok()?;
    Some(Version::new(major, minor))
}
