//! Compile-time build metadata exposed through `easyjump --version`.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `git describe` output captured at build time.
pub const REVISION: &str = env!("EASYJUMP_BUILD_REVISION");

/// UTC build date captured at build time.
pub const BUILD_DATE: &str = env!("EASYJUMP_BUILD_DATE");

/// Version string handed to clap for `--version`.
pub const CLI_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("EASYJUMP_BUILD_REVISION"),
    ", built ",
    env!("EASYJUMP_BUILD_DATE"),
    ")"
);
