//! easyjump: tmux plugin loader for the easyjump jump helper.
//!
//! At plugin-load time the loader reads the `@easyjump-*` options from tmux
//! and registers key bindings that launch the helper in the background: the
//! primary jump key, optional copy-word / copy-until-space / copy-line keys
//! and their case-flipped paste variants, each optionally mirrored into the
//! copy-mode key tables.
//!
//! # Quick start
//!
//! ```no_run
//! use easyjump::config::{resolve_settings, SettingsOverrides};
//! use easyjump::host::TmuxHost;
//! use easyjump::plugin::load_plugin;
//!
//! # async fn example() {
//! let settings = resolve_settings(SettingsOverrides::default()).unwrap();
//! let tmux = TmuxHost::new("tmux", None);
//! let report = load_plugin(&tmux, &settings).await.unwrap();
//! println!("{} bindings", report.registrations);
//! # }
//! ```

pub mod binding;
pub mod build_info;
pub mod config;
pub mod error;
pub mod helper;
pub mod host;
pub mod keys;
pub mod logging;
pub mod options;
pub mod plugin;
pub mod preflight;
