//! Plugin load sequence.
//!
//! Order matters: later registrations overwrite earlier ones that share a key
//! and table, so the primary binding always goes first and the auxiliary
//! actions follow in their fixed order.

use chrono::Local;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::binding::BindingRegistrar;
use crate::config::{defaults, LoaderSettings};
use crate::error::LoadError;
use crate::helper::{log_file_path, HelperArgs};
use crate::host::Host;
use crate::options::{or_fallback, AuxiliaryAction, CommonOptions, ExtendedOptions, Variant};
use crate::preflight::{self, Requirement};

/// Summary of one completed load.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoadReport {
    /// Primary jump key as bound in the prefix table.
    pub key: String,
    /// Total `bind-key` calls issued.
    pub registrations: usize,
    /// Log file every bound command appends to.
    pub log_path: PathBuf,
}

/// Validate prerequisites, read the user's options once and register every
/// binding. Any failure aborts the remaining sequence; bindings made before
/// the failure stay in place.
pub async fn load_plugin<H>(host: &H, settings: &LoaderSettings) -> Result<LoadReport, LoadError>
where
    H: Host + ?Sized,
{
    if settings.skip_preflight {
        debug!("skipping prerequisite checks");
    } else {
        let interpreter = settings.interpreter.display().to_string();
        preflight::validate(
            host,
            &[
                Requirement::tmux(&settings.tmux_program),
                Requirement::python(&interpreter),
            ],
        )
        .await?;
    }

    let variant = settings.variant;
    let fallback_key = match variant {
        Variant::Extended => None,
        Variant::Legacy => Some(defaults::LEGACY_DEFAULT_KEY),
    };
    let key = or_fallback(host.get_option(defaults::KEY_BINDING).await?, fallback_key);
    if key.is_empty() {
        warn!(
            option = defaults::KEY_BINDING,
            "primary key binding is not set; tmux will reject the binding"
        );
    }

    let common = CommonOptions::load(host, variant).await?;
    let helper = HelperArgs {
        interpreter: settings.interpreter.clone(),
        script: settings.helper_script(),
        variant,
    };
    if !helper.script.exists() {
        warn!(script = %helper.script.display(), "helper script not found; bindings will fail when pressed");
    }
    let log_path = log_file_path(&settings.log_dir, Local::now());
    let registrar = BindingRegistrar::new(host, &common, &helper, &log_path);

    let mut registrations = registrar
        .register(&key, &ExtendedOptions::for_variant(variant))
        .await?;
    for action in AuxiliaryAction::for_variant(variant) {
        registrations += registrar.bind_auxiliary(host, action).await?;
    }

    info!(
        key = %key,
        registrations,
        log = %log_path.display(),
        "easyjump bindings registered"
    );
    Ok(LoadReport {
        key,
        registrations,
        log_path,
    })
}
