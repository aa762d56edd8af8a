//! Binding registration: the primary jump key, its copy-mode shadows, and the
//! auxiliary copy bindings with their case-flipped companions.

use std::path::Path;
use tracing::debug;

use crate::error::HostError;
use crate::helper::{shell_command, HelperArgs};
use crate::host::{BindingSink, KeyTable, OptionStore};
use crate::keys::{case_flip, copy_mode_key};
use crate::options::{or_fallback, AuxiliaryAction, CommonOptions, ExtendedOptions};

/// Registers helper bindings for one plugin load.
pub struct BindingRegistrar<'a, S: ?Sized> {
    sink: &'a S,
    common: &'a CommonOptions,
    helper: &'a HelperArgs,
    log_path: &'a Path,
}

impl<'a, S> BindingRegistrar<'a, S>
where
    S: BindingSink + ?Sized,
{
    pub fn new(
        sink: &'a S,
        common: &'a CommonOptions,
        helper: &'a HelperArgs,
        log_path: &'a Path,
    ) -> Self {
        Self {
            sink,
            common,
            helper,
            log_path,
        }
    }

    /// Bind `key` to the helper with `extended`, plus the two copy-mode
    /// shadows when enabled. Returns the number of bindings made.
    pub async fn register(&self, key: &str, extended: &ExtendedOptions) -> Result<usize, HostError> {
        let args = self.helper.build(self.common, extended);
        let command = shell_command(&args, self.log_path);

        self.bind(key, KeyTable::Prefix, &command, extended).await?;
        if !self.common.copy_mode_bindings_enabled() {
            return Ok(1);
        }

        let copy_key = copy_mode_key(&self.common.copy_mode_prefix, key);
        for table in KeyTable::COPY_MODES {
            self.bind(&copy_key, table, &command, extended).await?;
        }
        Ok(1 + KeyTable::COPY_MODES.len())
    }

    /// Resolve the action's key and, when set, bind it with the action's base
    /// options and its case-flipped form with the paste placement inverted.
    /// An unset key disables the action and makes no host call.
    pub async fn bind_auxiliary<O>(
        &self,
        store: &O,
        action: &AuxiliaryAction,
    ) -> Result<usize, HostError>
    where
        O: OptionStore + ?Sized,
    {
        let key = or_fallback(
            store.get_option(action.key_option).await?,
            action.fallback_key,
        );
        if key.is_empty() {
            debug!(option = action.key_option, "auxiliary binding disabled");
            return Ok(0);
        }

        let base = action.base_options();
        let flipped = base.flipped();
        let flipped_key = case_flip(&key);

        let mut count = self.register(&key, &base).await?;
        count += self.register(&flipped_key, &flipped).await?;
        Ok(count)
    }

    async fn bind(
        &self,
        key: &str,
        table: KeyTable,
        command: &str,
        extended: &ExtendedOptions,
    ) -> Result<(), HostError> {
        debug!(
            key,
            %table,
            scope = ?extended.copy_scope,
            paste_after = extended.paste_after,
            "registering binding"
        );
        self.sink.register_binding(key, table, command).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use crate::host::MemoryHost;
    use crate::options::{CopyScope, Variant};
    use std::path::PathBuf;

    fn helper() -> HelperArgs {
        HelperArgs {
            interpreter: PathBuf::from("/usr/bin/python3"),
            script: PathBuf::from("/p/easyjump.py"),
            variant: Variant::Extended,
        }
    }

    fn common(copy_mode: &str, prefix: &str) -> CommonOptions {
        CommonOptions {
            copy_mode_bindings: copy_mode.to_string(),
            copy_mode_prefix: prefix.to_string(),
            ..CommonOptions::default()
        }
    }

    fn word_action() -> AuxiliaryAction {
        AuxiliaryAction::for_variant(Variant::Extended)[0]
    }

    fn keys_and_tables(host: &MemoryHost) -> Vec<(String, KeyTable)> {
        host.registrations()
            .into_iter()
            .map(|r| (r.trigger, r.table))
            .collect()
    }

    #[tokio::test]
    async fn register_without_copy_mode_binds_once() {
        // An empty copy-mode toggle keeps bindings in the prefix table only.
        let host = MemoryHost::new();
        let helper = helper();
        let common = common("", "M");
        let registrar = BindingRegistrar::new(&host, &common, &helper, Path::new("/tmp/l.log"));

        let count = registrar
            .register("s", &ExtendedOptions::for_variant(Variant::Extended))
            .await
            .expect("register");
        assert_eq!(count, 1);
        assert_eq!(keys_and_tables(&host), [("s".to_string(), KeyTable::Prefix)]);
    }

    #[tokio::test]
    async fn register_with_copy_mode_uses_prefixed_key_in_both_tables() {
        // Copy-mode shadows share the prefix binding's command but use the prefixed key.
        let host = MemoryHost::new();
        let helper = helper();
        let common = common("on", "M");
        let registrar = BindingRegistrar::new(&host, &common, &helper, Path::new("/tmp/l.log"));

        let count = registrar
            .register("s", &ExtendedOptions::for_variant(Variant::Extended))
            .await
            .expect("register");
        assert_eq!(count, 3);
        assert_eq!(
            keys_and_tables(&host),
            [
                ("s".to_string(), KeyTable::Prefix),
                ("M-s".to_string(), KeyTable::CopyMode),
                ("M-s".to_string(), KeyTable::CopyModeVi),
            ]
        );
        let commands: Vec<_> = host.registrations().into_iter().map(|r| r.command).collect();
        assert!(commands.windows(2).all(|w| w[0] == w[1]));
    }

    #[tokio::test]
    async fn empty_auxiliary_key_makes_no_host_call() {
        // Only the key option is read; nothing is bound.
        let host = MemoryHost::new();
        let helper = helper();
        let common = common("on", "");
        let registrar = BindingRegistrar::new(&host, &common, &helper, Path::new("/tmp/l.log"));

        let count = registrar
            .bind_auxiliary(&host, &word_action())
            .await
            .expect("bind");
        assert_eq!(count, 0);
        assert!(host.registrations().is_empty());
        assert_eq!(host.reads(), [defaults::COPY_WORD_KEY_BINDING]);
    }

    #[tokio::test]
    async fn auxiliary_binds_key_and_flipped_key_with_opposite_placement() {
        // Same scope on both keys; only the flipped key pastes.
        let host = MemoryHost::new().with_option(defaults::COPY_WORD_KEY_BINDING, "w");
        let helper = helper();
        let common = common("", "");
        let registrar = BindingRegistrar::new(&host, &common, &helper, Path::new("/tmp/l.log"));

        let count = registrar
            .bind_auxiliary(&host, &word_action())
            .await
            .expect("bind");
        assert_eq!(count, 2);

        let registrations = host.registrations();
        assert_eq!(registrations[0].trigger, "w");
        assert_eq!(registrations[1].trigger, "W");
        assert!(registrations[0].command.contains("--copy-word on"));
        assert!(registrations[1].command.contains("--copy-word on"));
        assert!(!registrations[0].command.contains("--paste-after"));
        assert!(registrations[1].command.contains("--paste-after on"));
    }

    #[tokio::test]
    async fn non_letter_auxiliary_key_registers_twice_and_second_wins() {
        // `9` flips to itself, so the pasting binding overwrites the plain one.
        let host = MemoryHost::new().with_option(defaults::COPY_LINE_KEY_BINDING, "9");
        let helper = helper();
        let common = common("", "");
        let registrar = BindingRegistrar::new(&host, &common, &helper, Path::new("/tmp/l.log"));
        let line = AuxiliaryAction::for_variant(Variant::Extended)[2];
        assert_eq!(line.copy_scope, CopyScope::Line);

        registrar.bind_auxiliary(&host, &line).await.expect("bind");
        assert_eq!(host.registrations().len(), 2);
        let effective = host
            .effective_binding("9", KeyTable::Prefix)
            .expect("bound");
        assert!(effective.command.contains("--paste-after on"));
    }

    #[tokio::test]
    async fn bind_failure_propagates_and_stops() {
        // The flipped key is never bound once the first bind fails.
        let host = MemoryHost::new()
            .with_option(defaults::COPY_WORD_KEY_BINDING, "w")
            .failing_binds_after(1);
        let helper = helper();
        let common = common("on", "");
        let registrar = BindingRegistrar::new(&host, &common, &helper, Path::new("/tmp/l.log"));

        let err = registrar
            .bind_auxiliary(&host, &word_action())
            .await
            .expect_err("second bind fails");
        assert!(matches!(err, HostError::Failed { .. }), "got: {err}");
        assert_eq!(host.registrations().len(), 1);
    }
}
