//! Option bundles that drive binding generation.
//!
//! [`CommonOptions`] is read once per load and shared by every binding.
//! [`ExtendedOptions`] is a small per-binding value; the case-flipped companion
//! of an auxiliary binding gets its own value via [`ExtendedOptions::flipped`].

use crate::config::defaults;
use crate::error::HostError;
use crate::host::OptionStore;

/// Which option set the loader reads.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Variant {
    /// Current option set, including copy-until-space, auto-begin-selection
    /// and copy-mode key prefixes.
    #[default]
    Extended,
    /// Older option set with hardcoded fallback keys.
    Legacy,
}

/// How much text the helper copies after jumping.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CopyScope {
    Word,
    UntilSpace,
    Line,
}

impl CopyScope {
    /// Helper flag enabling this scope.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Word => "--copy-word",
            Self::UntilSpace => "--copy-until-space",
            Self::Line => "--copy-line",
        }
    }
}

/// Per-binding options.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExtendedOptions {
    /// `None` copies everything up to the jump target.
    pub copy_scope: Option<CopyScope>,
    /// Paste the copied text at the cursor once the helper is done.
    pub paste_after: bool,
}

impl ExtendedOptions {
    /// Options for the plain jump binding: no scope restriction, and
    /// paste-after on for the extended variant, off for the legacy one.
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            copy_scope: None,
            paste_after: matches!(variant, Variant::Extended),
        }
    }

    /// Same scope, opposite paste placement.
    pub fn flipped(self) -> Self {
        Self {
            paste_after: !self.paste_after,
            ..self
        }
    }
}

/// Settings shared by every generated binding. Values are passed through to
/// the helper untouched; tmux has no boolean options, so `"on"` means true and
/// an empty string means false or "use the helper's default".
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommonOptions {
    pub smart_case: String,
    pub label_chars: String,
    pub label_attrs: String,
    pub text_attrs: String,
    pub auto_begin_selection: String,
    /// `"on"` mirrors every binding into both copy-mode key tables.
    pub copy_mode_bindings: String,
    /// Modifier prepended to keys in copy mode, e.g. `M` turns `l` into `M-l`.
    pub copy_mode_prefix: String,
}

impl CommonOptions {
    /// Read the option set for `variant` from the host.
    pub async fn load<S>(store: &S, variant: Variant) -> Result<Self, HostError>
    where
        S: OptionStore + ?Sized,
    {
        let display = Self {
            smart_case: store.get_option(defaults::SMART_CASE).await?,
            label_chars: store.get_option(defaults::LABEL_CHARS).await?,
            label_attrs: store.get_option(defaults::LABEL_ATTRS).await?,
            text_attrs: store.get_option(defaults::TEXT_ATTRS).await?,
            ..Self::default()
        };
        match variant {
            Variant::Extended => Ok(Self {
                auto_begin_selection: store.get_option(defaults::AUTO_BEGIN_SELECTION).await?,
                copy_mode_bindings: store.get_option(defaults::COPY_MODE_BINDINGS).await?,
                copy_mode_prefix: store.get_option(defaults::COPY_MODE_PREFIX).await?,
                ..display
            }),
            // The legacy loader always mirrored bindings into copy mode.
            Variant::Legacy => Ok(Self {
                copy_mode_bindings: defaults::ON.to_string(),
                ..display
            }),
        }
    }

    pub fn copy_mode_bindings_enabled(&self) -> bool {
        is_on(&self.copy_mode_bindings)
    }
}

/// Interpret a host flag value.
pub fn is_on(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(defaults::ON)
}

/// An opt-in auxiliary binding: a copy scope bound to a user-chosen key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AuxiliaryAction {
    /// Option naming the trigger key.
    pub key_option: &'static str,
    /// Key used when the option is unset; `None` leaves the action disabled.
    pub fallback_key: Option<&'static str>,
    pub copy_scope: CopyScope,
}

impl AuxiliaryAction {
    /// Options for the lowercase-style trigger; its case-flipped companion
    /// gets [`ExtendedOptions::flipped`] of this.
    pub fn base_options(&self) -> ExtendedOptions {
        ExtendedOptions {
            copy_scope: Some(self.copy_scope),
            paste_after: false,
        }
    }

    /// Auxiliary actions for `variant`, in registration order.
    pub fn for_variant(variant: Variant) -> &'static [AuxiliaryAction] {
        match variant {
            Variant::Extended => &EXTENDED_AUXILIARY_ACTIONS,
            Variant::Legacy => &LEGACY_AUXILIARY_ACTIONS,
        }
    }
}

const EXTENDED_AUXILIARY_ACTIONS: [AuxiliaryAction; 3] = [
    AuxiliaryAction {
        key_option: defaults::COPY_WORD_KEY_BINDING,
        fallback_key: None,
        copy_scope: CopyScope::Word,
    },
    AuxiliaryAction {
        key_option: defaults::COPY_UNTIL_SPACE_KEY_BINDING,
        fallback_key: None,
        copy_scope: CopyScope::UntilSpace,
    },
    AuxiliaryAction {
        key_option: defaults::COPY_LINE_KEY_BINDING,
        fallback_key: None,
        copy_scope: CopyScope::Line,
    },
];

const LEGACY_AUXILIARY_ACTIONS: [AuxiliaryAction; 2] = [
    AuxiliaryAction {
        key_option: defaults::LEGACY_WORD_KEY_BINDING,
        fallback_key: Some(defaults::LEGACY_DEFAULT_WORD_KEY),
        copy_scope: CopyScope::Word,
    },
    AuxiliaryAction {
        key_option: defaults::LEGACY_LINE_KEY_BINDING,
        fallback_key: Some(defaults::LEGACY_DEFAULT_LINE_KEY),
        copy_scope: CopyScope::Line,
    },
];

/// Fill in `fallback` when the host returned an empty value.
pub fn or_fallback(value: String, fallback: Option<&str>) -> String {
    match fallback {
        Some(fallback) if value.is_empty() => fallback.to_string(),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    #[test]
    fn plain_jump_defaults_differ_by_variant() {
        // Extended pastes after the plain jump; legacy does not.
        let extended = ExtendedOptions::for_variant(Variant::Extended);
        assert_eq!(extended.copy_scope, None);
        assert!(extended.paste_after);
        assert!(!ExtendedOptions::for_variant(Variant::Legacy).paste_after);
    }

    #[test]
    fn flipped_keeps_scope_and_inverts_placement() {
        // Flipping must not mutate the base value and must be reversible.
        let base = EXTENDED_AUXILIARY_ACTIONS[2].base_options();
        let flipped = base.flipped();
        assert_eq!(flipped.copy_scope, Some(CopyScope::Line));
        assert!(!base.paste_after);
        assert!(flipped.paste_after);
        assert_eq!(flipped.flipped(), base);
    }

    #[test]
    fn auxiliary_order_is_fixed() {
        // Registration order decides which binding wins on a shared key.
        let scopes: Vec<_> = AuxiliaryAction::for_variant(Variant::Extended)
            .iter()
            .map(|a| a.copy_scope)
            .collect();
        assert_eq!(
            scopes,
            [CopyScope::Word, CopyScope::UntilSpace, CopyScope::Line]
        );
        assert_eq!(AuxiliaryAction::for_variant(Variant::Legacy).len(), 2);
    }

    #[test]
    fn flag_values_are_case_insensitive() {
        assert!(is_on("on"));
        assert!(is_on("ON"));
        assert!(!is_on(""));
        assert!(!is_on("off"));
    }

    #[test]
    fn fallback_applies_only_to_empty_values() {
        assert_eq!(or_fallback(String::new(), Some("j")), "j");
        assert_eq!(or_fallback("k".into(), Some("j")), "k");
        assert_eq!(or_fallback(String::new(), None), "");
    }

    #[tokio::test]
    async fn extended_load_reads_all_seven_options() {
        // One read per field, no caching.
        let host = MemoryHost::new()
            .with_option(defaults::SMART_CASE, "on")
            .with_option(defaults::COPY_MODE_BINDINGS, "on")
            .with_option(defaults::COPY_MODE_PREFIX, "M");
        let common = CommonOptions::load(&host, Variant::Extended)
            .await
            .expect("load");
        assert_eq!(common.smart_case, "on");
        assert_eq!(common.copy_mode_prefix, "M");
        assert!(common.copy_mode_bindings_enabled());
        assert_eq!(host.reads().len(), 7);
    }

    #[tokio::test]
    async fn legacy_load_skips_extended_options() {
        // Legacy never reads the newer options and always mirrors into copy mode.
        let host = MemoryHost::new()
            .with_option(defaults::COPY_MODE_PREFIX, "M")
            .with_option(defaults::LABEL_CHARS, "asdf");
        let common = CommonOptions::load(&host, Variant::Legacy)
            .await
            .expect("load");
        assert_eq!(common.label_chars, "asdf");
        assert_eq!(common.copy_mode_prefix, "");
        assert!(common.copy_mode_bindings_enabled());
        assert!(!host
            .reads()
            .iter()
            .any(|name| name == defaults::COPY_MODE_PREFIX));
    }
}
