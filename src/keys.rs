//! Trigger-key derivations: the case-flipped companion key and the key used
//! inside tmux copy mode.

/// Swap the letter case of a trigger key's final character.
///
/// Applies to single-character keys (`w` ↔ `W`) and to modifier-prefixed
/// single characters (`C-j` ↔ `C-J`, `M-S-x` ↔ `M-S-X`). Named keys such as
/// `Space` or `F1`, digits and symbols come back unchanged. A character is only
/// swapped when swapping it back yields the original, so the function is its own
/// inverse for every input.
pub fn case_flip(key: &str) -> String {
    let (modifiers, base) = split_modifiers(key);
    let mut chars = base.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return key.to_string();
    };
    match flip_char(c) {
        Some(flipped) => format!("{modifiers}{flipped}"),
        None => key.to_string(),
    }
}

/// Key used for the copy-mode shadow bindings: `<prefix>-<key>` when a prefix
/// is configured, otherwise the key itself.
pub fn copy_mode_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}-{key}")
    }
}

/// Split `C-M-x` into (`C-M-`, `x`). A trailing `-` is a key, not a separator,
/// so `C--` splits into (`C-`, `-`).
fn split_modifiers(key: &str) -> (&str, &str) {
    let last = key.char_indices().next_back().map_or(0, |(idx, _)| idx);
    match key[..last].rfind('-') {
        Some(idx) => key.split_at(idx + 1),
        None => ("", key),
    }
}

fn flip_char(c: char) -> Option<char> {
    let flipped = if c.is_lowercase() {
        single(c.to_uppercase())?
    } else if c.is_uppercase() {
        single(c.to_lowercase())?
    } else {
        return None;
    };
    let back = if flipped.is_lowercase() {
        single(flipped.to_uppercase())?
    } else if flipped.is_uppercase() {
        single(flipped.to_lowercase())?
    } else {
        return None;
    };
    (back == c && flipped != c).then_some(flipped)
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let c = mapped.next()?;
    mapped.next().is_none().then_some(c)
}
