//! Participant names are the only identity SplitSync has. These helpers make
//! sure two spellings of the same display name compare equal.

use unicode_normalization::UnicodeNormalization;

/// Normalize a display name: trim, collapse inner whitespace, Unicode NFC.
///
/// Returns `None` for names that are empty after trimming.
pub(crate) fn normalize_name(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut out = String::new();
    for token in trimmed.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(token.nfc());
    }
    Some(out)
}

/// Normalize a participant list, dropping blanks and later duplicates while
/// keeping the order (the first entry stays the payer).
pub(crate) fn normalize_participants<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for name in names {
        if let Some(name) = normalize_name(name.as_ref())
            && !out.contains(&name)
        {
            out.push(name);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_composes() {
        assert_eq!(normalize_name("  Mary   Ann "), Some("Mary Ann".to_string()));
        // "e" + combining acute accent composes to "é".
        assert_eq!(normalize_name("Rene\u{301}"), Some("René".to_string()));
        assert_eq!(normalize_name("   "), None);
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let names = normalize_participants(["You", " Alice", "", "You", "Bob"]);
        assert_eq!(names, vec!["You", "Alice", "Bob"]);
    }
}
