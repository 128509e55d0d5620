//! Custom Element Names
//!
//! The potential-custom-element-name grammar and the native tag heuristic.

/// Characters permitted in a custom element name after the leading
/// lowercase ASCII letter. Covers ASCII lowercase alphanumerics, hyphen,
/// period, underscore, and the letterish non-ASCII ranges, including the
/// supplementary planes up to `U+EFFFF`.
fn is_name_char(c: char) -> bool {
    matches!(c,
        '-' | '.' | '_'
        | '0'..='9'
        | 'a'..='z'
        | '\u{b7}'
        | '\u{c0}'..='\u{d6}'
        | '\u{d8}'..='\u{f6}'
        | '\u{f8}'..='\u{2ff}'
        | '\u{300}'..='\u{37d}'
        | '\u{37f}'..='\u{1fff}'
        | '\u{200c}'..='\u{200d}'
        | '\u{203f}'..='\u{2040}'
        | '\u{2070}'..='\u{218f}'
        | '\u{2c00}'..='\u{2fef}'
        | '\u{3001}'..='\u{d7ff}'
        | '\u{f900}'..='\u{fdcf}'
        | '\u{fdf0}'..='\u{fffd}'
        | '\u{10000}'..='\u{effff}')
}

/// Whether `name` is a valid custom element name: non-empty, starts with a
/// lowercase ASCII letter, contains at least one literal hyphen, and every
/// character is in the permitted class.
pub fn is_valid_custom_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_lowercase() {
        return false;
    }
    let mut has_hyphen = false;
    for c in chars {
        if !is_name_char(c) {
            return false;
        }
        if c == '-' {
            has_hyphen = true;
        }
    }
    has_hyphen
}

/// Best-effort check for a native tag name: non-empty and hyphen-free.
///
/// This cannot prove the tag actually exists; it only rules out names that
/// are syntactically custom.
pub fn is_probably_native_tag(tag_name: &str) -> bool {
    !tag_name.is_empty() && !tag_name.contains('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_custom_names() {
        for name in ["foo-bar", "a-", "a-.", "a-----", "x-_state", "a-\u{1F631}"] {
            assert!(is_valid_custom_name(name), "{name:?} should be valid");
        }
    }

    #[test]
    fn test_invalid_custom_names() {
        for name in ["", "foo", "1-foo", "-foo", "Foo-bar", "x-A", "x y-z"] {
            assert!(!is_valid_custom_name(name), "{name:?} should be invalid");
        }
    }

    #[test]
    fn test_non_ascii_name_characters() {
        // U+00B7 and the Latin-1 letter ranges are permitted
        assert!(is_valid_custom_name("a-\u{b7}"));
        assert!(is_valid_custom_name("a-\u{e9}l\u{e9}ment"));
        // U+00D7 (multiplication sign) sits in a gap of the class
        assert!(!is_valid_custom_name("a-\u{d7}"));
    }

    #[test]
    fn test_native_tag_heuristic() {
        assert!(is_probably_native_tag("button"));
        assert!(is_probably_native_tag("notarealtag"));
        assert!(!is_probably_native_tag("x-button"));
        assert!(!is_probably_native_tag(""));
    }
}
