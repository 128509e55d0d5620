//! Selector Lists
//!
//! The query grammar of the shim contract: a comma-separated list of bare
//! tag names and `[is="value"]` attribute selectors, e.g.
//! `foo-bar,[is="foo-is"],foo-buzz`.

/// One alternative in a selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorPart {
    /// Bare tag name, matched case-insensitively
    Tag(String),
    /// `[is="value"]`, matched against the `is` attribute verbatim
    IsAttr(String),
}

/// A parsed selector list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorList {
    parts: Vec<SelectorPart>,
}

impl SelectorList {
    /// Parse a selector list string. Empty pieces are skipped, so the empty
    /// string parses to a list that matches nothing.
    pub fn parse(selector: &str) -> Self {
        let mut parts = Vec::new();
        for piece in selector.split(',') {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }
            let is_value = piece
                .strip_prefix("[is=\"")
                .and_then(|rest| rest.strip_suffix("\"]"));
            match is_value {
                Some(value) => parts.push(SelectorPart::IsAttr(value.to_owned())),
                None => parts.push(SelectorPart::Tag(piece.to_lowercase())),
            }
        }
        Self { parts }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Whether an element with the given lowercase tag name and `is`
    /// attribute value matches any alternative.
    pub fn matches(&self, tag_name: &str, is_value: Option<&str>) -> bool {
        self.parts.iter().any(|part| match part {
            SelectorPart::Tag(tag) => tag_name.eq_ignore_ascii_case(tag),
            SelectorPart::IsAttr(value) => is_value == Some(value.as_str()),
        })
    }
}
