//! Element selectors
//!
//! The subset of CSS selectors used for `querySelector` and `closest`:
//! type, class, id, universal, and compounds of those (`table.grid#orders`).

use crate::ElementData;

/// Simple selector for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    Universal,
}

impl SimpleSelector {
    /// Parse a simple selector string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if s == "*" {
            Some(Self::Universal)
        } else if let Some(id) = s.strip_prefix('#') {
            (!id.is_empty()).then(|| Self::Id(id.to_string()))
        } else if let Some(class) = s.strip_prefix('.') {
            (!class.is_empty()).then(|| Self::Class(class.to_string()))
        } else if s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            Some(Self::Tag(s.to_ascii_lowercase()))
        } else {
            None
        }
    }

    pub fn matches(&self, elem: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => elem.tag == *tag,
            Self::Id(id) => elem.id() == Some(id.as_str()),
            Self::Class(class) => elem.has_class(class),
        }
    }
}

/// Sequence of simple selectors that must all match one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    parts: Vec<SimpleSelector>,
}

impl CompoundSelector {
    /// Parse `tag.class#id` style input. Whitespace (descendant combinators)
    /// and other combinators are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() || s.contains(char::is_whitespace) {
            return None;
        }

        let mut parts = Vec::new();
        let mut start = 0;
        for (i, c) in s.char_indices().skip(1) {
            if c == '.' || c == '#' {
                parts.push(SimpleSelector::parse(&s[start..i])?);
                start = i;
            }
        }
        parts.push(SimpleSelector::parse(&s[start..])?);

        Some(Self { parts })
    }

    pub fn matches(&self, elem: &ElementData) -> bool {
        self.parts.iter().all(|p| p.matches(elem))
    }
}
