//! Region configuration

use serde::Deserialize;

use crate::Result;

/// Resolved options for one bound container.
///
/// Deserializes from the camelCase option object (`bodySelector`,
/// `footerSelector`, `headerSelector`, `top`, `bottom`). Missing keys take
/// their defaults and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Scrolling row-group, located inside the container
    pub body_selector: String,
    /// Footer row-group
    pub footer_selector: String,
    /// Header row-group
    pub header_selector: String,
    /// CSS `top` of the stuck header overlay
    pub top: String,
    /// CSS `bottom` of the stuck footer overlay
    pub bottom: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            body_selector: "tbody".to_string(),
            footer_selector: "tfoot".to_string(),
            header_selector: "thead".to_string(),
            top: "0".to_string(),
            bottom: "0".to_string(),
        }
    }
}

impl Config {
    /// Parse an option object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_body_selector(mut self, selector: impl Into<String>) -> Self {
        self.body_selector = selector.into();
        self
    }

    pub fn with_header_selector(mut self, selector: impl Into<String>) -> Self {
        self.header_selector = selector.into();
        self
    }

    pub fn with_footer_selector(mut self, selector: impl Into<String>) -> Self {
        self.footer_selector = selector.into();
        self
    }

    pub fn with_top(mut self, top: impl Into<String>) -> Self {
        self.top = top.into();
        self
    }

    pub fn with_bottom(mut self, bottom: impl Into<String>) -> Self {
        self.bottom = bottom.into();
        self
    }

    /// `top` in pixels for geometry comparisons
    pub fn top_offset(&self) -> f64 {
        resolve_offset("top", &self.top)
    }

    /// `bottom` in pixels for geometry comparisons
    pub fn bottom_offset(&self) -> f64 {
        resolve_offset("bottom", &self.bottom)
    }
}

fn resolve_offset(name: &str, value: &str) -> f64 {
    match parse_leading_int(value) {
        Some(px) => px as f64,
        None => {
            tracing::warn!(option = name, value, "offset has no leading integer, using 0");
            0.0
        }
    }
}

/// Leading-integer parse of a CSS length: `"12px"` -> 12, `" -3.5em"` -> -3.
/// Units and anything after the digits are ignored.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
