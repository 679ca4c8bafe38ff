//! Simple selector parsing and matching: `tag`, `#id`, `.class` and
//! combinations of the three (e.g. `h1#title.hero`).

use lazy_static::lazy_static;
use regex::Regex;

use super::tree::Element;

lazy_static! {
    static ref RE_SELECTOR: Regex = Regex::new(
        r"^([A-Za-z][A-Za-z0-9-]*)?(#[A-Za-z_][A-Za-z0-9_-]*)?((?:\.[A-Za-z_][A-Za-z0-9_-]*)*)$"
    )
    .unwrap();
    static ref RE_CLASS: Regex = Regex::new(r"\.([A-Za-z_][A-Za-z0-9_-]*)").unwrap();
}

/// A parsed simple selector. Empty fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

/// Parse a simple selector. Combinators, attribute selectors and
/// pseudo-classes are not supported.
pub fn parse_selector(input: &str) -> Result<Selector, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Empty selector".to_string());
    }

    let caps = RE_SELECTOR
        .captures(trimmed)
        .ok_or_else(|| format!("Unsupported selector: '{input}'"))?;

    let selector = Selector {
        tag: caps.get(1).map(|m| m.as_str().to_lowercase()),
        id: caps.get(2).map(|m| m.as_str()[1..].to_string()),
        classes: caps.get(3).map_or_else(Vec::new, |m| {
            RE_CLASS
                .captures_iter(m.as_str())
                .map(|c| c[1].to_string())
                .collect()
        }),
    };

    if selector.tag.is_none() && selector.id.is_none() && selector.classes.is_empty() {
        return Err(format!("Unsupported selector: '{input}'"));
    }
    Ok(selector)
}

impl Selector {
    pub fn matches(&self, el: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !el.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes
            .iter()
            .all(|class| el.classes.iter().any(|c| c == class))
    }
}
