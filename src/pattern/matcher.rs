//! Matcher: test a compiled pattern against a line of text.
//!
//! Scanning is by character, not by byte, so a multi-byte character is one
//! matchable unit.

use super::ast::Element;
use super::char_class::element_matches;
use super::parser::{ParseError, parse};

/// A compiled pattern, ready to test against text.
///
/// A `Matcher` owns its element and holds no other state; `matches` is
/// read-only, so one instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    element: Element,
}

impl Matcher {
    /// Compile `pattern` and wrap the resulting element.
    pub fn compile(pattern: &str) -> Result<Self, ParseError> {
        Ok(Self {
            element: parse(pattern)?,
        })
    }

    /// Whether at least one character of `text` satisfies the pattern.
    ///
    /// Stops at the first satisfying character. Empty text never matches.
    pub fn matches(&self, text: &str) -> bool {
        text.chars().any(|ch| element_matches(&self.element, ch))
    }

    /// The compiled element.
    pub fn element(&self) -> &Element {
        &self.element
    }
}
