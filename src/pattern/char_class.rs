//! Character membership tests for compiled pattern elements.

use super::ast::Element;

/// Test whether `ch` satisfies `element`.
pub fn element_matches(element: &Element, ch: char) -> bool {
    match element {
        Element::Literal(c) => *c == ch,
        Element::Digit => ch.is_ascii_digit(),
        Element::Word => is_word_char(ch),
        Element::Set(set) => set.contains(ch) != set.is_negated(),
    }
}

/// ASCII letter, ASCII digit, or underscore.
///
/// Classification is deliberately ASCII: letters and digits outside the
/// basic Latin block do not count, the same as the digit class.
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
