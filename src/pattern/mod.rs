//! Extended-mode pattern engine.
//!
//! A pattern string compiles to exactly one [`Element`]; matching asks
//! whether at least one character of the input satisfies it. There is no
//! sequencing, quantification, anchoring, or alternation at this layer:
//! [`element_matches`] is the atomic unit a larger engine would be built on.
//!
//! # Pattern syntax
//!
//! | Pattern  | Meaning                                |
//! |----------|----------------------------------------|
//! | `a`      | That exact character (case-sensitive)  |
//! | `\d`     | One ASCII digit                        |
//! | `\w`     | One ASCII letter, digit, or underscore |
//! | `[abc]`  | Any one of the listed characters       |
//! | `[^abc]` | Any character not listed               |
//!
//! Inside `[...]` every character is a literal member; there are no escapes
//! or ranges in a set body.

pub mod ast;
pub mod char_class;
pub mod matcher;
pub mod parser;

pub use ast::{CharSet, Element};
pub use char_class::element_matches;
pub use matcher::Matcher;
pub use parser::{ParseError, parse};
