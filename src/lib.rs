//! A minimal grep-style pattern matcher.
//!
//! A pattern compiles to a single matchable element (a literal character,
//! the `\d` or `\w` class, or a `[...]`/`[^...]` character set), and
//! matching reports whether any character of a line satisfies it.
//!
//! # Example
//!
//! ```rust
//! use rex::Matcher;
//!
//! let vowels = Matcher::compile("[aeiou]")?;
//! assert!(vowels.matches("hello"));
//! assert!(!vowels.matches("rhythm"));
//!
//! let digits = Matcher::compile(r"\d")?;
//! assert!(digits.matches("Version 2.0"));
//! # Ok::<(), rex::ParseError>(())
//! ```

pub mod pattern;

pub use pattern::{CharSet, Element, Matcher, ParseError, parse};
