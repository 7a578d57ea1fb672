//! Compiles single gitignore-style pattern lines into reusable path
//! predicates.
//!
//! ```
//! let rule = gitpattern::compile("target/**/*.o");
//!
//! assert!(rule.matches("target/debug/main.o"));
//! assert!(!rule.matches("src/main.o"));
//! ```
//!
//! Supported syntax: literal text, `*` (any run of non-separator
//! characters), `?` (one character), `[abc]` (one character of a set),
//! `/*/` (one path segment), `/**/` (any number of segments), a leading `!`
//! and a trailing `/`. Blank lines match nothing.
//!
//! Reading ignore files, stripping comments, walking directories and
//! deciding between several rules is left to the caller.

mod compile;
pub mod cursor;
pub mod matcher;
mod rule;

pub use cursor::Cursor;
pub use matcher::Matcher;
pub use rule::Rule;

/// Compiles one pattern line. Shorthand for [`Rule::compile`].
pub fn compile(line: &str) -> Rule {
    Rule::compile(line)
}
