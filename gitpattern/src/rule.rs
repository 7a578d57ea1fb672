use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::compile::compile_line;
use crate::cursor::Cursor;
use crate::matcher::{Matcher, SEPARATOR};

const NEGATE: char = '!';

/// One compiled line of an ignore file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pattern: String,
    matcher: Matcher,
    is_dir: bool,
    is_negate: bool,
}

impl Rule {
    /// Compiles a single pattern line. The line must already be stripped of
    /// comments and line terminators. Compilation never fails: text that is
    /// not valid pattern syntax is matched literally.
    pub fn compile(line: &str) -> Self {
        let chars: Vec<char> = line
            .chars()
            .collect();
        let matcher = compile_line(&chars);

        // Classified on the line as written, before trailing spaces after a
        // separator are dropped.
        let text = Cursor::new(&chars);
        let rule = Self {
            pattern: line.to_string(),
            matcher,
            is_dir: text.last() == Some(SEPARATOR),
            is_negate: text.first() == Some(NEGATE),
        };

        log::trace!(
            "compiled rule '{}' (dir: {}, negate: {})",
            rule.pattern,
            rule.is_dir,
            rule.is_negate
        );
        rule
    }

    /// Whether `path` matches this rule in its entirety. `path` is a relative
    /// path using `/` as separator.
    pub fn matches(&self, path: &str) -> bool {
        let chars: Vec<char> = path
            .chars()
            .collect();
        let (matched, _) = self
            .matcher
            .apply(Cursor::new(&chars));
        matched
    }

    /// The line this rule was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The pattern ended with a separator: the rule only applies to
    /// directories.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// The pattern started with `!`: the rule re-includes what it matches.
    pub fn is_negate(&self) -> bool {
        self.is_negate
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

impl FromStr for Rule {
    type Err = Infallible;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Ok(Self::compile(line))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
