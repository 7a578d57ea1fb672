use rustc_hash::FxHashSet;

use crate::cursor::Cursor;
use crate::matcher::{Matcher, SEPARATOR, chain};

const SPACE: char = ' ';
const STAR: char = '*';
const ANY_CHAR: char = '?';
const CHOICE_START: char = '[';
const CHOICE_END: char = ']';
const NEGATE: char = '!';

/// Marker characters the compiler dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Negate,
    Separator,
    Star,
    ChoiceStart,
    AnyChar,
    Literal,
}

impl Token {
    fn classify(c: char) -> Self {
        match c {
            NEGATE => Self::Negate,
            SEPARATOR => Self::Separator,
            STAR => Self::Star,
            CHOICE_START => Self::ChoiceStart,
            ANY_CHAR => Self::AnyChar,
            _ => Self::Literal,
        }
    }

    /// Whether `c` ends a literal run.
    fn is_delimiter(c: char) -> bool {
        matches!(
            Self::classify(c),
            Self::Separator | Self::Star | Self::ChoiceStart | Self::AnyChar
        )
    }
}

/// Compiles a whole pattern line. Blank lines compile to a matcher that
/// never succeeds.
pub fn compile_line(line: &[char]) -> Matcher {
    let pattern = Cursor::new(line);

    if let Some(blank) = try_blank_line(pattern) {
        return blank;
    }

    let (matcher, _) = compile_sequence(pattern);
    matcher
}

/// Compiles the pattern from `pattern` to its end and returns the composite
/// matcher, terminated by [`Matcher::End`], with the exhausted cursor.
///
/// Wildcards that need to know what follows them call back into this
/// function for the remainder, so the recursion depth is bounded by the
/// number of wildcards in the pattern.
pub fn compile_sequence(mut pattern: Cursor<'_>) -> (Matcher, Cursor<'_>) {
    let mut composite = Matcher::Positive;

    while let Some(c) = pattern.current() {
        let (matcher, rest) = match Token::classify(c) {
            Token::Negate if pattern.position() == 0 => {
                pattern.advance();
                continue;
            },
            Token::Negate | Token::Literal => literal_run(pattern),
            Token::Separator => try_many_segments(pattern)
                .or_else(|| try_any_segment(pattern))
                .unwrap_or_else(|| separator(pattern)),
            Token::Star => star(pattern),
            Token::ChoiceStart => try_choice(pattern).unwrap_or_else(|| {
                log::debug!(
                    "unterminated character class at {}, matching '[' literally",
                    pattern.position()
                );
                literal_run(pattern)
            }),
            Token::AnyChar => any_char(pattern),
        };

        composite = chain(composite, matcher);
        pattern = rest;
    }

    (chain(composite, Matcher::End), pattern)
}

/// Advances over `token` if the pattern continues with it.
fn skip_exact<'p>(pattern: Cursor<'p>, token: &str) -> Option<Cursor<'p>> {
    let mut rest = pattern;

    for expected in token.chars() {
        if rest.current() != Some(expected) {
            return None;
        }
        rest.advance();
    }

    Some(rest)
}

/// Takes the current character whatever it is, then everything up to the
/// next delimiter.
fn literal_run(mut pattern: Cursor<'_>) -> (Matcher, Cursor<'_>) {
    let mut literal = Vec::new();

    while let Some(c) = pattern.current() {
        literal.push(c);

        if pattern
            .advance()
            .is_some_and(Token::is_delimiter)
        {
            break;
        }
    }

    (Matcher::Literal(literal), pattern)
}

fn star(pattern: Cursor<'_>) -> (Matcher, Cursor<'_>) {
    let mut rest = pattern;
    rest.advance();

    let (suffix, rest) = compile_sequence(rest);
    (Matcher::Star(Box::new(suffix)), rest)
}

fn try_any_segment(pattern: Cursor<'_>) -> Option<(Matcher, Cursor<'_>)> {
    let rest = skip_exact(pattern, "/*/")?;
    Some((Matcher::AnySegment, rest))
}

fn try_many_segments(pattern: Cursor<'_>) -> Option<(Matcher, Cursor<'_>)> {
    let rest = skip_exact(pattern, "/**/")?;

    let (suffix, rest) = compile_sequence(rest);
    Some((Matcher::ManySegments(Box::new(suffix)), rest))
}

/// Collects the members of a `[...]` class. Returns `None`, leaving the
/// pattern untouched, when the class is never closed.
fn try_choice(pattern: Cursor<'_>) -> Option<(Matcher, Cursor<'_>)> {
    let mut rest = skip_exact(pattern, "[")?;
    let mut members = FxHashSet::default();

    loop {
        match rest.current()? {
            CHOICE_END => {
                rest.advance();
                break;
            },
            c => {
                members.insert(c);
                rest.advance();
            },
        }
    }

    Some((Matcher::Choice(members), rest))
}

fn any_char(pattern: Cursor<'_>) -> (Matcher, Cursor<'_>) {
    let mut rest = pattern;
    rest.advance();
    (Matcher::AnyChar, rest)
}

/// A plain separator. When only spaces follow it, they are swallowed and the
/// separator becomes trailing: `build/  ` behaves like `build/`.
fn separator(pattern: Cursor<'_>) -> (Matcher, Cursor<'_>) {
    let mut rest = pattern;
    rest.advance();

    let mut lookahead = rest;
    while lookahead.current() == Some(SPACE) {
        lookahead.advance();
    }

    let trailing = lookahead.is_at_end();
    if trailing {
        rest = lookahead;
    }

    (Matcher::Separator { trailing }, rest)
}

fn try_blank_line(pattern: Cursor<'_>) -> Option<Matcher> {
    let mut rest = pattern;

    while let Some(c) = rest.current() {
        if c != SPACE {
            return None;
        }
        rest.advance();
    }

    Some(Matcher::Negative)
}
