use rustc_hash::FxHashSet;

use crate::cursor::Cursor;

pub(crate) const SEPARATOR: char = '/';

/// Compiled form of a pattern, applied to a path cursor at match time.
///
/// A matcher is a pure function from a cursor to `(matched, rest)`. On
/// success `rest` is at or past the input cursor. On failure individual
/// matchers may hand back an intermediate cursor; [`Matcher::Chain`] is what
/// guarantees the caller gets the pre-attempt cursor back.
///
/// `Star` and `ManySegments` retry their suffix at every following position,
/// so a pattern with several of them costs quadratic (or worse) time in the
/// length of the path. Recursion depth only grows with the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Always succeeds without consuming input.
    Positive,
    /// Always fails without consuming input.
    Negative,
    /// Exact run of characters.
    Literal(Vec<char>),
    /// Zero or more non-separator characters followed by the suffix.
    Star(Box<Matcher>),
    /// `/*/`: a separator and one path segment.
    AnySegment,
    /// `/**/`: a separator, then zero or more segments followed by the suffix.
    ManySegments(Box<Matcher>),
    /// `[...]`: one character out of the set.
    Choice(FxHashSet<char>),
    /// `?`: one arbitrary character.
    AnyChar,
    /// A literal separator. A trailing one is also satisfied by the end of
    /// the path.
    Separator { trailing: bool },
    /// End of the path, with one optional trailing separator.
    End,
    /// Sequential composition, rolled back as a whole on failure.
    Chain(Box<Matcher>, Box<Matcher>),
}

/// Composes `first` and `second` into a matcher succeeding when both match
/// one after the other.
pub fn chain(first: Matcher, second: Matcher) -> Matcher {
    Matcher::Chain(Box::new(first), Box::new(second))
}

impl Matcher {
    pub fn apply<'a>(&self, input: Cursor<'a>) -> (bool, Cursor<'a>) {
        match self {
            Self::Positive => (true, input),
            Self::Negative => (false, input),
            Self::Literal(literal) => match_literal(literal, input),
            Self::Star(suffix) => match_star(suffix, input),
            Self::AnySegment => match_any_segment(input),
            Self::ManySegments(suffix) => match_many_segments(suffix, input),
            Self::Choice(members) => match_choice(members, input),
            Self::AnyChar => match_any_char(input),
            Self::Separator { trailing } => match_separator(*trailing, input),
            Self::End => match_end(input),
            Self::Chain(first, second) => match_chain(first, second, input),
        }
    }
}

fn match_literal<'a>(literal: &[char], input: Cursor<'a>) -> (bool, Cursor<'a>) {
    let mut rest = input;

    for &expected in literal {
        if rest.current() != Some(expected) {
            return (false, input);
        }
        rest.advance();
    }

    (true, rest)
}

fn match_star<'a>(suffix: &Matcher, input: Cursor<'a>) -> (bool, Cursor<'a>) {
    let mut cursor = input;

    loop {
        let (matched, rest) = suffix.apply(cursor);
        if matched {
            return (true, rest);
        }

        match cursor.current() {
            None | Some(SEPARATOR) => return (false, input),
            Some(_) => {
                cursor.advance();
            },
        }
    }
}

fn match_any_segment(input: Cursor<'_>) -> (bool, Cursor<'_>) {
    if input.current() != Some(SEPARATOR) {
        return (false, input);
    }

    let mut cursor = input;
    cursor.advance();

    // A final segment without a closing separator is accepted as well.
    while let Some(c) = cursor.current() {
        cursor.advance();
        if c == SEPARATOR {
            break;
        }
    }

    (true, cursor)
}

fn match_many_segments<'a>(suffix: &Matcher, input: Cursor<'a>) -> (bool, Cursor<'a>) {
    if input.current() != Some(SEPARATOR) {
        return (false, input);
    }

    let mut cursor = input;
    cursor.advance();

    loop {
        let (matched, rest) = suffix.apply(cursor);
        if matched {
            return (true, rest);
        }

        if cursor.is_at_end() {
            return (false, input);
        }
        cursor.advance();
    }
}

fn match_choice<'a>(members: &FxHashSet<char>, input: Cursor<'a>) -> (bool, Cursor<'a>) {
    match input.current() {
        Some(c) if members.contains(&c) => {
            let mut rest = input;
            rest.advance();
            (true, rest)
        },
        _ => (false, input),
    }
}

fn match_any_char(input: Cursor<'_>) -> (bool, Cursor<'_>) {
    if input.is_at_end() {
        return (false, input);
    }

    let mut rest = input;
    rest.advance();
    (true, rest)
}

fn match_separator(trailing: bool, input: Cursor<'_>) -> (bool, Cursor<'_>) {
    match input.current() {
        Some(SEPARATOR) => {
            let mut rest = input;
            rest.advance();
            (true, rest)
        },
        None if trailing => (true, input),
        _ => (false, input),
    }
}

fn match_end(input: Cursor<'_>) -> (bool, Cursor<'_>) {
    let mut rest = input;
    if rest.current() == Some(SEPARATOR) {
        rest.advance();
    }

    if rest.is_at_end() { (true, rest) } else { (false, input) }
}

fn match_chain<'a>(first: &Matcher, second: &Matcher, input: Cursor<'a>) -> (bool, Cursor<'a>) {
    let checkpoint = input;

    let (matched, rest) = first.apply(input);
    if !matched {
        return (false, rest);
    }
    debug_assert!(rest.position() >= checkpoint.position());

    let (matched, rest) = second.apply(rest);
    if matched {
        return (true, rest);
    }

    (false, checkpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn literal(s: &str) -> Matcher {
        Matcher::Literal(chars(s))
    }

    /// Runs `matcher` over `input` and returns the outcome plus the position
    /// the returned cursor points at.
    fn run(matcher: &Matcher, input: &str) -> (bool, usize) {
        let buf = chars(input);
        let (matched, rest) = matcher.apply(Cursor::new(&buf));
        (matched, rest.position())
    }

    #[test]
    fn identity_and_never() {
        assert_eq!(run(&Matcher::Positive, "abc"), (true, 0));
        assert_eq!(run(&Matcher::Negative, "abc"), (false, 0));
        assert_eq!(run(&Matcher::Negative, ""), (false, 0));
    }

    #[test]
    fn literal_consumes_exactly_its_text() {
        assert_eq!(run(&literal("ab"), "abc"), (true, 2));
        assert_eq!(run(&literal("ab"), "axc"), (false, 0));
        assert_eq!(run(&literal("abc"), "ab"), (false, 0));
    }

    #[test]
    fn star_prefers_the_shortest_prefix() {
        let star = Matcher::Star(Box::new(literal("b")));

        assert_eq!(run(&star, "bb"), (true, 1));
        assert_eq!(run(&star, "xxb"), (true, 3));
        assert_eq!(run(&star, "x/b"), (false, 0));
        assert_eq!(run(&star, "xxx"), (false, 0));
    }

    #[test]
    fn any_segment_stops_after_the_next_separator() {
        assert_eq!(run(&Matcher::AnySegment, "/abc/d"), (true, 5));
        assert_eq!(run(&Matcher::AnySegment, "//d"), (true, 2));
        assert_eq!(run(&Matcher::AnySegment, "abc/"), (false, 0));
    }

    #[test]
    fn any_segment_accepts_a_final_partial_segment() {
        assert_eq!(run(&Matcher::AnySegment, "/abc"), (true, 4));
        assert_eq!(run(&Matcher::AnySegment, "/"), (true, 1));
    }

    #[test]
    fn many_segments_scans_across_separators() {
        let many = Matcher::ManySegments(Box::new(chain(literal("b"), Matcher::End)));

        assert_eq!(run(&many, "/b"), (true, 2));
        assert_eq!(run(&many, "/x/y/b"), (true, 6));
        assert_eq!(run(&many, "/x/y/c"), (false, 0));
        assert_eq!(run(&many, "b"), (false, 0));
    }

    #[test]
    fn choice_takes_one_member() {
        let choice = Matcher::Choice(['a', 'o'].into_iter().collect());

        assert_eq!(run(&choice, "ox"), (true, 1));
        assert_eq!(run(&choice, "x"), (false, 0));
        assert_eq!(run(&choice, ""), (false, 0));
    }

    #[test]
    fn any_char_needs_input() {
        assert_eq!(run(&Matcher::AnyChar, "/"), (true, 1));
        assert_eq!(run(&Matcher::AnyChar, ""), (false, 0));
    }

    #[test]
    fn separator_only_accepts_end_when_trailing() {
        let inner = Matcher::Separator { trailing: false };
        let trailing = Matcher::Separator { trailing: true };

        assert_eq!(run(&inner, "/a"), (true, 1));
        assert_eq!(run(&inner, "a"), (false, 0));
        assert_eq!(run(&inner, ""), (false, 0));

        assert_eq!(run(&trailing, "/"), (true, 1));
        assert_eq!(run(&trailing, ""), (true, 0));
        assert_eq!(run(&trailing, "a"), (false, 0));
    }

    #[test]
    fn end_allows_one_trailing_separator() {
        assert_eq!(run(&Matcher::End, ""), (true, 0));
        assert_eq!(run(&Matcher::End, "/"), (true, 1));
        assert_eq!(run(&Matcher::End, "//"), (false, 0));
        assert_eq!(run(&Matcher::End, "a"), (false, 0));
    }

    #[test]
    fn chain_rolls_back_the_whole_step() {
        let matcher = chain(literal("ab"), literal("x"));

        assert_eq!(run(&matcher, "abx"), (true, 3));
        // `ab` matched, `x` did not: the caller sees the original cursor.
        assert_eq!(run(&matcher, "aby"), (false, 0));
    }

    #[test]
    fn rollback_lets_star_retry_another_split() {
        // `*` followed by "b" then "c": the first "b" fails on "c", the
        // chain rolls back and the star moves on to the second "b".
        let matcher = Matcher::Star(Box::new(chain(chain(literal("b"), literal("c")), Matcher::End)));

        assert_eq!(run(&matcher, "abxbc"), (true, 5));
    }
}
