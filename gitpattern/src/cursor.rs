/// Position into an immutable, already decoded character buffer.
///
/// A `Cursor` is `Copy`: taking a copy is the checkpoint the matchers roll
/// back to, and only the index is duplicated, never the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    chars: &'a [char],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the first character of `chars`.
    pub fn new(chars: &'a [char]) -> Self {
        Self { chars, position: 0 }
    }

    /// Returns the character under the cursor, `None` once the end is reached.
    pub fn current(&self) -> Option<char> {
        self.chars
            .get(self.position)
            .copied()
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Moves one character forward and returns the new current character.
    /// Advancing at the end is a no-op.
    pub fn advance(&mut self) -> Option<char> {
        if !self.is_at_end() {
            self.position += 1;
        }

        self.current()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// First character of the whole buffer, wherever the cursor is.
    pub fn first(&self) -> Option<char> {
        self.chars
            .first()
            .copied()
    }

    /// Last character of the whole buffer, wherever the cursor is.
    pub fn last(&self) -> Option<char> {
        self.chars
            .last()
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn walks_to_the_end_and_stays_there() {
        let buf = chars("ab");
        let mut cursor = Cursor::new(&buf);

        assert_eq!(cursor.current(), Some('a'));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_at_end());

        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn copies_are_independent_checkpoints() {
        let buf = chars("xyz");
        let mut cursor = Cursor::new(&buf);
        let checkpoint = cursor;

        cursor.advance();
        cursor.advance();

        assert_eq!(checkpoint.current(), Some('x'));
        assert_eq!(cursor.current(), Some('z'));
    }

    #[test]
    fn boundaries_ignore_position() {
        let buf = chars("!dir/");
        let mut cursor = Cursor::new(&buf);
        cursor.advance();
        cursor.advance();

        assert_eq!(cursor.first(), Some('!'));
        assert_eq!(cursor.last(), Some('/'));
    }

    #[test]
    fn empty_buffer_is_at_end() {
        let cursor = Cursor::new(&[]);

        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.first(), None);
        assert_eq!(cursor.last(), None);
    }
}
