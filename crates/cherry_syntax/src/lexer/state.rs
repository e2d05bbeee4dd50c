//! Position-tracking cursor over a source buffer.
//!
//! [`LexState`] is the only mutable thing the lexical rules touch. It is plain data borrowed from the source buffer,
//! so a caller can clone it to checkpoint, hand it to another thread, and resume lexing from there.
//!
//! ## Notes
//! - `index` is a byte offset and always sits on a `char` boundary.
//! - `line` increments and `column` resets to `0` when a `\n` is consumed.
//! - Only one token can be open at a time: [`LexState::start_token`] overwrites any previous mark.

use super::tokens::{Leaf, Token};

/// Start position of the token currently being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Mark {
    index: usize,
    line: u64,
    column: u64,
}

/// Cursor state for one compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexState<'src> {
    source: &'src str,
    index: usize,
    line: u64,
    column: u64,
    mark: Mark,
}

impl<'src> LexState<'src> {
    /// Create a state positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            index: 0,
            line: 0,
            column: 0,
            mark: Mark::default(),
        }
    }

    /// The whole source buffer.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset of the cursor.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn column(&self) -> u64 {
        self.column
    }

    /// Return `true` once every character has been consumed.
    pub fn end_of_source(&self) -> bool {
        self.index >= self.source.len()
    }

    /// Source from the cursor onwards.
    pub fn remaining_source(&self) -> &'src str {
        self.source.get(self.index..).unwrap_or_default()
    }

    /// Character under the cursor.
    pub fn curr_char(&self) -> Option<char> {
        self.remaining_source().chars().next()
    }

    /// Character after the one under the cursor.
    pub fn next_char(&self) -> Option<char> {
        self.remaining_source().chars().nth(1)
    }

    /// Return `true` if the remaining source starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining_source().starts_with(prefix)
    }

    /// Consume and return the character under the cursor, updating line and column.
    pub fn read_char(&mut self) -> Option<char> {
        let ch = self.curr_char()?;
        self.index += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consume `ch` if it is under the cursor.
    pub fn eat(&mut self, ch: char) -> bool {
        if self.curr_char() == Some(ch) {
            self.read_char();
            true
        } else {
            false
        }
    }

    /// Consume characters while `predicate` holds and return how many were consumed.
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.curr_char().is_some_and(&predicate) {
            self.read_char();
            count += 1;
        }
        count
    }

    /// Mark the cursor as the start of a new token.
    pub fn start_token(&mut self) {
        self.mark = Mark {
            index: self.index,
            line: self.line,
            column: self.column,
        };
    }

    /// Close the open token at the cursor and tag it with `kind`.
    pub fn extract_token(&self, kind: Leaf) -> Token<'src> {
        let lexeme = self.source.get(self.mark.index..self.index).unwrap_or_default();
        Token::new(lexeme, kind, self.mark.line, self.mark.column)
    }

    /// A copy of this state rewound to the open token's start.
    ///
    /// Diagnostics use it to point at the token that failed rather than wherever the rule gave up.
    pub fn token_start(&self) -> Self {
        Self {
            index: self.mark.index,
            line: self.mark.line,
            column: self.mark.column,
            ..self.clone()
        }
    }

    /// Text consumed since [`LexState::start_token`].
    pub fn lexeme(&self) -> &'src str {
        self.source.get(self.mark.index..self.index).unwrap_or_default()
    }

    /// Zero-length token at the cursor, used to signal end of source.
    pub fn eos_token(&self) -> Token<'src> {
        let lexeme = self.source.get(self.index..self.index).unwrap_or_default();
        Token::new(lexeme, Leaf::Eos, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_char_tracks_lines_and_columns() {
        let mut state = LexState::new("ab\nc");
        assert_eq!(state.read_char(), Some('a'));
        assert_eq!(state.read_char(), Some('b'));
        assert_eq!((state.line(), state.column()), (0, 2));
        assert_eq!(state.read_char(), Some('\n'));
        assert_eq!((state.line(), state.column()), (1, 0));
        assert_eq!(state.read_char(), Some('c'));
        assert!(state.end_of_source());
        assert_eq!(state.read_char(), None);
    }

    #[test]
    fn peeks_do_not_move_the_cursor() {
        let mut state = LexState::new("xyz");
        state.read_char();
        assert_eq!(state.curr_char(), Some('y'));
        assert_eq!(state.next_char(), Some('z'));
        assert_eq!(state.index(), 1);
        assert_eq!(state.remaining_source(), "yz");
    }

    #[test]
    fn extract_borrows_from_source() {
        let source = String::from("let value");
        let mut state = LexState::new(&source);
        state.eat_while(|c| c != ' ');
        state.eat(' ');
        state.start_token();
        state.eat_while(char::is_alphanumeric);
        let token = state.extract_token(Leaf::Identifier);
        assert_eq!(token, Token::new("value", Leaf::Identifier, 0, 4));
        assert!(std::ptr::eq(token.lexeme.as_ptr(), source[4..].as_ptr()));
    }

    #[test]
    fn restarting_discards_previous_mark() {
        let mut state = LexState::new("abc");
        state.start_token();
        state.read_char();
        state.start_token();
        state.read_char();
        assert_eq!(state.lexeme(), "b");
        assert_eq!(state.extract_token(Leaf::Identifier).column, 1);
    }

    #[test]
    fn token_start_rewinds_to_mark() {
        let mut state = LexState::new("x\n 0b;");
        state.read_char();
        state.read_char();
        state.read_char();
        state.start_token();
        state.eat_while(|c| c != ';');
        let start = state.token_start();
        assert_eq!((start.index(), start.line(), start.column()), (3, 1, 1));
        assert_eq!(start.curr_char(), Some('0'));
        assert_eq!(state.index(), 5);
    }

    #[test]
    fn multibyte_characters_advance_one_column() {
        let mut state = LexState::new("πx");
        state.read_char();
        assert_eq!(state.index(), 2);
        assert_eq!(state.column(), 1);
        assert_eq!(state.curr_char(), Some('x'));
    }

    #[test]
    fn eos_token_is_empty_and_positioned() {
        let mut state = LexState::new("a\n");
        state.read_char();
        state.read_char();
        let eos = state.eos_token();
        assert_eq!(eos.kind, Leaf::Eos);
        assert_eq!(eos.lexeme, "");
        assert_eq!((eos.line, eos.column), (1, 0));
    }

    #[test]
    fn state_is_relocatable() {
        fn assert_send<T: Send>() {}
        assert_send::<LexState<'static>>();

        let mut state = LexState::new("ab");
        let checkpoint = state.clone();
        state.read_char();
        assert_ne!(state, checkpoint);
        assert_eq!(checkpoint.curr_char(), Some('a'));
    }
}
