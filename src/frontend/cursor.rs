use crate::frontend::token::{Token, TokenType};
use std::vec;

/// Pull-based supplier of tokens.
///
/// Implementations must eventually return an end-of-file token and keep
/// returning it on every later call.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// A token source backed by an already scanned token vector.
///
/// Once the vector is drained it yields end-of-file tokens stamped with the
/// line of the last real token.
pub struct TokenStream {
    tokens: vec::IntoIter<Token>,
    last_line: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            last_line: 1,
        }
    }

    /// Tokens not yet handed out.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => {
                self.last_line = token.line;
                token
            }
            None => Token::end_file(self.last_line),
        }
    }
}

/// Holds exactly one lookahead token taken from a [`TokenSource`].
pub struct TokenCursor<S> {
    source: S,
    current: Token,
    consumed: usize,
}

impl<S: TokenSource> TokenCursor<S> {
    /// Wraps `source` and pulls the first lookahead token.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        Self {
            source,
            current,
            consumed: 0,
        }
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn kind(&self) -> TokenType {
        self.current.kind
    }

    pub fn line(&self) -> usize {
        self.current.line
    }

    pub fn at(&self, kind: TokenType) -> bool {
        self.current.is(kind)
    }

    /// Replaces the lookahead with the next token from the source.
    pub fn advance(&mut self) {
        if !self.current.is(TokenType::EndFile) {
            self.consumed += 1;
        }
        self.current = self.source.next_token();
    }

    /// Number of non end-of-file tokens advanced past so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(kinds: &[TokenType]) -> TokenStream {
        kinds
            .iter()
            .map(|kind| Token::symbol(*kind, 3))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_cursor_primes_first_token() {
        let cursor = TokenCursor::new(stream(&[TokenType::If, TokenType::Then]));
        assert!(cursor.at(TokenType::If));
        assert_eq!(cursor.consumed(), 0);
    }

    #[test]
    fn test_cursor_advances_in_order() {
        let mut cursor = TokenCursor::new(stream(&[TokenType::If, TokenType::Then]));
        cursor.advance();
        assert_eq!(cursor.kind(), TokenType::Then);
        cursor.advance();
        assert_eq!(cursor.kind(), TokenType::EndFile);
        assert_eq!(cursor.consumed(), 2);
    }

    #[test]
    fn test_exhausted_stream_keeps_returning_end_file() {
        let mut cursor = TokenCursor::new(stream(&[TokenType::Semi]));
        for _ in 0..5 {
            cursor.advance();
        }
        assert!(cursor.at(TokenType::EndFile));
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.consumed(), 1);
        assert_eq!(cursor.into_source().remaining(), 0);
    }
}
