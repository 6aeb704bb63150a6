use crate::frontend::cursor::TokenSource;
use crate::frontend::token::{Token, TokenType};
use crate::utils::config::scanner::{lookup_reserved, COMMENT_CLOSE, COMMENT_OPEN, MAX_TOKEN_LEN};
use crate::LineNumber;
use std::{iter::Peekable, str::Chars};

/// On-demand scanner for TINY source text.
///
/// Malformed input never stops the scanner: characters that start no token
/// come back as [`TokenType::Error`] tokens and are left for the parser to
/// report. Once the input is exhausted every call yields end-of-file.
pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    state: LineNumber,
}

impl<'a> Scanner<'a> {
    pub fn new(file_content: &'a str) -> Self {
        Self {
            chars: file_content.chars().peekable(),
            state: LineNumber::default(),
        }
    }

    /// Line the scanner is currently positioned on.
    pub fn line(&self) -> usize {
        self.state.line
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.chars.peek() {
                Some(&COMMENT_OPEN) => self.scan_comment(),
                Some(&ch) if ch.is_whitespace() => self.scan_whitespace(),
                _ => break,
            }
        }
    }

    // An unterminated comment simply runs to the end of the input.
    fn scan_comment(&mut self) {
        self.chars.next(); // Consume '{'
        while let Some(ch) = self.chars.next() {
            if ch == '\n' {
                self.state.line += 1;
            } else if ch == COMMENT_CLOSE {
                return;
            }
        }
    }

    fn scan_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() {
                if ch == '\n' {
                    self.state.line += 1;
                }
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn scan_token(&mut self) -> Token {
        let line = self.state.line;
        match self.chars.peek() {
            None => Token::end_file(line),
            Some(&ch) if ch.is_ascii_alphabetic() => self.scan_identifier(line),
            Some(&ch) if ch.is_ascii_digit() => self.scan_number(line),
            Some(&':') => self.scan_assignment(line),
            Some(&ch) => self.scan_single_char_token(ch, line),
        }
    }

    fn scan_while(&mut self, accept: fn(&char) -> bool) -> String {
        let mut lexeme = String::new();
        while let Some(ch) = self.chars.next_if(accept) {
            if lexeme.len() < MAX_TOKEN_LEN {
                lexeme.push(ch);
            }
        }
        lexeme
    }

    fn scan_identifier(&mut self, line: usize) -> Token {
        let identifier = self.scan_while(char::is_ascii_alphabetic);
        let kind = lookup_reserved(&identifier).unwrap_or(TokenType::Id);
        Token::new(kind, identifier, line)
    }

    fn scan_number(&mut self, line: usize) -> Token {
        let number = self.scan_while(char::is_ascii_digit);
        Token::new(TokenType::Num, number, line)
    }

    fn scan_assignment(&mut self, line: usize) -> Token {
        self.chars.next(); // Consume ':'
        match self.chars.next_if_eq(&'=') {
            Some(_) => Token::new(TokenType::Assign, ":=", line),
            None => Token::new(TokenType::Error, ":", line),
        }
    }

    fn scan_single_char_token(&mut self, ch: char, line: usize) -> Token {
        self.chars.next(); // Consume the character
        let kind = match ch {
            '=' => TokenType::Eq,
            '<' => TokenType::Lt,
            '+' => TokenType::Plus,
            '-' => TokenType::Minus,
            '*' => TokenType::Times,
            '/' => TokenType::Over,
            '(' => TokenType::LParen,
            ')' => TokenType::RParen,
            ';' => TokenType::Semi,
            _ => TokenType::Error,
        };
        Token::new(kind, ch.to_string(), line)
    }
}

impl TokenSource for Scanner<'_> {
    fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        let token = self.scan_token();
        tracing::trace!(line = token.line, token = %token, "scanned");
        token
    }
}

// Convenience function returning every token before end-of-file
#[tracing::instrument(skip_all, fields(source_len = file_content.len()))]
pub fn scan(file_content: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(file_content);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        if token.is(TokenType::EndFile) {
            break;
        }
        tokens.push(token);
    }
    tokens
}
