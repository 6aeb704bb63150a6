use std::fmt;

/// Token kinds of the TINY language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // book-keeping
    EndFile,
    Error,
    // reserved words
    If,
    Then,
    Else,
    End,
    Repeat,
    Until,
    Read,
    Write,
    // multicharacter tokens
    Id,
    Num,
    // special symbols
    Assign,
    Eq,
    Lt,
    Plus,
    Minus,
    Times,
    Over,
    LParen,
    RParen,
    Semi,
}

impl TokenType {
    pub const ALL: [TokenType; 22] = [
        TokenType::EndFile,
        TokenType::Error,
        TokenType::If,
        TokenType::Then,
        TokenType::Else,
        TokenType::End,
        TokenType::Repeat,
        TokenType::Until,
        TokenType::Read,
        TokenType::Write,
        TokenType::Id,
        TokenType::Num,
        TokenType::Assign,
        TokenType::Eq,
        TokenType::Lt,
        TokenType::Plus,
        TokenType::Minus,
        TokenType::Times,
        TokenType::Over,
        TokenType::LParen,
        TokenType::RParen,
        TokenType::Semi,
    ];

    pub fn is_reserved_word(self) -> bool {
        matches!(
            self,
            TokenType::If
                | TokenType::Then
                | TokenType::Else
                | TokenType::End
                | TokenType::Repeat
                | TokenType::Until
                | TokenType::Read
                | TokenType::Write
        )
    }

    pub fn is_relational(self) -> bool {
        matches!(self, TokenType::Lt | TokenType::Eq)
    }

    pub fn is_additive(self) -> bool {
        matches!(self, TokenType::Plus | TokenType::Minus)
    }

    pub fn is_multiplicative(self) -> bool {
        matches!(self, TokenType::Times | TokenType::Over)
    }

    /// Source spelling of keywords and symbols, `None` for the other kinds.
    pub fn spelling(self) -> Option<&'static str> {
        let text = match self {
            TokenType::If => "if",
            TokenType::Then => "then",
            TokenType::Else => "else",
            TokenType::End => "end",
            TokenType::Repeat => "repeat",
            TokenType::Until => "until",
            TokenType::Read => "read",
            TokenType::Write => "write",
            TokenType::Assign => ":=",
            TokenType::Eq => "=",
            TokenType::Lt => "<",
            TokenType::Plus => "+",
            TokenType::Minus => "-",
            TokenType::Times => "*",
            TokenType::Over => "/",
            TokenType::LParen => "(",
            TokenType::RParen => ")",
            TokenType::Semi => ";",
            TokenType::EndFile | TokenType::Error | TokenType::Id | TokenType::Num => return None,
        };
        Some(text)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spelling() {
            Some(text) => write!(f, "{}", text),
            None => write!(f, "{:?}", self),
        }
    }
}

/// A scanned token: its kind, the lexeme it was built from and the line it
/// started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenType, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    /// Token for a keyword or symbol, spelled the way the scanner would spell it.
    pub fn symbol(kind: TokenType, line: usize) -> Self {
        Self::new(kind, kind.spelling().unwrap_or_default(), line)
    }

    pub fn end_file(line: usize) -> Self {
        Self::new(TokenType::EndFile, "", line)
    }

    pub fn is(&self, kind: TokenType) -> bool {
        self.kind == kind
    }
}

/// Listing form of a token, e.g. `reserved word: if`, `NUM, val= 12`,
/// `ID, name= x`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            kind if kind.is_reserved_word() => write!(f, "reserved word: {}", kind),
            TokenType::EndFile => write!(f, "EOF"),
            TokenType::Num => write!(f, "NUM, val= {}", self.lexeme),
            TokenType::Id => write!(f, "ID, name= {}", self.lexeme),
            TokenType::Error => write!(f, "ERROR: {}", self.lexeme),
            kind => write!(f, "{}", kind),
        }
    }
}
