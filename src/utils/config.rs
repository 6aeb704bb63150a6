// Scanner constants
pub mod scanner {
    use crate::frontend::token::TokenType;

    // Longer lexemes are truncated to this many characters
    pub const MAX_TOKEN_LEN: usize = 40;
    pub const FIRST_LINE: usize = 1;

    pub const COMMENT_OPEN: char = '{';
    pub const COMMENT_CLOSE: char = '}';

    pub const RESERVED_WORDS: &[(&str, TokenType)] = &[
        ("if", TokenType::If),
        ("then", TokenType::Then),
        ("else", TokenType::Else),
        ("end", TokenType::End),
        ("repeat", TokenType::Repeat),
        ("until", TokenType::Until),
        ("read", TokenType::Read),
        ("write", TokenType::Write),
    ];

    pub fn lookup_reserved(lexeme: &str) -> Option<TokenType> {
        RESERVED_WORDS
            .iter()
            .find(|(word, _)| *word == lexeme)
            .map(|(_, kind)| *kind)
    }
}

// Parser constants
pub mod parser {
    use crate::frontend::token::TokenType;

    // Statement nodes use at most condition / then / else
    pub const MAX_CHILDREN: usize = 3;

    pub const SEQUENCE_TERMINATORS: &[TokenType] = &[
        TokenType::EndFile,
        TokenType::End,
        TokenType::Else,
        TokenType::Until,
    ];

    pub fn ends_sequence(kind: TokenType) -> bool {
        SEQUENCE_TERMINATORS.contains(&kind)
    }
}

// Diagnostic messages
pub mod diagnostics {
    pub const UNEXPECTED_TOKEN: &str = "unexpected token -> ";
    pub const CODE_ENDS_BEFORE_FILE: &str = "Code ends before file";
    pub const NUMBER_OUT_OF_RANGE: &str = "number out of range -> ";
}

// Listing layout
pub mod listing {
    pub const INDENT_WIDTH: usize = 2;
}
