use tinyc::frontend::cursor::TokenSource;
use tinyc::frontend::lexer::{scan, Scanner};
use tinyc::frontend::token::{Token, TokenType};
use tinyc::utils::config::scanner::MAX_TOKEN_LEN;

fn tok(kind: TokenType, lexeme: &str, line: usize) -> Token {
    Token::new(kind, lexeme, line)
}

#[test]
fn test_assignment_and_write() {
    let tokens = scan("x:=1;write x");
    assert_eq!(
        tokens,
        vec![
            tok(TokenType::Id, "x", 1),
            tok(TokenType::Assign, ":=", 1),
            tok(TokenType::Num, "1", 1),
            tok(TokenType::Semi, ";", 1),
            tok(TokenType::Write, "write", 1),
            tok(TokenType::Id, "x", 1),
        ]
    );
}

#[test]
fn test_reserved_words() {
    let tokens = scan("if then else end repeat until read write");
    let kinds: Vec<TokenType> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenType::If,
            TokenType::Then,
            TokenType::Else,
            TokenType::End,
            TokenType::Repeat,
            TokenType::Until,
            TokenType::Read,
            TokenType::Write,
        ]
    );
}

#[test]
fn test_keywords_are_case_sensitive() {
    let tokens = scan("IF Then");
    assert_eq!(tokens, vec![tok(TokenType::Id, "IF", 1), tok(TokenType::Id, "Then", 1)]);
}

#[test]
fn test_identifiers_are_letters_only() {
    let tokens = scan("abc123");
    assert_eq!(tokens, vec![tok(TokenType::Id, "abc", 1), tok(TokenType::Num, "123", 1)]);
}

#[test]
fn test_special_symbols() {
    let tokens = scan("= < + - * / ( ) ;");
    let kinds: Vec<TokenType> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenType::Eq,
            TokenType::Lt,
            TokenType::Plus,
            TokenType::Minus,
            TokenType::Times,
            TokenType::Over,
            TokenType::LParen,
            TokenType::RParen,
            TokenType::Semi,
        ]
    );
}

#[test]
fn test_comments_and_line_numbers() {
    let source = "{ a comment\n spanning lines } read x;\n\nwrite x";
    let tokens = scan(source);
    assert_eq!(
        tokens,
        vec![
            tok(TokenType::Read, "read", 2),
            tok(TokenType::Id, "x", 2),
            tok(TokenType::Semi, ";", 2),
            tok(TokenType::Write, "write", 4),
            tok(TokenType::Id, "x", 4),
        ]
    );
}

#[test]
fn test_unterminated_comment_ends_input() {
    let tokens = scan("read x { never closed\n write y");
    assert_eq!(tokens, vec![tok(TokenType::Read, "read", 1), tok(TokenType::Id, "x", 1)]);
}

#[test]
fn test_lone_colon_is_error_token() {
    let tokens = scan("x : 1");
    assert_eq!(
        tokens,
        vec![
            tok(TokenType::Id, "x", 1),
            tok(TokenType::Error, ":", 1),
            tok(TokenType::Num, "1", 1),
        ]
    );
}

#[test]
fn test_unknown_character_is_error_token() {
    let tokens = scan("x := @ 2");
    assert_eq!(tokens[2], tok(TokenType::Error, "@", 1));
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_long_lexemes_are_truncated() {
    let name = "a".repeat(MAX_TOKEN_LEN + 10);
    let tokens = scan(&name);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].lexeme.len(), MAX_TOKEN_LEN);
}

#[test]
fn test_scanner_keeps_returning_end_file() {
    let mut scanner = Scanner::new("write 1\n");
    assert_eq!(scanner.next_token().kind, TokenType::Write);
    assert_eq!(scanner.next_token().kind, TokenType::Num);
    for _ in 0..3 {
        let token = scanner.next_token();
        assert_eq!(token.kind, TokenType::EndFile);
        assert_eq!(token.line, 2);
    }
    assert_eq!(scanner.line(), 2);
}

#[test]
fn test_token_listing_form() {
    assert_eq!(tok(TokenType::If, "if", 1).to_string(), "reserved word: if");
    assert_eq!(tok(TokenType::Assign, ":=", 1).to_string(), ":=");
    assert_eq!(tok(TokenType::Num, "12", 1).to_string(), "NUM, val= 12");
    assert_eq!(tok(TokenType::Id, "x", 1).to_string(), "ID, name= x");
    assert_eq!(tok(TokenType::Error, "@", 1).to_string(), "ERROR: @");
    assert_eq!(Token::end_file(1).to_string(), "EOF");
    assert_eq!(Token::symbol(TokenType::RParen, 1).to_string(), ")");
}
