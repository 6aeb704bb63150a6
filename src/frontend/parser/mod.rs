/*
*                    tinyc -- TINY language front end.
*
* program       = stmt-sequence ;
* stmt-sequence = statement { ";" statement } ;
* statement     = if-stmt | repeat-stmt | assign-stmt | read-stmt | write-stmt ;
* if-stmt       = "if" exp "then" stmt-sequence [ "else" stmt-sequence ] "end" ;
* repeat-stmt   = "repeat" stmt-sequence "until" exp ;
* assign-stmt   = identifier ":=" exp ;
* read-stmt     = "read" identifier ;
* write-stmt    = "write" exp ;
* exp           = simple-exp [ ( "<" | "=" ) simple-exp ] ;
* simple-exp    = term { ( "+" | "-" ) term } ;
* term          = factor { ( "*" | "/" ) factor } ;
* factor        = "(" exp ")" | number | identifier ;
*/

mod expressions;
pub mod recovery;
mod statements;

use crate::ast::{Child, StmtNode};
use crate::frontend::cursor::{TokenCursor, TokenSource, TokenStream};
use crate::frontend::diagnostics::{DiagnosticSink, Diagnostics};
use crate::frontend::lexer::Scanner;
use crate::frontend::token::{Token, TokenType};
use crate::utils::config::diagnostics::{CODE_ENDS_BEFORE_FILE, UNEXPECTED_TOKEN};
use recovery::{policy_for, RecoveryContext, RecoveryPolicy};

/// LL(1) recursive-descent parser for TINY.
///
/// Syntax errors never abort the parse. Each one is reported to the sink and
/// raises the error flag, and parsing continues according to
/// [`recovery::policy_for`].
pub struct Parser<S, D> {
    cursor: TokenCursor<S>,
    sink: D,
    error: bool,
}

/// Outcome of one parse.
#[derive(Debug)]
pub struct Parsed {
    /// Head of the top-level statement sequence, possibly partial.
    pub tree: Child<StmtNode>,
    /// Set when at least one syntax error was reported.
    pub error: bool,
    /// Tokens consumed, end-of-file excluded.
    pub token_count: usize,
}

impl<S: TokenSource, D: DiagnosticSink> Parser<S, D> {
    /// Creates a parser and pulls the first lookahead token from `source`.
    pub fn new(source: S, sink: D) -> Self {
        Self {
            cursor: TokenCursor::new(source),
            sink,
            error: false,
        }
    }

    /// Parses the whole token stream as one statement sequence.
    ///
    /// A tree is returned whether or not errors occurred; `Parsed::error` is
    /// the authoritative success signal. Tokens left over after the sequence
    /// are reported once and drained so the source ends fully consumed.
    #[tracing::instrument(skip_all)]
    pub fn parse(mut self) -> Parsed {
        let tree = self.stmt_sequence();
        if !self.cursor.at(TokenType::EndFile) {
            self.syntax_error(CODE_ENDS_BEFORE_FILE.to_string());
            while !self.cursor.at(TokenType::EndFile) {
                self.cursor.advance();
            }
        }
        tracing::debug!(error = self.error, tokens = self.cursor.consumed(), "parse finished");
        Parsed {
            tree,
            error: self.error,
            token_count: self.cursor.consumed(),
        }
    }

    /// Consumes the lookahead if it has kind `expected`; otherwise reports it
    /// and leaves it in place.
    fn match_token(&mut self, expected: TokenType) {
        if self.cursor.at(expected) {
            self.cursor.advance();
        } else {
            self.unexpected_token(RecoveryContext::Match);
        }
    }

    fn unexpected_token(&mut self, context: RecoveryContext) {
        let message = format!("{}{}", UNEXPECTED_TOKEN, self.cursor.current());
        self.syntax_error(message);
        if policy_for(context) == RecoveryPolicy::ReportAndDiscard {
            tracing::debug!(?context, token = %self.cursor.current(), "discarding token");
            self.cursor.advance();
        }
    }

    fn syntax_error(&mut self, message: String) {
        let line = self.cursor.line();
        tracing::debug!(line, %message, "syntax error");
        self.error = true;
        self.sink.report(line, message);
    }

    /// Name carried by the lookahead if it is an identifier.
    fn identifier_name(&self) -> Option<String> {
        let token = self.cursor.current();
        token.is(TokenType::Id).then(|| token.lexeme.clone())
    }
}

/// A parsed program together with everything reported while parsing it.
#[derive(Debug)]
pub struct SyntaxTree {
    pub root: Child<StmtNode>,
    pub diagnostics: Diagnostics,
    pub token_count: usize,
    error: bool,
}

impl SyntaxTree {
    pub fn has_errors(&self) -> bool {
        self.error
    }

    pub fn root(&self) -> Option<&StmtNode> {
        self.root.as_deref()
    }
}

fn parse_with<S: TokenSource>(source: S) -> SyntaxTree {
    let mut diagnostics = Diagnostics::new();
    let parsed = Parser::new(source, &mut diagnostics).parse();
    SyntaxTree {
        root: parsed.tree,
        diagnostics,
        token_count: parsed.token_count,
        error: parsed.error,
    }
}

/// Scans and parses TINY source text.
pub fn parse_source(file_content: &str) -> SyntaxTree {
    parse_with(Scanner::new(file_content))
}

/// Parses an already scanned token vector.
pub fn parse_tokens(tokens: Vec<Token>) -> SyntaxTree {
    parse_with(TokenStream::new(tokens))
}
