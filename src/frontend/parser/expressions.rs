use super::recovery::RecoveryContext;
use super::Parser;
use crate::ast::{Child, ExpKind, ExpNode};
use crate::frontend::cursor::TokenSource;
use crate::frontend::diagnostics::DiagnosticSink;
use crate::frontend::token::TokenType;
use crate::utils::config::diagnostics::NUMBER_OUT_OF_RANGE;

impl<S: TokenSource, D: DiagnosticSink> Parser<S, D> {
    /// exp = simple-exp [ ( "<" | "=" ) simple-exp ]
    ///
    /// Comparisons do not chain: after one relational operator the right
    /// operand is a simple-exp, and a second `<` is left for the caller.
    pub(super) fn exp(&mut self) -> Child<ExpNode> {
        let lhs = self.simple_exp();
        if self.cursor.kind().is_relational() {
            return self.operator(lhs, Self::simple_exp);
        }
        lhs
    }

    /// simple-exp = term { ( "+" | "-" ) term }
    fn simple_exp(&mut self) -> Child<ExpNode> {
        let mut lhs = self.term();
        while self.cursor.kind().is_additive() {
            lhs = self.operator(lhs, Self::term);
        }
        lhs
    }

    /// term = factor { ( "*" | "/" ) factor }
    fn term(&mut self) -> Child<ExpNode> {
        let mut lhs = self.factor();
        while self.cursor.kind().is_multiplicative() {
            lhs = self.operator(lhs, Self::factor);
        }
        lhs
    }

    /**
     * factor = "(" exp ")" | number | identifier
     *
     * Anything else is reported and skipped, and the factor is absent.
     */
    fn factor(&mut self) -> Child<ExpNode> {
        match self.cursor.kind() {
            TokenType::Num => self.constant(),
            TokenType::Id => {
                let line = self.cursor.line();
                let name = self.identifier_name().unwrap_or_default();
                self.match_token(TokenType::Id);
                Some(Box::new(ExpNode::new(ExpKind::Id(name), line)))
            }
            TokenType::LParen => {
                self.match_token(TokenType::LParen);
                let expr = self.exp();
                self.match_token(TokenType::RParen);
                expr
            }
            _ => {
                self.unexpected_token(RecoveryContext::Factor);
                None
            }
        }
    }

    // Builds `lhs <op> rhs` with the lookahead as operator. The operator is
    // always consumed, so operator loops make progress.
    fn operator(&mut self, lhs: Child<ExpNode>, operand: fn(&mut Self) -> Child<ExpNode>) -> Child<ExpNode> {
        let line = self.cursor.line();
        let op = self.cursor.kind();
        self.match_token(op);
        let rhs = operand(self);
        Some(Box::new(ExpNode::new(ExpKind::Op { op, lhs, rhs }, line)))
    }

    fn constant(&mut self) -> Child<ExpNode> {
        let line = self.cursor.line();
        let parsed = self.cursor.current().lexeme.parse::<i64>();
        match parsed {
            Ok(value) => {
                self.match_token(TokenType::Num);
                Some(Box::new(ExpNode::new(ExpKind::Const(value), line)))
            }
            Err(_) => {
                let message = format!("{}{}", NUMBER_OUT_OF_RANGE, self.cursor.current());
                self.syntax_error(message);
                self.cursor.advance();
                None
            }
        }
    }
}
