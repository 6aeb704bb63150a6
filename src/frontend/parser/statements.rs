use super::recovery::RecoveryContext;
use super::Parser;
use crate::ast::{Child, StmtKind, StmtNode};
use crate::frontend::cursor::TokenSource;
use crate::frontend::diagnostics::DiagnosticSink;
use crate::frontend::token::TokenType;
use crate::utils::config::parser::ends_sequence;

impl<S: TokenSource, D: DiagnosticSink> Parser<S, D> {
    /// stmt-sequence = statement { ";" statement }
    ///
    /// Statements the recovery dropped are simply left out of the chain, so
    /// the head is the first statement that was actually built.
    pub(super) fn stmt_sequence(&mut self) -> Child<StmtNode> {
        let mut stmts: Vec<StmtNode> = self.statement().into_iter().collect();
        while !ends_sequence(self.cursor.kind()) {
            self.match_token(TokenType::Semi);
            stmts.extend(self.statement());
        }
        StmtNode::chain(stmts)
    }

    fn statement(&mut self) -> Option<StmtNode> {
        match self.cursor.kind() {
            TokenType::If => Some(self.if_stmt()),
            TokenType::Repeat => Some(self.repeat_stmt()),
            TokenType::Id => Some(self.assign_stmt()),
            TokenType::Read => Some(self.read_stmt()),
            TokenType::Write => Some(self.write_stmt()),
            _ => {
                self.unexpected_token(RecoveryContext::Statement);
                None
            }
        }
    }

    // A missing `end` is reported by match_token; the node is still returned.
    fn if_stmt(&mut self) -> StmtNode {
        let line = self.cursor.line();
        self.match_token(TokenType::If);
        let test = self.exp();
        self.match_token(TokenType::Then);
        let then_part = self.stmt_sequence();
        let else_part = if self.cursor.at(TokenType::Else) {
            self.match_token(TokenType::Else);
            self.stmt_sequence()
        } else {
            None
        };
        self.match_token(TokenType::End);
        StmtNode::new(
            StmtKind::If {
                test,
                then_part,
                else_part,
            },
            line,
        )
    }

    fn repeat_stmt(&mut self) -> StmtNode {
        let line = self.cursor.line();
        self.match_token(TokenType::Repeat);
        let body = self.stmt_sequence();
        self.match_token(TokenType::Until);
        let test = self.exp();
        StmtNode::new(StmtKind::Repeat { body, test }, line)
    }

    fn assign_stmt(&mut self) -> StmtNode {
        let line = self.cursor.line();
        let name = self.identifier_name().unwrap_or_default();
        self.match_token(TokenType::Id);
        self.match_token(TokenType::Assign);
        let value = self.exp();
        StmtNode::new(StmtKind::Assign { name, value }, line)
    }

    fn read_stmt(&mut self) -> StmtNode {
        let line = self.cursor.line();
        self.match_token(TokenType::Read);
        let name = self.identifier_name();
        self.match_token(TokenType::Id);
        StmtNode::new(StmtKind::Read { name }, line)
    }

    fn write_stmt(&mut self) -> StmtNode {
        let line = self.cursor.line();
        self.match_token(TokenType::Write);
        let value = self.exp();
        StmtNode::new(StmtKind::Write { value }, line)
    }
}
