use crate::ast::node::{ExpKind, ExpNode, NodeRef, StmtKind, StmtNode};
use crate::frontend::token::TokenType;
use crate::utils::config::listing::INDENT_WIDTH;
use std::fmt::{self, Write};

/// Indented tree listing, one node per line:
///
/// ```text
/// If
///   Op: <
///     Id: x
///     Const: 1
///   Write
///     Id: x
/// ```
pub fn listing(tree: Option<&StmtNode>) -> String {
    let mut out = String::new();
    if let Some(root) = tree {
        // Writing into a String cannot fail
        let _ = write_listing(&mut out, root.as_node(), 0);
    }
    out
}

// Pre-order walk; the sibling is pushed below the children so it is listed
// after the whole subtree.
fn write_listing(out: &mut String, node: NodeRef<'_>, depth: usize) -> fmt::Result {
    let mut pending = vec![(node, depth)];
    while let Some((node, depth)) = pending.pop() {
        writeln!(out, "{:indent$}{}", "", node.label(), indent = depth * INDENT_WIDTH)?;
        if let Some(sibling) = node.sibling() {
            pending.push((sibling, depth));
        }
        for child in node.children().into_iter().rev().flatten() {
            pending.push((child, depth + 1));
        }
    }
    Ok(())
}

/// Renders a tree back into TINY source text.
///
/// Operator operands that are themselves operators are parenthesised, so
/// re-parsing the text rebuilds the same tree. Absent children are skipped.
pub fn to_source(tree: Option<&StmtNode>) -> String {
    let mut out = String::new();
    if let Some(root) = tree {
        let _ = write_sequence(&mut out, root, 0);
    }
    out
}

fn write_sequence(out: &mut String, first: &StmtNode, depth: usize) -> fmt::Result {
    for stmt in first.iter() {
        write!(out, "{:indent$}", "", indent = depth * INDENT_WIDTH)?;
        write_statement(out, stmt, depth)?;
        if stmt.sibling.is_some() {
            out.push(';');
        }
        out.push('\n');
    }
    Ok(())
}

fn write_statement(out: &mut String, stmt: &StmtNode, depth: usize) -> fmt::Result {
    let pad = depth * INDENT_WIDTH;
    match &stmt.kind {
        StmtKind::If {
            test,
            then_part,
            else_part,
        } => {
            out.push_str("if ");
            write_optional_exp(out, test.as_deref())?;
            out.push_str(" then\n");
            if let Some(then_part) = then_part {
                write_sequence(out, then_part, depth + 1)?;
            }
            if let Some(else_part) = else_part {
                writeln!(out, "{:pad$}else", "")?;
                write_sequence(out, else_part, depth + 1)?;
            }
            write!(out, "{:pad$}end", "")
        }
        StmtKind::Repeat { body, test } => {
            out.push_str("repeat\n");
            if let Some(body) = body {
                write_sequence(out, body, depth + 1)?;
            }
            write!(out, "{:pad$}until ", "")?;
            write_optional_exp(out, test.as_deref())
        }
        StmtKind::Assign { name, value } => {
            write!(out, "{} := ", name)?;
            write_optional_exp(out, value.as_deref())
        }
        StmtKind::Read { name } => match name {
            Some(name) => write!(out, "read {}", name),
            None => write!(out, "read"),
        },
        StmtKind::Write { value } => {
            out.push_str("write ");
            write_optional_exp(out, value.as_deref())
        }
    }
}

fn write_optional_exp(out: &mut String, exp: Option<&ExpNode>) -> fmt::Result {
    match exp {
        Some(exp) => write_exp(out, exp),
        None => Ok(()),
    }
}

enum Piece<'a> {
    Exp(&'a ExpNode),
    Op(TokenType),
    Text(&'static str),
}

fn write_exp(out: &mut String, exp: &ExpNode) -> fmt::Result {
    let mut pending = vec![Piece::Exp(exp)];
    while let Some(piece) = pending.pop() {
        match piece {
            Piece::Exp(exp) => match &exp.kind {
                ExpKind::Op { op, lhs, rhs } => {
                    push_operand(&mut pending, rhs.as_deref());
                    pending.push(Piece::Op(*op));
                    push_operand(&mut pending, lhs.as_deref());
                }
                ExpKind::Const(value) => write!(out, "{}", value)?,
                ExpKind::Id(name) => out.push_str(name),
            },
            Piece::Op(op) => write!(out, " {} ", op)?,
            Piece::Text(text) => out.push_str(text),
        }
    }
    Ok(())
}

// Pieces are pushed in reverse so they pop in reading order.
fn push_operand<'a>(pending: &mut Vec<Piece<'a>>, operand: Option<&'a ExpNode>) {
    match operand {
        Some(exp) if matches!(exp.kind, ExpKind::Op { .. }) => {
            pending.push(Piece::Text(")"));
            pending.push(Piece::Exp(exp));
            pending.push(Piece::Text("("));
        }
        Some(exp) => pending.push(Piece::Exp(exp)),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(value: i64) -> Option<Box<ExpNode>> {
        Some(Box::new(ExpNode::new(ExpKind::Const(value), 1)))
    }

    fn op(op: TokenType, lhs: Option<Box<ExpNode>>, rhs: Option<Box<ExpNode>>) -> Option<Box<ExpNode>> {
        Some(Box::new(ExpNode::new(ExpKind::Op { op, lhs, rhs }, 1)))
    }

    #[test]
    fn test_nested_operands_are_parenthesised() {
        let value = op(
            TokenType::Minus,
            constant(8),
            op(TokenType::Minus, constant(3), constant(2)),
        );
        let stmt = StmtNode::new(
            StmtKind::Assign {
                name: "x".to_string(),
                value,
            },
            1,
        );
        assert_eq!(to_source(Some(&stmt)), "x := 8 - (3 - 2)\n");
    }

    #[test]
    fn test_long_sum_renders_without_recursion() {
        let source = format!("write 1{}", "+1".repeat(200_000));
        let tree = crate::parse_source(&source);
        let text = to_source(tree.root());
        assert!(text.starts_with(&format!("write {}1 + 1)", "(".repeat(199_999))));
        assert!(text.ends_with(") + 1\n"));
    }

    #[test]
    fn test_deep_listing_indents_each_level() {
        let source = format!("write 1{}", "+1".repeat(3_000));
        let tree = crate::parse_source(&source);
        let text = listing(tree.root());
        assert_eq!(text.lines().count(), 1 + 3_000 + 3_001);
        let deepest = format!("{:indent$}Const: 1", "", indent = 3_001 * INDENT_WIDTH);
        assert!(text.lines().any(|line| line == deepest));
        assert_eq!(text.lines().last(), Some("    Const: 1"));
    }

    #[test]
    fn test_listing_of_empty_tree_is_empty() {
        assert_eq!(listing(None), "");
        assert_eq!(to_source(None), "");
    }
}
