use crate::frontend::token::TokenType;
use crate::utils::config::parser::MAX_CHILDREN;

/// An optional, exclusively owned subtree.
pub type Child<T> = Option<Box<T>>;

/// A statement node. Consecutive statements of one sequence are chained
/// through `sibling` in parse order.
///
/// `Clone`, `PartialEq` and `Drop` walk the sibling chain in a loop.
#[derive(Debug)]
pub struct StmtNode {
    pub kind: StmtKind,
    pub line: usize,
    pub sibling: Child<StmtNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StmtKind {
    If {
        test: Child<ExpNode>,
        then_part: Child<StmtNode>,
        else_part: Child<StmtNode>,
    },
    Repeat {
        body: Child<StmtNode>,
        test: Child<ExpNode>,
    },
    Assign {
        name: String,
        value: Child<ExpNode>,
    },
    // `None` only when the identifier after `read` was missing
    Read {
        name: Option<String>,
    },
    Write {
        value: Child<ExpNode>,
    },
}

/// An expression node. Expressions never have siblings.
///
/// Operator loops build left-deep chains, so `Clone` follows the left spine
/// in a loop and `PartialEq` and `Drop` use an explicit work stack.
#[derive(Debug)]
pub struct ExpNode {
    pub kind: ExpKind,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpKind {
    Op {
        op: TokenType,
        lhs: Child<ExpNode>,
        rhs: Child<ExpNode>,
    },
    Const(i64),
    Id(String),
}

impl StmtNode {
    pub fn new(kind: StmtKind, line: usize) -> Self {
        Self {
            kind,
            line,
            sibling: None,
        }
    }

    /// Links `stmts` into a sibling chain and returns its head.
    pub fn chain(stmts: Vec<StmtNode>) -> Child<StmtNode> {
        stmts.into_iter().rev().fold(None, |next, mut stmt| {
            stmt.sibling = next;
            Some(Box::new(stmt))
        })
    }

    /// This statement followed by its siblings.
    pub fn iter(&self) -> Siblings<'_> {
        Siblings { next: Some(self) }
    }

    pub fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Stmt(self)
    }
}

// Long sequences would otherwise be dropped recursively through `sibling`.
impl Drop for StmtNode {
    fn drop(&mut self) {
        let mut next = self.sibling.take();
        while let Some(mut node) = next {
            next = node.sibling.take();
        }
    }
}

impl Clone for StmtNode {
    fn clone(&self) -> Self {
        let mut head = StmtNode::new(self.kind.clone(), self.line);
        head.sibling = self.sibling.as_deref().and_then(|next| {
            StmtNode::chain(
                next.iter()
                    .map(|stmt| StmtNode::new(stmt.kind.clone(), stmt.line))
                    .collect(),
            )
        });
        head
    }
}

impl PartialEq for StmtNode {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self.iter(), other.iter());
        loop {
            match (a.next(), b.next()) {
                (None, None) => return true,
                (Some(x), Some(y)) if x.line == y.line && x.kind == y.kind => {}
                _ => return false,
            }
        }
    }
}

impl Eq for StmtNode {}

impl ExpNode {
    pub fn new(kind: ExpKind, line: usize) -> Self {
        Self { kind, line }
    }

    pub fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Exp(self)
    }

    fn take_operands(&mut self, pending: &mut Vec<Box<ExpNode>>) {
        if let ExpKind::Op { lhs, rhs, .. } = &mut self.kind {
            pending.extend(lhs.take());
            pending.extend(rhs.take());
        }
    }
}

impl Drop for ExpNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_operands(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_operands(&mut pending);
        }
    }
}

impl Clone for ExpNode {
    fn clone(&self) -> Self {
        let mut spine = Vec::new();
        let mut node = self;
        while let ExpKind::Op {
            op,
            lhs: Some(lhs),
            rhs,
        } = &node.kind
        {
            spine.push((node.line, *op, rhs.clone()));
            node = &**lhs;
        }
        let mut copy = ExpNode::new(node.kind.clone(), node.line);
        while let Some((line, op, rhs)) = spine.pop() {
            copy = ExpNode::new(
                ExpKind::Op {
                    op,
                    lhs: Some(Box::new(copy)),
                    rhs,
                },
                line,
            );
        }
        copy
    }
}

impl PartialEq for ExpNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.line != b.line {
                return false;
            }
            match (&a.kind, &b.kind) {
                (
                    ExpKind::Op { op: p, lhs: l1, rhs: r1 },
                    ExpKind::Op { op: q, lhs: l2, rhs: r2 },
                ) => {
                    if p != q {
                        return false;
                    }
                    for (x, y) in [(l1, l2), (r1, r2)] {
                        match (x.as_deref(), y.as_deref()) {
                            (Some(x), Some(y)) => pending.push((x, y)),
                            (None, None) => {}
                            _ => return false,
                        }
                    }
                }
                (ExpKind::Const(x), ExpKind::Const(y)) if x == y => {}
                (ExpKind::Id(x), ExpKind::Id(y)) if x == y => {}
                _ => return false,
            }
        }
        true
    }
}

impl Eq for ExpNode {}

pub struct Siblings<'a> {
    next: Option<&'a StmtNode>,
}

impl<'a> Iterator for Siblings<'a> {
    type Item = &'a StmtNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.sibling.as_deref();
        Some(current)
    }
}

/// Borrowed view over either node category, with positional child slots.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Stmt(&'a StmtNode),
    Exp(&'a ExpNode),
}

impl<'a> NodeRef<'a> {
    pub fn line(self) -> usize {
        match self {
            NodeRef::Stmt(stmt) => stmt.line,
            NodeRef::Exp(exp) => exp.line,
        }
    }

    /// Child slot `index`; `None` when the slot is empty or the kind does not
    /// define it.
    pub fn child(self, index: usize) -> Option<NodeRef<'a>> {
        fn exp(child: &Child<ExpNode>) -> Option<NodeRef<'_>> {
            child.as_deref().map(NodeRef::Exp)
        }
        fn stmt(child: &Child<StmtNode>) -> Option<NodeRef<'_>> {
            child.as_deref().map(NodeRef::Stmt)
        }

        match self {
            NodeRef::Stmt(node) => match (&node.kind, index) {
                (StmtKind::If { test, .. }, 0) => exp(test),
                (StmtKind::If { then_part, .. }, 1) => stmt(then_part),
                (StmtKind::If { else_part, .. }, 2) => stmt(else_part),
                (StmtKind::Repeat { body, .. }, 0) => stmt(body),
                (StmtKind::Repeat { test, .. }, 1) => exp(test),
                (StmtKind::Assign { value, .. }, 0) => exp(value),
                (StmtKind::Write { value }, 0) => exp(value),
                _ => None,
            },
            NodeRef::Exp(node) => match (&node.kind, index) {
                (ExpKind::Op { lhs, .. }, 0) => exp(lhs),
                (ExpKind::Op { rhs, .. }, 1) => exp(rhs),
                _ => None,
            },
        }
    }

    /// All child slots in order, absent ones included.
    pub fn children(self) -> [Option<NodeRef<'a>>; MAX_CHILDREN] {
        std::array::from_fn(|index| self.child(index))
    }

    pub fn sibling(self) -> Option<NodeRef<'a>> {
        match self {
            NodeRef::Stmt(stmt) => stmt.sibling.as_deref().map(NodeRef::Stmt),
            NodeRef::Exp(_) => None,
        }
    }

    /// One-line description used by the tree listing.
    pub fn label(self) -> String {
        match self {
            NodeRef::Stmt(stmt) => match &stmt.kind {
                StmtKind::If { .. } => "If".to_string(),
                StmtKind::Repeat { .. } => "Repeat".to_string(),
                StmtKind::Assign { name, .. } => format!("Assign to: {}", name),
                StmtKind::Read { name } => format!("Read: {}", name.as_deref().unwrap_or("")),
                StmtKind::Write { .. } => "Write".to_string(),
            },
            NodeRef::Exp(exp) => match &exp.kind {
                ExpKind::Op { op, .. } => format!("Op: {}", op),
                ExpKind::Const(value) => format!("Const: {}", value),
                ExpKind::Id(name) => format!("Id: {}", name),
            },
        }
    }

    /// Same kinds, attributes and child/sibling shape; lines are ignored.
    pub fn structurally_eq(self, other: NodeRef<'_>) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if !payload_eq(a, b) {
                return false;
            }
            let links = a.children().into_iter().chain([a.sibling()]);
            let others = b.children().into_iter().chain([b.sibling()]);
            for pair in links.zip(others) {
                match pair {
                    (Some(x), Some(y)) => pending.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }

    /// Nodes in this subtree, siblings included.
    pub fn count(self) -> usize {
        let mut total = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            total += 1;
            pending.extend(node.children().into_iter().flatten());
            pending.extend(node.sibling());
        }
        total
    }
}

fn payload_eq(a: NodeRef<'_>, b: NodeRef<'_>) -> bool {
    match (a, b) {
        (NodeRef::Stmt(a), NodeRef::Stmt(b)) => match (&a.kind, &b.kind) {
            (StmtKind::If { .. }, StmtKind::If { .. })
            | (StmtKind::Repeat { .. }, StmtKind::Repeat { .. })
            | (StmtKind::Write { .. }, StmtKind::Write { .. }) => true,
            (StmtKind::Assign { name: a, .. }, StmtKind::Assign { name: b, .. }) => a == b,
            (StmtKind::Read { name: a }, StmtKind::Read { name: b }) => a == b,
            _ => false,
        },
        (NodeRef::Exp(a), NodeRef::Exp(b)) => match (&a.kind, &b.kind) {
            (ExpKind::Op { op: a, .. }, ExpKind::Op { op: b, .. }) => a == b,
            (ExpKind::Const(a), ExpKind::Const(b)) => a == b,
            (ExpKind::Id(a), ExpKind::Id(b)) => a == b,
            _ => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str, line: usize) -> Child<ExpNode> {
        Some(Box::new(ExpNode::new(ExpKind::Id(name.to_string()), line)))
    }

    fn write(name: &str, line: usize) -> StmtNode {
        StmtNode::new(StmtKind::Write { value: id(name, line) }, line)
    }

    #[test]
    fn test_chain_preserves_order() {
        let head = StmtNode::chain(vec![write("a", 1), write("b", 2), write("c", 3)]).unwrap();
        let lines: Vec<usize> = head.iter().map(|stmt| stmt.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
        assert!(StmtNode::chain(Vec::new()).is_none());
    }

    #[test]
    fn test_undefined_slots_are_absent() {
        let stmt = write("x", 1);
        let node = stmt.as_node();
        assert!(node.child(0).is_some());
        assert!(node.child(1).is_none());
        assert!(node.child(2).is_none());
        assert!(node.child(7).is_none());
        assert!(node.child(0).unwrap().sibling().is_none());
    }

    #[test]
    fn test_structural_equality_ignores_lines() {
        let a = StmtNode::chain(vec![write("x", 1), write("y", 1)]).unwrap();
        let b = StmtNode::chain(vec![write("x", 4), write("y", 9)]).unwrap();
        let c = StmtNode::chain(vec![write("x", 1)]).unwrap();
        assert!(a.as_node().structurally_eq(b.as_node()));
        assert!(!a.as_node().structurally_eq(c.as_node()));
        assert_eq!(a.as_node().count(), 4);
    }

    #[test]
    fn test_dropping_long_sequence() {
        let stmts = (0..200_000).map(|line| write("x", line)).collect();
        let head = StmtNode::chain(stmts);
        assert_eq!(head.as_ref().map(|h| h.iter().count()), Some(200_000));
        drop(head);
    }

    #[test]
    fn test_long_sequence_clone_and_compare() {
        let stmts = (0..200_000).map(|line| write("x", line)).collect();
        let head = StmtNode::chain(stmts).unwrap();
        let copy = head.clone();
        assert_eq!(copy.iter().count(), 200_000);
        assert!(*copy == *head);

        let mut changed = head.clone();
        let last = changed.iter().count() - 1;
        let mut node: &mut StmtNode = &mut changed;
        for _ in 0..last {
            node = node.sibling.as_deref_mut().unwrap();
        }
        node.line = 0;
        assert!(*changed != *head);
    }

    #[test]
    fn test_long_sum_is_stack_safe() {
        let source = format!("write 1{}", "+1".repeat(200_000));
        let first = crate::parse_source(&source);
        let second = crate::parse_source(&source);
        assert!(!first.has_errors());
        let root = first.root().unwrap();
        // write, then 200_001 constants and 200_000 operators
        assert_eq!(root.as_node().count(), 400_002);
        assert!(root.as_node().structurally_eq(second.root().unwrap().as_node()));
        assert!(first.root == second.root);
        let copy = root.clone();
        assert!(copy == *root);
        drop(copy);
        drop(first);
        drop(second);
    }

    #[test]
    fn test_operands_differ() {
        let a = ExpNode::new(
            ExpKind::Op {
                op: TokenType::Plus,
                lhs: id("x", 1),
                rhs: id("y", 1),
            },
            1,
        );
        let mut b = a.clone();
        assert!(a == b);
        if let ExpKind::Op { rhs, .. } = &mut b.kind {
            *rhs = id("z", 1);
        }
        assert!(a != b);
    }
}
