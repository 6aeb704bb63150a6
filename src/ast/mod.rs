// Syntax tree for TINY programs and its text renderings.

mod node;
mod printer;

pub use node::{Child, ExpKind, ExpNode, NodeRef, Siblings, StmtKind, StmtNode};
pub use printer::{listing, to_source};
