//! Owned syntax tree consumed by the route resolver.
//!
//! The tree is lowered from the tree-sitter Go grammar (see [`go`]) into a
//! closed set of node kinds. Only the shapes the resolver dispatches on get a
//! dedicated variant; every other construct becomes [`NodeKind::Other`] and
//! keeps its children so nested blocks stay reachable.

pub mod go;

pub use go::GoParser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// 1-based source line of the first byte of the node.
    pub line: usize,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File {
        decls: Vec<SyntaxNode>,
    },
    FunctionDeclaration {
        name: String,
        body: Option<Box<SyntaxNode>>,
    },
    Block {
        stmts: Vec<SyntaxNode>,
    },
    If {
        init: Option<Box<SyntaxNode>>,
        cond: Option<Box<SyntaxNode>>,
        body: Box<SyntaxNode>,
        alternative: Option<Box<SyntaxNode>>,
    },
    For {
        init: Option<Box<SyntaxNode>>,
        cond: Option<Box<SyntaxNode>>,
        post: Option<Box<SyntaxNode>>,
        body: Box<SyntaxNode>,
    },
    RangeLoop {
        key: Option<Box<SyntaxNode>>,
        value: Option<Box<SyntaxNode>>,
        source: Option<Box<SyntaxNode>>,
        body: Box<SyntaxNode>,
    },
    Assignment {
        lhs: Vec<SyntaxNode>,
        rhs: Vec<SyntaxNode>,
    },
    ExpressionStatement {
        expr: Box<SyntaxNode>,
    },
    Call {
        function: Box<SyntaxNode>,
        args: Vec<SyntaxNode>,
    },
    Selector {
        operand: Box<SyntaxNode>,
        field: String,
    },
    Identifier(String),
    /// Literal text exactly as written, quotes included.
    StringLiteral(String),
    Other {
        children: Vec<SyntaxNode>,
    },
}

impl SyntaxNode {
    pub fn new(line: usize, kind: NodeKind) -> Self {
        Self { line, kind }
    }

    pub fn identifier(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Identifier(name) => Some(name),
            _ => None,
        }
    }

    pub fn string_literal(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::StringLiteral(raw) => Some(raw),
            _ => None,
        }
    }
}
