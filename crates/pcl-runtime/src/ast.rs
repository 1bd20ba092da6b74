//! Abstract Syntax Tree (AST) definitions
//!
//! The tree is data only; all evaluation semantics live in the interpreter.
//! Every node is owned by a single `Ast` arena and referenced by `NodeId`
//! handles, so child links can never dangle and teardown is one `Vec` drop.
//! Each child id appears in exactly one parent: the arena holds a strict
//! forest with one designated root block.

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// AST schema version, included in JSON dumps
pub const AST_VERSION: u32 = 1;

/// Handle to a node inside an [`Ast`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Arena index of this handle
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Arithmetic binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

/// Unary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryOp {
    /// Logical complement: 0 becomes 1, nonzero becomes 0
    Not,
    /// Arithmetic negation
    Neg,
    /// Identity
    Plus,
}

/// Comparison or boolean operator; always yields 0 or 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
    Xor,
}

/// A single AST node. Statement and expression kinds share one closed enum;
/// the interpreter dispatches with an exhaustive match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// `while (cond) body`
    While { cond: NodeId, body: NodeId },
    /// `if (cond) body` with optional else arm
    If {
        cond: NodeId,
        body: NodeId,
        else_branch: Option<NodeId>,
    },
    /// Else arm; pure delegation to its body
    Else { body: NodeId },
    /// Assignment target. Carries no effect of its own.
    Decl { name: String },
    /// Variable read
    VarRef { name: String },
    /// `target = value`; the value stays on the operand stack so chained
    /// assignments thread it through
    Assign { target: NodeId, value: NodeId },
    /// Integer literal
    IntLiteral { value: i64 },
    /// `print expr;`
    Print { value: NodeId },
    /// Arithmetic operation
    BinOp {
        op: BinaryOp,
        left: NodeId,
        right: NodeId,
    },
    /// Unary operation
    UnOp { op: UnaryOp, operand: NodeId },
    /// Comparison / boolean operation. Both operands are always evaluated;
    /// the language has no short-circuiting.
    LogOp {
        op: LogicalOp,
        left: NodeId,
        right: NodeId,
    },
    /// `?` — read one integer from the input
    Read,
    /// Ordered statement list. Does not manage scope frames itself.
    Block { statements: Vec<NodeId> },
    /// Parser-introduced expression-statement wrapper; pure delegation
    Expr { inner: NodeId },
}

/// Arena owning every node of one program
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Ast {
    nodes: Vec<Node>,
    spans: Vec<Span>,
    root: Option<NodeId>,
}

impl Ast {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no nodes have been allocated
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of allocated nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The designated root block, if one has been set
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Designate the root block
    pub fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    /// Look up a node by handle. An out-of-range handle is a programming
    /// error and panics.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Source span of a node
    pub fn span(&self, id: NodeId) -> Span {
        self.spans[id.index()]
    }

    fn insert(&mut self, node: Node, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        self.spans.push(span);
        id
    }

    // === Factories, one per node kind ===

    pub fn new_while(&mut self, cond: NodeId, body: NodeId, span: Span) -> NodeId {
        self.insert(Node::While { cond, body }, span)
    }

    pub fn new_if(
        &mut self,
        cond: NodeId,
        body: NodeId,
        else_branch: Option<NodeId>,
        span: Span,
    ) -> NodeId {
        self.insert(
            Node::If {
                cond,
                body,
                else_branch,
            },
            span,
        )
    }

    pub fn new_else(&mut self, body: NodeId, span: Span) -> NodeId {
        self.insert(Node::Else { body }, span)
    }

    pub fn new_decl(&mut self, name: impl Into<String>, span: Span) -> NodeId {
        self.insert(Node::Decl { name: name.into() }, span)
    }

    pub fn new_var_ref(&mut self, name: impl Into<String>, span: Span) -> NodeId {
        self.insert(Node::VarRef { name: name.into() }, span)
    }

    pub fn new_assign(&mut self, target: NodeId, value: NodeId, span: Span) -> NodeId {
        self.insert(Node::Assign { target, value }, span)
    }

    pub fn new_int_literal(&mut self, value: i64, span: Span) -> NodeId {
        self.insert(Node::IntLiteral { value }, span)
    }

    pub fn new_print(&mut self, value: NodeId, span: Span) -> NodeId {
        self.insert(Node::Print { value }, span)
    }

    pub fn new_bin_op(&mut self, op: BinaryOp, left: NodeId, right: NodeId, span: Span) -> NodeId {
        self.insert(Node::BinOp { op, left, right }, span)
    }

    pub fn new_un_op(&mut self, op: UnaryOp, operand: NodeId, span: Span) -> NodeId {
        self.insert(Node::UnOp { op, operand }, span)
    }

    pub fn new_log_op(&mut self, op: LogicalOp, left: NodeId, right: NodeId, span: Span) -> NodeId {
        self.insert(Node::LogOp { op, left, right }, span)
    }

    pub fn new_read(&mut self, span: Span) -> NodeId {
        self.insert(Node::Read, span)
    }

    pub fn new_block(&mut self, statements: Vec<NodeId>, span: Span) -> NodeId {
        self.insert(Node::Block { statements }, span)
    }

    pub fn new_expr(&mut self, inner: NodeId, span: Span) -> NodeId {
        self.insert(Node::Expr { inner }, span)
    }
}

/// Versioned AST wrapper for JSON serialization
///
/// Wraps an arena with schema metadata for stable JSON output, used by the
/// `pcl ast` command and tooling.
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionedAst {
    /// AST schema version
    pub ast_version: u32,
    /// The arena itself
    #[serde(flatten)]
    pub ast: Ast,
}

impl VersionedAst {
    /// Wrap an arena with the current schema version
    pub fn new(ast: Ast) -> Self {
        Self {
            ast_version: AST_VERSION,
            ast,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Ast> for VersionedAst {
    fn from(ast: Ast) -> Self {
        Self::new(ast)
    }
}
