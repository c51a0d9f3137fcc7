use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{BinaryExpr, NumberExpr, SymbolExpr},
    statements::AssignmentStmt,
};

/// Expression
///
/// Closed set of expression kinds: every match over it is exhaustive.
#[derive(Debug, Clone)]
pub enum Expr {
    Symbol(SymbolExpr),
    Number(NumberExpr),
    Binary(BinaryExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Symbol(expr) => &expr.span,
            Expr::Number(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
        }
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::from(self)
    }
}

/// Node Kinds
///
/// The kind tag a consumer sees for each node of the tree.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeKind {
    Variable,
    Number,
    Operator,
    Assignment,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Node
///
/// A borrowed, uniform view over any node of a parsed tree: a kind tag, an
/// optional payload and an ordered list of children. Renderers and other
/// consumers walk the tree through this view instead of the concrete types.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Variable(&'a SymbolExpr),
    Number(&'a NumberExpr),
    Operator(&'a BinaryExpr),
    Assignment(&'a AssignmentStmt),
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Variable(_) => NodeKind::Variable,
            Node::Number(_) => NodeKind::Number,
            Node::Operator(_) => NodeKind::Operator,
            Node::Assignment(_) => NodeKind::Assignment,
        }
    }

    /// Variable name, numeric value or operator symbol. Assignments have none.
    pub fn payload(&self) -> Option<String> {
        match self {
            Node::Variable(expr) => Some(expr.value.clone()),
            Node::Number(expr) => Some(expr.value.to_string()),
            Node::Operator(expr) => Some(expr.operator.value.clone()),
            Node::Assignment(_) => None,
        }
    }

    /// Children in order: none for leaves, two for operators and assignments.
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Variable(_) | Node::Number(_) => vec![],
            Node::Operator(expr) => vec![Node::from(&*expr.left), Node::from(&*expr.right)],
            Node::Assignment(stmt) => vec![Node::Variable(&stmt.target), Node::from(&stmt.value)],
        }
    }

    /// `"Kind: payload"`, or just `"Kind"` when there is no payload.
    pub fn label(&self) -> String {
        match self.payload() {
            Some(payload) => format!("{}: {}", self.kind(), payload),
            None => self.kind().to_string(),
        }
    }

    pub fn get_span(&self) -> &'a Span {
        match *self {
            Node::Variable(expr) => &expr.span,
            Node::Number(expr) => &expr.span,
            Node::Operator(expr) => &expr.span,
            Node::Assignment(stmt) => &stmt.span,
        }
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Symbol(expr) => Node::Variable(expr),
            Expr::Number(expr) => Node::Number(expr),
            Expr::Binary(expr) => Node::Operator(expr),
        }
    }
}

impl<'a> From<&'a AssignmentStmt> for Node<'a> {
    fn from(stmt: &'a AssignmentStmt) -> Self {
        Node::Assignment(stmt)
    }
}

/// Compact S-expression form, e.g. `Assignment(Variable(x), Number(5))`.
impl Display for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.kind())?;

        let mut first = true;
        if let Some(payload) = self.payload() {
            write!(f, "{}", payload)?;
            first = false;
        }
        for child in self.children() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", child)?;
            first = false;
        }

        write!(f, ")")
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.as_node(), f)
    }
}

impl Display for AssignmentStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&Node::from(self), f)
    }
}
