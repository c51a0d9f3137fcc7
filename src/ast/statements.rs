use crate::Span;

use super::{ast::Expr, expressions::SymbolExpr};

/// `let <target> = <value>;`
///
/// The root of every successful parse. The target is always a variable, so
/// the tree shape is enforced by the types rather than checked at runtime.
#[derive(Debug, Clone)]
pub struct AssignmentStmt {
    pub target: SymbolExpr,
    pub value: Expr,
    pub span: Span,
}
