/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the tree the parser builds
///
/// Submodules:
/// - ast: The expression enum and the uniform node view
/// - expressions: Variable, number and operator nodes
/// - statements: The assignment statement at the root of every tree
pub mod ast;
pub mod expressions;
pub mod statements;
