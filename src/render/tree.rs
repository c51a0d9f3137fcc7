use crate::ast::{ast::Node, statements::AssignmentStmt};

/// Renders `stmt` as an indented outline of node labels.
///
/// ```text
/// Assignment
///   Variable: x
///   Operator: +
///     Number: 1
///     Number: 2
/// ```
pub fn render_tree(stmt: &AssignmentStmt) -> String {
    let mut result = String::new();
    write_node(&mut result, Node::from(stmt), 0);
    result
}

fn write_node(result: &mut String, node: Node<'_>, indent: usize) {
    result.push_str(&"  ".repeat(indent));
    result.push_str(&node.label());
    result.push('\n');

    for child in node.children() {
        write_node(result, child, indent + 1);
    }
}
