use crate::ast::{ast::Node, statements::AssignmentStmt};

/// Renders `stmt` as Graphviz source.
///
/// Nodes are numbered `n0`, `n1`, ... in pre-order and labelled with
/// [`Node::label`]; every parent has one edge to each of its children.
pub fn render_dot(stmt: &AssignmentStmt) -> String {
    let mut result = String::from("digraph {\n");
    let mut next_id = 0;
    write_node(&mut result, Node::from(stmt), None, &mut next_id);
    result.push_str("}\n");
    result
}

fn write_node(result: &mut String, node: Node<'_>, parent: Option<usize>, next_id: &mut usize) {
    let id = *next_id;
    *next_id += 1;

    result.push_str(&format!("    n{} [label=\"{}\"];\n", id, escape(&node.label())));
    if let Some(parent) = parent {
        result.push_str(&format!("    n{} -> n{};\n", parent, id));
    }

    for child in node.children() {
        write_node(result, child, Some(id), next_id);
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
