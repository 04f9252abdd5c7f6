/// Cyclomatic-complexity scoring for function subtrees.
///
/// Approximates the number of independent control-flow paths: one base path,
/// plus one per conditional branch, loop, or exception handler anywhere in
/// the subtree, plus one per binary boolean combination. An N-operand
/// short-circuit chain parses as N-1 nested `boolean_operator` nodes, so a
/// chain contributes exactly N-1. Nesting depth and loop kind carry no
/// weight; that is an attribute of the metric, not a bug.
use tree_sitter::Node;

/// Score a function definition's subtree. Always >= 1.
pub fn score(node: &Node) -> u32 {
    let mut complexity = 1;
    count_branches(node, &mut complexity);
    complexity
}

fn count_branches(node: &Node, complexity: &mut u32) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "if_statement" | "elif_clause" | "while_statement" | "for_statement"
            | "except_clause" | "except_group_clause" | "boolean_operator" => {
                *complexity += 1;
            }
            _ => {}
        }
        count_branches(&child, complexity);
    }
}
