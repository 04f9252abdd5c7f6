/// Signature reconstruction for classes and functions.
/// Annotations and base-class expressions are rendered from their literal
/// source text so generic parameters and qualified names survive unchanged.
use tree_sitter::Node;

use crate::extractors::base::SourceContext;

/// Build `def <name>(<params>):`, with ` -> <annotation>` before the colon
/// when a return annotation is present. Methods use the bare method name.
pub fn function_signature(ctx: &SourceContext, node: &Node) -> String {
    let name = node
        .child_by_field_name("name")
        .map(|n| ctx.node_text(&n))
        .unwrap_or("<anonymous>");

    let params = node
        .child_by_field_name("parameters")
        .map(|p| render_parameters(ctx, &p))
        .unwrap_or_default();

    let mut signature = format!("def {}({})", name, params.join(", "));
    if let Some(return_type) = node.child_by_field_name("return_type") {
        signature.push_str(" -> ");
        signature.push_str(ctx.node_text(&return_type));
    }
    signature.push(':');
    signature
}

/// Build `class <Name>(<bases>):`, parentheses omitted when there are no
/// bases. Keyword arguments such as `metaclass=` are not bases.
pub fn class_signature(ctx: &SourceContext, node: &Node) -> String {
    let name = node
        .child_by_field_name("name")
        .map(|n| ctx.node_text(&n))
        .unwrap_or("<anonymous>");

    let bases = node
        .child_by_field_name("superclasses")
        .map(|s| render_bases(ctx, &s))
        .unwrap_or_default();

    if bases.is_empty() {
        format!("class {}:", name)
    } else {
        format!("class {}({}):", name, bases.join(", "))
    }
}

/// Render positional parameters as `name` or `name: type`. Splat parameters
/// (`*args`, `**kwargs`), bare separators, and default values are omitted.
pub fn render_parameters(ctx: &SourceContext, parameters: &Node) -> Vec<String> {
    let mut params = Vec::new();
    let mut cursor = parameters.walk();
    for child in parameters.children(&mut cursor) {
        match child.kind() {
            "identifier" => {
                params.push(ctx.node_text(&child).to_string());
            }
            "typed_parameter" => {
                // identifier ':' type; splat patterns in this position are skipped
                let pattern = match child.child(0) {
                    Some(p) if p.kind() == "identifier" => p,
                    _ => continue,
                };
                let mut rendered = ctx.node_text(&pattern).to_string();
                if let Some(annotation) = child.child_by_field_name("type") {
                    rendered.push_str(": ");
                    rendered.push_str(ctx.node_text(&annotation));
                }
                params.push(rendered);
            }
            "default_parameter" | "typed_default_parameter" => {
                // The default value is not part of the rendered signature.
                let name = match child.child_by_field_name("name") {
                    Some(n) if n.kind() == "identifier" => ctx.node_text(&n).to_string(),
                    _ => continue,
                };
                let mut rendered = name;
                if let Some(annotation) = child.child_by_field_name("type") {
                    rendered.push_str(": ");
                    rendered.push_str(ctx.node_text(&annotation));
                }
                params.push(rendered);
            }
            _ => {}
        }
    }
    params
}

fn render_bases(ctx: &SourceContext, superclasses: &Node) -> Vec<String> {
    let mut bases = Vec::new();
    let mut cursor = superclasses.walk();
    for child in superclasses.named_children(&mut cursor) {
        match child.kind() {
            "keyword_argument" | "comment" => {}
            _ => bases.push(ctx.node_text(&child).to_string()),
        }
    }
    bases
}
