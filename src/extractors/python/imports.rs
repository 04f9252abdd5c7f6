/// Import target collection.
/// Records flattened module names in discovery order: `import a.b as c`
/// records `a.b` (the target, not the alias); `from x.y import z` records
/// only `x.y`; a relative import with no named module is skipped.
use tree_sitter::Node;

use crate::extractors::base::SourceContext;

/// Collect import targets from the whole tree, including imports nested in
/// function or class bodies.
pub fn collect_imports(ctx: &SourceContext, root: &Node) -> Vec<String> {
    let mut imports = Vec::new();
    visit(ctx, root, &mut imports);
    imports
}

fn visit(ctx: &SourceContext, node: &Node, imports: &mut Vec<String>) {
    match node.kind() {
        "import_statement" => {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                match child.kind() {
                    "dotted_name" => imports.push(ctx.node_text(&child).to_string()),
                    "aliased_import" => {
                        if let Some(name) = child.child_by_field_name("name") {
                            imports.push(ctx.node_text(&name).to_string());
                        }
                    }
                    _ => {}
                }
            }
            return;
        }
        "import_from_statement" => {
            if let Some(module) = node.child_by_field_name("module_name") {
                match module.kind() {
                    "dotted_name" => imports.push(ctx.node_text(&module).to_string()),
                    "relative_import" => {
                        // from .pkg import x -> "pkg"; from . import x -> nothing
                        let mut cursor = module.walk();
                        for part in module.named_children(&mut cursor) {
                            if part.kind() == "dotted_name" {
                                imports.push(ctx.node_text(&part).to_string());
                                break;
                            }
                        }
                    }
                    _ => {}
                }
            }
            return;
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(ctx, &child, imports);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::parse_python;

    fn imports_of(source: &str) -> Vec<String> {
        let tree = parse_python("test.py", source).unwrap();
        let ctx = SourceContext::new("test.py".to_string(), source.to_string());
        collect_imports(&ctx, &tree.root_node())
    }

    #[test]
    fn direct_imports_record_target_names() {
        assert_eq!(
            imports_of("import os\nimport os.path\nimport numpy as np\n"),
            vec!["os", "os.path", "numpy"]
        );
    }

    #[test]
    fn from_imports_record_only_the_module() {
        assert_eq!(
            imports_of("from pathlib import Path\nfrom collections.abc import Mapping, Sequence\n"),
            vec!["pathlib", "collections.abc"]
        );
    }

    #[test]
    fn relative_imports_without_a_module_are_skipped() {
        assert_eq!(imports_of("from . import sibling\n"), Vec::<String>::new());
        assert_eq!(imports_of("from .models import User\n"), vec!["models"]);
    }

    #[test]
    fn nested_imports_are_collected() {
        let source = "def lazy():\n    import json\n    return json\n";
        assert_eq!(imports_of(source), vec!["json"]);
    }

    #[test]
    fn comma_separated_imports_flatten() {
        assert_eq!(imports_of("import sys, io\n"), vec!["sys", "io"]);
    }
}
