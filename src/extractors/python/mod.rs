//! Python element extraction.
//!
//! Walks a parsed syntax tree and produces the flat element list for one
//! file: the file element first, then classes and top-level functions in
//! depth-first discovery order, each class immediately followed by its
//! methods in declaration order. Methods are never globally re-sorted.
//!
//! Sub-modules:
//! - signatures: declaration-line reconstruction
//! - imports: import target collection
//! - complexity: cyclomatic-complexity scoring

pub(crate) mod complexity;
pub(crate) mod imports;
pub(crate) mod signatures;

use std::path::Path;

use tree_sitter::{Node, Tree};

use crate::extractors::base::{CodeElement, ElementKind, SourceContext};

/// Chars of source body kept in a file element's summary.
const FILE_PREVIEW_CHARS: usize = 500;
/// Chars of raw source kept for a class element (no ellipsis marker).
const CLASS_CONTENT_CHARS: usize = 1000;
/// Import names listed in the file summary line.
const FILE_SUMMARY_IMPORTS: usize = 10;

/// Per-file extractor over a parsed Python tree.
pub struct PythonExtractor {
    ctx: SourceContext,
}

impl PythonExtractor {
    pub fn new(filepath: String, content: String) -> Self {
        Self {
            ctx: SourceContext::new(filepath, content),
        }
    }

    /// Extract the ordered element list for this file.
    pub fn extract_elements(&self, tree: &Tree) -> Vec<CodeElement> {
        let root = tree.root_node();
        let mut elements = vec![self.file_element(&root)];
        self.traverse(&root, &mut elements);
        elements
    }

    fn traverse(&self, node: &Node, elements: &mut Vec<CodeElement>) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "class_definition" => {
                    elements.push(self.class_element(&child));

                    let class_name = child
                        .child_by_field_name("name")
                        .map(|n| self.ctx.node_text(&n).to_string())
                        .unwrap_or_else(|| "<anonymous>".to_string());
                    for method in direct_methods(&child) {
                        elements.push(self.function_element(&method, Some(&class_name)));
                    }

                    // Recurse for nested classes; direct methods were just
                    // emitted and fail the top-level check, so nothing repeats.
                    self.traverse(&child, elements);
                }
                "function_definition" => {
                    if is_top_level(&child) && !is_async(&child) {
                        elements.push(self.function_element(&child, None));
                    }
                    // Classes declared inside function bodies are still found.
                    self.traverse(&child, elements);
                }
                _ => self.traverse(&child, elements),
            }
        }
    }

    /// Always exactly one per successfully parsed file.
    fn file_element(&self, root: &Node) -> CodeElement {
        let docstring = self.ctx.docstring(root);
        let all_imports = imports::collect_imports(&self.ctx, root);

        let file_name = Path::new(&self.ctx.filepath)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.ctx.filepath.clone());

        let mut summary = format!("# File: {}\n", file_name);
        if let Some(ref doc) = docstring {
            summary.push_str(&format!("\"\"\"{}\"\"\"\n\n", doc));
        }
        let listed: Vec<&str> = all_imports
            .iter()
            .take(FILE_SUMMARY_IMPORTS)
            .map(String::as_str)
            .collect();
        summary.push_str(&format!("Imports: {}\n", listed.join(", ")));
        summary.push_str(&SourceContext::truncate_with_marker(
            &self.ctx.content,
            FILE_PREVIEW_CHARS,
        ));

        CodeElement {
            kind: ElementKind::File,
            name: file_name,
            content: summary,
            filepath: self.ctx.filepath.clone(),
            start_line: 1,
            end_line: self.ctx.line_count().max(1) as u32,
            docstring,
            signature: None,
            complexity: 1,
            imports: all_imports,
        }
    }

    fn class_element(&self, node: &Node) -> CodeElement {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.ctx.node_text(&n).to_string())
            .unwrap_or_else(|| "<anonymous>".to_string());
        let signature = signatures::class_signature(&self.ctx, node);
        let docstring = self.docstring_of(node);
        let (start_line, end_line) = self.ctx.node_span(node);

        CodeElement {
            kind: ElementKind::Class,
            name,
            content: SourceContext::truncate_plain(self.ctx.node_lines(node), CLASS_CONTENT_CHARS),
            filepath: self.ctx.filepath.clone(),
            start_line,
            end_line,
            docstring,
            signature: Some(signature),
            complexity: 1,
            imports: Vec::new(),
        }
    }

    fn function_element(&self, node: &Node, owning_class: Option<&str>) -> CodeElement {
        let bare_name = node
            .child_by_field_name("name")
            .map(|n| self.ctx.node_text(&n).to_string())
            .unwrap_or_else(|| "<anonymous>".to_string());
        let signature = signatures::function_signature(&self.ctx, node);
        let docstring = self.docstring_of(node);
        let (start_line, end_line) = self.ctx.node_span(node);

        // The docstring appears once reconstructed in the header and once
        // verbatim inside the source slice; intentional duplication.
        let mut content = format!("{}\n", signature);
        if let Some(ref doc) = docstring {
            content.push_str(&format!("    \"\"\"{}\"\"\"\n", doc));
        }
        content.push_str(self.ctx.node_lines(node));

        let name = match owning_class {
            Some(class_name) => format!("{}.{}", class_name, bare_name),
            None => bare_name,
        };

        CodeElement {
            kind: ElementKind::Function,
            name,
            content,
            filepath: self.ctx.filepath.clone(),
            start_line,
            end_line,
            docstring,
            signature: Some(signature),
            complexity: complexity::score(node),
            imports: Vec::new(),
        }
    }

    fn docstring_of(&self, node: &Node) -> Option<String> {
        node.child_by_field_name("body")
            .and_then(|body| self.ctx.docstring(&body))
    }
}

/// Direct function declarations of a class body, in declaration order.
/// Decorated methods count; functions nested deeper do not.
fn direct_methods<'t>(class_node: &Node<'t>) -> Vec<Node<'t>> {
    let mut methods = Vec::new();
    let body = match class_node.child_by_field_name("body") {
        Some(body) => body,
        None => return methods,
    };
    let mut cursor = body.walk();
    for child in body.named_children(&mut cursor) {
        match child.kind() {
            "function_definition" if !is_async(&child) => methods.push(child),
            "decorated_definition" => {
                if let Some(definition) = child.child_by_field_name("definition") {
                    if definition.kind() == "function_definition" && !is_async(&definition) {
                        methods.push(definition);
                    }
                }
            }
            _ => {}
        }
    }
    methods
}

/// Whether a function definition carries the `async` keyword. Coroutines are
/// declaration-level distinct from plain functions and are not emitted.
fn is_async(node: &Node) -> bool {
    let mut cursor = node.walk();
    let has_async = node.children(&mut cursor).any(|child| child.kind() == "async");
    has_async
}

/// Shallow top-level check: a function counts as top-level iff its
/// definition (or its decorator wrapper) is a direct child of the module
/// node. One level deep only, matching the original engine; functions inside
/// functions and members of nested classes keep the shallow classification.
fn is_top_level(node: &Node) -> bool {
    match node.parent() {
        Some(parent) if parent.kind() == "module" => true,
        Some(parent) if parent.kind() == "decorated_definition" => parent
            .parent()
            .map(|grandparent| grandparent.kind() == "module")
            .unwrap_or(false),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::parse_python;

    fn extract(source: &str) -> Vec<CodeElement> {
        let tree = parse_python("sample.py", source).unwrap();
        PythonExtractor::new("sample.py".to_string(), source.to_string()).extract_elements(&tree)
    }

    #[test]
    fn file_element_comes_first_and_spans_the_file() {
        let elements = extract("x = 1\ny = 2\nz = 3\n");
        assert_eq!(elements.len(), 1);
        let file = &elements[0];
        assert_eq!(file.kind, ElementKind::File);
        assert_eq!(file.name, "sample.py");
        assert_eq!(file.start_line, 1);
        assert_eq!(file.end_line, 3);
        assert!(file.signature.is_none());
    }

    #[test]
    fn file_summary_carries_docstring_and_imports() {
        let source = "\"\"\"Utility helpers.\"\"\"\nimport os\nfrom pathlib import Path\n";
        let elements = extract(source);
        let file = &elements[0];
        assert_eq!(file.docstring.as_deref(), Some("Utility helpers."));
        assert_eq!(file.imports, vec!["os", "pathlib"]);
        assert!(file.content.starts_with("# File: sample.py\n"));
        assert!(file.content.contains("\"\"\"Utility helpers.\"\"\""));
        assert!(file.content.contains("Imports: os, pathlib\n"));
        assert!(file.content.ends_with(source));
    }

    #[test]
    fn long_file_summary_is_capped_with_marker() {
        let source = format!("data = [\n{}]\n", "    0,\n".repeat(200));
        let elements = extract(&source);
        assert!(elements[0].content.ends_with("..."));
        assert!(elements[0]
            .content
            .contains(&source.chars().take(FILE_PREVIEW_CHARS).collect::<String>()));
    }

    #[test]
    fn class_with_method_matches_expected_shape() {
        let source = "class Foo:\n    def bar(self, x: int) -> int:\n        if x > 0:\n            return x\n        return -x\n";
        let elements = extract(source);
        assert_eq!(elements.len(), 3);

        let class = &elements[1];
        assert_eq!(class.kind, ElementKind::Class);
        assert_eq!(class.name, "Foo");
        assert_eq!(class.signature.as_deref(), Some("class Foo:"));
        assert_eq!(class.start_line, 1);
        assert_eq!(class.end_line, 5);

        let method = &elements[2];
        assert_eq!(method.kind, ElementKind::Function);
        assert_eq!(method.name, "Foo.bar");
        assert_eq!(
            method.signature.as_deref(),
            Some("def bar(self, x: int) -> int:")
        );
        assert_eq!(method.complexity, 2);
        assert_eq!(method.start_line, 2);
        assert_eq!(method.end_line, 5);
    }

    #[test]
    fn top_level_function_keeps_bare_name() {
        let elements = extract("def solo(a, b):\n    return a + b\n");
        let function = &elements[1];
        assert_eq!(function.name, "solo");
        assert!(!function.name.contains('.'));
        assert_eq!(function.signature.as_deref(), Some("def solo(a, b):"));
        assert_eq!(function.complexity, 1);
    }

    #[test]
    fn methods_follow_their_class_in_declaration_order() {
        let source = "class Svc:\n    def second(self):\n        pass\n    def first(self):\n        pass\n\ndef standalone():\n    pass\n";
        let names: Vec<String> = extract(source).iter().map(|e| e.name.clone()).collect();
        assert_eq!(
            names,
            vec!["sample.py", "Svc", "Svc.second", "Svc.first", "standalone"]
        );
    }

    #[test]
    fn nested_function_is_not_emitted() {
        let source = "def outer():\n    def inner():\n        pass\n    return inner\n";
        let elements = extract(source);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].name, "outer");
    }

    #[test]
    fn decorated_declarations_are_classified_in_place() {
        let source = "@lru_cache\ndef cached():\n    pass\n\nclass Api:\n    @property\n    def value(self):\n        return 1\n";
        let names: Vec<String> = extract(source).iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, vec!["sample.py", "cached", "Api", "Api.value"]);
    }

    #[test]
    fn async_definitions_are_not_emitted() {
        let source = "class Svc:\n    async def fetch(self):\n        return 1\n\n    def close(self):\n        pass\n\nasync def main():\n    pass\n\ndef sync():\n    pass\n";
        let names: Vec<String> = extract(source).iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, vec!["sample.py", "Svc", "Svc.close", "sync"]);
    }

    #[test]
    fn decorated_async_method_is_not_emitted() {
        let source = "class Api:\n    @retry\n    async def call(self):\n        pass\n    @property\n    def value(self):\n        return 1\n";
        let names: Vec<String> = extract(source).iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, vec!["sample.py", "Api", "Api.value"]);
    }

    #[test]
    fn nested_class_is_emitted_after_its_outer_class() {
        let source = "class Outer:\n    def method(self):\n        pass\n    class Inner:\n        def helper(self):\n            pass\n";
        let names: Vec<String> = extract(source).iter().map(|e| e.name.clone()).collect();
        assert_eq!(
            names,
            vec![
                "sample.py",
                "Outer",
                "Outer.method",
                "Inner",
                "Inner.helper"
            ]
        );
    }

    #[test]
    fn class_content_is_capped_without_marker() {
        let mut source = String::from("class Big:\n");
        for i in 0..120 {
            source.push_str(&format!("    attr_{:03} = {}\n", i, i));
        }
        let elements = extract(&source);
        let class = &elements[1];
        assert_eq!(class.content.chars().count(), CLASS_CONTENT_CHARS);
        assert!(!class.content.ends_with("..."));
    }

    #[test]
    fn function_content_repeats_the_docstring() {
        let source =
            "def doc():\n    \"\"\"Documented.\"\"\"\n    return None\n";
        let elements = extract(source);
        let function = &elements[1];
        assert_eq!(function.docstring.as_deref(), Some("Documented."));
        assert_eq!(function.content.matches("Documented.").count(), 2);
        assert!(function.content.starts_with("def doc():\n    \"\"\"Documented.\"\"\"\n"));
    }

    #[test]
    fn extraction_is_idempotent() {
        let source = "import re\n\nclass A:\n    def m(self):\n        pass\n\ndef f():\n    pass\n";
        assert_eq!(extract(source), extract(source));
    }

    #[test]
    fn spans_stay_within_file_bounds() {
        let source = "class A:\n    def m(self, flag):\n        if flag:\n            return 1\n        return 0\n\ndef g():\n    pass\n";
        let total_lines = source.lines().count() as u32;
        for element in extract(source) {
            assert!(element.start_line >= 1);
            assert!(element.end_line >= element.start_line);
            assert!(element.end_line <= total_lines);
        }
    }

    #[test]
    fn empty_file_still_yields_a_file_element() {
        let elements = extract("");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].start_line, 1);
        assert_eq!(elements[0].end_line, 1);
    }
}
