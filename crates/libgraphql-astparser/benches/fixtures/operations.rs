use std::fmt::Write;

/// Generates a query with deeply nested selection sets.
///
/// At each level, the query selects an `id` field and a `child` field that
/// contains the next nesting level. The innermost level selects `id` and
/// `name`.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let field = if level == 0 { "root" } else { "child" };
        let _ = writeln!(out, "{indent}{field} {{");
        let _ = writeln!(out, "{indent}  id");
    }
    let inner_indent = "  ".repeat(depth + 1);
    let _ = writeln!(out, "{inner_indent}name");
    for level in (0..depth).rev() {
        let indent = "  ".repeat(level + 1);
        let _ = writeln!(out, "{indent}}}");
    }
    out.push_str("}\n");
    out
}

/// Generates a document containing `count` named query operations that
/// share one fragment.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 100);
    for i in 0..count {
        let _ = writeln!(out, "query Operation{i}($id: ID!, $first: Int = 10) {{");
        let _ = writeln!(out, "  node(id: $id) {{");
        let _ = writeln!(out, "    id");
        let _ = writeln!(out, "    ...NodeParts");
        let _ = writeln!(out, "    field{i}: description(first: $first)");
        let _ = writeln!(out, "  }}");
        let _ = writeln!(out, "}}\n");
    }
    out.push_str("fragment NodeParts on Node { id __typename }\n");
    out
}
