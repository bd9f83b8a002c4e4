use std::fmt::Write;

/// Generates a schema with `types` object types, each with
/// `fields_per_type` fields, plus an interface, an enum, an input object
/// and a union per ten types.
pub fn synthetic_schema(types: usize, fields_per_type: usize) -> String {
    let mut out = String::with_capacity(types * fields_per_type * 40);
    out.push_str("schema { query: Query }\n\n");
    out.push_str("interface Node { id: ID! }\n\n");
    out.push_str("directive @cacheControl(maxAge: Int) on FIELD_DEFINITION | OBJECT\n\n");

    out.push_str("type Query {\n");
    for i in 0..types {
        let _ = writeln!(out, "  type{i}(id: ID!): Type{i}");
    }
    out.push_str("}\n\n");

    for i in 0..types {
        let _ = writeln!(out, "\"\"\"\nType number {i}.\n\"\"\"");
        let _ = writeln!(out, "type Type{i} implements Node @cacheControl(maxAge: 60) {{");
        out.push_str("  id: ID!\n");
        for f in 0..fields_per_type {
            let _ = writeln!(
                out,
                "  \"Field {f}\" field{f}(first: Int = 10, after: String): [String!]",
            );
        }
        out.push_str("}\n\n");

        if i % 10 == 0 {
            let _ = writeln!(out, "enum Enum{i} {{ A B C @deprecated(reason: \"old\") }}");
            let _ = writeln!(out, "input Input{i} {{ a: Int! = 1 b: [String] c: Enum{i} }}");
            let _ = writeln!(out, "union Union{i} = Type{i} | Query\n");
        }
    }
    out
}
