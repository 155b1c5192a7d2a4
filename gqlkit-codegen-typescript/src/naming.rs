//! TypeScript-specific naming conventions.

use gqlkit_codegen::NamingConvention;
use gqlkit_core::{is_identifier, sanitize_identifier, to_pascal_case};

fn escape_ts_reserved(name: &str) -> String {
    format!("_{}", name)
}

fn enum_member(name: &str) -> String {
    let pascal = to_pascal_case(name);
    if is_identifier(&pascal) {
        pascal
    } else {
        sanitize_identifier(name)
    }
}

/// TypeScript naming conventions.
///
/// Type and operation names are kept as written; enum values become
/// PascalCase members.
pub const TS_NAMING: NamingConvention = NamingConvention {
    to_type: sanitize_identifier,
    to_member: sanitize_identifier,
    to_enum_member: enum_member,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // TypeScript reserved words and predefined types
        "any",
        "as",
        "async",
        "await",
        "bigint",
        "boolean",
        "declare",
        "implements",
        "interface",
        "module",
        "namespace",
        "never",
        "number",
        "object",
        "package",
        "private",
        "protected",
        "public",
        "readonly",
        "static",
        "string",
        "symbol",
        "type",
        "undefined",
        "unknown",
    ],
    escape_reserved: escape_ts_reserved,
};
