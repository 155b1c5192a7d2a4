//! Java-specific naming conventions.

use gqlkit_codegen::NamingConvention;
use gqlkit_core::sanitize_identifier;

fn escape_java_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Java keywords and literals that cannot be identifiers.
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "var", "yield", "record", "_",
];

/// `java.lang` types the generated code refers to by simple name. A nested
/// declaration with one of these names would shadow it.
pub(crate) const JAVA_LANG_TYPES: &[&str] = &["Boolean", "Double", "Integer", "Object", "String"];

/// Java naming conventions.
///
/// GraphQL names are already valid Java identifiers in the common case, so
/// they are kept as written and only sanitized and escaped.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    to_type: sanitize_identifier,
    to_member: sanitize_identifier,
    to_enum_member: sanitize_identifier,
    reserved_words: JAVA_KEYWORDS,
    escape_reserved: escape_java_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_kept() {
        assert_eq!(JAVA_NAMING.type_name("CreatePostInput"), "CreatePostInput");
        assert_eq!(JAVA_NAMING.member_name("createdAt"), "createdAt");
        assert_eq!(JAVA_NAMING.enum_member_name("DARK_RED"), "DARK_RED");
    }

    #[test]
    fn test_keywords_are_escaped() {
        assert_eq!(JAVA_NAMING.member_name("class"), "class_");
        assert_eq!(JAVA_NAMING.member_name("default"), "default_");
        assert!(!JAVA_NAMING.is_reserved("user"));
    }
}
