//! Naming conventions and collision-free symbol allocation.

use std::collections::HashSet;

/// Language-specific naming conventions.
///
/// Defines how GraphQL names become target identifiers and how reserved words
/// are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a GraphQL type or operation name into a type name
    pub to_type: fn(&str) -> String,
    /// Transform a GraphQL field or argument name into a member name
    pub to_member: fn(&str) -> String,
    /// Transform a GraphQL enum value into an enum member name
    pub to_enum_member: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "class_" in Java)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn type_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_type)(name))
    }

    pub fn member_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_member)(name))
    }

    pub fn enum_member_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_enum_member)(name))
    }
}

/// Tracks the top-level names a generated unit declares.
///
/// Names are seeded with [`SymbolTable::reserve`] (schema types, prelude
/// declarations) and then handed out with [`SymbolTable::claim`], which
/// appends `_1`, `_2`, ... until the name is free.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    taken: HashSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a name as used without checking for collisions.
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.taken.insert(name.into());
    }

    pub fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(name)
    }

    /// Claim `name`, or the first free suffixed variant of it.
    pub fn claim(&mut self, name: &str) -> String {
        if self.taken.insert(name.to_string()) {
            return name.to_string();
        }
        let mut n = 1;
        loop {
            let candidate = format!("{}_{}", name, n);
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape(name: &str) -> String {
        format!("{}_", name)
    }

    const CONVENTION: NamingConvention = NamingConvention {
        to_type: gqlkit_core::to_pascal_case,
        to_member: gqlkit_core::to_camel_case,
        to_enum_member: gqlkit_core::to_pascal_case,
        reserved_words: &["class", "default"],
        escape_reserved: escape,
    };

    #[test]
    fn test_reserved_names_are_escaped() {
        assert_eq!(CONVENTION.member_name("class"), "class_");
        assert_eq!(CONVENTION.member_name("user_name"), "userName");
        assert_eq!(CONVENTION.enum_member_name("DARK_RED"), "DarkRed");
    }

    #[test]
    fn test_claim_suffixes_collisions() {
        let mut symbols = SymbolTable::new();
        symbols.reserve("User");
        assert_eq!(symbols.claim("User"), "User_1");
        assert_eq!(symbols.claim("User"), "User_2");
        assert_eq!(symbols.claim("Add"), "Add");
        assert!(symbols.is_taken("User_2"));
    }

    #[test]
    fn test_claim_skips_taken_suffixes() {
        let mut symbols = SymbolTable::new();
        symbols.reserve("Add");
        symbols.reserve("Add_1");
        assert_eq!(symbols.claim("Add"), "Add_2");
    }
}
