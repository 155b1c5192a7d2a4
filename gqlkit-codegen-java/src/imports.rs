//! Java import rendering and collision-aware type references.

use std::collections::{HashMap, HashSet};

use gqlkit_codegen::{ImportKind, ImportRegistry, ImportStyle};

pub(crate) const DATA_FETCHING_ENVIRONMENT: &str = "graphql.schema.DataFetchingEnvironment";
pub(crate) const TYPE_RESOLVER: &str = "graphql.schema.TypeResolver";

/// One `import module.Symbol;` per symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaImportStyle;

impl ImportStyle for JavaImportStyle {
    fn render_module(&self, module: &str, symbols: &[(&str, ImportKind)]) -> Vec<String> {
        symbols
            .iter()
            .map(|(symbol, _)| format!("import {}.{};", module, symbol))
            .collect()
    }
}

/// Imports plus the simple names declared inside the generated class.
///
/// A qualified name is imported only when its simple name is free; otherwise
/// it is spelled fully qualified at the use site.
#[derive(Debug, Clone, Default)]
pub struct JavaImports {
    registry: ImportRegistry,
    local_names: HashSet<String>,
    /// Simple names set aside for imports recorded later, keyed to their
    /// qualified name.
    claimed: HashMap<String, String>,
}

impl JavaImports {
    pub fn new(local_names: impl IntoIterator<Item = String>) -> Self {
        Self {
            registry: ImportRegistry::new(),
            local_names: local_names.into_iter().collect(),
            claimed: HashMap::new(),
        }
    }

    /// Set aside the simple name of `qualified` so other packages cannot
    /// import the same simple name.
    pub fn claim(&mut self, qualified: &str) {
        if let Some((_, simple)) = qualified.rsplit_once('.') {
            self.claimed
                .entry(simple.to_string())
                .or_insert_with(|| qualified.to_string());
        }
    }

    /// Reference a type by its qualified name, importing it when possible.
    ///
    /// Names without a package, and generic or array types, are returned
    /// unchanged.
    pub fn reference(&mut self, qualified: &str) -> String {
        if qualified.contains(['<', '[']) {
            return qualified.to_string();
        }
        let Some((module, simple)) = qualified.rsplit_once('.') else {
            return qualified.to_string();
        };
        if self.local_names.contains(simple) {
            return qualified.to_string();
        }
        if self
            .claimed
            .get(simple)
            .is_some_and(|owner| owner != qualified)
        {
            return qualified.to_string();
        }
        if self.registry.provides(simple) && !self.registry.contains(simple, module) {
            return qualified.to_string();
        }
        self.registry.record(simple, module, ImportKind::Type);
        simple.to_string()
    }

    /// Record an import whose simple spelling was already decided.
    pub fn record(&mut self, qualified: &str) {
        if let Some((module, simple)) = qualified.rsplit_once('.') {
            self.registry.record(simple, module, ImportKind::Type);
        }
    }

    pub fn is_local(&self, simple: &str) -> bool {
        self.local_names.contains(simple)
    }

    pub fn render(&self) -> Vec<String> {
        self.registry.render(&JavaImportStyle)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_statement_per_symbol() {
        let mut imports = JavaImports::default();
        assert_eq!(imports.reference("java.util.List"), "List");
        assert_eq!(imports.reference("java.util.List"), "List");
        assert_eq!(imports.reference(DATA_FETCHING_ENVIRONMENT), "DataFetchingEnvironment");
        assert_eq!(
            imports.render(),
            vec![
                "import java.util.List;",
                "import graphql.schema.DataFetchingEnvironment;",
            ]
        );
    }

    #[test]
    fn test_local_names_force_qualified_spelling() {
        let mut imports = JavaImports::new(["TypeResolver".to_string()]);
        assert_eq!(imports.reference(TYPE_RESOLVER), TYPE_RESOLVER);
        assert!(imports.is_empty());
    }

    #[test]
    fn test_second_module_with_same_simple_name() {
        let mut imports = JavaImports::default();
        assert_eq!(imports.reference("java.time.Instant"), "Instant");
        assert_eq!(imports.reference("com.acme.Instant"), "com.acme.Instant");
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_claimed_simple_names() {
        let mut imports = JavaImports::default();
        imports.claim("java.util.List");
        assert_eq!(imports.reference("com.acme.List"), "com.acme.List");
        assert_eq!(imports.reference("java.util.List"), "List");
    }

    #[test]
    fn test_unqualified_names_pass_through() {
        let mut imports = JavaImports::default();
        assert_eq!(imports.reference("String"), "String");
        assert_eq!(
            imports.reference("java.util.Map<String, Object>"),
            "java.util.Map<String, Object>"
        );
        assert!(imports.is_empty());
    }
}
