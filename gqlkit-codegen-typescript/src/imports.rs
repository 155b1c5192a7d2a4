//! TypeScript import rendering.

use gqlkit_codegen::{ImportKind, ImportStyle};

use crate::ast::Import;

/// Prefix marking a namespace import symbol (`* as Alias`).
pub(crate) const NAMESPACE_PREFIX: &str = "* as ";

/// Renders one statement per module, plus one per namespace import.
///
/// With `use_type_imports`, a module holding only type symbols becomes
/// `import type { ... }` and a mixed module marks its type symbols inline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsImportStyle {
    pub use_type_imports: bool,
}

impl TsImportStyle {
    pub fn new(use_type_imports: bool) -> Self {
        Self { use_type_imports }
    }
}

impl ImportStyle for TsImportStyle {
    fn render_module(&self, module: &str, symbols: &[(&str, ImportKind)]) -> Vec<String> {
        let mut statements = Vec::new();

        let (namespaces, named): (Vec<(&str, ImportKind)>, Vec<_>) = symbols
            .iter()
            .partition(|(symbol, _)| symbol.starts_with(NAMESPACE_PREFIX));

        if !named.is_empty() {
            let types_only = named.iter().all(|(_, kind)| *kind == ImportKind::Type);
            let mut import = Import::new(module);
            for (symbol, kind) in &named {
                import = if self.use_type_imports && !types_only && *kind == ImportKind::Type {
                    import.named_type(*symbol)
                } else {
                    import.named(*symbol)
                };
            }
            if self.use_type_imports && types_only {
                import = import.type_only();
            }
            statements.push(import.statement());
        }

        for (symbol, kind) in &namespaces {
            let alias = &symbol[NAMESPACE_PREFIX.len()..];
            let mut import = Import::new(module).namespace(alias);
            if *kind == ImportKind::Type {
                import = import.type_only();
            }
            statements.push(import.statement());
        }

        statements
    }
}

/// The registry symbol for `import * as alias`.
pub(crate) fn namespace_symbol(alias: &str) -> String {
    format!("{}{}", NAMESPACE_PREFIX, alias)
}
