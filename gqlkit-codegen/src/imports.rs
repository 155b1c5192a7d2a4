//! Import accumulation and rendering.

use indexmap::IndexMap;
use serde::Serialize;

/// Whether an imported symbol is only used in type positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ImportKind {
    Type,
    Value,
}

/// Language-specific rendering of one module's imports.
pub trait ImportStyle {
    /// Render the statements for `module`, given its symbols in
    /// first-recorded order.
    fn render_module(&self, module: &str, symbols: &[(&str, ImportKind)]) -> Vec<String>;
}

/// Deduplicating import accumulator.
///
/// Entries are keyed by `(symbol, module)`; recording the same pair again is a
/// no-op, so the first recorded kind sticks. Modules and the symbols within
/// each module keep first-insertion order.
///
/// # Example
///
/// ```
/// use gqlkit_codegen::{ImportKind, ImportRegistry};
///
/// let mut imports = ImportRegistry::new();
/// imports.record("DocumentNode", "graphql", ImportKind::Type);
/// imports.record("print", "graphql", ImportKind::Value);
/// imports.record("DocumentNode", "graphql", ImportKind::Value);
///
/// assert_eq!(imports.len(), 2);
/// assert_eq!(imports.kind_of("DocumentNode", "graphql"), Some(ImportKind::Type));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportRegistry {
    modules: IndexMap<String, IndexMap<String, ImportKind>>,
}

impl ImportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a symbol import. Returns `true` if the pair was new.
    pub fn record(&mut self, symbol: &str, module: &str, kind: ImportKind) -> bool {
        let symbols = self.modules.entry(module.to_string()).or_default();
        if symbols.contains_key(symbol) {
            return false;
        }
        symbols.insert(symbol.to_string(), kind);
        true
    }

    /// Merge another registry into this one; existing entries win.
    pub fn merge(&mut self, other: &ImportRegistry) {
        for (module, symbols) in &other.modules {
            for (symbol, kind) in symbols {
                self.record(symbol, module, *kind);
            }
        }
    }

    pub fn contains(&self, symbol: &str, module: &str) -> bool {
        self.kind_of(symbol, module).is_some()
    }

    pub fn kind_of(&self, symbol: &str, module: &str) -> Option<ImportKind> {
        self.modules.get(module)?.get(symbol).copied()
    }

    /// Whether any module already provides `symbol`.
    pub fn provides(&self, symbol: &str) -> bool {
        self.modules.values().any(|symbols| symbols.contains_key(symbol))
    }

    /// Iterate over `(module, symbol, kind)` in render order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, ImportKind)> {
        self.modules.iter().flat_map(|(module, symbols)| {
            symbols
                .iter()
                .map(move |(symbol, kind)| (module.as_str(), symbol.as_str(), *kind))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of recorded `(symbol, module)` pairs.
    pub fn len(&self) -> usize {
        self.modules.values().map(IndexMap::len).sum()
    }

    /// Render all statements, module by module.
    pub fn render(&self, style: &dyn ImportStyle) -> Vec<String> {
        let mut lines = Vec::new();
        for (module, symbols) in &self.modules {
            if symbols.is_empty() {
                continue;
            }
            let symbols: Vec<(&str, ImportKind)> = symbols
                .iter()
                .map(|(symbol, kind)| (symbol.as_str(), *kind))
                .collect();
            lines.extend(style.render_module(module, &symbols));
        }
        lines
    }
}
