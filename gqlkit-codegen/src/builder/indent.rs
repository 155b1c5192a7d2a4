//! Indentation units for generated source.

/// One level of indentation in a target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    unit: &'static str,
}

impl Indent {
    /// Four spaces.
    pub const JAVA: Self = Self { unit: "    " };

    /// Two spaces.
    pub const TYPESCRIPT: Self = Self { unit: "  " };

    /// The text of a single level.
    pub fn as_str(&self) -> &'static str {
        self.unit
    }

    /// Prefix for text nested `depth` levels deep.
    pub fn at(&self, depth: usize) -> String {
        self.unit.repeat(depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}
