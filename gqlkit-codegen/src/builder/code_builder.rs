//! Indentation-aware text buffer for generated source.

use super::{CodeFragment, Indent, Renderable};

/// Builds generated source line by line at a tracked depth.
///
/// Chaining methods consume and return the builder; the `push_*` variants
/// take `&mut self` for use inside loops.
///
/// # Example
///
/// ```
/// use gqlkit_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .block_with_close("public enum Role {", "}", |b| {
///         b.each(["ADMIN", "MEMBER"], |b, value| b.line(&format!("{},", value)))
///     })
///     .build();
///
/// assert_eq!(code, "public enum Role {\n    ADMIN,\n    MEMBER,\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Append `text` at the current depth.
    ///
    /// Each embedded line is indented on its own; empty lines stay empty.
    pub fn push_line(&mut self, text: &str) -> &mut Self {
        for line in text.split('\n') {
            if !line.is_empty() {
                self.write_indent();
                self.buffer.push_str(line);
            }
            self.buffer.push('\n');
        }
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Append a `/** ... */` comment. A single line stays on one line, which
    /// both Javadoc and TSDoc accept.
    pub fn push_doc(&mut self, lines: &[String]) -> &mut Self {
        match lines {
            [] => {}
            [single] => {
                self.push_line(&format!("/** {} */", single));
            }
            _ => {
                self.push_line("/**");
                for line in lines {
                    self.write_indent();
                    self.buffer.push_str(" *");
                    if !line.is_empty() {
                        self.buffer.push(' ');
                        self.buffer.push_str(line);
                    }
                    self.buffer.push('\n');
                }
                self.push_line(" */");
            }
        }
        self
    }

    /// Append every fragment of a declaration node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply(fragment);
        }
        self
    }

    fn apply(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(text) => {
                self.push_line(&text);
            }
            CodeFragment::Doc(lines) => {
                self.push_doc(&lines);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                for fragment in body {
                    self.apply(fragment);
                }
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
        }
    }

    pub fn line(mut self, text: &str) -> Self {
        self.push_line(text);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// `header`, then whatever `body` adds one level deeper, then `close`.
    pub fn block_with_close<F>(mut self, header: &str, close: &str, body: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.push_line(header).push_indent();
        let mut builder = body(self);
        builder.push_dedent().push_line(close);
        builder
    }

    /// Doc comment from free text; embedded newlines start new lines.
    pub fn doc(mut self, text: &str) -> Self {
        if let CodeFragment::Doc(lines) = CodeFragment::doc(text) {
            self.push_doc(&lines);
        }
        self
    }

    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        self.buffer.push_str(&self.indent.at(self.depth));
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_with_close() {
        let code = CodeBuilder::java()
            .block_with_close("public interface Query {", "}", |b| {
                b.line("Integer add();")
            })
            .build();

        assert_eq!(code, "public interface Query {\n    Integer add();\n}\n");
    }

    #[test]
    fn test_multiline_line_is_indented_per_line() {
        let mut builder = CodeBuilder::typescript();
        builder.push_indent().push_line("a\n\nb");
        assert_eq!(builder.build(), "  a\n\n  b\n");
    }

    #[test]
    fn test_single_line_doc() {
        let code = CodeBuilder::typescript()
            .doc("The user")
            .line("export type User = {};")
            .build();
        assert_eq!(code, "/** The user */\nexport type User = {};\n");
    }

    #[test]
    fn test_multi_line_doc() {
        let mut builder = CodeBuilder::java();
        builder.push_indent();
        let code = builder.doc("First\n\nSecond").build();
        assert_eq!(code, "    /**\n     * First\n     *\n     * Second\n     */\n");
    }

    #[test]
    fn test_nested_blocks_from_fragments() {
        struct Query;
        impl Renderable for Query {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "public interface Query {",
                    vec![
                        CodeFragment::doc("Adds two numbers."),
                        CodeFragment::line("Integer add(Integer x, Integer y);"),
                    ],
                    Some("}".to_string()),
                )]
            }
        }

        let mut builder = CodeBuilder::java();
        builder.emit(&Query);
        assert_eq!(
            builder.build(),
            "public interface Query {\n    /** Adds two numbers. */\n    Integer add(Integer x, Integer y);\n}\n"
        );
    }
}
