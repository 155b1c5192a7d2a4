//! Final compilation unit assembly.

use crate::builder::{CodeBuilder, Indent};

/// Where body fragments go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Everything inside one enclosing declaration (`header` ... `close`).
    Enclosed { header: String, close: String },
    /// Top-level declarations.
    Module,
}

/// Concatenates the pieces of a generated file in a fixed order: banner,
/// namespace line, import block, then body fragments followed by extras.
///
/// Blocks are separated by one blank line. Body text is never reordered or
/// deduplicated.
///
/// # Example
///
/// ```
/// use gqlkit_codegen::{Assembler, Layout, builder::Indent};
///
/// let text = Assembler::new(Layout::Module, Indent::TYPESCRIPT)
///     .imports(vec!["import { print } from 'graphql';".to_string()])
///     .body(vec!["export type A = number;".to_string()])
///     .assemble();
///
/// assert_eq!(
///     text,
///     "import { print } from 'graphql';\n\nexport type A = number;\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Assembler {
    layout: Layout,
    indent: Indent,
    banner: Vec<String>,
    namespace: Option<String>,
    imports: Vec<String>,
    body: Vec<String>,
    extras: Vec<String>,
}

impl Assembler {
    pub fn new(layout: Layout, indent: Indent) -> Self {
        Self {
            layout,
            indent,
            banner: Vec::new(),
            namespace: None,
            imports: Vec::new(),
            body: Vec::new(),
            extras: Vec::new(),
        }
    }

    /// Comment lines placed first.
    pub fn banner(mut self, lines: Vec<String>) -> Self {
        self.banner = lines;
        self
    }

    /// The rendered namespace declaration (`package com.acme;`).
    pub fn namespace(mut self, line: impl Into<String>) -> Self {
        self.namespace = Some(line.into());
        self
    }

    pub fn imports(mut self, lines: Vec<String>) -> Self {
        self.imports = lines;
        self
    }

    /// Fragments from the traversal, in visit order.
    pub fn body(mut self, fragments: Vec<String>) -> Self {
        self.body = fragments;
        self
    }

    /// Deferred blocks rendered after the body.
    pub fn extras(mut self, fragments: Vec<String>) -> Self {
        self.extras = fragments;
        self
    }

    pub fn assemble(self) -> String {
        let mut blocks: Vec<String> = Vec::new();
        if !self.banner.is_empty() {
            blocks.push(self.banner.join("\n"));
        }
        if let Some(namespace) = self.namespace {
            blocks.push(namespace);
        }
        if !self.imports.is_empty() {
            blocks.push(self.imports.join("\n"));
        }

        let fragments = self
            .body
            .into_iter()
            .chain(self.extras)
            .map(|fragment| fragment.trim_end_matches('\n').to_string())
            .filter(|fragment| !fragment.is_empty());

        match self.layout {
            Layout::Module => blocks.extend(fragments),
            Layout::Enclosed { header, close } => {
                let mut builder = CodeBuilder::new(self.indent);
                builder.push_line(&header).push_indent();
                for (i, fragment) in fragments.enumerate() {
                    if i > 0 {
                        builder.push_blank();
                    }
                    builder.push_line(&fragment);
                }
                builder.push_dedent().push_line(&close);
                blocks.push(builder.build().trim_end_matches('\n').to_string());
            }
        }

        let mut text = blocks.join("\n\n");
        text.push('\n');
        text
    }
}
