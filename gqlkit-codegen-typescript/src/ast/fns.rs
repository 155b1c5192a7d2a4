//! TypeScript function builder.

use gqlkit_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a TypeScript function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn optional_if(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let optional = if self.optional { "?" } else { "" };
        write!(f, "{}{}: {}", self.name, optional, self.ty)
    }
}

/// Builder for TypeScript functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Vec<String>,
    exported: bool,
    is_async: bool,
    generics: Vec<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            exported: true,
            is_async: false,
            generics: Vec::new(),
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Add a type parameter.
    pub fn generic(mut self, name: impl Into<String>) -> Self {
        self.generics.push(name.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: impl Into<String>) -> Self {
        for line in content.into().lines() {
            self.body.push(line.to_string());
        }
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn format_signature(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        let generics = if self.generics.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.generics.join(", "))
        };
        let params = self
            .params
            .iter()
            .map(Param::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!(
                "{}{}function {}{}({}): {} {{",
                export, async_kw, self.name, generics, params, ret
            ),
            None => format!(
                "{}{}function {}{}({}) {{",
                export, async_kw, self.name, generics, params
            ),
        }
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !self.doc.is_empty() {
            fragments.push(CodeFragment::Doc(self.doc.clone()));
        }
        let body = self
            .body
            .iter()
            .map(|line| CodeFragment::Line(line.clone()))
            .collect();
        fragments.push(CodeFragment::Block {
            header: self.format_signature(),
            body,
            close: Some("}".to_string()),
        });
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_with_params() {
        let f = Fn::new("add")
            .param(Param::new("a", "number"))
            .param(Param::new("b", "number"))
            .returns("number")
            .body_line("return a + b;")
            .build();
        assert_eq!(
            f,
            "export function add(a: number, b: number): number {\n  return a + b;\n}\n"
        );
    }

    #[test]
    fn test_async_generic_fn() {
        let f = Fn::new("execute")
            .private()
            .async_()
            .generic("TData")
            .returns("Promise<TData>")
            .build();
        assert_eq!(f, "async function execute<TData>(): Promise<TData> {\n}\n");
    }

    #[test]
    fn test_fn_with_doc_and_optional_param() {
        let f = Fn::new("Add")
            .doc(vec!["Run `Add`.".to_string()])
            .param(Param::new("variables", "AddQueryVariables").optional())
            .build();
        assert!(f.starts_with("/** Run `Add`. */\nexport function Add(variables?: AddQueryVariables) {"));
    }
}
