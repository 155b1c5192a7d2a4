//! Java members: methods, parameters, fields and enum constants.

use gqlkit_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Javadoc lines: the description, then block tags after a blank line.
///
/// `*/` inside the text would end the comment early, so it is escaped.
pub fn javadoc(description: Option<&str>, tags: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut lines = match description.map(|text| CodeFragment::doc(&escape_comment(text))) {
        Some(CodeFragment::Doc(lines)) => lines,
        _ => Vec::new(),
    };
    let tags: Vec<String> = tags.into_iter().map(|tag| escape_comment(&tag)).collect();
    if !lines.is_empty() && !tags.is_empty() {
        lines.push(String::new());
    }
    lines.extend(tags);
    lines
}

/// `@deprecated` tag for a deprecation reason.
pub fn deprecated_tag(reason: Option<&str>) -> Option<String> {
    reason.map(|reason| format!("@deprecated {}", reason))
}

fn escape_comment(text: &str) -> String {
    text.replace("*/", "*&#47;")
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// An abstract interface method.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    return_type: String,
    params: Vec<String>,
    doc: Vec<String>,
    deprecated: bool,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            params: Vec::new(),
            doc: Vec::new(),
            deprecated: false,
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param.to_string());
        self
    }

    /// Add already rendered `Type name` parameters.
    pub fn params(mut self, params: impl IntoIterator<Item = String>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    /// Add the `@Deprecated` annotation.
    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !self.doc.is_empty() {
            fragments.push(CodeFragment::Doc(self.doc.clone()));
        }
        if self.deprecated {
            fragments.push(CodeFragment::line("@Deprecated"));
        }
        fragments.push(CodeFragment::Line(format!(
            "{} {}({});",
            self.return_type,
            self.name,
            self.params.join(", ")
        )));
        fragments
    }
}

/// A public field of a data class.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    ty: String,
    doc: Vec<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: Vec::new(),
        }
    }

    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !self.doc.is_empty() {
            fragments.push(CodeFragment::Doc(self.doc.clone()));
        }
        fragments.push(CodeFragment::Line(format!(
            "public {} {};",
            self.ty, self.name
        )));
        fragments
    }
}

/// One constant of an enum. The separator is added by the enclosing enum.
#[derive(Debug, Clone)]
pub struct EnumConstant {
    pub name: String,
    pub doc: Vec<String>,
    pub deprecated: bool,
}

impl EnumConstant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            deprecated: false,
        }
    }

    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    pub(crate) fn fragments(&self, separator: &str) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !self.doc.is_empty() {
            fragments.push(CodeFragment::Doc(self.doc.clone()));
        }
        if self.deprecated {
            fragments.push(CodeFragment::line("@Deprecated"));
        }
        fragments.push(CodeFragment::Line(format!("{}{}", self.name, separator)));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_signature() {
        let method = Method::new("add", "Integer")
            .param(Param::new("Integer", "x"))
            .param(Param::new("Integer", "y"))
            .build();
        assert_eq!(method, "Integer add(Integer x, Integer y);\n");
    }

    #[test]
    fn test_deprecated_method_with_doc() {
        let method = Method::new("legacy", "@Nullable String")
            .doc(javadoc(Some("Old field."), deprecated_tag(Some("Use name"))))
            .deprecated(true)
            .build();
        assert_eq!(
            method,
            "/**\n * Old field.\n *\n * @deprecated Use name\n */\n@Deprecated\n@Nullable String legacy();\n"
        );
    }

    #[test]
    fn test_javadoc_escapes_comment_end() {
        assert_eq!(
            javadoc(Some("a */ b"), None::<String>),
            vec!["a *&#47; b".to_string()]
        );
        assert!(javadoc(None, None::<String>).is_empty());
        assert_eq!(
            javadoc(None, deprecated_tag(Some("gone"))),
            vec!["@deprecated gone".to_string()]
        );
    }

    #[test]
    fn test_field() {
        let field = Field::new("title", "String")
            .doc(vec!["The title".to_string()])
            .build();
        assert_eq!(field, "/** The title */\npublic String title;\n");
    }
}
