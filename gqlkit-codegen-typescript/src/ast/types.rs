//! TypeScript object type and type alias builders.

use gqlkit_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A property of a TypeScript object type.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Vec<String>,
    pub optional: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: Vec::new(),
            optional: false,
        }
    }

    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark optional when `optional` is set.
    pub fn optional_if(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub(crate) fn declaration(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}: {};", self.name, optional, self.ty)
    }

    /// The property with its doc comment, as it appears inside an object
    /// type body.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
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
        fragments.push(CodeFragment::Line(self.declaration()));
        fragments
    }
}

/// An inline object type expression (`{ a: string; }`), one property per
/// line. Multi-line property types are indented one level.
pub fn object_literal(fields: &[Field]) -> String {
    if fields.is_empty() {
        return "{}".to_string();
    }
    let indent = Indent::TYPESCRIPT.as_str();
    let mut text = String::from("{\n");
    for field in fields {
        let declaration = field.declaration().replace('\n', &format!("\n{}", indent));
        text.push_str(indent);
        text.push_str(&declaration);
        text.push('\n');
    }
    text.push('}');
    text
}

/// Builder for TypeScript object types (`type Foo = { ... }`).
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    doc: Vec<String>,
    body: Vec<CodeFragment>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.body.extend(field.to_fragments());
        self
    }

    pub fn fields(self, fields: impl IntoIterator<Item = Field>) -> Self {
        fields.into_iter().fold(self, Self::field)
    }

    /// Add already rendered properties (see [`Field::build`]).
    pub fn members(mut self, members: impl IntoIterator<Item = String>) -> Self {
        self.body.extend(
            members
                .into_iter()
                .map(|member| CodeFragment::Line(member.trim_end_matches('\n').to_string())),
        );
        self
    }

    /// Build the object type as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !self.doc.is_empty() {
            fragments.push(CodeFragment::Doc(self.doc.clone()));
        }
        if self.body.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "export type {} = {{}};",
                self.name
            )));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("export type {} = {{", self.name),
                body: self.body.clone(),
                close: Some("};".to_string()),
            });
        }
        fragments
    }
}

/// Builder for TypeScript type aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    doc: Vec<String>,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            ty: ty.into(),
        }
    }

    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !self.doc.is_empty() {
            fragments.push(CodeFragment::Doc(self.doc.clone()));
        }
        fragments.push(CodeFragment::Line(format!(
            "export type {} = {};",
            self.name, self.ty
        )));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type_empty() {
        let t = ObjectType::new("Empty").build();
        assert_eq!(t, "export type Empty = {};\n");
    }

    #[test]
    fn test_object_type_with_fields() {
        let t = ObjectType::new("User")
            .field(Field::new("__typename", "\"User\"").optional())
            .field(Field::new("email", "string | null").doc(vec!["Contact".to_string()]))
            .build();
        assert_eq!(
            t,
            "export type User = {\n  __typename?: \"User\";\n  /** Contact */\n  email: string | null;\n};\n"
        );
    }

    #[test]
    fn test_nested_object_literal() {
        let inner = object_literal(&[Field::new("name", "string")]);
        let outer = object_literal(&[Field::new("user", format!("{} | null", inner))]);
        assert_eq!(outer, "{\n  user: {\n    name: string;\n  } | null;\n}");
    }

    #[test]
    fn test_object_type_with_nested_field() {
        let inner = object_literal(&[Field::new("id", "string")]);
        let t = ObjectType::new("GetUserQuery")
            .field(Field::new("user", inner))
            .build();
        assert_eq!(
            t,
            "export type GetUserQuery = {\n  user: {\n    id: string;\n  };\n};\n"
        );
    }

    #[test]
    fn test_object_type_with_rendered_members() {
        let member = Field::new("email", "string")
            .doc(vec!["Contact".to_string()])
            .optional()
            .build();
        assert_eq!(member, "/** Contact */\nemail?: string;\n");
        let t = ObjectType::new("User").members([member]).build();
        assert_eq!(
            t,
            "export type User = {\n  /** Contact */\n  email?: string;\n};\n"
        );
    }

    #[test]
    fn test_type_alias() {
        let t = TypeAlias::new("SearchResult", "User | Post").build();
        assert_eq!(t, "export type SearchResult = User | Post;\n");
    }

    #[test]
    fn test_type_alias_with_doc() {
        let t = TypeAlias::new("Sdk", "ReturnType<typeof getSdk>")
            .doc(vec!["Every operation helper".to_string()])
            .build();
        assert_eq!(
            t,
            "/** Every operation helper */\nexport type Sdk = ReturnType<typeof getSdk>;\n"
        );
    }
}
