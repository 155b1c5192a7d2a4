//! TypeScript enum builder.

use gqlkit_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A string-valued enum member.
#[derive(Debug, Clone)]
pub struct EnumMember {
    pub name: String,
    pub value: String,
    pub doc: Vec<String>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            doc: Vec::new(),
        }
    }

    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }
}

/// Builder for `export enum` declarations with string values.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Vec<String>,
    members: Vec<EnumMember>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    pub fn member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = EnumMember>) -> Self {
        self.members.extend(members);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !self.doc.is_empty() {
            fragments.push(CodeFragment::Doc(self.doc.clone()));
        }
        let body = self
            .members
            .iter()
            .flat_map(|member| {
                let mut lines = Vec::new();
                if !member.doc.is_empty() {
                    lines.push(CodeFragment::Doc(member.doc.clone()));
                }
                lines.push(CodeFragment::Line(format!(
                    "{} = \"{}\",",
                    member.name, member.value
                )));
                lines
            })
            .collect();
        fragments.push(CodeFragment::block(
            format!("export enum {} {{", self.name),
            body,
            Some("}".to_string()),
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_members() {
        let e = Enum::new("Role")
            .member(EnumMember::new("Admin", "ADMIN"))
            .member(
                EnumMember::new("Guest", "GUEST").doc(vec!["@deprecated Use MEMBER".to_string()]),
            )
            .build();
        insta::assert_snapshot!(e, @r#"
        export enum Role {
          Admin = "ADMIN",
          /** @deprecated Use MEMBER */
          Guest = "GUEST",
        }
        "#);
    }
}
