//! Java type declarations: interfaces, enums and static classes.

use gqlkit_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::EnumConstant;

/// Builder for `public interface` declarations.
///
/// Members are pre-rendered text (possibly several lines each).
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    extends: Vec<String>,
    doc: Vec<String>,
    members: Vec<String>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: Vec::new(),
            doc: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn extends(mut self, name: impl Into<String>) -> Self {
        self.extends.push(name.into());
        self
    }

    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = String>) -> Self {
        self.members.extend(members);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }

    fn header(&self) -> String {
        if self.extends.is_empty() {
            format!("public interface {}", self.name)
        } else {
            format!(
                "public interface {} extends {}",
                self.name,
                self.extends.join(", ")
            )
        }
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = doc_fragments(&self.doc);
        if self.members.is_empty() {
            fragments.push(CodeFragment::Line(format!("{} {{}}", self.header())));
        } else {
            fragments.push(CodeFragment::block(
                format!("{} {{", self.header()),
                member_lines(&self.members),
                Some("}".to_string()),
            ));
        }
        fragments
    }
}

/// Builder for `public enum` declarations.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Vec<String>,
    constants: Vec<EnumConstant>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            constants: Vec::new(),
        }
    }

    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    pub fn constant(mut self, constant: EnumConstant) -> Self {
        self.constants.push(constant);
        self
    }

    pub fn constants(mut self, constants: impl IntoIterator<Item = EnumConstant>) -> Self {
        self.constants.extend(constants);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = doc_fragments(&self.doc);
        if self.constants.is_empty() {
            fragments.push(CodeFragment::Line(format!("public enum {} {{}}", self.name)));
            return fragments;
        }
        let last = self.constants.len() - 1;
        let body = self
            .constants
            .iter()
            .enumerate()
            .flat_map(|(i, constant)| constant.fragments(if i == last { "" } else { "," }))
            .collect();
        fragments.push(CodeFragment::block(
            format!("public enum {} {{", self.name),
            body,
            Some("}".to_string()),
        ));
        fragments
    }
}

/// Builder for `public static class` declarations holding public fields.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    doc: Vec<String>,
    fields: Vec<String>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = String>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = format!("public static class {}", self.name);
        let mut fragments = doc_fragments(&self.doc);
        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!("{} {{}}", header)));
        } else {
            fragments.push(CodeFragment::block(
                format!("{} {{", header),
                member_lines(&self.fields),
                Some("}".to_string()),
            ));
        }
        fragments
    }
}

fn doc_fragments(doc: &[String]) -> Vec<CodeFragment> {
    if doc.is_empty() {
        Vec::new()
    } else {
        vec![CodeFragment::Doc(doc.to_vec())]
    }
}

fn member_lines(members: &[String]) -> Vec<CodeFragment> {
    members
        .iter()
        .map(|member| CodeFragment::line(member.trim_end_matches('\n')))
        .collect()
}
