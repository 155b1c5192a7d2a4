//! Declaration nodes lowered to fragments before they become text.

/// One piece of a rendered declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A line at the current depth; embedded newlines are indented too.
    Line(String),
    /// A `/** ... */` comment, one entry per line.
    Doc(Vec<String>),
    /// A header, a body one level deeper, and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: Option<String>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Doc comment from a GraphQL description; trailing spaces are dropped.
    pub fn doc(text: &str) -> Self {
        Self::Doc(text.lines().map(|l| l.trim_end().to_string()).collect())
    }
}

/// A declaration node (interface, enum, method, property, ...).
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_splits_lines() {
        assert_eq!(
            CodeFragment::doc("First line  \nSecond"),
            CodeFragment::Doc(vec!["First line".to_string(), "Second".to_string()])
        );
    }

    #[test]
    fn test_block_without_close() {
        let block = CodeFragment::block("case ADMIN:", vec![CodeFragment::line("break;")], None);
        assert_eq!(
            block,
            CodeFragment::Block {
                header: "case ADMIN:".to_string(),
                body: vec![CodeFragment::Line("break;".to_string())],
                close: None,
            }
        );
    }
}
