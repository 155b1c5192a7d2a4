//! Operation document text and its declaration in each document mode.

use gqlkit_ast::OperationDefinition;
use gqlkit_codegen::FragmentTable;
use gqlkit_config::DocumentMode;

use crate::ast::Const;

/// Alias under which externally defined documents are imported.
pub(crate) const OPERATIONS_ALIAS: &str = "Operations";

/// The operation's source followed by every fragment it needs, directly or
/// through other fragments, in first-use order.
pub(crate) fn document_text<'a>(
    operation: &'a OperationDefinition,
    fragments: &FragmentTable<'a>,
) -> String {
    let mut names = operation.fragment_spreads();
    let mut i = 0;
    while i < names.len() {
        if let Some(fragment) = fragments.get(names[i]) {
            fragment.selection_set.collect_spreads(&mut names);
        }
        i += 1;
    }

    let mut parts = vec![operation.text.as_str()];
    parts.extend(
        names
            .iter()
            .filter_map(|name| fragments.get(name))
            .map(|fragment| fragment.text.as_str()),
    );
    parts.join("\n\n")
}

/// Escape text for a template literal.
pub(crate) fn escape_template(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// The expression a helper passes as its document.
pub(crate) fn document_reference(mode: DocumentMode, name: &str) -> String {
    match mode {
        DocumentMode::External => format!("{}.{}", OPERATIONS_ALIAS, name),
        DocumentMode::String | DocumentMode::DocumentNode => name.to_string(),
    }
}

/// The document declaration, or `None` when documents live elsewhere.
pub(crate) fn document_declaration(mode: DocumentMode, name: &str, text: &str) -> Option<String> {
    let literal = format!("`{}`", escape_template(text));
    match mode {
        DocumentMode::String => Some(Const::new(name, literal).build()),
        DocumentMode::DocumentNode => Some(
            Const::new(name, format!("gql{}", literal))
                .ty("DocumentNode")
                .build(),
        ),
        DocumentMode::External => None,
    }
}
