//! Executable documents: operations and fragments.

use std::fmt;

use crate::TypeRef;

/// The kind of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// Conventional root type name for this kind.
    pub fn default_root_type(&self) -> &'static str {
        match self {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
            OperationKind::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Query => write!(f, "query"),
            OperationKind::Mutation => write!(f, "mutation"),
            OperationKind::Subscription => write!(f, "subscription"),
        }
    }
}

/// One parsed operation document (usually one file).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Where the document came from, for diagnostics.
    pub source: Option<String>,
    pub definitions: Vec<ExecutableDefinition>,
}

impl Document {
    /// Operations in declaration order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            ExecutableDefinition::Operation(op) => Some(op),
            ExecutableDefinition::Fragment(_) => None,
        })
    }

    /// Fragments in declaration order.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            ExecutableDefinition::Fragment(frag) => Some(frag),
            ExecutableDefinition::Operation(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExecutableDefinition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

/// A query, mutation or subscription.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    /// `None` for anonymous operations, which generators reject.
    pub name: Option<String>,
    pub variables: Vec<VariableDefinition>,
    pub selection_set: SelectionSet,
    /// The operation printed back as GraphQL source.
    pub text: String,
    /// `file:line:column` of the definition, when known.
    pub location: Option<String>,
}

impl OperationDefinition {
    /// Names of fragments spread anywhere in this operation, first use first.
    pub fn fragment_spreads(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.selection_set.collect_spreads(&mut names);
        names
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDefinition {
    pub name: String,
    pub ty: TypeRef,
    /// Default value printed in GraphQL syntax.
    pub default_value: Option<String>,
}

/// A named fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: String,
    pub selection_set: SelectionSet,
    /// The fragment printed back as GraphQL source.
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    pub items: Vec<Selection>,
}

impl SelectionSet {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append fragment names spread in this set (recursively), skipping
    /// names already present.
    pub fn collect_spreads<'a>(&'a self, names: &mut Vec<&'a str>) {
        for item in &self.items {
            match item {
                Selection::Field(field) => field.selection_set.collect_spreads(names),
                Selection::FragmentSpread(name) => {
                    if !names.contains(&name.as_str()) {
                        names.push(name);
                    }
                }
                Selection::InlineFragment(inline) => inline.selection_set.collect_spreads(names),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    /// `...FragmentName`
    FragmentSpread(String),
    InlineFragment(InlineFragment),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSelection {
    pub alias: Option<String>,
    pub name: String,
    pub selection_set: SelectionSet,
}

impl FieldSelection {
    /// The key this field appears under in the response.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub selection_set: SelectionSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, items: Vec<Selection>) -> Selection {
        Selection::Field(FieldSelection {
            alias: None,
            name: name.to_string(),
            selection_set: SelectionSet { items },
        })
    }

    #[test]
    fn test_response_key_prefers_alias() {
        let field = FieldSelection {
            alias: Some("total".to_string()),
            name: "add".to_string(),
            selection_set: SelectionSet::default(),
        };
        assert_eq!(field.response_key(), "total");
    }

    #[test]
    fn test_fragment_spreads_are_deduplicated_in_order() {
        let op = OperationDefinition {
            kind: OperationKind::Query,
            name: Some("Viewer".to_string()),
            variables: Vec::new(),
            selection_set: SelectionSet {
                items: vec![
                    field(
                        "viewer",
                        vec![
                            Selection::FragmentSpread("UserParts".to_string()),
                            Selection::InlineFragment(InlineFragment {
                                type_condition: Some("Admin".to_string()),
                                selection_set: SelectionSet {
                                    items: vec![Selection::FragmentSpread(
                                        "AdminParts".to_string(),
                                    )],
                                },
                            }),
                        ],
                    ),
                    Selection::FragmentSpread("UserParts".to_string()),
                ],
            },
            text: String::new(),
            location: None,
        };

        assert_eq!(op.fragment_spreads(), vec!["UserParts", "AdminParts"]);
    }

    #[test]
    fn test_operation_kind_display() {
        assert_eq!(OperationKind::Query.to_string(), "query");
        assert_eq!(OperationKind::Subscription.default_root_type(), "Subscription");
    }
}
