//! Result types for selection sets.

use gqlkit_ast::{Selection, SelectionSet};
use gqlkit_codegen::{Diagnostic, Diagnostics, FragmentTable, TypeSyntax};
use indexmap::IndexMap;

use crate::{
    PLUGIN_NAME,
    ast::{Field, object_literal},
    scope::TypeScope,
};

const TYPENAME: &str = "__typename";

/// One response key of a selection set, merged across every selection that
/// produces it.
#[derive(Debug)]
struct Entry<'d> {
    field: &'d str,
    /// The type the field was selected on.
    parent: String,
    sets: Vec<&'d SelectionSet>,
    optional: bool,
}

/// Turns selection sets into inline object types.
///
/// Fragment spreads and inline fragments are flattened into their parent.
/// Fields selected under a type condition that does not always hold become
/// optional properties.
pub(crate) struct SelectionTyper<'s, 'a> {
    scope: &'s TypeScope<'a>,
    fragments: &'s FragmentTable<'a>,
    location: Option<&'s str>,
}

impl<'s, 'a> SelectionTyper<'s, 'a> {
    pub(crate) fn new(
        scope: &'s TypeScope<'a>,
        fragments: &'s FragmentTable<'a>,
        location: Option<&'s str>,
    ) -> Self {
        Self {
            scope,
            fragments,
            location,
        }
    }

    /// The object type for `sets` selected on `type_name`.
    pub(crate) fn object<'d>(
        &self,
        type_name: &str,
        sets: &[&'d SelectionSet],
        diagnostics: &mut Diagnostics,
    ) -> String
    where
        'a: 'd,
    {
        let mut entries: IndexMap<&'d str, Entry<'d>> = IndexMap::new();
        let mut active = Vec::new();
        for set in sets {
            self.collect(type_name, set, false, &mut entries, &mut active, diagnostics);
        }

        let fields: Vec<Field> = entries
            .into_iter()
            .map(|(key, entry)| {
                let ty = self.entry_type(&entry, diagnostics);
                Field::new(key, ty).optional_if(entry.optional)
            })
            .collect();
        object_literal(&fields)
    }

    fn collect<'d>(
        &self,
        parent: &str,
        set: &'d SelectionSet,
        optional: bool,
        entries: &mut IndexMap<&'d str, Entry<'d>>,
        active: &mut Vec<&'d str>,
        diagnostics: &mut Diagnostics,
    ) where
        'a: 'd,
    {
        for item in &set.items {
            match item {
                Selection::Field(field) => {
                    let entry = entries.entry(field.response_key()).or_insert_with(|| Entry {
                        field: &field.name,
                        parent: parent.to_string(),
                        sets: Vec::new(),
                        optional,
                    });
                    entry.optional &= optional;
                    entry.sets.push(&field.selection_set);
                }
                Selection::FragmentSpread(name) => {
                    let Some(fragment) = self.fragments.get(name) else {
                        diagnostics.push(
                            Diagnostic::warning(PLUGIN_NAME, format!("unknown fragment '{}'", name))
                                .at_opt(self.location),
                        );
                        continue;
                    };
                    if active.contains(&name.as_str()) {
                        continue;
                    }
                    active.push(name.as_str());
                    let condition = fragment.type_condition.as_str();
                    let conditional = !self.scope.always_applies(parent, condition);
                    self.collect(
                        condition,
                        &fragment.selection_set,
                        optional || conditional,
                        entries,
                        active,
                        diagnostics,
                    );
                    active.pop();
                }
                Selection::InlineFragment(inline) => {
                    let condition = inline.type_condition.as_deref().unwrap_or(parent);
                    let conditional = !self.scope.always_applies(parent, condition);
                    self.collect(
                        condition,
                        &inline.selection_set,
                        optional || conditional,
                        entries,
                        active,
                        diagnostics,
                    );
                }
            }
        }
    }

    fn entry_type<'d>(&self, entry: &Entry<'d>, diagnostics: &mut Diagnostics) -> String
    where
        'a: 'd,
    {
        if entry.field == TYPENAME {
            return self.scope.typename_literal(&entry.parent);
        }

        let schema = self.scope.schema();
        let Some(definition) = schema.field(&entry.parent, entry.field) else {
            diagnostics.push(
                Diagnostic::warning(
                    PLUGIN_NAME,
                    format!("unknown field '{}' on type '{}'", entry.field, entry.parent),
                )
                .at_opt(self.location),
            );
            return self.scope.syntax().fallback().to_string();
        };

        let base = definition.ty.base_name();
        let composite = schema.kind_of(base).is_some_and(|kind| kind.is_composite());
        if composite {
            let nested = self.object(base, &entry.sets, diagnostics);
            self.scope.resolve_with(&definition.ty, |_| nested.clone())
        } else {
            self.scope.resolve(&definition.ty, diagnostics, self.location)
        }
    }
}
