//! Lowering from `graphql-parser` ASTs into the normalized tree.

use graphql_parser::{Pos, query as q, schema as s};
use tracing::debug;

use crate::{
    Document, EnumType, EnumValue, Error, ExecutableDefinition, FieldDefinition, FieldSelection,
    FragmentDefinition, InlineFragment, InputObjectType, InputValue, InterfaceType, ObjectType,
    OperationDefinition, OperationKind, Result, ScalarType, Schema, Selection, SelectionSet,
    TypeDefinition, TypeRef, UnionType, VariableDefinition,
};

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Parse and merge one or more SDL sources into a [`Schema`].
///
/// Sources are `(file name, content)` pairs; the file name is only used in
/// error messages. Type extensions are applied after every source has been
/// read, so an `extend type` may precede the type it extends.
pub fn parse_schema<'a>(sources: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Schema> {
    let mut types = Vec::new();
    let mut extensions = Vec::new();
    let mut roots = Vec::new();

    for (file, content) in sources {
        let doc = s::parse_schema::<String>(content).map_err(|err| {
            Box::new(Error::SchemaParse {
                file: file.to_string(),
                message: err.to_string(),
            })
        })?;

        for def in doc.definitions {
            match def {
                s::Definition::SchemaDefinition(schema_def) => {
                    let named = [
                        (OperationKind::Query, schema_def.query),
                        (OperationKind::Mutation, schema_def.mutation),
                        (OperationKind::Subscription, schema_def.subscription),
                    ];
                    for (kind, name) in named {
                        if let Some(name) = name {
                            roots.push((kind, name));
                        }
                    }
                }
                s::Definition::TypeDefinition(def) => types.push(lower_type_definition(&def)),
                s::Definition::TypeExtension(ext) => extensions.push(ext),
                s::Definition::DirectiveDefinition(_) => {}
            }
        }
    }

    for ext in &extensions {
        apply_extension(&mut types, ext);
    }

    let mut schema = Schema::new(types);
    for (kind, name) in roots {
        schema = schema.with_root(kind, name);
    }
    debug!(types = schema.types().len(), "parsed schema");
    Ok(schema)
}

/// Parse an executable document (operations and fragments).
pub fn parse_document(content: &str, file: &str) -> Result<Document> {
    let doc = q::parse_query::<String>(content).map_err(|err| {
        Box::new(Error::DocumentParse {
            file: file.to_string(),
            message: err.to_string(),
        })
    })?;

    let definitions = doc
        .definitions
        .iter()
        .map(|def| lower_executable_definition(def, file))
        .collect();

    Ok(Document {
        source: Some(file.to_string()),
        definitions,
    })
}

fn lower_type(ty: &s::Type<'_, String>) -> TypeRef {
    match ty {
        s::Type::NamedType(name) => TypeRef::Named(name.clone()),
        s::Type::ListType(inner) => TypeRef::list(lower_type(inner)),
        s::Type::NonNullType(inner) => TypeRef::non_null(lower_type(inner)),
    }
}

fn lower_type_definition(def: &s::TypeDefinition<'_, String>) -> TypeDefinition {
    match def {
        s::TypeDefinition::Scalar(t) => TypeDefinition::Scalar(ScalarType {
            name: t.name.clone(),
            description: t.description.clone(),
        }),
        s::TypeDefinition::Object(t) => TypeDefinition::Object(ObjectType {
            name: t.name.clone(),
            description: t.description.clone(),
            interfaces: t.implements_interfaces.clone(),
            fields: t.fields.iter().map(lower_field).collect(),
        }),
        s::TypeDefinition::Interface(t) => TypeDefinition::Interface(InterfaceType {
            name: t.name.clone(),
            description: t.description.clone(),
            fields: t.fields.iter().map(lower_field).collect(),
        }),
        s::TypeDefinition::Union(t) => TypeDefinition::Union(UnionType {
            name: t.name.clone(),
            description: t.description.clone(),
            members: t.types.clone(),
        }),
        s::TypeDefinition::Enum(t) => TypeDefinition::Enum(EnumType {
            name: t.name.clone(),
            description: t.description.clone(),
            values: t.values.iter().map(lower_enum_value).collect(),
        }),
        s::TypeDefinition::InputObject(t) => TypeDefinition::InputObject(InputObjectType {
            name: t.name.clone(),
            description: t.description.clone(),
            fields: t.fields.iter().map(lower_input_value).collect(),
        }),
    }
}

fn lower_field(field: &s::Field<'_, String>) -> FieldDefinition {
    FieldDefinition {
        name: field.name.clone(),
        description: field.description.clone(),
        arguments: field.arguments.iter().map(lower_input_value).collect(),
        ty: lower_type(&field.field_type),
        deprecated: deprecation(&field.directives),
    }
}

fn lower_input_value(value: &s::InputValue<'_, String>) -> InputValue {
    InputValue {
        name: value.name.clone(),
        description: value.description.clone(),
        ty: lower_type(&value.value_type),
        default_value: value.default_value.as_ref().map(print_value),
    }
}

fn lower_enum_value(value: &s::EnumValue<'_, String>) -> EnumValue {
    EnumValue {
        name: value.name.clone(),
        description: value.description.clone(),
        deprecated: deprecation(&value.directives),
    }
}

fn deprecation(directives: &[s::Directive<'_, String>]) -> Option<String> {
    let directive = directives.iter().find(|d| d.name == "deprecated")?;
    let reason = directive
        .arguments
        .iter()
        .find_map(|(name, value)| match value {
            s::Value::String(reason) if name == "reason" => Some(reason.clone()),
            _ => None,
        });
    Some(reason.unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string()))
}

fn apply_extension(types: &mut [TypeDefinition], ext: &s::TypeExtension<'_, String>) {
    let (name, target) = match ext {
        s::TypeExtension::Object(e) => (&e.name, find_mut(types, &e.name)),
        s::TypeExtension::Interface(e) => (&e.name, find_mut(types, &e.name)),
        s::TypeExtension::Union(e) => (&e.name, find_mut(types, &e.name)),
        s::TypeExtension::Enum(e) => (&e.name, find_mut(types, &e.name)),
        s::TypeExtension::InputObject(e) => (&e.name, find_mut(types, &e.name)),
        s::TypeExtension::Scalar(_) => return,
    };

    match (ext, target) {
        (s::TypeExtension::Object(e), Some(TypeDefinition::Object(t))) => {
            t.interfaces.extend(e.implements_interfaces.iter().cloned());
            t.fields.extend(e.fields.iter().map(lower_field));
        }
        (s::TypeExtension::Interface(e), Some(TypeDefinition::Interface(t))) => {
            t.fields.extend(e.fields.iter().map(lower_field));
        }
        (s::TypeExtension::Union(e), Some(TypeDefinition::Union(t))) => {
            t.members.extend(e.types.iter().cloned());
        }
        (s::TypeExtension::Enum(e), Some(TypeDefinition::Enum(t))) => {
            t.values.extend(e.values.iter().map(lower_enum_value));
        }
        (s::TypeExtension::InputObject(e), Some(TypeDefinition::InputObject(t))) => {
            t.fields.extend(e.fields.iter().map(lower_input_value));
        }
        _ => debug!(%name, "ignoring extension without a matching definition"),
    }
}

fn find_mut<'t>(types: &'t mut [TypeDefinition], name: &str) -> Option<&'t mut TypeDefinition> {
    types.iter_mut().find(|t| t.name() == name)
}

fn lower_executable_definition(def: &q::Definition<'_, String>, file: &str) -> ExecutableDefinition {
    match def {
        q::Definition::Operation(op) => ExecutableDefinition::Operation(lower_operation(op, file)),
        q::Definition::Fragment(frag) => {
            let q::TypeCondition::On(type_condition) = &frag.type_condition;
            ExecutableDefinition::Fragment(FragmentDefinition {
                name: frag.name.clone(),
                type_condition: type_condition.clone(),
                selection_set: lower_selection_set(&frag.selection_set),
                text: print_definition(def),
            })
        }
    }
}

fn lower_operation(op: &q::OperationDefinition<'_, String>, file: &str) -> OperationDefinition {
    let (kind, name, variables, selection_set, position) = match op {
        q::OperationDefinition::Query(query) => (
            OperationKind::Query,
            query.name.clone(),
            query.variable_definitions.as_slice(),
            &query.selection_set,
            query.position,
        ),
        q::OperationDefinition::Mutation(mutation) => (
            OperationKind::Mutation,
            mutation.name.clone(),
            mutation.variable_definitions.as_slice(),
            &mutation.selection_set,
            mutation.position,
        ),
        q::OperationDefinition::Subscription(subscription) => (
            OperationKind::Subscription,
            subscription.name.clone(),
            subscription.variable_definitions.as_slice(),
            &subscription.selection_set,
            subscription.position,
        ),
        q::OperationDefinition::SelectionSet(set) => {
            (OperationKind::Query, None, &[][..], set, set.span.0)
        }
    };

    OperationDefinition {
        kind,
        name,
        variables: variables.iter().map(lower_variable).collect(),
        selection_set: lower_selection_set(selection_set),
        text: print_definition(&q::Definition::Operation(op.clone())),
        location: Some(location(file, position)),
    }
}

fn lower_variable(var: &q::VariableDefinition<'_, String>) -> VariableDefinition {
    VariableDefinition {
        name: var.name.clone(),
        ty: lower_type(&var.var_type),
        default_value: var.default_value.as_ref().map(print_value),
    }
}

fn lower_selection_set(set: &q::SelectionSet<'_, String>) -> SelectionSet {
    let items = set
        .items
        .iter()
        .map(|item| match item {
            q::Selection::Field(field) => Selection::Field(FieldSelection {
                alias: field.alias.clone(),
                name: field.name.clone(),
                selection_set: lower_selection_set(&field.selection_set),
            }),
            q::Selection::FragmentSpread(spread) => {
                Selection::FragmentSpread(spread.fragment_name.clone())
            }
            q::Selection::InlineFragment(inline) => Selection::InlineFragment(InlineFragment {
                type_condition: inline.type_condition.as_ref().map(|cond| match cond {
                    q::TypeCondition::On(name) => name.clone(),
                }),
                selection_set: lower_selection_set(&inline.selection_set),
            }),
        })
        .collect();
    SelectionSet { items }
}

fn location(file: &str, pos: Pos) -> String {
    format!("{}:{}:{}", file, pos.line, pos.column)
}

/// Print one definition back to GraphQL source through the parser's own
/// formatter.
fn print_definition(def: &q::Definition<'_, String>) -> String {
    let doc = q::Document {
        definitions: vec![def.clone()],
    };
    doc.to_string().trim_end().to_string()
}

fn print_value(value: &q::Value<'_, String>) -> String {
    match value {
        q::Value::Variable(name) => format!("${}", name),
        q::Value::Int(number) => number
            .as_i64()
            .map(|n| n.to_string())
            .unwrap_or_default(),
        q::Value::Float(f) => f.to_string(),
        q::Value::String(s) => print_string(s),
        q::Value::Boolean(b) => b.to_string(),
        q::Value::Null => "null".to_string(),
        q::Value::Enum(name) => name.clone(),
        q::Value::List(items) => {
            let items: Vec<String> = items.iter().map(print_value).collect();
            format!("[{}]", items.join(", "))
        }
        q::Value::Object(fields) => {
            let fields: Vec<String> = fields
                .iter()
                .map(|(name, value)| format!("{}: {}", name, print_value(value)))
                .collect();
            format!("{{{}}}", fields.join(", "))
        }
    }
}

/// A GraphQL string literal; control characters use `\uXXXX`.
fn print_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
