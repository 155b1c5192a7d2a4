//! The client visitor: schema types, then one pending entry per operation.

use std::collections::HashSet;

use gqlkit_ast::{
    Document, EnumType, EnumValue, FieldDefinition, InputObjectType, InputValue, InterfaceType,
    ObjectType, OperationDefinition, OperationKind, Schema, TypeRef, UnionType, VariableDefinition,
};
use gqlkit_codegen::{
    Diagnostic, Diagnostics, FragmentTable, ImportKind, ImportRegistry, SymbolTable, Visitor,
};
use gqlkit_config::{DocumentMode, PluginConfig};
use gqlkit_core::to_pascal_case;
use tracing::debug;

use crate::{
    PLUGIN_NAME,
    ast::{Enum, EnumMember, Field, ObjectType as ObjectTypeBuilder, TypeAlias},
    documents::{OPERATIONS_ALIAS, document_declaration, document_reference, document_text},
    imports::{TsImportStyle, namespace_symbol},
    naming::TS_NAMING,
    operation::{PendingOperation, sdk},
    prelude::{GLOBAL_SYMBOLS, PRELUDE_SYMBOLS, prelude},
    scope::{TYPES_ALIAS, TypeScope},
    selection::SelectionTyper,
};

/// Walks the schema and documents for one client module.
///
/// Schema types are emitted as they are left, unless they are imported from
/// `import_operation_types_from`. Operations never emit directly: each named
/// operation becomes a [`PendingOperation`], rendered after the walk with
/// the prelude, the helpers and the SDK.
pub(crate) struct ClientVisitor<'a> {
    config: &'a PluginConfig,
    scope: TypeScope<'a>,
    fragments: FragmentTable<'a>,
    symbols: SymbolTable,
    imports: ImportRegistry,
    pending: Vec<PendingOperation>,
    operation_names: HashSet<String>,
    diagnostics: Diagnostics,
}

impl<'a> ClientVisitor<'a> {
    pub(crate) fn new(
        schema: &'a Schema,
        documents: &'a [Document],
        config: &'a PluginConfig,
    ) -> Self {
        let mut symbols = SymbolTable::new();
        for symbol in PRELUDE_SYMBOLS.iter().chain(GLOBAL_SYMBOLS) {
            symbols.reserve(*symbol);
        }

        let mut imports = ImportRegistry::new();
        imports.record("GraphQLFormattedError", "graphql", ImportKind::Type);
        match config.document_mode {
            DocumentMode::String => {}
            DocumentMode::DocumentNode => {
                imports.record("DocumentNode", "graphql", ImportKind::Type);
                imports.record("print", "graphql", ImportKind::Value);
                imports.record("gql", "graphql-tag", ImportKind::Value);
            }
            DocumentMode::External => {
                imports.record("DocumentNode", "graphql", ImportKind::Type);
                imports.record("print", "graphql", ImportKind::Value);
            }
        }

        let external_types = config.import_operation_types_from.is_some();
        if let Some(module) = &config.import_operation_types_from {
            symbols.reserve(TYPES_ALIAS);
            imports.record(&namespace_symbol(TYPES_ALIAS), module, ImportKind::Type);
        }
        if let Some(module) = &config.import_documents_from
            && config.document_mode == DocumentMode::External
        {
            symbols.reserve(OPERATIONS_ALIAS);
            imports.record(&namespace_symbol(OPERATIONS_ALIAS), module, ImportKind::Value);
        }

        let scope = TypeScope::new(schema, config.scalars.clone(), &mut symbols, external_types);

        Self {
            config,
            scope,
            fragments: FragmentTable::from_documents(documents),
            symbols,
            imports,
            pending: Vec::new(),
            operation_names: HashSet::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub(crate) fn imports(&self) -> Vec<String> {
        self.imports
            .render(&TsImportStyle::new(self.config.use_type_imports))
    }

    /// The prelude, which goes before the schema types.
    pub(crate) fn prelude(&self) -> Vec<String> {
        prelude(self.config.document_mode)
    }

    /// Per-operation declarations, helpers and the SDK, in that order.
    pub(crate) fn extras(&self) -> Vec<String> {
        let declarations = self
            .pending
            .iter()
            .flat_map(|operation| operation.declarations.iter().cloned());
        let helpers = self.pending.iter().map(PendingOperation::helper);
        declarations
            .chain(helpers)
            .chain(sdk(&self.pending))
            .collect()
    }

    pub(crate) fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    fn emits_schema_types(&self) -> bool {
        self.config.import_operation_types_from.is_none()
    }

    fn operation_type_name(&mut self, name: String) -> String {
        if self.emits_schema_types() {
            self.symbols.claim(&name)
        } else {
            self.scope.reference(&name)
        }
    }
}

/// Doc lines for a description and a deprecation reason.
fn tsdoc(description: Option<&str>, deprecated: Option<&str>) -> Vec<String> {
    let mut lines: Vec<String> = description
        .map(|text| text.replace("*/", "*\\/").lines().map(str::to_string).collect())
        .unwrap_or_default();
    if let Some(reason) = deprecated {
        lines.push(format!("@deprecated {}", reason));
    }
    lines
}

fn kind_suffix(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Query => "Query",
        OperationKind::Mutation => "Mutation",
        OperationKind::Subscription => "Subscription",
    }
}

fn is_optional(ty: &TypeRef, default_value: Option<&String>) -> bool {
    !ty.is_non_null() || default_value.is_some()
}

impl Visitor for ClientVisitor<'_> {
    fn leave_enum_value(&mut self, _parent: &EnumType, value: &EnumValue) -> Option<String> {
        Some(TS_NAMING.enum_member_name(&value.name))
    }

    fn leave_enum(&mut self, enum_type: &EnumType, values: Vec<String>) -> Option<String> {
        if !self.emits_schema_types() {
            return None;
        }
        let mut names = SymbolTable::new();
        let members: Vec<EnumMember> = enum_type
            .values
            .iter()
            .zip(values)
            .map(|(value, name)| {
                EnumMember::new(names.claim(&name), &value.name).doc(tsdoc(
                    value.description.as_deref(),
                    value.deprecated.as_deref(),
                ))
            })
            .collect();
        Some(
            Enum::new(self.scope.declared_name(&enum_type.name))
                .doc(tsdoc(enum_type.description.as_deref(), None))
                .members(members)
                .build(),
        )
    }

    fn leave_field(
        &mut self,
        _parent: &str,
        field: &FieldDefinition,
        _arguments: Vec<String>,
    ) -> Option<String> {
        if !self.emits_schema_types() {
            return None;
        }
        let ty = self.scope.resolve(&field.ty, &mut self.diagnostics, None);
        Some(
            Field::new(field.name.clone(), ty)
                .doc(tsdoc(field.description.as_deref(), field.deprecated.as_deref()))
                .build(),
        )
    }

    fn leave_object(&mut self, object: &ObjectType, fields: Vec<String>) -> Option<String> {
        if !self.emits_schema_types() {
            return None;
        }
        let typename = Field::new("__typename", format!("\"{}\"", object.name))
            .optional()
            .build();
        Some(
            ObjectTypeBuilder::new(self.scope.declared_name(&object.name))
                .doc(tsdoc(object.description.as_deref(), None))
                .members([typename])
                .members(fields)
                .build(),
        )
    }

    fn leave_interface(&mut self, interface: &InterfaceType, fields: Vec<String>) -> Option<String> {
        if !self.emits_schema_types() {
            return None;
        }
        let typename = Field::new("__typename", self.scope.typename_literal(&interface.name))
            .optional()
            .build();
        Some(
            ObjectTypeBuilder::new(self.scope.declared_name(&interface.name))
                .doc(tsdoc(interface.description.as_deref(), None))
                .members([typename])
                .members(fields)
                .build(),
        )
    }

    fn leave_union(&mut self, union: &UnionType) -> Option<String> {
        if !self.emits_schema_types() {
            return None;
        }
        let members: Vec<String> = union
            .members
            .iter()
            .map(|member| self.scope.declared_name(member))
            .collect();
        let ty = if members.is_empty() {
            "never".to_string()
        } else {
            members.join(" | ")
        };
        Some(
            TypeAlias::new(self.scope.declared_name(&union.name), ty)
                .doc(tsdoc(union.description.as_deref(), None))
                .build(),
        )
    }

    fn leave_input_field(&mut self, _parent: &InputObjectType, field: &InputValue) -> Option<String> {
        if !self.emits_schema_types() {
            return None;
        }
        let ty = self.scope.resolve(&field.ty, &mut self.diagnostics, None);
        let mut doc = tsdoc(field.description.as_deref(), None);
        if let Some(value) = &field.default_value {
            doc.push(format!("Defaults to `{}`.", value));
        }
        Some(
            Field::new(field.name.clone(), ty)
                .doc(doc)
                .optional_if(is_optional(&field.ty, field.default_value.as_ref()))
                .build(),
        )
    }

    fn leave_input_object(&mut self, input: &InputObjectType, fields: Vec<String>) -> Option<String> {
        if !self.emits_schema_types() {
            return None;
        }
        Some(
            ObjectTypeBuilder::new(self.scope.declared_name(&input.name))
                .doc(tsdoc(input.description.as_deref(), None))
                .members(fields)
                .build(),
        )
    }

    fn leave_variable(
        &mut self,
        operation: &OperationDefinition,
        variable: &VariableDefinition,
    ) -> Option<String> {
        if operation.name.is_none() {
            return None;
        }
        let ty = self.scope.resolve(
            &variable.ty,
            &mut self.diagnostics,
            operation.location.as_deref(),
        );
        Some(
            Field::new(variable.name.clone(), ty)
                .optional_if(is_optional(&variable.ty, variable.default_value.as_ref()))
                .build(),
        )
    }

    fn leave_operation(
        &mut self,
        operation: &OperationDefinition,
        variables: Vec<String>,
    ) -> Option<String> {
        let location = operation.location.as_deref();
        let Some(name) = operation.name.as_deref() else {
            self.diagnostics.push(
                Diagnostic::warning(PLUGIN_NAME, format!("anonymous {} skipped", operation.kind))
                    .at_opt(location),
            );
            return None;
        };
        if !self.operation_names.insert(name.to_string()) {
            self.diagnostics.push(
                Diagnostic::warning(
                    PLUGIN_NAME,
                    format!("duplicate operation name '{}'; helper renamed", name),
                )
                .at_opt(location),
            );
        }

        let pascal = to_pascal_case(name);
        let helper = self.symbols.claim(&TS_NAMING.member_name(name));
        let result_name = format!("{}{}", pascal, kind_suffix(operation.kind));
        let result_type = self.operation_type_name(result_name.clone());
        let variables_type = self.operation_type_name(format!("{}Variables", result_name));

        let mode = self.config.document_mode;
        let document_name = format!("{}Document", pascal);
        let document_name = if mode == DocumentMode::External {
            document_name
        } else {
            self.symbols.claim(&document_name)
        };

        let variables_optional = operation
            .variables
            .iter()
            .all(|variable| is_optional(&variable.ty, variable.default_value.as_ref()));

        let mut declarations = Vec::new();
        if self.emits_schema_types() {
            declarations.push(if variables.is_empty() {
                TypeAlias::new(&variables_type, "Record<string, never>").build()
            } else {
                ObjectTypeBuilder::new(&variables_type)
                    .members(variables)
                    .build()
            });

            let root = self.scope.schema().root_type(operation.kind).to_string();
            let typer = SelectionTyper::new(&self.scope, &self.fragments, location);
            let result = typer.object(&root, &[&operation.selection_set], &mut self.diagnostics);
            declarations.push(TypeAlias::new(&result_type, result).build());
        }
        let text = document_text(operation, &self.fragments);
        declarations.extend(document_declaration(mode, &document_name, &text));

        debug!(operation = name, %helper, "captured operation");
        self.pending.push(PendingOperation {
            kind: operation.kind,
            operation_name: name.to_string(),
            helper,
            document: document_reference(mode, &document_name),
            result_type,
            variables_type,
            variables_optional,
            declarations,
        });
        None
    }
}
