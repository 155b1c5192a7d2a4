//! The resolver visitor: one nested declaration per schema type.

use std::collections::HashSet;

use gqlkit_ast::{
    EnumType, EnumValue, FieldDefinition, InputObjectType, InputValue, InterfaceType, ObjectType,
    Schema, TypeDefinition, TypeKind, TypeRef, UnionType,
};
use gqlkit_codegen::{Diagnostic, Diagnostics, SymbolTable, TypeResolver, TypeSyntax, Visitor};
use gqlkit_config::PluginConfig;
use indexmap::IndexMap;

use crate::{
    PLUGIN_NAME,
    ast::{Class, Enum, EnumConstant, Field, Interface, Method, Param, deprecated_tag, javadoc},
    imports::{DATA_FETCHING_ENVIRONMENT, JavaImports, TYPE_RESOLVER},
    naming::{JAVA_LANG_TYPES, JAVA_NAMING},
    type_syntax::{JavaTypeSyntax, LIST_FQN, NULLABLE_FQN},
};

/// Walks the schema and emits resolver interfaces, enums and input classes.
///
/// Object types become interfaces with one method per field; the trailing
/// `DataFetchingEnvironment` parameter is renamed when an argument already
/// uses its name.
pub(crate) struct ResolverVisitor<'a> {
    schema: &'a Schema,
    config: &'a PluginConfig,
    resolver: TypeResolver<JavaTypeSyntax>,
    imports: JavaImports,
    /// GraphQL type name to the nested Java declaration name.
    declared: IndexMap<String, String>,
    diagnostics: Diagnostics,
    unknown: HashSet<String>,
    members: MemberScope,
    /// Parameters of the field being visited, in argument order.
    params: Vec<String>,
    param_names: SymbolTable,
}

/// Member names handed out within one declaration.
///
/// `user_name` and `userName` both sanitize to `userName`; the second one
/// becomes `userName_1`.
#[derive(Debug, Default)]
struct MemberScope {
    owner: String,
    names: SymbolTable,
}

impl MemberScope {
    fn claim(&mut self, owner: &str, name: &str) -> String {
        if self.owner != owner {
            self.owner = owner.to_string();
            self.names = SymbolTable::new();
        }
        self.names.claim(name)
    }
}

impl<'a> ResolverVisitor<'a> {
    pub(crate) fn new(schema: &'a Schema, config: &'a PluginConfig, class_name: &str) -> Self {
        let mut symbols = SymbolTable::new();
        symbols.reserve(class_name);
        for name in JAVA_LANG_TYPES {
            symbols.reserve(*name);
        }

        let mut declared = IndexMap::new();
        for def in schema.types() {
            if matches!(def, TypeDefinition::Scalar(_)) || declared.contains_key(def.name()) {
                continue;
            }
            let name = symbols.claim(&JAVA_NAMING.type_name(def.name()));
            declared.insert(def.name().to_string(), name);
        }

        let local_names: Vec<String> = declared
            .values()
            .cloned()
            .chain(schema.types().iter().map(|def| def.name().to_string()))
            .chain([class_name.to_string()])
            .chain(JAVA_LANG_TYPES.iter().map(|name| name.to_string()))
            .collect();
        let mut imports = JavaImports::new(local_names);

        let syntax = JavaTypeSyntax::new(imports.is_local("List"), imports.is_local("Nullable"));
        if syntax.imports_list() {
            imports.claim(LIST_FQN);
        }
        if syntax.imports_nullable() {
            imports.claim(NULLABLE_FQN);
        }
        imports.claim(DATA_FETCHING_ENVIRONMENT);
        imports.claim(TYPE_RESOLVER);

        Self {
            schema,
            config,
            resolver: TypeResolver::new(syntax, config.scalars.clone()),
            imports,
            declared,
            diagnostics: Diagnostics::new(),
            unknown: HashSet::new(),
            members: MemberScope::default(),
            params: Vec::new(),
            param_names: SymbolTable::new(),
        }
    }

    pub(crate) fn imports(&self) -> Vec<String> {
        self.imports.render()
    }

    pub(crate) fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    fn declared_name(&self, graphql_name: &str) -> String {
        self.declared
            .get(graphql_name)
            .cloned()
            .unwrap_or_else(|| JAVA_NAMING.type_name(graphql_name))
    }

    /// Spell a type reference, recording whatever it needs imported.
    fn java_type(&mut self, ty: &TypeRef) -> String {
        let schema = self.schema;
        let mappers = &self.config.mappers;
        let resolver = &self.resolver;
        let declared = &self.declared;
        let imports = &mut self.imports;
        let diagnostics = &mut self.diagnostics;
        let unknown = &mut self.unknown;

        let rendered = resolver.resolve(ty, |name| match schema.kind_of(name) {
            Some(TypeKind::Scalar) => {
                let mapped = resolver.scalar(name);
                if resolver.is_configured(name) {
                    imports.reference(&mapped)
                } else {
                    mapped
                }
            }
            Some(TypeKind::Enum | TypeKind::InputObject) => declared
                .get(name)
                .cloned()
                .unwrap_or_else(|| resolver.syntax().fallback().to_string()),
            Some(TypeKind::Object | TypeKind::Interface | TypeKind::Union) => {
                match mappers.get(name) {
                    Some(mapped) => imports.reference(mapped),
                    None => resolver.syntax().fallback().to_string(),
                }
            }
            None => {
                if unknown.insert(name.to_string()) {
                    diagnostics.push(Diagnostic::warning(
                        PLUGIN_NAME,
                        format!("unknown type '{}' mapped to Object", name),
                    ));
                }
                resolver.syntax().fallback().to_string()
            }
        });

        if ty.has_list() && self.resolver.syntax().imports_list() {
            self.imports.record(LIST_FQN);
        }
        if ty.has_nullable_position() && self.resolver.syntax().imports_nullable() {
            self.imports.record(NULLABLE_FQN);
        }
        rendered
    }

    /// The trailing parameter, named after whatever the arguments left free.
    fn environment_param(&mut self) -> Param {
        let ty = self.imports.reference(DATA_FETCHING_ENVIRONMENT);
        let name = if self.param_names.is_taken("environment") {
            self.param_names.claim("dataFetchingEnvironment")
        } else {
            self.param_names.claim("environment")
        };
        Param::new(ty, name)
    }
}

impl Visitor for ResolverVisitor<'_> {
    fn leave_enum_value(&mut self, _parent: &EnumType, value: &EnumValue) -> Option<String> {
        Some(JAVA_NAMING.enum_member_name(&value.name))
    }

    fn leave_enum(&mut self, enum_type: &EnumType, values: Vec<String>) -> Option<String> {
        let constants = enum_type.values.iter().zip(values).map(|(value, name)| {
            EnumConstant::new(name)
                .doc(javadoc(
                    value.description.as_deref(),
                    deprecated_tag(value.deprecated.as_deref()),
                ))
                .deprecated(value.deprecated.is_some())
        });
        Some(
            Enum::new(self.declared_name(&enum_type.name))
                .doc(javadoc(enum_type.description.as_deref(), None::<String>))
                .constants(constants)
                .build(),
        )
    }

    fn leave_argument(&mut self, _field: &FieldDefinition, argument: &InputValue) -> Option<String> {
        let ty = self.java_type(&argument.ty);
        let name = self.param_names.claim(&JAVA_NAMING.member_name(&argument.name));
        self.params.push(name.clone());
        Some(Param::new(ty, name).to_string())
    }

    fn leave_field(
        &mut self,
        parent: &str,
        field: &FieldDefinition,
        arguments: Vec<String>,
    ) -> Option<String> {
        let return_type = self.java_type(&field.ty);
        let environment = self.environment_param();
        let params = std::mem::take(&mut self.params);
        self.param_names = SymbolTable::new();

        let defaults = field.arguments.iter().zip(&params).filter_map(|(argument, name)| {
            argument
                .default_value
                .as_ref()
                .map(|value| format!("@param {} defaults to {{@code {}}}", name, value))
        });
        let tags: Vec<String> = defaults
            .chain(deprecated_tag(field.deprecated.as_deref()))
            .collect();

        let name = self.members.claim(parent, &JAVA_NAMING.member_name(&field.name));
        Some(
            Method::new(name, return_type)
                .params(arguments)
                .param(environment)
                .doc(javadoc(field.description.as_deref(), tags))
                .deprecated(field.deprecated.is_some())
                .build(),
        )
    }

    fn leave_object(&mut self, object: &ObjectType, fields: Vec<String>) -> Option<String> {
        Some(
            Interface::new(self.declared_name(&object.name))
                .doc(javadoc(object.description.as_deref(), None::<String>))
                .members(fields)
                .build(),
        )
    }

    fn leave_interface(&mut self, interface: &InterfaceType, fields: Vec<String>) -> Option<String> {
        let type_resolver = self.imports.reference(TYPE_RESOLVER);
        Some(
            Interface::new(self.declared_name(&interface.name))
                .extends(type_resolver)
                .doc(javadoc(interface.description.as_deref(), None::<String>))
                .members(fields)
                .build(),
        )
    }

    fn leave_union(&mut self, union: &UnionType) -> Option<String> {
        let type_resolver = self.imports.reference(TYPE_RESOLVER);
        let members = format!("Resolves to one of: {}.", union.members.join(", "));
        let doc = match union.description.as_deref() {
            Some(description) => javadoc(Some(description), [members]),
            None => vec![members],
        };
        Some(
            Interface::new(self.declared_name(&union.name))
                .extends(type_resolver)
                .doc(doc)
                .build(),
        )
    }

    fn leave_input_field(&mut self, parent: &InputObjectType, field: &InputValue) -> Option<String> {
        let ty = self.java_type(&field.ty);
        let default = field
            .default_value
            .as_ref()
            .map(|value| format!("Defaults to {{@code {}}}.", value));
        let name = self.members.claim(&parent.name, &JAVA_NAMING.member_name(&field.name));
        Some(
            Field::new(name, ty)
                .doc(javadoc(field.description.as_deref(), default))
                .build(),
        )
    }

    fn leave_input_object(&mut self, input: &InputObjectType, fields: Vec<String>) -> Option<String> {
        Some(
            Class::new(self.declared_name(&input.name))
                .doc(javadoc(input.description.as_deref(), None::<String>))
                .fields(fields)
                .build(),
        )
    }
}
