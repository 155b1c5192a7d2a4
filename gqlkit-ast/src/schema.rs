//! Schema type-system definitions.

use indexmap::IndexMap;

use crate::{OperationKind, TypeRef};

/// Scalars every GraphQL schema has without declaring them.
pub const BUILTIN_SCALARS: &[&str] = &["Int", "Float", "String", "Boolean", "ID"];

/// The kind of a named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeKind {
    /// Whether values of this kind appear in selection sets as objects.
    pub fn is_composite(&self) -> bool {
        matches!(self, TypeKind::Object | TypeKind::Interface | TypeKind::Union)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub interfaces: Vec<String>,
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    /// Reason given by `@deprecated`, if any.
    pub deprecated: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<InputValue>,
}

/// A field on an object or interface type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<InputValue>,
    pub ty: TypeRef,
    /// Reason given by `@deprecated`, if any.
    pub deprecated: Option<String>,
}

/// An argument or input object field.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValue {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    /// Default value printed in GraphQL syntax.
    pub default_value: Option<String>,
}

/// A named type definition.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefinition {
    Scalar(ScalarType),
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Scalar(t) => &t.name,
            TypeDefinition::Object(t) => &t.name,
            TypeDefinition::Interface(t) => &t.name,
            TypeDefinition::Union(t) => &t.name,
            TypeDefinition::Enum(t) => &t.name,
            TypeDefinition::InputObject(t) => &t.name,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TypeDefinition::Scalar(_) => TypeKind::Scalar,
            TypeDefinition::Object(_) => TypeKind::Object,
            TypeDefinition::Interface(_) => TypeKind::Interface,
            TypeDefinition::Union(_) => TypeKind::Union,
            TypeDefinition::Enum(_) => TypeKind::Enum,
            TypeDefinition::InputObject(_) => TypeKind::InputObject,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            TypeDefinition::Scalar(t) => t.description.as_deref(),
            TypeDefinition::Object(t) => t.description.as_deref(),
            TypeDefinition::Interface(t) => t.description.as_deref(),
            TypeDefinition::Union(t) => t.description.as_deref(),
            TypeDefinition::Enum(t) => t.description.as_deref(),
            TypeDefinition::InputObject(t) => t.description.as_deref(),
        }
    }

    /// Output fields, for object and interface types.
    pub fn fields(&self) -> Option<&[FieldDefinition]> {
        match self {
            TypeDefinition::Object(t) => Some(&t.fields),
            TypeDefinition::Interface(t) => Some(&t.fields),
            _ => None,
        }
    }
}

/// A complete, normalized schema.
///
/// Type definitions keep their declaration order; lookups go through a name
/// index built once at construction.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    types: Vec<TypeDefinition>,
    index: IndexMap<String, usize>,
    query_type: Option<String>,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
}

impl Schema {
    /// Build a schema from type definitions in declaration order.
    ///
    /// If a name is defined twice, the first definition wins for lookups;
    /// both stay in [`Schema::types`].
    pub fn new(types: Vec<TypeDefinition>) -> Self {
        let mut index = IndexMap::new();
        for (i, def) in types.iter().enumerate() {
            index.entry(def.name().to_string()).or_insert(i);
        }
        Self {
            types,
            index,
            query_type: None,
            mutation_type: None,
            subscription_type: None,
        }
    }

    /// Override the root operation type for `kind`.
    pub fn with_root(mut self, kind: OperationKind, name: impl Into<String>) -> Self {
        let slot = match kind {
            OperationKind::Query => &mut self.query_type,
            OperationKind::Mutation => &mut self.mutation_type,
            OperationKind::Subscription => &mut self.subscription_type,
        };
        *slot = Some(name.into());
        self
    }

    /// All type definitions in declaration order.
    pub fn types(&self) -> &[TypeDefinition] {
        &self.types
    }

    /// Look up a type definition by name.
    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    /// Whether a type with this name is defined (built-in scalars excluded).
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The kind of a named type; built-in scalars are always known.
    pub fn kind_of(&self, name: &str) -> Option<TypeKind> {
        match self.get(name) {
            Some(def) => Some(def.kind()),
            None if BUILTIN_SCALARS.contains(&name) => Some(TypeKind::Scalar),
            None => None,
        }
    }

    /// Name of the root type for an operation kind.
    ///
    /// Falls back to the conventional `Query`/`Mutation`/`Subscription` name
    /// when no `schema { ... }` definition overrides it.
    pub fn root_type(&self, kind: OperationKind) -> &str {
        let explicit = match kind {
            OperationKind::Query => &self.query_type,
            OperationKind::Mutation => &self.mutation_type,
            OperationKind::Subscription => &self.subscription_type,
        };
        explicit.as_deref().unwrap_or(kind.default_root_type())
    }

    /// Look up an output field on an object or interface type.
    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&FieldDefinition> {
        self.get(type_name)?
            .fields()?
            .iter()
            .find(|f| f.name == field_name)
    }
}
