//! Single-pass, post-order walk over a schema and its operation documents.
//!
//! [`Traversal`] owns the walk order; a [`Visitor`] decides what each node
//! emits. A node's children are always left before the node itself, and the
//! children's fragments are handed to the parent's callback in document order.

use std::collections::HashSet;

use gqlkit_ast::{
    Document, EnumType, EnumValue, ExecutableDefinition, FieldDefinition, FragmentDefinition,
    InputObjectType, InputValue, InterfaceType, ObjectType, OperationDefinition, ScalarType,
    Schema, TypeDefinition, UnionType, VariableDefinition,
};
use indexmap::IndexMap;
use tracing::debug;

/// Per-node-kind callbacks invoked by [`Traversal`].
///
/// Each callback returns the node's emission fragment, or `None` to emit
/// nothing. Every callback defaults to `None`.
pub trait Visitor {
    #[allow(unused_variables)]
    fn leave_scalar(&mut self, scalar: &ScalarType) -> Option<String> {
        None
    }

    #[allow(unused_variables)]
    fn leave_enum_value(&mut self, parent: &EnumType, value: &EnumValue) -> Option<String> {
        None
    }

    #[allow(unused_variables)]
    fn leave_enum(&mut self, enum_type: &EnumType, values: Vec<String>) -> Option<String> {
        None
    }

    #[allow(unused_variables)]
    fn leave_argument(&mut self, field: &FieldDefinition, argument: &InputValue) -> Option<String> {
        None
    }

    /// `parent` is the name of the object or interface declaring the field.
    #[allow(unused_variables)]
    fn leave_field(
        &mut self,
        parent: &str,
        field: &FieldDefinition,
        arguments: Vec<String>,
    ) -> Option<String> {
        None
    }

    #[allow(unused_variables)]
    fn leave_object(&mut self, object: &ObjectType, fields: Vec<String>) -> Option<String> {
        None
    }

    #[allow(unused_variables)]
    fn leave_interface(&mut self, interface: &InterfaceType, fields: Vec<String>) -> Option<String> {
        None
    }

    #[allow(unused_variables)]
    fn leave_union(&mut self, union: &UnionType) -> Option<String> {
        None
    }

    #[allow(unused_variables)]
    fn leave_input_field(&mut self, parent: &InputObjectType, field: &InputValue) -> Option<String> {
        None
    }

    #[allow(unused_variables)]
    fn leave_input_object(
        &mut self,
        input: &InputObjectType,
        fields: Vec<String>,
    ) -> Option<String> {
        None
    }

    #[allow(unused_variables)]
    fn leave_variable(
        &mut self,
        operation: &OperationDefinition,
        variable: &VariableDefinition,
    ) -> Option<String> {
        None
    }

    #[allow(unused_variables)]
    fn leave_operation(
        &mut self,
        operation: &OperationDefinition,
        variables: Vec<String>,
    ) -> Option<String> {
        None
    }

    #[allow(unused_variables)]
    fn leave_fragment(&mut self, fragment: &FragmentDefinition) -> Option<String> {
        None
    }
}

/// The walk driver.
///
/// Schema types are visited in declaration order (a name defined twice is
/// visited once, matching [`Schema::get`]), then every document's
/// definitions in order.
#[derive(Debug, Clone, Copy)]
pub struct Traversal<'a> {
    schema: &'a Schema,
    documents: &'a [Document],
}

impl<'a> Traversal<'a> {
    pub fn new(schema: &'a Schema, documents: &'a [Document]) -> Self {
        Self { schema, documents }
    }

    /// Walk everything once and return the top-level fragments in order.
    pub fn walk<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Vec<String> {
        let mut body = Vec::new();
        let mut seen = HashSet::new();

        for def in self.schema.types() {
            if !seen.insert(def.name()) {
                debug!(type_name = def.name(), "skipping duplicate type definition");
                continue;
            }
            body.extend(visit_type(def, visitor));
        }

        for document in self.documents {
            for def in &document.definitions {
                body.extend(visit_executable(def, visitor));
            }
        }

        debug!(
            types = seen.len(),
            documents = self.documents.len(),
            fragments = body.len(),
            "traversal complete"
        );
        body
    }
}

fn visit_type<V: Visitor + ?Sized>(def: &TypeDefinition, visitor: &mut V) -> Option<String> {
    match def {
        TypeDefinition::Scalar(scalar) => visitor.leave_scalar(scalar),
        TypeDefinition::Enum(enum_type) => {
            let values = enum_type
                .values
                .iter()
                .filter_map(|value| visitor.leave_enum_value(enum_type, value))
                .collect();
            visitor.leave_enum(enum_type, values)
        }
        TypeDefinition::Object(object) => {
            let fields = visit_fields(&object.name, &object.fields, visitor);
            visitor.leave_object(object, fields)
        }
        TypeDefinition::Interface(interface) => {
            let fields = visit_fields(&interface.name, &interface.fields, visitor);
            visitor.leave_interface(interface, fields)
        }
        TypeDefinition::Union(union) => visitor.leave_union(union),
        TypeDefinition::InputObject(input) => {
            let fields = input
                .fields
                .iter()
                .filter_map(|field| visitor.leave_input_field(input, field))
                .collect();
            visitor.leave_input_object(input, fields)
        }
    }
}

fn visit_fields<V: Visitor + ?Sized>(
    parent: &str,
    fields: &[FieldDefinition],
    visitor: &mut V,
) -> Vec<String> {
    fields
        .iter()
        .filter_map(|field| {
            let arguments = field
                .arguments
                .iter()
                .filter_map(|argument| visitor.leave_argument(field, argument))
                .collect();
            visitor.leave_field(parent, field, arguments)
        })
        .collect()
}

fn visit_executable<V: Visitor + ?Sized>(
    def: &ExecutableDefinition,
    visitor: &mut V,
) -> Option<String> {
    match def {
        ExecutableDefinition::Operation(operation) => {
            let variables = operation
                .variables
                .iter()
                .filter_map(|variable| visitor.leave_variable(operation, variable))
                .collect();
            visitor.leave_operation(operation, variables)
        }
        ExecutableDefinition::Fragment(fragment) => visitor.leave_fragment(fragment),
    }
}

/// Named fragments from every document, indexed before the walk so spreads
/// can refer to fragments declared later or in another document.
#[derive(Debug, Clone, Default)]
pub struct FragmentTable<'a> {
    fragments: IndexMap<&'a str, &'a FragmentDefinition>,
}

impl<'a> FragmentTable<'a> {
    /// Index fragments; the first definition of a name wins.
    pub fn from_documents(documents: &'a [Document]) -> Self {
        let mut fragments = IndexMap::new();
        for fragment in documents.iter().flat_map(Document::fragments) {
            fragments.entry(fragment.name.as_str()).or_insert(fragment);
        }
        Self { fragments }
    }

    pub fn get(&self, name: &str) -> Option<&'a FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
