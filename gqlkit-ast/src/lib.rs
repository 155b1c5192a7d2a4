//! Normalized GraphQL AST for the gqlkit code generator.
//!
//! This crate provides the read-only tree the generators walk. The parser
//! front end (`graphql-parser`) is wrapped by [`parse_schema`] and
//! [`parse_document`], which lower its AST into these types.
//!
//! # Architecture
//!
//! ```text
//! *.graphql → graphql-parser → gqlkit-ast (normalized) → gqlkit-codegen
//! ```
//!
//! The types are designed to be:
//! - Language-agnostic (no TypeScript/Java concerns)
//! - Owned and immutable once built
//! - Ordered exactly as declared in the source documents

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod document;
mod error;
mod parse;
mod schema;
mod types;

pub use document::{
    Document, ExecutableDefinition, FieldSelection, FragmentDefinition, InlineFragment,
    OperationDefinition, OperationKind, Selection, SelectionSet, VariableDefinition,
};
pub use error::{Error, Result};
pub use parse::{parse_document, parse_schema};
pub use schema::{
    BUILTIN_SCALARS, EnumType, EnumValue, FieldDefinition, InputObjectType, InputValue,
    InterfaceType, ObjectType, ScalarType, Schema, TypeDefinition, TypeKind, UnionType,
};
pub use types::TypeRef;
