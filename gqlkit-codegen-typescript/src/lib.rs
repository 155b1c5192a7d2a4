//! TypeScript client generator for gqlkit.
//!
//! Produces a single TypeScript module containing:
//!
//! - a prelude: the `GraphQLClient` interface the caller implements, the
//!   `GraphQLRequestError` error type and the `buildRequest` helper
//! - one type per schema type (objects, interfaces, unions, enums, inputs),
//!   unless `import_operation_types_from` points at a module that has them
//! - per named operation: a variables type, a result type shaped by its
//!   selection set, its document, and an `async` helper
//! - `getSdk(client)`, binding every helper to one client
//!
//! Anonymous operations are skipped with a warning.

mod documents;
mod generator;
mod imports;
mod naming;
mod operation;
mod prelude;
mod scope;
mod selection;
mod type_syntax;
mod visitor;

pub mod ast;

pub use generator::Generator;
pub use imports::TsImportStyle;
pub use naming::TS_NAMING;
pub use type_syntax::TsTypeSyntax;

/// Identifier of this generation module in configuration and diagnostics.
pub const PLUGIN_NAME: &str = "typescript-client";
