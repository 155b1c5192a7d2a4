//! Shared generation engine for gqlkit.
//!
//! Generation modules (`gqlkit-codegen-java`, `gqlkit-codegen-typescript`)
//! are built from the same parts:
//!
//! - [`traversal`] - [`Traversal`] driver and the [`Visitor`] callback table
//! - [`types`] - [`TypeResolver`] for nullability and list mapping
//! - [`imports`] - [`ImportRegistry`] accumulator
//! - [`naming`] / [`namespace`] - identifiers, collisions, default namespace
//! - [`assembler`] - final file layout
//! - [`builder`] - indented code building blocks
//! - [`testing`] - fixtures (feature-gated)

pub mod assembler;
pub mod builder;
pub mod diagnostic;
mod error;
pub mod imports;
pub mod namespace;
pub mod naming;
pub mod plugin;
pub mod traversal;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use assembler::{Assembler, Layout};
pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use error::GenerateError;
pub use imports::{ImportKind, ImportRegistry, ImportStyle};
pub use namespace::{DEFAULT_NAMESPACE, NamespaceError, default_namespace};
pub use naming::{NamingConvention, SymbolTable};
pub use plugin::{GeneratedOutput, GenerationInput, Plugin, generated_banner};
pub use traversal::{FragmentTable, Traversal, Visitor};
pub use types::{TypeResolver, TypeSyntax};
