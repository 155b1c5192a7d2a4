//! Java AST builders for the declarations the resolver generator emits.
//!
//! Each builder renders through [`gqlkit_codegen::builder::CodeBuilder`]
//! with 4-space indentation and implements
//! [`gqlkit_codegen::builder::Renderable`].

mod members;
mod types;

pub use members::{EnumConstant, Field, Method, Param, deprecated_tag, javadoc};
pub use types::{Class, Enum, Interface};
