//! Java resolver interface generator for gqlkit.
//!
//! Produces a single Java source file with one nested declaration per schema
//! type, inside a public class named after the output file:
//!
//! - object types become interfaces with one resolver method per field,
//!   each taking the field's arguments and a `DataFetchingEnvironment`
//! - interfaces and unions become interfaces extending `TypeResolver`
//! - enums become Java enums and input objects become static classes
//!
//! Nullable positions carry JSpecify's `@Nullable` type-use annotation.
//!
//! ```ignore
//! use gqlkit_codegen::{GenerationInput, Plugin};
//! use gqlkit_codegen_java::Generator;
//!
//! let output = Generator::new().generate(&input)?;
//! println!("{}", output.content);
//! ```

mod generator;
mod imports;
mod naming;
mod type_syntax;
mod visitor;

pub mod ast;

pub use generator::Generator;
pub use imports::{JavaImportStyle, JavaImports};
pub use naming::JAVA_NAMING;
pub use type_syntax::JavaTypeSyntax;

/// Identifier of this generation module in configuration and diagnostics.
pub const PLUGIN_NAME: &str = "java-resolvers";
