//! TypeScript AST builders for types, enums, functions, consts and imports.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod consts;
mod enums;
mod fns;
mod imports;
mod types;

pub use consts::Const;
pub use enums::{Enum, EnumMember};
pub use fns::{Fn, Param};
pub use imports::Import;
pub use types::{Field, ObjectType, TypeAlias, object_literal};
