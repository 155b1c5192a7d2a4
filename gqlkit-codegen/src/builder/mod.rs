//! Text building shared by the Java and TypeScript declaration nodes.
//!
//! Nodes implement [`Renderable`] and lower themselves to [`CodeFragment`]s;
//! a [`CodeBuilder`] turns fragments into text indented by an [`Indent`].

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
