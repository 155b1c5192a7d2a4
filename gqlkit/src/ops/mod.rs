//! Core operations.
//!
//! This module contains the business logic for gqlkit commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod load;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use load::{Project, load};

/// A project directory with a schema, one operation and a Java and a
/// TypeScript output. `ts_config` is appended to the TypeScript table.
#[cfg(test)]
pub(crate) fn test_project(ts_config: &str) -> tempfile::TempDir {
    use std::fs;

    let dir = tempfile::TempDir::new().unwrap();
    fs::write(
        dir.path().join("gqlkit.toml"),
        format!(
            r#"schema = "schema.graphql"
documents = ["ops"]

[generates."src/main/java/com/acme/Resolvers.java"]
plugin = "java-resolvers"

[generates."web/src/sdk.ts"]
plugin = "typescript-client"
{}
"#,
            ts_config
        ),
    )
    .unwrap();
    fs::write(
        dir.path().join("schema.graphql"),
        "type Query { add(x: Int!, y: Int!): Int! }",
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("ops")).unwrap();
    fs::write(
        dir.path().join("ops/add.graphql"),
        "query Add($x: Int!, $y: Int!) { add(x: $x, y: $y) }",
    )
    .unwrap();
    dir
}
