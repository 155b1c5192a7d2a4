use std::fs;

use gqlkit_config::{ConfigFile, Error, PluginKind};

#[test]
fn test_open_resolves_paths_against_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gqlkit.toml");
    fs::write(
        &path,
        r#"
schema = "schema.graphql"
documents = ["operations"]

[generates."web/sdk.ts"]
plugin = "typescript-client"
config = { use_type_imports = true, scalars = { DateTime = "string" } }
"#,
    )
    .unwrap();

    let file = ConfigFile::open(&path).unwrap();
    assert_eq!(file.base_dir(), dir.path());
    assert_eq!(file.resolve("schema.graphql"), dir.path().join("schema.graphql"));

    let output = &file.config().generates["web/sdk.ts"];
    assert_eq!(output.plugin, PluginKind::TypescriptClient);
    assert!(output.config.use_type_imports);
    assert_eq!(output.config.scalars["DateTime"], "string");
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigFile::open(dir.path().join("gqlkit.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_parse_error_carries_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gqlkit.toml");
    fs::write(&path, "schema = [").unwrap();

    let err = ConfigFile::open(&path).unwrap_err();
    match *err {
        Error::Parse { src, .. } => assert_eq!(src.name(), path.display().to_string()),
        other => panic!("expected parse error, got {:?}", other),
    }
}
