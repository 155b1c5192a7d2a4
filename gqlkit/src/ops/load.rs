//! Load operation - read the schema and operation documents a config names.

use std::path::{Path, PathBuf};

use eyre::{Context, Result, bail};
use gqlkit_ast::{Document, Schema, parse_document, parse_schema};
use gqlkit_config::ConfigFile;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Extensions picked up when a schema or documents entry is a directory.
const GRAPHQL_EXTENSIONS: &[&str] = &["graphql", "graphqls", "gql"];

/// Everything generation reads, parsed once per invocation.
pub struct Project<'c> {
    pub config_file: &'c ConfigFile,
    pub schema: Schema,
    pub documents: Vec<Document>,
}

/// A source file read from disk, named relative to the config directory.
struct Source {
    name: String,
    content: String,
}

/// Execute the load operation.
///
/// Schema and document entries may be files or directories; directories are
/// walked recursively in file-name order so the output never depends on
/// directory listing order.
pub fn load(config_file: &ConfigFile) -> Result<Project<'_>> {
    let config = config_file.config();

    let schema_sources = read_sources(config_file, &config.schema)?;
    let schema = parse_schema(
        schema_sources
            .iter()
            .map(|source| (source.name.as_str(), source.content.as_str())),
    )?;

    let documents = read_sources(config_file, &config.documents)?
        .iter()
        .map(|source| parse_document(&source.content, &source.name))
        .collect::<gqlkit_ast::Result<Vec<_>>>()?;

    debug!(
        schema_files = schema_sources.len(),
        documents = documents.len(),
        "loaded project"
    );

    Ok(Project {
        config_file,
        schema,
        documents,
    })
}

fn read_sources(config_file: &ConfigFile, entries: &[String]) -> Result<Vec<Source>> {
    let mut paths = Vec::new();
    for entry in entries.iter().filter(|entry| !entry.trim().is_empty()) {
        for path in expand(&config_file.resolve(entry))? {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    paths
        .into_iter()
        .map(|path| {
            let content = std::fs::read_to_string(&path)
                .wrap_err_with(|| format!("Failed to read '{}'", path.display()))?;
            Ok(Source {
                name: display_name(config_file.base_dir(), &path),
                content,
            })
        })
        .collect()
}

fn expand(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        bail!("'{}' does not exist", path.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
        let entry = entry.wrap_err_with(|| format!("Failed to walk '{}'", path.display()))?;
        if entry.file_type().is_file() && is_graphql(entry.path()) {
            trace!(path = %entry.path().display(), "found graphql file");
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_graphql(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| GRAPHQL_EXTENSIONS.contains(&ext))
}

fn display_name(base_dir: &Path, path: &Path) -> String {
    path.strip_prefix(base_dir)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn project_dir(documents: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("gqlkit.toml"),
            format!(
                "schema = \"schema.graphql\"\ndocuments = {}\n\n[generates.\"out/sdk.ts\"]\nplugin = \"typescript-client\"\n",
                documents
            ),
        )
        .unwrap();
        fs::write(
            dir.path().join("schema.graphql"),
            "type Query { a: Int b: Int c: Int }",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_directories_are_walked_in_name_order() {
        let dir = project_dir("[\"ops\"]");
        fs::create_dir_all(dir.path().join("ops/nested")).unwrap();
        fs::write(dir.path().join("ops/b.graphql"), "query B { b }").unwrap();
        fs::write(dir.path().join("ops/a.gql"), "query A { a }").unwrap();
        fs::write(dir.path().join("ops/nested/c.graphql"), "query C { c }").unwrap();
        fs::write(dir.path().join("ops/notes.txt"), "not graphql").unwrap();

        let config_file = ConfigFile::open(dir.path().join("gqlkit.toml")).unwrap();
        let project = load(&config_file).unwrap();

        let names: Vec<&str> = project
            .documents
            .iter()
            .flat_map(Document::operations)
            .filter_map(|op| op.name.as_deref())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_files_listed_twice_are_read_once() {
        let dir = project_dir("[\"ops/a.graphql\", \"ops\"]");
        fs::create_dir_all(dir.path().join("ops")).unwrap();
        fs::write(dir.path().join("ops/a.graphql"), "query A { a }").unwrap();

        let config_file = ConfigFile::open(dir.path().join("gqlkit.toml")).unwrap();
        let project = load(&config_file).unwrap();

        assert_eq!(project.documents.len(), 1);
    }

    #[test]
    fn test_missing_documents_path_is_an_error() {
        let dir = project_dir("[\"missing\"]");
        let config_file = ConfigFile::open(dir.path().join("gqlkit.toml")).unwrap();

        let err = load(&config_file).err().unwrap();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_schema_parse_errors_name_the_file() {
        let dir = project_dir("[]");
        fs::write(dir.path().join("schema.graphql"), "type Query {").unwrap();
        let config_file = ConfigFile::open(dir.path().join("gqlkit.toml")).unwrap();

        let err = load(&config_file).err().unwrap();
        assert!(err.to_string().contains("schema.graphql"));
    }
}
