//! Namespace derivation from an output path.

use gqlkit_core::sanitize_identifier;
use thiserror::Error;

/// Namespace used when the output path has no usable directory segments.
pub const DEFAULT_NAMESPACE: &str = "com.gqlkit.generated";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    #[error("output path is empty")]
    EmptyPath,
    #[error("output path '{0}' does not name a file")]
    NoFileName(String),
}

/// Derive a dotted namespace from the directory part of `output_path`.
///
/// Backslashes count as separators. Empty and `.` segments are dropped, and
/// everything up to a Maven/Gradle source root (`src/main/<lang>/` or
/// `src/test/<lang>/`) is stripped. Remaining segments are sanitized into
/// identifiers and joined with `.`, falling back to [`DEFAULT_NAMESPACE`].
///
/// ```
/// use gqlkit_codegen::default_namespace;
///
/// let ns = default_namespace("src/main/java/com/acme/Resolvers.java").unwrap();
/// assert_eq!(ns, "com.acme");
/// ```
pub fn default_namespace(output_path: &str) -> Result<String, NamespaceError> {
    let normalized = output_path.trim().replace('\\', "/");
    if normalized.is_empty() {
        return Err(NamespaceError::EmptyPath);
    }

    let segments: Vec<&str> = normalized.split('/').collect();
    let Some((file_name, dirs)) = segments.split_last() else {
        return Err(NamespaceError::EmptyPath);
    };
    if matches!(*file_name, "" | "." | "..") {
        return Err(NamespaceError::NoFileName(output_path.to_string()));
    }

    let dirs: Vec<&str> = dirs
        .iter()
        .copied()
        .filter(|s| !matches!(*s, "" | "." | ".."))
        .collect();
    let package_dirs = strip_source_root(&dirs);

    if package_dirs.is_empty() {
        return Ok(DEFAULT_NAMESPACE.to_string());
    }

    Ok(package_dirs
        .iter()
        .map(|segment| sanitize_identifier(segment))
        .collect::<Vec<_>>()
        .join("."))
}

fn strip_source_root<'a>(dirs: &'a [&'a str]) -> &'a [&'a str] {
    let root = dirs
        .windows(3)
        .rposition(|w| w[0] == "src" && matches!(w[1], "main" | "test"));
    match root {
        Some(i) => &dirs[i + 3..],
        None => dirs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_root_is_stripped() {
        assert_eq!(
            default_namespace("service/src/main/java/com/acme/api/Resolvers.java").unwrap(),
            "com.acme.api"
        );
        assert_eq!(
            default_namespace("src/test/kotlin/org/demo/Fixtures.java").unwrap(),
            "org.demo"
        );
    }

    #[test]
    fn test_plain_directories() {
        assert_eq!(
            default_namespace("generated/graphql/Resolvers.java").unwrap(),
            "generated.graphql"
        );
        assert_eq!(
            default_namespace("./out//api-v2/Types.java").unwrap(),
            "out.api_v2"
        );
    }

    #[test]
    fn test_backslashes_are_separators() {
        assert_eq!(
            default_namespace(r"src\main\java\com\acme\Resolvers.java").unwrap(),
            "com.acme"
        );
    }

    #[test]
    fn test_no_directory_falls_back() {
        assert_eq!(default_namespace("Resolvers.java").unwrap(), DEFAULT_NAMESPACE);
        assert_eq!(
            default_namespace("src/main/java/Resolvers.java").unwrap(),
            DEFAULT_NAMESPACE
        );
    }

    #[test]
    fn test_undecomposable_paths() {
        assert_eq!(default_namespace(""), Err(NamespaceError::EmptyPath));
        assert_eq!(default_namespace("   "), Err(NamespaceError::EmptyPath));
        assert!(matches!(
            default_namespace("/"),
            Err(NamespaceError::NoFileName(_))
        ));
        assert!(matches!(
            default_namespace("out/.."),
            Err(NamespaceError::NoFileName(_))
        ));
    }
}
