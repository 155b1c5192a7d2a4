//! Output of the `typescript-client` module for the shared fixtures.

use gqlkit_codegen::{
    GeneratedOutput, GenerationInput, Plugin, Severity,
    testing::{
        ADD_OPERATION, ADD_SCHEMA, CATALOG_OPERATIONS, CATALOG_SCHEMA, documents, generate, schema,
    },
};
use gqlkit_codegen_typescript::Generator;
use gqlkit_config::{DocumentMode, PluginConfig};

const OUTPUT: &str = "web/src/sdk.ts";

fn generate_with(sdl: &str, operations: &str, config: &PluginConfig) -> GeneratedOutput {
    generate(
        &Generator::new(),
        &schema(sdl),
        &documents(operations),
        config,
        OUTPUT,
    )
}

fn import_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|line| line.starts_with("import "))
        .collect()
}

#[test]
fn test_add_end_to_end() {
    let output = generate_with(ADD_SCHEMA, ADD_OPERATION, &PluginConfig::default());
    let content = &output.content;

    assert!(output.diagnostics.is_empty());
    assert!(content.starts_with("// Code generated by gqlkit (typescript-client). DO NOT EDIT.\n\n"));
    assert_eq!(
        import_lines(content),
        vec!["import { GraphQLFormattedError } from \"graphql\";"]
    );
    assert_eq!(content.matches("export async function ").count(), 1);
    assert!(content.contains(
        "export type AddQueryVariables = {\n  x: number;\n  y: number;\n};\n"
    ));
    assert!(content.contains("export type AddQuery = {\n  add: number;\n};\n"));
    assert!(content.contains("export const AddDocument = `query Add($x: Int!, $y: Int!) {"));
    insta::assert_snapshot!(
        &content[content.find("/** Runs").unwrap()..],
        @r#"
    /** Runs the `Add` query. */
    export async function Add(client: GraphQLClient, variables: AddQueryVariables): Promise<AddQuery> {
      return execute<AddQuery, AddQueryVariables>(client, AddDocument, "Add", variables);
    }

    /** Every operation helper bound to one client. */
    export function getSdk(client: GraphQLClient) {
      return {
        Add: (variables: AddQueryVariables) => Add(client, variables),
      };
    }

    export type Sdk = ReturnType<typeof getSdk>;
    "#
    );
}

#[test]
fn test_prelude_comes_before_schema_types() {
    let content = generate_with(ADD_SCHEMA, ADD_OPERATION, &PluginConfig::default()).content;
    let client = content.find("export interface GraphQLClient {").unwrap();
    let query = content.find("export type Query = {").unwrap();
    let variables = content.find("export type AddQueryVariables").unwrap();
    assert!(client < query && query < variables);
    assert!(content.contains("export type DocumentInput = string;\n"));
    assert!(content.contains("  query: document,\n"));
    assert!(content.contains("\nasync function execute<TData, TVariables>("));
}

#[test]
fn test_anonymous_operation_is_skipped() {
    let operations = format!("{}\n{{ add(x: 1, y: 2) }}", ADD_OPERATION);
    let output = generate_with(ADD_SCHEMA, &operations, &PluginConfig::default());

    assert_eq!(output.content.matches("export async function ").count(), 1);
    assert_eq!(output.diagnostics.len(), 1);
    let warning = &output.diagnostics[0];
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.message, "anonymous query skipped");
    assert!(warning.location.is_some());
}

#[test]
fn test_duplicate_operation_names_are_renamed() {
    let operations = format!("{}\n{}", ADD_OPERATION, ADD_OPERATION);
    let output = generate_with(ADD_SCHEMA, &operations, &PluginConfig::default());
    let content = &output.content;

    assert_eq!(output.diagnostics.len(), 1);
    assert!(output.diagnostics[0].message.contains("duplicate operation name 'Add'"));
    assert!(content.contains("export async function Add(client: GraphQLClient, variables: AddQueryVariables): Promise<AddQuery> {"));
    assert!(content.contains(
        "export async function Add_1(client: GraphQLClient, variables: AddQueryVariables_1): Promise<AddQuery_1> {"
    ));
    assert!(content.contains("(client, AddDocument_1, \"Add\", variables);"));
    assert!(content.contains("    Add_1: (variables: AddQueryVariables_1) => Add_1(client, variables),\n"));
}

#[test]
fn test_document_node_mode() {
    let config = PluginConfig {
        document_mode: DocumentMode::DocumentNode,
        ..PluginConfig::default()
    };
    let content = generate_with(ADD_SCHEMA, ADD_OPERATION, &config).content;

    assert_eq!(
        import_lines(&content),
        vec![
            "import { GraphQLFormattedError, DocumentNode, print } from \"graphql\";",
            "import { gql } from \"graphql-tag\";",
        ]
    );
    assert!(content.contains("export type DocumentInput = DocumentNode;\n"));
    assert!(content.contains("export const AddDocument: DocumentNode = gql`query Add("));
    assert!(content.contains("  query: print(document),\n"));
}

#[test]
fn test_type_imports() {
    let config = PluginConfig {
        use_type_imports: true,
        document_mode: DocumentMode::DocumentNode,
        ..PluginConfig::default()
    };
    let content = generate_with(ADD_SCHEMA, ADD_OPERATION, &config).content;
    assert_eq!(
        import_lines(&content),
        vec![
            "import { type GraphQLFormattedError, type DocumentNode, print } from \"graphql\";",
            "import { gql } from \"graphql-tag\";",
        ]
    );

    let config = PluginConfig {
        use_type_imports: true,
        ..PluginConfig::default()
    };
    let content = generate_with(ADD_SCHEMA, ADD_OPERATION, &config).content;
    assert_eq!(
        import_lines(&content),
        vec!["import type { GraphQLFormattedError } from \"graphql\";"]
    );
}

#[test]
fn test_external_documents() {
    let config = PluginConfig {
        document_mode: DocumentMode::External,
        import_documents_from: Some("./documents".to_string()),
        ..PluginConfig::default()
    };
    let content = generate_with(ADD_SCHEMA, ADD_OPERATION, &config).content;

    assert_eq!(
        import_lines(&content),
        vec![
            "import { GraphQLFormattedError, DocumentNode, print } from \"graphql\";",
            "import * as Operations from \"./documents\";",
        ]
    );
    assert!(!content.contains("export const AddDocument"));
    assert!(content.contains("(client, Operations.AddDocument, \"Add\", variables);"));
    assert!(content.contains("export type DocumentInput = string | DocumentNode;\n"));
    assert!(content.contains("  query: typeof document === \"string\" ? document : print(document),\n"));
}

#[test]
fn test_external_documents_require_a_module() {
    let schema = schema(ADD_SCHEMA);
    let docs = documents(ADD_OPERATION);
    let config = PluginConfig {
        document_mode: DocumentMode::External,
        ..PluginConfig::default()
    };
    let input = GenerationInput {
        schema: &schema,
        documents: &docs,
        config: &config,
        output_path: OUTPUT,
    };
    let err = Generator::new().generate(&input).unwrap_err();
    assert!(err.to_string().contains("requires import_documents_from"), "{}", err);
}

#[test]
fn test_external_types() {
    let config = PluginConfig {
        import_operation_types_from: Some("./types".to_string()),
        ..PluginConfig::default()
    };
    let content = generate_with(CATALOG_SCHEMA, CATALOG_OPERATIONS, &config).content;

    assert_eq!(
        import_lines(&content),
        vec![
            "import { GraphQLFormattedError } from \"graphql\";",
            "import type * as Types from \"./types\";",
        ]
    );
    assert!(!content.contains("export type User "));
    assert!(!content.contains("export type GetUserQuery "));
    assert!(!content.contains("export enum "));
    assert!(content.contains(
        "export async function GetUser(client: GraphQLClient, variables: Types.GetUserQueryVariables): Promise<Types.GetUserQuery> {"
    ));
    assert!(content.contains("export const GetUserDocument = `"));
}

#[test]
fn test_catalog_schema_types() {
    let output = generate_with(CATALOG_SCHEMA, CATALOG_OPERATIONS, &PluginConfig::default());
    let content = &output.content;
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);

    assert!(content.contains(
        "/** Anything with a global id. */\nexport type Node = {\n  __typename?: \"User\" | \"Post\";\n  id: string;\n};\n"
    ));
    assert!(content.contains(
        "export enum Role {\n  Admin = \"ADMIN\",\n  Member = \"MEMBER\",\n  /** @deprecated Use MEMBER */\n  Guest = \"GUEST\",\n}\n"
    ));
    assert!(content.contains("  email: string | null;\n"));
    assert!(content.contains("  createdAt: any;\n"));
    assert!(content.contains("  friends: Array<User>;\n"));
    assert!(content.contains("  tags: Array<string | null> | null;\n"));
    assert!(content.contains("export type SearchResult = User | Post;\n"));
    assert!(content.contains(
        "export type CreatePostInput = {\n  title: string;\n  tags?: Array<string> | null;\n  authorId?: string | null;\n};\n"
    ));
    assert!(!content.contains("DateTime"));
    assert!(!content.contains("UserFields ="));
}

#[test]
fn test_catalog_operations() {
    let content = generate_with(CATALOG_SCHEMA, CATALOG_OPERATIONS, &PluginConfig::default()).content;

    insta::assert_snapshot!(
        {
            let start = content.find("export type SearchQuery =").unwrap();
            let end = start + content[start..].find("};\n").unwrap() + 3;
            content[start..end].to_string()
        },
        @r#"
    export type SearchQuery = {
      search: Array<{
        __typename: "User" | "Post";
        name?: string;
        title?: string;
      }>;
    };
    "#
    );
    assert!(content.contains(
        "export type CreatePostMutationVariables = {\n  input: CreatePostInput;\n};\n"
    ));
    assert!(content.contains("    author: {\n      name: string;\n    } | null;\n"));
    assert!(content.contains("export type OnPostAddedSubscriptionVariables = Record<string, never>;\n"));
    assert!(content.contains(
        "export async function OnPostAdded(client: GraphQLClient, variables?: OnPostAddedSubscriptionVariables): Promise<OnPostAddedSubscription> {"
    ));
    assert!(content.contains("\"OnPostAdded\", variables ?? {});"));

    // The fragment declared after its first use still travels with the query.
    let document = &content[content.find("export const GetUserDocument").unwrap()..];
    let document = &document[..document.find("`;\n").unwrap()];
    assert!(document.contains("...UserFields"));
    assert!(document.contains("fragment UserFields on User {"));
}

#[test]
fn test_mapped_scalars() {
    let mut config = PluginConfig::default();
    config
        .scalars
        .insert("DateTime".to_string(), "string".to_string());
    let content = generate_with(CATALOG_SCHEMA, CATALOG_OPERATIONS, &config).content;
    assert!(content.contains("  createdAt: string;\n"));
    assert!(!content.contains("createdAt: any"));
}

#[test]
fn test_schema_types_avoid_prelude_names() {
    let sdl = "type GraphQLClient { id: ID! }\ntype Query { client: GraphQLClient }";
    let output = generate_with(sdl, "query Client { client { id } }", &PluginConfig::default());
    let content = &output.content;

    assert!(content.contains("export interface GraphQLClient {"));
    assert!(content.contains("export type GraphQLClient_1 = {\n  __typename?: \"GraphQLClient\";"));
    assert!(content.contains("  client: GraphQLClient_1 | null;\n"));
}

#[test]
fn test_schema_types_avoid_builtin_globals() {
    let sdl = "type Promise { id: ID! }\ntype Array { id: ID! }\ntype Query { promise: Promise tags: [String!]! items: [Array!] }";
    let output = generate_with(sdl, "query Tags { tags promise { id } }", &PluginConfig::default());
    let content = &output.content;

    assert!(!content.contains("export type Promise = {"));
    assert!(!content.contains("export type Array = {"));
    assert!(content.contains("export type Promise_1 = {\n  __typename?: \"Promise\";"));
    assert!(content.contains("export type Array_1 = {\n  __typename?: \"Array\";"));
    assert!(content.contains("  promise: Promise_1 | null;\n"));
    assert!(content.contains("  items: Array<Array_1> | null;\n"));
    assert!(content.contains("  tags: Array<string>;\n"));
    assert!(content.contains("Promise<GraphQLResponse<TData>>"));
}

#[test]
fn test_operations_avoid_builtin_globals() {
    let sdl = "type Query { a: Int }";
    let content = generate_with(sdl, "query Record { a }", &PluginConfig::default()).content;
    assert!(!content.contains("function Record("));
    assert!(content.contains("export async function Record_1(client: GraphQLClient"));
}

#[test]
fn test_reserved_operation_names_are_escaped() {
    let sdl = "type Query { a: Int }";
    let content = generate_with(sdl, "query delete { a }", &PluginConfig::default()).content;
    assert!(content.contains("export async function _delete(client: GraphQLClient, variables?: DeleteQueryVariables)"));
    assert!(content.contains("(client, DeleteDocument, \"delete\", variables ?? {});"));
}

#[test]
fn test_output_is_deterministic() {
    let first = generate_with(CATALOG_SCHEMA, CATALOG_OPERATIONS, &PluginConfig::default());
    let second = generate_with(CATALOG_SCHEMA, CATALOG_OPERATIONS, &PluginConfig::default());
    assert_eq!(first, second);
}

#[test]
fn test_unknown_fields_are_reported() {
    let output = generate_with(ADD_SCHEMA, "query Q { add(x: 1, y: 2) missing }", &PluginConfig::default());
    assert_eq!(output.diagnostics.len(), 1);
    assert!(output.diagnostics[0].message.contains("unknown field 'missing' on type 'Query'"));
    assert!(output.content.contains("  missing: any;\n"));
}
