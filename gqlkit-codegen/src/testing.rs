//! Test utilities for generation modules.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use gqlkit_ast::{Document, Schema, parse_document, parse_schema};
use gqlkit_config::PluginConfig;

use crate::{GeneratedOutput, GenerationInput, Plugin};

/// The smallest useful schema: one query field.
pub const ADD_SCHEMA: &str = "type Query { add(x: Int!, y: Int!): Int! }";

/// A named operation against [`ADD_SCHEMA`].
pub const ADD_OPERATION: &str = "query Add($x: Int!, $y: Int!) { add(x: $x, y: $y) }";

/// A schema touching every definition kind.
pub const CATALOG_SCHEMA: &str = r#"
scalar DateTime

"Anything with a global id."
interface Node {
  id: ID!
}

enum Role {
  ADMIN
  MEMBER
  GUEST @deprecated(reason: "Use MEMBER")
}

type User implements Node {
  id: ID!
  name: String!
  email: String
  role: Role!
  createdAt: DateTime!
  friends(first: Int = 10): [User!]!
}

type Post implements Node {
  id: ID!
  title: String!
  author: User
  tags: [String]
}

union SearchResult = User | Post

input CreatePostInput {
  title: String!
  tags: [String!]
  authorId: ID
}

type Query {
  node(id: ID!): Node
  user(id: ID!): User
  search(term: String!): [SearchResult!]!
}

type Mutation {
  createPost(input: CreatePostInput!): Post!
}

type Subscription {
  postAdded: Post!
}
"#;

/// Operations against [`CATALOG_SCHEMA`], including a fragment declared
/// after its first use.
pub const CATALOG_OPERATIONS: &str = r#"
query GetUser($id: ID!) {
  user(id: $id) {
    ...UserFields
    friends(first: 5) {
      id
      name
    }
  }
}

mutation CreatePost($input: CreatePostInput!) {
  createPost(input: $input) {
    id
    title
    author {
      name
    }
  }
}

query Search($term: String!) {
  search(term: $term) {
    __typename
    ... on User {
      name
    }
    ... on Post {
      title
    }
  }
}

subscription OnPostAdded {
  postAdded {
    id
    title
  }
}

fragment UserFields on User {
  id
  name
  email
  role
  createdAt
}
"#;

/// Parse a fixture schema.
pub fn schema(sdl: &str) -> Schema {
    parse_schema([("schema.graphql", sdl)]).expect("fixture schema should parse")
}

/// Parse one fixture document.
pub fn documents(source: &str) -> Vec<Document> {
    vec![parse_document(source, "operations.graphql").expect("fixture document should parse")]
}

/// Run a plugin over fixtures, panicking on a fatal error.
pub fn generate(
    plugin: &dyn Plugin,
    schema: &Schema,
    documents: &[Document],
    config: &PluginConfig,
    output_path: &str,
) -> GeneratedOutput {
    let input = GenerationInput {
        schema,
        documents,
        config,
        output_path,
    };
    plugin
        .generate(&input)
        .unwrap_or_else(|err| panic!("{} failed: {:?}", plugin.name(), err))
}
