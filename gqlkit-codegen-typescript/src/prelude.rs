//! Fixed declarations every client module starts with.
//!
//! Only `document_mode` changes them: it decides what a document is and how
//! `buildRequest` turns one into query text.

use gqlkit_codegen::builder::CodeBuilder;
use gqlkit_config::DocumentMode;

use crate::ast::{Field, Fn, Param, TypeAlias, object_literal};

/// Top-level names the prelude and the module's imports declare.
pub(crate) const PRELUDE_SYMBOLS: &[&str] = &[
    "DocumentInput",
    "GraphQLRequest",
    "GraphQLResponse",
    "GraphQLClient",
    "GraphQLRequestError",
    "GraphQLFormattedError",
    "DocumentNode",
    "Sdk",
    "buildRequest",
    "execute",
    "getSdk",
    "gql",
    "print",
];

/// Globals the generated module refers to. Declaring any of them at the top
/// level would shadow the builtin.
pub(crate) const GLOBAL_SYMBOLS: &[&str] = &[
    "Array",
    "Error",
    "Promise",
    "ReadonlyArray",
    "Record",
    "ReturnType",
];

pub(crate) const CLIENT: &str = "GraphQLClient";
pub(crate) const EXECUTE: &str = "execute";

/// The prelude blocks in declaration order.
pub(crate) fn prelude(mode: DocumentMode) -> Vec<String> {
    vec![
        document_input(mode),
        request_type(),
        response_type(),
        client_interface(),
        request_error(),
        build_request(mode),
        execute(),
    ]
}

fn document_input(mode: DocumentMode) -> String {
    let ty = match mode {
        DocumentMode::String => "string",
        DocumentMode::DocumentNode => "DocumentNode",
        DocumentMode::External => "string | DocumentNode",
    };
    TypeAlias::new("DocumentInput", ty).build()
}

fn request_type() -> String {
    let body = object_literal(&[
        Field::new("query", "string"),
        Field::new("variables", "TVariables"),
        Field::new("operationName", "string"),
    ]);
    TypeAlias::new("GraphQLRequest<TVariables>", body).build()
}

fn response_type() -> String {
    let body = object_literal(&[
        Field::new("data", "TData | null").optional(),
        Field::new("errors", "ReadonlyArray<GraphQLFormattedError>").optional(),
    ]);
    TypeAlias::new("GraphQLResponse<TData>", body).build()
}

fn client_interface() -> String {
    CodeBuilder::typescript()
        .doc("Sends one request to a GraphQL endpoint.")
        .block_with_close("export interface GraphQLClient {", "}", |b| {
            b.line(
                "request<TData, TVariables>(request: GraphQLRequest<TVariables>): Promise<GraphQLResponse<TData>>;",
            )
        })
        .build()
}

fn request_error() -> String {
    CodeBuilder::typescript()
        .doc("Raised when a response carries errors or no data.")
        .block_with_close("export class GraphQLRequestError extends Error {", "}", |b| {
            b.line("readonly errors: ReadonlyArray<GraphQLFormattedError>;")
                .blank()
                .block_with_close(
                    "constructor(errors: ReadonlyArray<GraphQLFormattedError>) {",
                    "}",
                    |b| {
                        b.line("super(errors.map((error) => error.message).join(\"\\n\"));")
                            .line("this.name = \"GraphQLRequestError\";")
                            .line("this.errors = errors;")
                    },
                )
        })
        .build()
}

fn build_request(mode: DocumentMode) -> String {
    let query = match mode {
        DocumentMode::String => "document",
        DocumentMode::DocumentNode => "print(document)",
        DocumentMode::External => "typeof document === \"string\" ? document : print(document)",
    };
    Fn::new("buildRequest")
        .generic("TVariables")
        .param(Param::new("document", "DocumentInput"))
        .param(Param::new("operationName", "string"))
        .param(Param::new("variables", "TVariables"))
        .returns("GraphQLRequest<TVariables>")
        .body_line("return {")
        .body_line(format!("  query: {},", query))
        .body_line("  variables,")
        .body_line("  operationName,")
        .body_line("};")
        .build()
}

fn execute() -> String {
    Fn::new(EXECUTE)
        .private()
        .async_()
        .generic("TData")
        .generic("TVariables")
        .param(Param::new("client", CLIENT))
        .param(Param::new("document", "DocumentInput"))
        .param(Param::new("operationName", "string"))
        .param(Param::new("variables", "TVariables"))
        .returns("Promise<TData>")
        .body(
            "const response = await client.request<TData, TVariables>(
  buildRequest(document, operationName, variables),
);
if (response.errors && response.errors.length > 0) {
  throw new GraphQLRequestError(response.errors);
}
if (response.data === undefined || response.data === null) {
  throw new GraphQLRequestError([]);
}
return response.data;",
        )
        .build()
}
