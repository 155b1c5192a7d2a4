//! Operations captured during the walk and rendered after it.

use gqlkit_ast::OperationKind;
use gqlkit_codegen::builder::CodeBuilder;

use crate::{
    ast::{Fn, Param},
    prelude::{CLIENT, EXECUTE},
};

/// A named operation whose declarations are rendered once the walk is done.
#[derive(Debug, Clone)]
pub(crate) struct PendingOperation {
    pub kind: OperationKind,
    /// The name sent with each request.
    pub operation_name: String,
    pub helper: String,
    /// Expression naming the document (`AddDocument`, `Operations.AddDocument`).
    pub document: String,
    pub result_type: String,
    pub variables_type: String,
    /// Whether every variable may be omitted.
    pub variables_optional: bool,
    /// Variables type, result type and document declarations, in that
    /// order; empty when types and documents come from other modules.
    pub declarations: Vec<String>,
}

impl PendingOperation {
    /// The exported `async function` running this operation.
    pub(crate) fn helper(&self) -> String {
        let variables = if self.variables_optional {
            "variables ?? {}"
        } else {
            "variables"
        };
        Fn::new(&self.helper)
            .doc(vec![format!(
                "Runs the `{}` {}.",
                self.operation_name, self.kind
            )])
            .async_()
            .param(Param::new("client", CLIENT))
            .param(Param::new("variables", &self.variables_type).optional_if(self.variables_optional))
            .returns(format!("Promise<{}>", self.result_type))
            .body_line(format!(
                "return {}<{}, {}>(client, {}, \"{}\", {});",
                EXECUTE,
                self.result_type,
                self.variables_type,
                self.document,
                self.operation_name,
                variables
            ))
            .build()
    }

    fn sdk_entry(&self) -> String {
        let optional = if self.variables_optional { "?" } else { "" };
        format!(
            "{helper}: (variables{optional}: {ty}) => {helper}(client, variables),",
            helper = self.helper,
            optional = optional,
            ty = self.variables_type,
        )
    }
}

/// `getSdk(client)` binding every helper to one client, plus its `Sdk` type.
pub(crate) fn sdk(operations: &[PendingOperation]) -> Vec<String> {
    let body = if operations.is_empty() {
        CodeBuilder::typescript().line("return {};").build()
    } else {
        CodeBuilder::typescript()
            .block_with_close("return {", "};", |b| {
                b.each(operations, |b, operation| b.line(&operation.sdk_entry()))
            })
            .build()
    };
    let get_sdk = Fn::new("getSdk")
        .doc(vec!["Every operation helper bound to one client.".to_string()])
        .param(Param::new("client", CLIENT))
        .body(body)
        .build();
    let sdk_type = CodeBuilder::typescript()
        .line("export type Sdk = ReturnType<typeof getSdk>;")
        .build();
    vec![get_sdk, sdk_type]
}
