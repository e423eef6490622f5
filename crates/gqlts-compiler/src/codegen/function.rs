//! Client function generation for root operation fields.
//!
//! Every query or mutation field becomes one `async function` that sends an
//! embedded GraphQL operation through the configured client. The two error
//! modes only differ in how the response is handed back; the client call and
//! the operation document are rendered by the same code for both.

use crate::config::ErrorMode;
use crate::ir::{FieldIR, OperationKind};
use super::arguments::ArgumentFragments;
use super::indent;
use super::ts_types::to_ts_type;

/// Everything needed to render one client function.
#[derive(Debug, Clone, Copy)]
pub struct OperationCall<'a> {
    pub field: &'a FieldIR,
    pub kind: OperationKind,
    pub arguments: &'a ArgumentFragments,
    /// Selection set for the return type, empty for leaf types.
    pub shape: &'a str,
    pub client_name: &'a str,
}

/// Renders the body of a client function in one error-handling style.
pub trait FunctionRenderer {
    /// Tabs in front of the client call inside the function body.
    fn body_indent(&self) -> usize;

    /// Declared return type given the mapped TypeScript field type.
    fn return_type(&self, mapped: &str) -> String;

    /// Writes the statements between the function's braces.
    fn render_body(&self, call: &OperationCall<'_>, output: &mut String);

    /// Tabs in front of each `variables` entry.
    fn call_site_indent(&self) -> usize {
        self.body_indent() + 2
    }

    /// Indentation depth to build the selection set with, so that it lines
    /// up under the root field inside the operation document.
    fn shape_depth(&self) -> usize {
        self.body_indent() + 3
    }
}

/// Returns the renderer for an error mode.
pub fn renderer_for(mode: ErrorMode) -> Box<dyn FunctionRenderer> {
    match mode {
        ErrorMode::Throw => Box::new(ThrowingRenderer),
        ErrorMode::Tuple => Box::new(TupleRenderer),
    }
}

/// Generates a complete function declaration followed by a blank line.
pub fn generate_function(renderer: &dyn FunctionRenderer, call: &OperationCall<'_>) -> String {
    let mut output = String::new();
    let mapped = to_ts_type(&call.field.typ);

    output.push_str(&format!(
        "async function {}({}): {} {{\n",
        call.field.name,
        call.arguments.params,
        renderer.return_type(&mapped)
    ));
    renderer.render_body(call, &mut output);
    output.push_str("}\n\n");

    output
}

/// Awaits the response and returns the field unconditionally. Rejections
/// reach the caller untouched.
pub struct ThrowingRenderer;

impl FunctionRenderer for ThrowingRenderer {
    fn body_indent(&self) -> usize {
        1
    }

    fn return_type(&self, mapped: &str) -> String {
        format!("Promise<{}>", mapped)
    }

    fn render_body(&self, call: &OperationCall<'_>, output: &mut String) {
        let i = indent(self.body_indent());
        write_client_call(call, self.body_indent(), output);
        output.push('\n');
        output.push_str(&format!("{}// Errors propagate to the caller\n", i));
        output.push_str(&format!("{}return response.data.{};\n", i, call.field.name));
    }
}

/// Resolves to `[data, null]` or `[null, error]` and never rejects.
pub struct TupleRenderer;

impl FunctionRenderer for TupleRenderer {
    fn body_indent(&self) -> usize {
        2
    }

    fn return_type(&self, mapped: &str) -> String {
        format!("Promise<[{} | null, any | null]>", mapped)
    }

    fn render_body(&self, call: &OperationCall<'_>, output: &mut String) {
        let name = &call.field.name;
        let i = indent(self.body_indent());
        let inner = indent(self.body_indent() + 1);

        output.push_str("\ttry {\n");
        write_client_call(call, self.body_indent(), output);
        output.push('\n');

        output.push_str(&format!(
            "{}if (response.errors && response.errors.length > 0) {{\n",
            i
        ));
        output.push_str(&format!("{}return [null, response.errors];\n", inner));
        output.push_str(&format!("{}}}\n\n", i));

        output.push_str(&format!(
            "{}if (!response.data || !response.data.{}) {{\n",
            i, name
        ));
        output.push_str(&format!(
            "{}return [null, new Error(`Invalid response structure`)];\n",
            inner
        ));
        output.push_str(&format!("{}}}\n\n", i));

        output.push_str(&format!("{}return [response.data.{}, null];\n", i, name));
        output.push_str("\t} catch (error) {\n");
        output.push_str("\t\treturn [null, error];\n");
        output.push_str("\t}\n");
    }
}

/// Writes `const response = await <client>.<method>({ ... });` at `base`
/// indentation.
fn write_client_call(call: &OperationCall<'_>, base: usize, output: &mut String) {
    let i = indent(base);
    let option = indent(base + 1);
    let keyword = call.kind.keyword();

    output.push_str(&format!(
        "{}const response = await {}.{}({{\n",
        i,
        call.client_name,
        call.kind.client_method()
    ));
    output.push_str(&format!("{}{}: gql(`\n", option, keyword));
    output.push_str(&operation_document(call, base + 2));
    output.push_str(&format!("{}`),\n", option));

    if call.arguments.call_site.is_empty() {
        output.push_str(&format!("{}variables: {{}}\n", option));
    } else {
        output.push_str(&format!("{}variables: {{\n", option));
        output.push_str(&call.arguments.call_site);
        output.push('\n');
        output.push_str(&format!("{}}}\n", option));
    }

    output.push_str(&format!("{}}});\n", i));
}

/// Renders the GraphQL operation embedded in the template literal:
///
/// ```text
/// query user($id: ID!) {
///     user(id: $id) { ... }
/// }
/// ```
pub fn operation_document(call: &OperationCall<'_>, base: usize) -> String {
    let name = &call.field.name;
    format!(
        "{i}{keyword} {name}{decl} {{\n{inner}{name}{usage} {shape}\n{i}}}\n",
        i = indent(base),
        inner = indent(base + 1),
        keyword = call.kind.keyword(),
        name = name,
        decl = call.arguments.variables_decl,
        usage = call.arguments.variables_usage,
        shape = call.shape,
    )
}
