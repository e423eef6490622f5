//! Argument list fragments for generated functions.

use crate::ir::ArgumentIR;
use super::indent;
use super::ts_types::to_ts_type;

/// The four renderings of a field's arguments, each used at a different
/// position of the function template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentFragments {
    /// `id: string, limit: number`
    pub params: String,
    /// One `id: id` line per argument, for the `variables` object.
    pub call_site: String,
    /// `($id: ID!, $limit: Int)`, or empty without arguments.
    pub variables_decl: String,
    /// `(id: $id, limit: $limit)`, or empty without arguments.
    pub variables_usage: String,
}

impl ArgumentFragments {
    /// Renders the fragments in declaration order. `call_site_indent` is the
    /// number of tabs in front of each call-site line.
    pub fn from_arguments(arguments: &[ArgumentIR], call_site_indent: usize) -> Self {
        if arguments.is_empty() {
            return Self::default();
        }

        let params: Vec<String> = arguments
            .iter()
            .map(|arg| format!("{}: {}", arg.name, to_ts_type(&arg.typ)))
            .collect();

        let call_site: Vec<String> = arguments
            .iter()
            .map(|arg| format!("{}{}: {}", indent(call_site_indent), arg.name, arg.name))
            .collect();

        // Declarations keep the GraphQL type so the operation stays valid
        let declarations: Vec<String> = arguments
            .iter()
            .map(|arg| format!("${}: {}", arg.name, arg.typ))
            .collect();

        let usages: Vec<String> = arguments
            .iter()
            .map(|arg| format!("{}: ${}", arg.name, arg.name))
            .collect();

        Self {
            params: params.join(", "),
            call_site: call_site.join(",\n"),
            variables_decl: format!("({})", declarations.join(", ")),
            variables_usage: format!("({})", usages.join(", ")),
        }
    }
}
