//! TypeScript code generation from schema IR.
//!
//! One pass over the schema produces:
//! - an `export interface` for every object type that is not a root type
//! - an `async function` for every field of the query and mutation roots
//! - the `query` and `mutation` name-list exports
//!
//! All of it ends up in a single file, see [`assemble`].

mod arguments;
mod assemble;
mod function;
mod interface;
mod selection;
mod ts_types;

use crate::config::GenerationContext;
use crate::diagnostic::CompilerError;
use crate::ir::{is_reserved_name, OperationKind, SchemaIR, TypeDefIR, TypeKind};

pub use arguments::ArgumentFragments;
pub use assemble::{assemble, OutputBuffers};
pub use function::{
    generate_function, operation_document, renderer_for, FunctionRenderer, OperationCall,
    ThrowingRenderer, TupleRenderer,
};
pub use interface::generate_interface;
pub use selection::ShapeBuilder;
pub use ts_types::{map_type, to_ts_type};

/// Generated TypeScript code.
#[derive(Debug)]
pub struct GeneratedCode {
    /// Complete file content.
    pub source: String,
    /// Number of interfaces written.
    pub interfaces: usize,
    /// Number of query functions written.
    pub queries: usize,
    /// Number of mutation functions written.
    pub mutations: usize,
}

/// Generates the client library for a schema.
pub fn generate(schema: &SchemaIR, context: &GenerationContext) -> Result<GeneratedCode, CompilerError> {
    let renderer = renderer_for(context.error_mode);
    let shapes = ShapeBuilder::new(schema, context.selection);
    let mut buffers = OutputBuffers::new();

    for typ in schema.types.values() {
        if typ.kind != TypeKind::Object || is_reserved_name(&typ.name) {
            continue;
        }

        match schema.root_kind(&typ.name) {
            Some(kind) => {
                generate_root_functions(typ, kind, renderer.as_ref(), &shapes, context, &mut buffers)?;
            }
            None => {
                tracing::debug!(name = %typ.name, fields = typ.fields.len(), "generated interface");
                buffers.add_interface(typ.name.clone(), generate_interface(typ));
            }
        }
    }

    let interfaces = buffers.interface_count();
    let queries = buffers.query_count();
    let mutations = buffers.mutation_count();

    Ok(GeneratedCode {
        source: assemble(&context.header, buffers),
        interfaces,
        queries,
        mutations,
    })
}

/// Generates one function per field of a root operation type.
fn generate_root_functions(
    root: &TypeDefIR,
    kind: OperationKind,
    renderer: &dyn FunctionRenderer,
    shapes: &ShapeBuilder<'_>,
    context: &GenerationContext,
    buffers: &mut OutputBuffers,
) -> Result<(), CompilerError> {
    for field in &root.fields {
        if is_reserved_name(&field.name) {
            continue;
        }

        let arguments = ArgumentFragments::from_arguments(&field.arguments, renderer.call_site_indent());
        let shape = shapes.build(field.typ.innermost_name(), renderer.shape_depth())?;

        let call = OperationCall {
            field,
            kind,
            arguments: &arguments,
            shape: &shape,
            client_name: &context.client_name,
        };

        tracing::debug!(
            operation = kind.keyword(),
            name = %field.name,
            arguments = field.arguments.len(),
            "generated function"
        );
        buffers.add_function(kind, field.name.clone(), generate_function(renderer, &call))?;
    }

    Ok(())
}

/// Tab indentation used throughout the generated code.
pub(crate) fn indent(depth: usize) -> String {
    "\t".repeat(depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorMode;
    use crate::ir::{FieldIR, TypeRef};

    fn schema() -> SchemaIR {
        SchemaIR::from_types([
            TypeDefIR::object("Query", vec![FieldIR::new("me", TypeRef::named("User"))]),
            TypeDefIR::object(
                "Mutation",
                vec![FieldIR::new("logout", TypeRef::parse("Boolean!").unwrap())],
            ),
            TypeDefIR::object("User", vec![FieldIR::new("id", TypeRef::parse("ID!").unwrap())]),
            TypeDefIR::scalar("DateTime"),
        ])
    }

    #[test]
    fn test_generate_counts() {
        let generated = generate(&schema(), &GenerationContext::default()).unwrap();
        assert_eq!(generated.interfaces, 1);
        assert_eq!(generated.queries, 1);
        assert_eq!(generated.mutations, 1);
    }

    #[test]
    fn test_roots_are_not_interfaces() {
        let generated = generate(&schema(), &GenerationContext::default()).unwrap();
        assert!(generated.source.contains("export interface User {"));
        assert!(!generated.source.contains("export interface Query"));
        assert!(!generated.source.contains("export interface Mutation"));
        assert!(!generated.source.contains("DateTime"));
    }

    #[test]
    fn test_reserved_root_fields_are_skipped() {
        let mut schema = schema();
        if let Some(query) = schema.types.get_mut("Query") {
            query.fields.push(FieldIR::new("__typename", TypeRef::named("String")));
        }
        let generated = generate(&schema, &GenerationContext::default()).unwrap();
        assert_eq!(generated.queries, 1);
        assert!(!generated.source.contains("__typename"));
    }

    #[test]
    fn test_error_mode_selects_template() {
        let context = GenerationContext::default().with_error_mode(ErrorMode::Tuple);
        let generated = generate(&schema(), &context).unwrap();
        assert!(generated.source.contains("Promise<[User | null, any | null]>"));
        assert!(generated.source.contains("Promise<[boolean | null, any | null]>"));
    }

    #[test]
    fn test_header_comes_first() {
        let context = GenerationContext::new("api", "// generated\nimport { gql } from 'graphql-tag';");
        let generated = generate(&schema(), &context).unwrap();
        assert!(generated
            .source
            .starts_with("// generated\nimport { gql } from 'graphql-tag';\n\nexport interface User {"));
        assert!(generated.source.contains("await api.query({"));
        assert!(generated.source.contains("await api.mutate({"));
    }
}
