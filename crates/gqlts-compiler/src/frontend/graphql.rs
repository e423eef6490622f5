//! GraphQL SDL frontend backed by `graphql-parser`.

use std::collections::HashMap;
use std::path::Path;

use graphql_parser::schema::{
    Definition, Document, Field, InputValue, Type, TypeDefinition, TypeExtension,
};

use crate::diagnostic::CompilerError;
use crate::ir::{is_reserved_name, ArgumentIR, FieldIR, RootTypes, SchemaIR, TypeDefIR, TypeKind, TypeRef};
use super::Frontend;

/// Frontend for GraphQL schema definition language files.
#[derive(Debug, Default)]
pub struct GraphQLFrontend;

impl GraphQLFrontend {
    pub fn new() -> Self {
        Self
    }
}

impl Frontend for GraphQLFrontend {
    fn parse_source(&mut self, source: &str, path: &Path) -> Result<SchemaIR, CompilerError> {
        let document = graphql_parser::parse_schema::<String>(source).map_err(|e| {
            CompilerError::SchemaParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        let schema = lower_document(&document, path)?;
        tracing::debug!(
            path = %path.display(),
            types = schema.types.len(),
            "lowered schema document"
        );
        Ok(schema)
    }
}

/// Converts a parsed document into IR.
///
/// Definitions are collected first so that `extend type` may appear before
/// the type it extends.
fn lower_document(document: &Document<'_, String>, path: &Path) -> Result<SchemaIR, CompilerError> {
    let mut schema = SchemaIR::new(path.to_path_buf());
    let mut extensions = Vec::new();

    for definition in &document.definitions {
        match definition {
            Definition::SchemaDefinition(def) => {
                schema.roots = RootTypes {
                    query: def.query.clone().unwrap_or_else(|| RootTypes::default().query),
                    mutation: def.mutation.clone(),
                    explicit: true,
                };
            }
            Definition::TypeDefinition(def) => {
                let lowered = lower_type_definition(def);
                if is_reserved_name(&lowered.name) {
                    continue;
                }
                insert_type(&mut schema.types, lowered)?;
            }
            Definition::TypeExtension(ext) => extensions.push(ext),
            Definition::DirectiveDefinition(_) => {}
        }
    }

    for ext in extensions {
        apply_extension(&mut schema.types, ext)?;
    }

    Ok(schema)
}

fn insert_type(types: &mut HashMap<String, TypeDefIR>, typ: TypeDefIR) -> Result<(), CompilerError> {
    if let Some(existing) = types.get(&typ.name) {
        return Err(CompilerError::DuplicateType {
            name: typ.name.clone(),
            first_line: existing.line.unwrap_or_default(),
            second_line: typ.line.unwrap_or_default(),
        });
    }
    types.insert(typ.name.clone(), typ);
    Ok(())
}

fn lower_type_definition(def: &TypeDefinition<'_, String>) -> TypeDefIR {
    let (name, kind, fields, line) = match def {
        TypeDefinition::Object(obj) => (
            &obj.name,
            TypeKind::Object,
            lower_fields(&obj.fields),
            obj.position.line,
        ),
        TypeDefinition::Scalar(s) => (&s.name, TypeKind::Scalar, Vec::new(), s.position.line),
        TypeDefinition::Enum(e) => (&e.name, TypeKind::Enum, Vec::new(), e.position.line),
        TypeDefinition::InputObject(i) => (&i.name, TypeKind::Input, Vec::new(), i.position.line),
        TypeDefinition::Interface(i) => (&i.name, TypeKind::Interface, Vec::new(), i.position.line),
        TypeDefinition::Union(u) => (&u.name, TypeKind::Union, Vec::new(), u.position.line),
    };

    TypeDefIR {
        name: name.clone(),
        kind,
        fields,
        line: Some(line),
    }
}

/// Merges an extension into its base type. Only object extensions add
/// anything the generator uses; the other kinds just have to extend
/// something that exists.
fn apply_extension(
    types: &mut HashMap<String, TypeDefIR>,
    ext: &TypeExtension<'_, String>,
) -> Result<(), CompilerError> {
    let name = match ext {
        TypeExtension::Object(obj) => &obj.name,
        TypeExtension::Scalar(s) => &s.name,
        TypeExtension::Enum(e) => &e.name,
        TypeExtension::InputObject(i) => &i.name,
        TypeExtension::Interface(i) => &i.name,
        TypeExtension::Union(u) => &u.name,
    };

    let Some(base) = types.get_mut(name) else {
        return Err(CompilerError::ExtensionWithoutType { name: name.clone() });
    };

    if let TypeExtension::Object(obj) = ext {
        base.fields.extend(lower_fields(&obj.fields));
    }

    Ok(())
}

fn lower_fields(fields: &[Field<'_, String>]) -> Vec<FieldIR> {
    fields
        .iter()
        .map(|field| {
            FieldIR::new(field.name.clone(), lower_type(&field.field_type))
                .with_arguments(lower_arguments(&field.arguments))
        })
        .collect()
}

fn lower_arguments(arguments: &[InputValue<'_, String>]) -> Vec<ArgumentIR> {
    arguments
        .iter()
        .map(|arg| ArgumentIR::new(arg.name.clone(), lower_type(&arg.value_type)))
        .collect()
}

fn lower_type(typ: &Type<'_, String>) -> TypeRef {
    match typ {
        Type::NamedType(name) => TypeRef::Named(name.clone()),
        Type::ListType(inner) => TypeRef::list(lower_type(inner)),
        Type::NonNullType(inner) => TypeRef::non_null(lower_type(inner)),
    }
}
