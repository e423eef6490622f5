//! Reference validation.
//!
//! Every field and argument type must name a built-in scalar or a type
//! declared in the schema. The generator would otherwise emit TypeScript
//! that refers to an interface that never gets written.

use crate::diagnostic::CompilerError;
use crate::ir::{FieldIR, SchemaIR, TypeKind};

/// Validates that all type references resolve.
///
/// Types are visited in name order so the reported error is stable.
pub fn validate_references(schema: &SchemaIR) -> Result<(), CompilerError> {
    let mut names: Vec<&String> = schema.types.keys().collect();
    names.sort();

    for name in names {
        let typ = &schema.types[name];
        if typ.kind != TypeKind::Object {
            continue;
        }
        for field in &typ.fields {
            validate_field(schema, &typ.name, field)?;
        }
    }

    Ok(())
}

fn validate_field(schema: &SchemaIR, owner: &str, field: &FieldIR) -> Result<(), CompilerError> {
    let returned = field.typ.innermost_name();
    if !schema.is_known(returned) {
        return Err(CompilerError::UnknownType {
            name: returned.to_string(),
            owner: owner.to_string(),
            field: field.name.clone(),
        });
    }

    for arg in &field.arguments {
        let arg_type = arg.typ.innermost_name();
        if !schema.is_known(arg_type) {
            return Err(CompilerError::UnknownType {
                name: arg_type.to_string(),
                owner: owner.to_string(),
                field: format!("{}({})", field.name, arg.name),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ArgumentIR, TypeDefIR, TypeRef};

    #[test]
    fn test_builtin_and_declared_types_resolve() {
        let schema = SchemaIR::from_types([
            TypeDefIR::scalar("DateTime"),
            TypeDefIR::object(
                "User",
                vec![
                    FieldIR::new("id", TypeRef::parse("ID!").unwrap()),
                    FieldIR::new("joined", TypeRef::named("DateTime")),
                    FieldIR::new("friends", TypeRef::parse("[User!]").unwrap()),
                ],
            ),
        ]);
        assert!(validate_references(&schema).is_ok());
    }

    #[test]
    fn test_unknown_field_type() {
        let schema = SchemaIR::from_types([TypeDefIR::object(
            "User",
            vec![FieldIR::new("avatar", TypeRef::parse("[Image]").unwrap())],
        )]);
        match validate_references(&schema).unwrap_err() {
            CompilerError::UnknownType { name, owner, field } => {
                assert_eq!(name, "Image");
                assert_eq!(owner, "User");
                assert_eq!(field, "avatar");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_argument_type() {
        let schema = SchemaIR::from_types([TypeDefIR::object(
            "Query",
            vec![FieldIR::new("search", TypeRef::named("String"))
                .with_arguments(vec![ArgumentIR::new("filter", TypeRef::named("Filter"))])],
        )]);
        match validate_references(&schema).unwrap_err() {
            CompilerError::UnknownType { name, field, .. } => {
                assert_eq!(name, "Filter");
                assert_eq!(field, "search(filter)");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
