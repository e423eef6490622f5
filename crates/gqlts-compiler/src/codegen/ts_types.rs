//! TypeScript type generation from GraphQL type references.

use crate::diagnostic::CompilerError;
use crate::ir::TypeRef;

/// Converts a GraphQL type reference to a TypeScript type string.
///
/// Non-null wrappers are dropped: `String` and `String!` both become
/// `string`. Names that are not built-in scalars are used as-is and refer to
/// the generated interface of the same name.
pub fn to_ts_type(typ: &TypeRef) -> String {
    match typ {
        TypeRef::NonNull(inner) => to_ts_type(inner),
        TypeRef::List(inner) => format!("{}[]", to_ts_type(inner)),
        TypeRef::Named(name) => match scalar_to_ts(name) {
            Some(ts) => ts.to_string(),
            None => name.clone(),
        },
    }
}

/// Maps a type expression written in GraphQL syntax, e.g. `[Int!]!`.
pub fn map_type(expr: &str) -> Result<String, CompilerError> {
    TypeRef::parse(expr).map(|typ| to_ts_type(&typ))
}

/// TypeScript type of a built-in scalar.
fn scalar_to_ts(name: &str) -> Option<&'static str> {
    match name {
        "ID" | "String" => Some("string"),
        "Int" | "Float" => Some("number"),
        "Boolean" => Some("boolean"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_types() {
        assert_eq!(map_type("ID").unwrap(), "string");
        assert_eq!(map_type("String").unwrap(), "string");
        assert_eq!(map_type("Int").unwrap(), "number");
        assert_eq!(map_type("Float").unwrap(), "number");
        assert_eq!(map_type("Boolean").unwrap(), "boolean");
    }

    #[test]
    fn test_non_null_is_ignored() {
        for name in ["ID", "String", "Int", "Float", "Boolean", "User"] {
            assert_eq!(
                map_type(&format!("{}!", name)).unwrap(),
                map_type(name).unwrap()
            );
        }
    }

    #[test]
    fn test_object_and_custom_scalar_pass_through() {
        assert_eq!(map_type("User").unwrap(), "User");
        assert_eq!(map_type("DateTime!").unwrap(), "DateTime");
    }

    #[test]
    fn test_list_appends_array_suffix() {
        for inner in ["ID", "Int!", "User", "[String!]", "[[Boolean]!]"] {
            assert_eq!(
                map_type(&format!("[{}]", inner)).unwrap(),
                format!("{}[]", map_type(inner).unwrap())
            );
        }
    }

    #[test]
    fn test_nested_list() {
        assert_eq!(map_type("[[[Float!]!]]!").unwrap(), "number[][][]");
    }

    #[test]
    fn test_invalid_expression() {
        let err = map_type("[User").unwrap_err();
        assert!(matches!(err, CompilerError::InvalidTypeExpression { .. }));
    }
}
