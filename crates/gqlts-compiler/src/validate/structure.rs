//! Structure validation for root operation types.
//!
//! The query and mutation roots are optional unless the schema names them in
//! a `schema { ... }` definition, but when present they must be object types.

use crate::diagnostic::CompilerError;
use crate::ir::{SchemaIR, TypeKind};

/// Validates the root operation types of the schema.
pub fn validate_structure(schema: &SchemaIR) -> Result<(), CompilerError> {
    if schema.roots.explicit && schema.get(&schema.roots.query).is_none() {
        return Err(CompilerError::MissingQueryRoot {
            name: schema.roots.query.clone(),
        });
    }

    let roots = std::iter::once(&schema.roots.query).chain(schema.roots.mutation.as_ref());
    for root in roots {
        if let Some(typ) = schema.get(root) {
            if typ.kind != TypeKind::Object {
                return Err(CompilerError::InvalidRootType {
                    name: root.clone(),
                    kind: typ.kind.as_str().to_string(),
                });
            }
        }
    }

    Ok(())
}
