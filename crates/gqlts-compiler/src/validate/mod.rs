//! Validation of the schema IR before generation.

mod references;
mod structure;

use crate::diagnostic::CompilerError;
use crate::ir::SchemaIR;

/// Validates the entire schema.
pub fn validate_schema(schema: &SchemaIR) -> Result<(), CompilerError> {
    // Validate root operation types
    structure::validate_structure(schema)?;

    // Validate that every referenced type resolves
    references::validate_references(schema)?;

    Ok(())
}
