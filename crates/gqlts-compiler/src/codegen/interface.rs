//! TypeScript interface generation for object types.

use crate::ir::TypeDefIR;
use super::ts_types::to_ts_type;

/// Generates an exported interface with one property per field, followed by
/// a blank line. Nullability is not expressed; every property is required.
pub fn generate_interface(typ: &TypeDefIR) -> String {
    let mut output = String::new();

    output.push_str(&format!("export interface {} {{\n", typ.name));
    for field in &typ.fields {
        output.push_str(&format!("\t{}: {};\n", field.name, to_ts_type(&field.typ)));
    }
    output.push_str("}\n\n");

    output
}
