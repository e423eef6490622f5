//! Compiler error types.
#![allow(unused_assignments)]

use std::path::PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur during generation.
#[allow(unused_assignments)]
#[derive(Error, Diagnostic, Debug)]
pub enum CompilerError {
    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("Failed to read file '{}': {message}", path.display())]
    #[diagnostic(code(gqlts::io::read_error))]
    IoError {
        path: PathBuf,
        message: String,
    },

    #[error("Failed to write file '{}': {message}", path.display())]
    #[diagnostic(
        code(gqlts::io::write_error),
        help("Check that the output directory exists and is writable")
    )]
    WriteError {
        path: PathBuf,
        message: String,
    },

    // =========================================================================
    // Parse Errors
    // =========================================================================
    #[error("Failed to parse schema '{}': {message}", path.display())]
    #[diagnostic(code(gqlts::parse::schema_parse_failed))]
    SchemaParse {
        path: PathBuf,
        message: String,
    },

    #[error("Invalid type expression '{expr}': {reason}")]
    #[diagnostic(
        code(gqlts::parse::invalid_type_expression),
        help("Type expressions look like `Name`, `Name!`, `[Name]` or `[Name!]!`")
    )]
    InvalidTypeExpression {
        expr: String,
        reason: String,
    },

    // =========================================================================
    // Schema Errors
    // =========================================================================
    #[error("Unknown type '{name}' referenced by {owner}.{field}")]
    #[diagnostic(
        code(gqlts::schema::unknown_type),
        help("Declare the type in the schema or fix the reference")
    )]
    UnknownType {
        name: String,
        owner: String,
        field: String,
    },

    #[error("Duplicate definition of type '{name}'")]
    #[diagnostic(
        code(gqlts::schema::duplicate_type),
        help("Use `extend type` to add fields to an existing type")
    )]
    DuplicateType {
        name: String,
        first_line: usize,
        second_line: usize,
    },

    #[error("Query root type '{name}' is not defined")]
    #[diagnostic(code(gqlts::schema::missing_query_root))]
    MissingQueryRoot {
        name: String,
    },

    #[error("Root type '{name}' must be an object type, found {kind}")]
    #[diagnostic(code(gqlts::schema::invalid_root_type))]
    InvalidRootType {
        name: String,
        kind: String,
    },

    #[error("Extension of undefined type '{name}'")]
    #[diagnostic(code(gqlts::schema::extension_without_type))]
    ExtensionWithoutType {
        name: String,
    },

    // =========================================================================
    // Code Generation Errors
    // =========================================================================
    #[error("Selection for '{field}' cycles back through {cycle}")]
    #[diagnostic(
        code(gqlts::codegen::cyclic_selection),
        help("Run with `--on-cycle truncate` to omit fields that re-enter a type")
    )]
    CyclicSelection {
        field: String,
        cycle: String,
    },

    #[error("Operation name '{name}' is used by both a query and a mutation")]
    #[diagnostic(
        code(gqlts::codegen::duplicate_operation),
        help("Generated functions share one namespace; rename one of the root fields")
    )]
    DuplicateOperation {
        name: String,
    },

    #[error("Selection for '{field}' exceeds the maximum depth of {max_depth}")]
    #[diagnostic(
        code(gqlts::codegen::selection_too_deep),
        help("Raise `--max-depth` or run with `--on-cycle truncate`")
    )]
    SelectionTooDeep {
        field: String,
        max_depth: usize,
    },
}

impl CompilerError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::IoError {
            path: path.into(),
            message: message.into(),
        }
    }
}
