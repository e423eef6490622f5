//! Schema frontends.
//!
//! A frontend reads schema source text and lowers it into [`SchemaIR`]. The
//! actual parsing is delegated to an external parser; the frontend only
//! translates its AST and rejects shapes the generator cannot handle.

pub mod graphql;

use std::path::Path;

use crate::diagnostic::CompilerError;
use crate::ir::SchemaIR;

pub use graphql::GraphQLFrontend;

/// Trait for schema frontends.
pub trait Frontend {
    /// Parses schema source text. `path` is only used for diagnostics.
    fn parse_source(&mut self, source: &str, path: &Path) -> Result<SchemaIR, CompilerError>;

    /// Reads and parses a schema file.
    fn parse_file(&mut self, path: &Path) -> Result<SchemaIR, CompilerError> {
        let source =
            std::fs::read_to_string(path).map_err(|e| CompilerError::io(path, e.to_string()))?;
        self.parse_source(&source, path)
    }
}
