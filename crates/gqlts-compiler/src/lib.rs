//! # gqlts Compiler
//!
//! This crate turns a GraphQL schema into a typed TypeScript client library:
//! one interface per object type and one async function per query or
//! mutation field, each embedding its GraphQL operation and calling a
//! configurable client object.
//!
//! ## Architecture
//!
//! ```text
//! Schema SDL
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Frontend   │  graphql-parser, lowered to IR
//! │ (SDL → IR)   │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Validate   │  Root types & type references
//! │   (IR)       │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Codegen    │  Interfaces, functions, name lists
//! │  (IR → TS)   │
//! └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gqlts_compiler::{Compiler, CompilerConfig, GenerationContext};
//!
//! let config = CompilerConfig {
//!     schema_path: "schema.graphql".into(),
//!     output_path: "src/api.ts".into(),
//!     context: GenerationContext::new("client", "import { gql } from '@apollo/client';"),
//! };
//!
//! let result = Compiler::new(config).compile()?;
//! ```

pub mod codegen;
pub mod config;
pub mod diagnostic;
pub mod frontend;
pub mod ir;
pub mod validate;

use std::path::Path;

pub use config::{CompilerConfig, CyclePolicy, ErrorMode, GenerationContext, SelectionGuard};
pub use diagnostic::CompilerError;

use frontend::{Frontend, GraphQLFrontend};

/// The main compiler struct that orchestrates the generation pipeline.
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    /// Creates a new compiler with the given configuration.
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Generates the client library and writes it to the output path.
    ///
    /// This runs the full pipeline:
    /// 1. Parse the schema file into IR
    /// 2. Validate root types and type references
    /// 3. Generate interfaces and functions
    /// 4. Write the output file
    ///
    /// The output file is only touched once everything else succeeded.
    pub fn compile(&self) -> Result<CompileResult, CompilerError> {
        // Phase 1: Parse
        let schema = GraphQLFrontend::new().parse_file(&self.config.schema_path)?;

        // Phase 2: Validate
        validate::validate_schema(&schema)?;

        // Phase 3: Generate
        let generated = codegen::generate(&schema, &self.config.context)?;

        // Phase 4: Write output
        write_output(&self.config.output_path, &generated.source)?;

        tracing::info!(
            output = %self.config.output_path.display(),
            interfaces = generated.interfaces,
            queries = generated.queries,
            mutations = generated.mutations,
            "wrote client library"
        );

        Ok(CompileResult {
            interfaces: generated.interfaces,
            queries: generated.queries,
            mutations: generated.mutations,
        })
    }

    /// Generates the client library from schema source text without touching
    /// the filesystem.
    pub fn compile_source(&self, source: &str) -> Result<codegen::GeneratedCode, CompilerError> {
        let schema = GraphQLFrontend::new().parse_source(source, &self.config.schema_path)?;
        validate::validate_schema(&schema)?;
        codegen::generate(&schema, &self.config.context)
    }
}

/// Writes the whole output in one go, creating or truncating the file.
fn write_output(path: &Path, source: &str) -> Result<(), CompilerError> {
    std::fs::write(path, source).map_err(|e| CompilerError::WriteError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Result of a successful compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileResult {
    /// Number of interfaces generated.
    pub interfaces: usize,
    /// Number of query functions generated.
    pub queries: usize,
    /// Number of mutation functions generated.
    pub mutations: usize,
}
