//! Compiler configuration.

use std::path::PathBuf;

/// Configuration for the gqlts compiler.
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// GraphQL schema file to read.
    pub schema_path: PathBuf,

    /// TypeScript file to create (or truncate) with the generated code.
    pub output_path: PathBuf,

    /// Settings that shape the generated code.
    pub context: GenerationContext,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from("schema.graphql"),
            output_path: PathBuf::from("generated.ts"),
            context: GenerationContext::default(),
        }
    }
}

/// How generated functions report failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Rejections propagate to the caller.
    #[default]
    Throw,
    /// Functions resolve to a `[value, error]` pair and never reject.
    Tuple,
}

impl ErrorMode {
    /// Interprets the raw `--error` flag: absent or empty selects throwing
    /// mode, any other value selects tuple mode.
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => ErrorMode::Tuple,
            _ => ErrorMode::Throw,
        }
    }
}

/// What the selection builder does when a field would re-enter a type that
/// is already being expanded, or would go past `max_depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Replace the field with a GraphQL comment and keep going.
    #[default]
    Truncate,
    /// Abort generation with an error.
    Reject,
}

impl std::str::FromStr for CyclePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truncate" => Ok(CyclePolicy::Truncate),
            "reject" => Ok(CyclePolicy::Reject),
            other => Err(format!(
                "unknown cycle policy '{}' (expected 'truncate' or 'reject')",
                other
            )),
        }
    }
}

/// Limits applied while expanding response selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionGuard {
    /// Maximum number of nested selection sets below a root field.
    pub max_depth: Option<usize>,
    pub on_cycle: CyclePolicy,
}

/// Per-run generation settings. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    /// Identifier of the client object used at every call site.
    pub client_name: String,
    /// Text written verbatim at the top of the output.
    pub header: String,
    pub error_mode: ErrorMode,
    pub selection: SelectionGuard,
}

impl GenerationContext {
    pub fn new(client_name: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            header: header.into(),
            error_mode: ErrorMode::default(),
            selection: SelectionGuard::default(),
        }
    }

    pub fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }

    pub fn with_selection_guard(mut self, selection: SelectionGuard) -> Self {
        self.selection = selection;
        self
    }
}

impl Default for GenerationContext {
    fn default() -> Self {
        Self::new("client", "import { gql } from '@apollo/client';")
    }
}

/// Turns the two-character sequence `\n` into a real newline.
pub fn decode_header(raw: &str) -> String {
    raw.replace("\\n", "\n")
}
