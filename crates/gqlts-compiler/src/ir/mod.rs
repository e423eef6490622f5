//! Language-agnostic schema representation.
//!
//! The frontend lowers the parsed GraphQL document into these types and the
//! code generators only ever read them. Nothing here is mutated once the
//! frontend hands the [`SchemaIR`] over.

mod type_ref;

pub use type_ref::TypeRef;

use std::collections::HashMap;
use std::path::PathBuf;

/// Scalars every GraphQL schema has without declaring them.
pub const BUILTIN_SCALARS: &[&str] = &["ID", "String", "Int", "Float", "Boolean"];

/// Returns true for names the generator never emits (built-in scalars and
/// introspection names).
pub fn is_reserved_name(name: &str) -> bool {
    name.starts_with("__") || BUILTIN_SCALARS.contains(&name)
}

/// What kind of definition a named type comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Object,
    Scalar,
    Enum,
    Input,
    Interface,
    Union,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Object => "object",
            TypeKind::Scalar => "scalar",
            TypeKind::Enum => "enum",
            TypeKind::Input => "input",
            TypeKind::Interface => "interface",
            TypeKind::Union => "union",
        }
    }
}

/// A named type definition.
///
/// Only object types carry fields; every other kind is recorded so that
/// references to it resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDefIR {
    pub name: String,
    pub kind: TypeKind,
    pub fields: Vec<FieldIR>,
    /// 1-based source line of the definition, when known.
    pub line: Option<usize>,
}

impl TypeDefIR {
    pub fn object(name: impl Into<String>, fields: Vec<FieldIR>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Object,
            fields,
            line: None,
        }
    }

    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Scalar,
            fields: Vec::new(),
            line: None,
        }
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// A field of an object type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIR {
    pub name: String,
    pub typ: TypeRef,
    pub arguments: Vec<ArgumentIR>,
}

impl FieldIR {
    pub fn new(name: impl Into<String>, typ: TypeRef) -> Self {
        Self {
            name: name.into(),
            typ,
            arguments: Vec::new(),
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<ArgumentIR>) -> Self {
        self.arguments = arguments;
        self
    }
}

/// An argument of a field.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentIR {
    pub name: String,
    pub typ: TypeRef,
}

impl ArgumentIR {
    pub fn new(name: impl Into<String>, typ: TypeRef) -> Self {
        Self {
            name: name.into(),
            typ,
        }
    }
}

/// The two operation roots the generator emits functions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    /// Keyword used in the GraphQL operation document.
    pub fn keyword(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }

    /// Method invoked on the client object.
    pub fn client_method(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutate",
        }
    }
}

/// Names of the root operation types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootTypes {
    pub query: String,
    /// `None` when an explicit schema definition names no mutation root.
    pub mutation: Option<String>,
    /// Whether the names came from an explicit `schema { ... }` definition.
    pub explicit: bool,
}

impl Default for RootTypes {
    fn default() -> Self {
        Self {
            query: "Query".to_string(),
            mutation: Some("Mutation".to_string()),
            explicit: false,
        }
    }
}

/// The complete schema document.
#[derive(Debug)]
pub struct SchemaIR {
    pub types: HashMap<String, TypeDefIR>,
    pub roots: RootTypes,
    pub source: PathBuf,
}

impl SchemaIR {
    pub fn new(source: PathBuf) -> Self {
        Self {
            types: HashMap::new(),
            roots: RootTypes::default(),
            source,
        }
    }

    /// Builds a schema from type definitions with the default root names.
    pub fn from_types(types: impl IntoIterator<Item = TypeDefIR>) -> Self {
        let mut schema = Self::new(PathBuf::from("<memory>"));
        for typ in types {
            schema.types.insert(typ.name.clone(), typ);
        }
        schema
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefIR> {
        self.types.get(name)
    }

    /// Fields of the named type; empty for leaves and unknown names.
    pub fn fields_of(&self, name: &str) -> &[FieldIR] {
        self.types
            .get(name)
            .map(|t| t.fields.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the operation kind if `name` is one of the root types.
    pub fn root_kind(&self, name: &str) -> Option<OperationKind> {
        if name == self.roots.query {
            Some(OperationKind::Query)
        } else if self.roots.mutation.as_deref() == Some(name) {
            Some(OperationKind::Mutation)
        } else {
            None
        }
    }

    /// Whether `name` resolves to a built-in scalar or a declared type.
    pub fn is_known(&self, name: &str) -> bool {
        BUILTIN_SCALARS.contains(&name) || self.types.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_names() {
        assert!(is_reserved_name("String"));
        assert!(is_reserved_name("__Schema"));
        assert!(!is_reserved_name("User"));
    }

    #[test]
    fn test_root_kind_uses_configured_names() {
        let mut schema = SchemaIR::new(std::path::PathBuf::from("test.graphql"));
        schema.roots = RootTypes {
            query: "RootQuery".to_string(),
            mutation: Some("RootMutation".to_string()),
            explicit: true,
        };
        assert_eq!(schema.root_kind("RootQuery"), Some(OperationKind::Query));
        assert_eq!(schema.root_kind("RootMutation"), Some(OperationKind::Mutation));
        assert_eq!(schema.root_kind("Query"), None);
    }

    #[test]
    fn test_missing_mutation_root_matches_nothing() {
        let mut schema = SchemaIR::new(std::path::PathBuf::from("test.graphql"));
        schema.roots = RootTypes {
            query: "Query".to_string(),
            mutation: None,
            explicit: true,
        };
        assert_eq!(schema.root_kind("Query"), Some(OperationKind::Query));
        assert_eq!(schema.root_kind("Mutation"), None);
    }

    #[test]
    fn test_fields_of_unknown_is_empty() {
        let schema = SchemaIR::from_types([TypeDefIR::scalar("DateTime")]);
        assert!(schema.fields_of("DateTime").is_empty());
        assert!(schema.fields_of("Nope").is_empty());
        assert!(schema.is_known("Int"));
        assert!(schema.is_known("DateTime"));
        assert!(!schema.is_known("Nope"));
    }
}
