//! GraphQL type references.

use std::fmt;

use crate::diagnostic::CompilerError;

/// A GraphQL type expression such as `String`, `[ID!]` or `[[Post]!]!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    /// Returns the named type at the bottom of all list and non-null wrappers.
    pub fn innermost_name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.innermost_name(),
        }
    }

    /// Parses a type expression written in GraphQL syntax.
    ///
    /// Whitespace is ignored. The grammar follows GraphQL type references:
    /// a name or a bracketed type, optionally followed by a single `!`.
    pub fn parse(expr: &str) -> Result<Self, CompilerError> {
        let compact: Vec<char> = expr.chars().filter(|c| !c.is_whitespace()).collect();
        let mut pos = 0;
        let parsed = parse_type(&compact, &mut pos).map_err(|reason| {
            CompilerError::InvalidTypeExpression {
                expr: expr.to_string(),
                reason,
            }
        })?;

        if pos != compact.len() {
            return Err(CompilerError::InvalidTypeExpression {
                expr: expr.to_string(),
                reason: format!(
                    "unexpected trailing input '{}'",
                    compact[pos..].iter().collect::<String>()
                ),
            });
        }

        Ok(parsed)
    }
}

fn parse_type(chars: &[char], pos: &mut usize) -> Result<TypeRef, String> {
    let base = match chars.get(*pos) {
        None => return Err("expected a type name or '['".to_string()),
        Some('[') => {
            *pos += 1;
            let inner = parse_type(chars, pos)?;
            match chars.get(*pos) {
                Some(']') => *pos += 1,
                _ => return Err("missing closing ']'".to_string()),
            }
            TypeRef::list(inner)
        }
        Some(c) if is_name_start(*c) => {
            let start = *pos;
            while chars.get(*pos).is_some_and(|c| is_name_continue(*c)) {
                *pos += 1;
            }
            TypeRef::Named(chars[start..*pos].iter().collect())
        }
        Some(c) => return Err(format!("unexpected character '{}'", c)),
    };

    if chars.get(*pos) == Some(&'!') {
        *pos += 1;
        return Ok(TypeRef::non_null(base));
    }

    Ok(base)
}

fn is_name_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_name_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}
