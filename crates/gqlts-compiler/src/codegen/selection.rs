//! Response selection sets.
//!
//! For a root field returning `User`, the builder walks the schema's field
//! graph and renders every field of `User`, expanding nested object types
//! recursively:
//!
//! ```text
//! {
//!     id
//!     posts {
//!         title
//!     }
//! }
//! ```
//!
//! Expansion stops at types that are already on the current path, and
//! optionally at a maximum depth. What happens then is decided by the
//! [`SelectionGuard`].

use crate::config::{CyclePolicy, SelectionGuard};
use crate::diagnostic::CompilerError;
use crate::ir::{FieldIR, SchemaIR};
use super::indent;

/// Renders selection sets for return types of one schema.
pub struct ShapeBuilder<'a> {
    schema: &'a SchemaIR,
    guard: SelectionGuard,
}

impl<'a> ShapeBuilder<'a> {
    pub fn new(schema: &'a SchemaIR, guard: SelectionGuard) -> Self {
        Self { schema, guard }
    }

    /// Renders the selection set for `type_name`.
    ///
    /// Returns an empty string for types without fields. Otherwise the
    /// result starts with `{`, field lines are indented with `depth + 1`
    /// tabs and the closing brace with `depth` tabs.
    ///
    /// A nested type whose fields were all truncated is itself replaced by
    /// an omission marker. If that leaves `type_name` with nothing to
    /// select, the truncation is reported as an error even under
    /// [`CyclePolicy::Truncate`], since `{ }` is not a valid selection set.
    pub fn build(&self, type_name: &str, depth: usize) -> Result<String, CompilerError> {
        let mut path = Vec::new();
        match self.build_inner(type_name, depth, &mut path)? {
            Expansion::Leaf => Ok(String::new()),
            Expansion::Selected(shape) => Ok(shape),
            Expansion::Empty(truncation) => Err(truncation.into_error()),
        }
    }

    fn build_inner(
        &self,
        type_name: &str,
        depth: usize,
        path: &mut Vec<String>,
    ) -> Result<Expansion, CompilerError> {
        let fields = self.schema.fields_of(type_name);
        if fields.is_empty() {
            return Ok(Expansion::Leaf);
        }

        path.push(type_name.to_string());

        let mut output = String::from("{\n");
        let mut selected = false;
        let mut first_truncation: Option<Truncation> = None;

        for field in fields {
            let target = field.typ.innermost_name();
            output.push_str(&indent(depth + 1));

            let stop = match self.stop_reason(target, path) {
                Some(stop) if self.guard.on_cycle == CyclePolicy::Reject => {
                    return Err(Truncation::new(type_name, field, stop).into_error());
                }
                Some(stop) => stop,
                None => match self.build_inner(target, depth + 1, path)? {
                    Expansion::Leaf => {
                        output.push_str(&field.name);
                        output.push_str(" \n");
                        selected = true;
                        continue;
                    }
                    Expansion::Selected(shape) => {
                        output.push_str(&field.name);
                        output.push(' ');
                        output.push_str(&shape);
                        output.push('\n');
                        selected = true;
                        continue;
                    }
                    Expansion::Empty(inner) => {
                        let stop = inner.stop.clone();
                        if first_truncation.is_none() {
                            first_truncation = Some(inner);
                        }
                        stop
                    }
                },
            };

            tracing::debug!(
                owner = type_name,
                field = %field.name,
                reason = %stop.describe(),
                "truncated selection"
            );
            output.push_str(&format!(
                "# {}: {} omitted ({})\n",
                field.name,
                target,
                stop.describe()
            ));
            if first_truncation.is_none() {
                first_truncation = Some(Truncation::new(type_name, field, stop));
            }
        }

        path.pop();

        if !selected {
            if let Some(truncation) = first_truncation {
                return Ok(Expansion::Empty(truncation));
            }
        }

        output.push_str(&indent(depth));
        output.push('}');
        Ok(Expansion::Selected(output))
    }

    fn stop_reason(&self, target: &str, path: &[String]) -> Option<Stop> {
        if self.schema.fields_of(target).is_empty() {
            return None;
        }

        if let Some(start) = path.iter().position(|name| name == target) {
            let mut cycle: Vec<&str> = path[start..].iter().map(String::as_str).collect();
            cycle.push(target);
            return Some(Stop::Cycle(cycle.join(" -> ")));
        }

        match self.guard.max_depth {
            Some(max_depth) if path.len() >= max_depth.max(1) => Some(Stop::Depth(max_depth)),
            _ => None,
        }
    }
}

/// Outcome of expanding one type.
enum Expansion {
    /// The type has no fields to select.
    Leaf,
    Selected(String),
    /// Every field was truncated; holds the first truncation seen.
    Empty(Truncation),
}

/// Why a nested selection was not expanded.
#[derive(Clone)]
enum Stop {
    Cycle(String),
    Depth(usize),
}

impl Stop {
    fn describe(&self) -> String {
        match self {
            Stop::Cycle(_) => "cycle".to_string(),
            Stop::Depth(max) => format!("max depth {}", max),
        }
    }
}

/// A field that was left out of a selection, and why.
struct Truncation {
    field: String,
    stop: Stop,
}

impl Truncation {
    fn new(owner: &str, field: &FieldIR, stop: Stop) -> Self {
        Self {
            field: format!("{}.{}", owner, field.name),
            stop,
        }
    }

    fn into_error(self) -> CompilerError {
        let field = self.field;
        match self.stop {
            Stop::Cycle(cycle) => CompilerError::CyclicSelection { field, cycle },
            Stop::Depth(max_depth) => CompilerError::SelectionTooDeep { field, max_depth },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{TypeDefIR, TypeRef};

    fn field(name: &str, typ: &str) -> FieldIR {
        FieldIR::new(name, TypeRef::parse(typ).unwrap())
    }

    fn blog_schema() -> SchemaIR {
        SchemaIR::from_types([
            TypeDefIR::object("User", vec![field("id", "ID!"), field("posts", "[Post!]!")]),
            TypeDefIR::object("Post", vec![field("title", "String"), field("meta", "Meta")]),
            TypeDefIR::object("Meta", vec![field("views", "Int")]),
        ])
    }

    fn cyclic_schema() -> SchemaIR {
        SchemaIR::from_types([
            TypeDefIR::object("User", vec![field("id", "ID!"), field("best", "Friend")]),
            TypeDefIR::object("Friend", vec![field("since", "String"), field("user", "User!")]),
        ])
    }

    #[test]
    fn test_leaf_type_is_empty() {
        let schema = blog_schema();
        let builder = ShapeBuilder::new(&schema, SelectionGuard::default());
        assert_eq!(builder.build("String", 0).unwrap(), "");
        assert_eq!(builder.build("Unknown", 0).unwrap(), "");
    }

    #[test]
    fn test_scalar_only_type() {
        let schema = blog_schema();
        let builder = ShapeBuilder::new(&schema, SelectionGuard::default());
        assert_eq!(builder.build("Meta", 0).unwrap(), "{\n\tviews \n}");
    }

    #[test]
    fn test_nested_types_are_expanded() {
        let schema = blog_schema();
        let builder = ShapeBuilder::new(&schema, SelectionGuard::default());
        let expected = "{\n\
            \t\tid \n\
            \t\tposts {\n\
            \t\t\ttitle \n\
            \t\t\tmeta {\n\
            \t\t\t\tviews \n\
            \t\t\t}\n\
            \t\t}\n\
            \t}";
        assert_eq!(builder.build("User", 1).unwrap(), expected);
    }

    #[test]
    fn test_cycle_is_truncated_by_default() {
        let schema = cyclic_schema();
        let builder = ShapeBuilder::new(&schema, SelectionGuard::default());
        let expected = "{\n\
            \tid \n\
            \tbest {\n\
            \t\tsince \n\
            \t\t# user: User omitted (cycle)\n\
            \t}\n\
            }";
        assert_eq!(builder.build("User", 0).unwrap(), expected);
    }

    #[test]
    fn test_cycle_is_rejected_when_configured() {
        let schema = cyclic_schema();
        let guard = SelectionGuard {
            max_depth: None,
            on_cycle: CyclePolicy::Reject,
        };
        let builder = ShapeBuilder::new(&schema, guard);
        match builder.build("User", 0).unwrap_err() {
            CompilerError::CyclicSelection { field, cycle } => {
                assert_eq!(field, "Friend.user");
                assert_eq!(cycle, "User -> Friend -> User");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_self_reference_is_a_cycle() {
        let schema = SchemaIR::from_types([TypeDefIR::object(
            "Node",
            vec![field("id", "ID!"), field("children", "[Node!]")],
        )]);
        let builder = ShapeBuilder::new(&schema, SelectionGuard::default());
        assert_eq!(
            builder.build("Node", 0).unwrap(),
            "{\n\tid \n\t# children: Node omitted (cycle)\n}"
        );
    }

    #[test]
    fn test_max_depth_truncates() {
        let schema = blog_schema();
        let guard = SelectionGuard {
            max_depth: Some(2),
            on_cycle: CyclePolicy::Truncate,
        };
        let builder = ShapeBuilder::new(&schema, guard);
        let shape = builder.build("User", 0).unwrap();
        assert!(shape.contains("posts {"));
        assert!(shape.contains("# meta: Meta omitted (max depth 2)"));
        assert!(!shape.contains("views"));
    }

    #[test]
    fn test_max_depth_rejects() {
        let schema = blog_schema();
        let guard = SelectionGuard {
            max_depth: Some(1),
            on_cycle: CyclePolicy::Reject,
        };
        let builder = ShapeBuilder::new(&schema, guard);
        let err = builder.build("User", 0).unwrap_err();
        assert!(matches!(
            err,
            CompilerError::SelectionTooDeep { ref field, max_depth: 1 } if field == "User.posts"
        ));
    }

    #[test]
    fn test_fully_truncated_type_becomes_marker() {
        let schema = SchemaIR::from_types([
            TypeDefIR::object("User", vec![field("id", "ID!"), field("best", "Friend")]),
            TypeDefIR::object("Friend", vec![field("user", "User")]),
        ]);
        let builder = ShapeBuilder::new(&schema, SelectionGuard::default());
        assert_eq!(
            builder.build("User", 0).unwrap(),
            "{\n\tid \n\t# best: Friend omitted (cycle)\n}"
        );
    }

    #[test]
    fn test_nothing_left_to_select_is_an_error() {
        let schema = SchemaIR::from_types([TypeDefIR::object(
            "Node",
            vec![field("parent", "Node")],
        )]);
        let builder = ShapeBuilder::new(&schema, SelectionGuard::default());
        match builder.build("Node", 0).unwrap_err() {
            CompilerError::CyclicSelection { field, cycle } => {
                assert_eq!(field, "Node.parent");
                assert_eq!(cycle, "Node -> Node");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_max_depth_cutting_every_field_drops_the_block() {
        let schema = SchemaIR::from_types([
            TypeDefIR::object("User", vec![field("id", "ID!"), field("posts", "[Post!]!")]),
            TypeDefIR::object("Post", vec![field("meta", "Meta")]),
            TypeDefIR::object("Meta", vec![field("views", "Int")]),
        ]);
        let guard = SelectionGuard {
            max_depth: Some(2),
            on_cycle: CyclePolicy::Truncate,
        };
        let builder = ShapeBuilder::new(&schema, guard);
        assert_eq!(
            builder.build("User", 0).unwrap(),
            "{\n\tid \n\t# posts: Post omitted (max depth 2)\n}"
        );
    }

    #[test]
    fn test_sibling_branches_may_share_types() {
        let schema = SchemaIR::from_types([
            TypeDefIR::object("Pair", vec![field("left", "Point"), field("right", "Point")]),
            TypeDefIR::object("Point", vec![field("x", "Float")]),
        ]);
        let builder = ShapeBuilder::new(&schema, SelectionGuard::default());
        assert_eq!(
            builder.build("Pair", 0).unwrap(),
            "{\n\tleft {\n\t\tx \n\t}\n\tright {\n\t\tx \n\t}\n}"
        );
    }
}
