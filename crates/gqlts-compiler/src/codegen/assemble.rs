//! Final output assembly.
//!
//! Generated blocks are collected in unordered maps while the schema is
//! walked. Sorting happens here and only here, so the output for an
//! unchanged schema is byte-identical between runs.

use std::collections::HashMap;

use crate::diagnostic::CompilerError;
use crate::ir::OperationKind;

/// Rendered blocks collected during one generation pass.
#[derive(Debug, Default)]
pub struct OutputBuffers {
    interfaces: HashMap<String, String>,
    functions: HashMap<String, String>,
    queries: Vec<String>,
    mutations: Vec<String>,
}

impl OutputBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_interface(&mut self, name: impl Into<String>, code: String) {
        self.interfaces.insert(name.into(), code);
    }

    /// Records a client function. Query and mutation functions share one
    /// namespace in the output, so a name may only be used once.
    pub fn add_function(
        &mut self,
        kind: OperationKind,
        name: impl Into<String>,
        code: String,
    ) -> Result<(), CompilerError> {
        let name = name.into();
        if self.functions.contains_key(&name) {
            return Err(CompilerError::DuplicateOperation { name });
        }

        match kind {
            OperationKind::Query => self.queries.push(name.clone()),
            OperationKind::Mutation => self.mutations.push(name.clone()),
        }
        self.functions.insert(name, code);
        Ok(())
    }

    pub fn interface_count(&self) -> usize {
        self.interfaces.len()
    }

    pub fn query_count(&self) -> usize {
        self.queries.len()
    }

    pub fn mutation_count(&self) -> usize {
        self.mutations.len()
    }
}

/// Serializes the buffers: header, interfaces, functions, then the query and
/// mutation name lists, each section sorted by name.
pub fn assemble(header: &str, buffers: OutputBuffers) -> String {
    let mut output = String::new();

    output.push_str(header);
    output.push_str("\n\n");

    write_sorted(&mut output, &buffers.interfaces);
    write_sorted(&mut output, &buffers.functions);

    write_name_list(&mut output, OperationKind::Query.keyword(), buffers.queries);
    write_name_list(&mut output, OperationKind::Mutation.keyword(), buffers.mutations);

    output.push_str("\n\n");
    output
}

fn write_sorted(output: &mut String, blocks: &HashMap<String, String>) {
    let mut names: Vec<&String> = blocks.keys().collect();
    names.sort();
    for name in names {
        output.push_str(&blocks[name]);
    }
}

fn write_name_list(output: &mut String, list_name: &str, mut names: Vec<String>) {
    names.sort();

    let entries: Vec<String> = names.iter().map(|name| format!("\t{}", name)).collect();

    output.push_str(&format!("export const {} = {{\n", list_name));
    output.push_str(&entries.join(",\n"));
    output.push_str("\n};\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_sorted() {
        let mut buffers = OutputBuffers::new();
        buffers.add_interface("User", "I:User\n".to_string());
        buffers.add_interface("Account", "I:Account\n".to_string());
        buffers.add_function(OperationKind::Query, "users", "F:users\n".to_string()).unwrap();
        buffers.add_function(OperationKind::Mutation, "addUser", "F:addUser\n".to_string()).unwrap();
        buffers.add_function(OperationKind::Query, "account", "F:account\n".to_string()).unwrap();

        let output = assemble("// header", buffers);
        assert_eq!(
            output,
            "// header\n\n\
             I:Account\nI:User\n\
             F:account\nF:addUser\nF:users\n\
             export const query = {\n\taccount,\n\tusers\n};\n\
             export const mutation = {\n\taddUser\n};\n\
             \n\n"
        );
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let names = ["delta", "alpha", "charlie", "bravo"];

        let build = |order: &[&str]| {
            let mut buffers = OutputBuffers::new();
            for name in order {
                buffers.add_interface(name.to_uppercase(), format!("interface {}\n", name));
                buffers
                    .add_function(OperationKind::Query, *name, format!("fn {}\n", name))
                    .unwrap();
            }
            assemble("h", buffers)
        };

        let mut reversed = names;
        reversed.reverse();
        assert_eq!(build(&names), build(&reversed));
    }

    #[test]
    fn test_empty_lists() {
        let output = assemble("h", OutputBuffers::new());
        assert_eq!(
            output,
            "h\n\nexport const query = {\n\n};\nexport const mutation = {\n\n};\n\n\n"
        );
    }

    #[test]
    fn test_duplicate_function_name_is_rejected() {
        let mut buffers = OutputBuffers::new();
        buffers.add_function(OperationKind::Query, "user", String::new()).unwrap();
        let err = buffers
            .add_function(OperationKind::Mutation, "user", String::new())
            .unwrap_err();
        assert!(matches!(err, CompilerError::DuplicateOperation { ref name } if name == "user"));
        assert_eq!(buffers.mutation_count(), 0);
    }
}
