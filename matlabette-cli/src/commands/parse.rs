//! The `matlabette parse` command.

use crate::output::{self, Format};
use matlabette_diagnostic::emit;
use matlabette_parser::parse;

pub fn run(line: &str, format: Format) -> Result<(), String> {
    match parse(line) {
        Ok(tree) => {
            println!("{}", output::tree(&tree, format)?);
            Ok(())
        }
        Err(diagnostics) => {
            for diag in &diagnostics {
                emit(line, "<input>", diag);
            }
            Err("parse error".to_string())
        }
    }
}
