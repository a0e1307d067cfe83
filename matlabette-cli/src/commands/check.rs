//! The `matlabette check` command.

use crate::output;
use matlabette_diagnostic::{Diagnostic, emit};
use matlabette_parser::parse;
use std::fs;

/// A line of a checked file that failed to parse.
pub struct LineError {
    /// 1-based line number.
    pub line: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse each line of `source` with its own parser.
pub fn check_source(source: &str) -> (usize, Vec<LineError>) {
    let mut parsed = 0;
    let mut errors = Vec::new();

    for (index, line) in source.lines().enumerate() {
        match parse(line) {
            Ok(tree) => {
                log::debug!("line {}: {}", index + 1, tree);
                parsed += 1;
            }
            Err(diagnostics) => errors.push(LineError {
                line: index + 1,
                diagnostics,
            }),
        }
    }

    (parsed, errors)
}

/// Check that every line of a file parses. Diagnostics are always emitted;
/// `quiet` silences the status lines.
pub fn run(file: &str, verbose: bool, quiet: bool) -> Result<(), String> {
    let source =
        fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;

    let (parsed, errors) = check_source(&source);

    for err in &errors {
        let line = source.lines().nth(err.line - 1).unwrap_or_default();
        let name = format!("{}:{}", file, err.line);
        for diag in &err.diagnostics {
            emit(line, &name, diag);
        }
    }

    if verbose && !quiet {
        output::info(&format!("Parsed {} line(s)", parsed));
    }

    if !errors.is_empty() {
        return Err(format!("{} line(s) failed to parse", errors.len()));
    }

    if !quiet {
        output::success("OK - No errors found");
    }
    Ok(())
}
