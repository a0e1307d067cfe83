//! The `matlabette repl` command.

use crate::output::{self, Format};
use clap::ValueEnum;
use matlabette_diagnostic::emit;
use matlabette_parser::parse;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

pub fn run(mut format: Format) -> Result<(), String> {
    println!("matlabette v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit to exit");
    println!();

    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if let Some(command) = line.strip_prefix(':') {
                    let mut parts = command.split_whitespace();
                    match (parts.next(), parts.next()) {
                        (Some("quit" | "q"), _) => break,
                        (Some("help" | "h"), _) => {
                            println!("Commands:");
                            println!("  :help, :h              Show this help");
                            println!("  :quit, :q              Exit the REPL");
                            println!("  :format text|json      Change the output format");
                        }
                        (Some("format"), Some(name)) => match Format::from_str(name, true) {
                            Ok(f) => format = f,
                            Err(e) => output::error(&e),
                        },
                        _ => println!("Unknown command: {}", line),
                    }
                    continue;
                }

                // A fresh parser for every line
                match parse(line) {
                    Ok(tree) => match output::tree(&tree, format) {
                        Ok(text) => println!("{text}"),
                        Err(e) => output::error(&e),
                    },
                    Err(diagnostics) => {
                        for diag in &diagnostics {
                            emit(line, "<repl>", diag);
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                log::error!("readline failed: {err}");
                break;
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
