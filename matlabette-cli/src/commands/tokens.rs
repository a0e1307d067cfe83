//! The `matlabette tokens` command.

use crate::output::Format;
use matlabette_diagnostic::emit;
use matlabette_lexer::{Lexer, Token};

pub fn run(line: &str, format: Format) -> Result<(), String> {
    let (tokens, diagnostics) = Lexer::new(line).tokenize();

    for diag in &diagnostics {
        emit(line, "<input>", diag);
    }

    println!("{}", render(&tokens, format)?);

    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(format!("{} lexer error(s)", diagnostics.len()))
    }
}

fn render(tokens: &[Token], format: Format) -> Result<String, String> {
    match format {
        Format::Text => Ok(tokens
            .iter()
            .map(|t| format!("{:<22} {:?}", t.kind.name(), t.text))
            .collect::<Vec<_>>()
            .join("\n")),
        Format::Json => {
            let pairs: Vec<_> = tokens
                .iter()
                .map(|t| serde_json::json!({ "kind": t.kind, "text": t.text }))
                .collect();
            serde_json::to_string(&pairs).map_err(|e| e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json() {
        let (tokens, _) = Lexer::new("x = 1").tokenize();
        let json = render(&tokens, Format::Json).unwrap();
        assert_eq!(
            json,
            r#"[{"kind":"VARIABLE_NAME","text":"x"},{"kind":"ASSIGN_OPERATOR","text":"="},{"kind":"INTEGER_LITERAL","text":"1"},{"kind":"END_OF_LINE","text":""}]"#
        );
    }

    #[test]
    fn test_render_text_lists_every_token() {
        let (tokens, _) = Lexer::new("[1]").tokenize();
        let text = render(&tokens, Format::Text).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("LEFT_SQUARE_BRACKET"));
    }
}
