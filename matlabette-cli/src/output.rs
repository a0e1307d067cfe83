//! Output formatting utilities.
//! 输出格式化工具。

use clap::ValueEnum;
use matlabette_syntax::ParseTree;

/// How parse results are printed.
/// 解析结果的打印方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Canonical one-line source form. / 规范的单行源码形式。
    Text,
    /// JSON. / JSON 格式。
    Json,
}

/// Render a parse tree in the given format.
pub fn tree(tree: &ParseTree, format: Format) -> Result<String, String> {
    match format {
        Format::Text if tree.is_empty() => Ok("(empty)".to_string()),
        Format::Text => Ok(tree.to_string()),
        Format::Json => serde_json::to_string(tree).map_err(|e| e.to_string()),
    }
}

/// Print a success message in green.
/// 以绿色打印成功消息。
pub fn success(msg: &str) {
    println!("\x1b[32m{msg}\x1b[0m");
}

/// Print an error message in red.
/// 以红色打印错误消息。
pub fn error(msg: &str) {
    eprintln!("\x1b[31merror:\x1b[0m {msg}");
}

/// Print an info message in blue.
/// 以蓝色打印信息消息。
pub fn info(msg: &str) {
    println!("\x1b[34minfo:\x1b[0m {msg}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use matlabette_syntax::Expr;

    #[test]
    fn test_text_format() {
        let t = ParseTree::assign("x", Expr::Scalar(3.0));
        assert_eq!(tree(&t, Format::Text).unwrap(), "x = 3");
        assert_eq!(tree(&ParseTree::Empty, Format::Text).unwrap(), "(empty)");
    }

    #[test]
    fn test_json_format() {
        let t = ParseTree::show("y");
        assert_eq!(tree(&t, Format::Json).unwrap(), r#"{"Show":"y"}"#);
    }
}
