//! matlabette CLI - parse lines of the matlabette array language.
//! matlabette CLI - 解析 matlabette 数组语言的输入行。

mod commands;
mod output;

use clap::{Parser, Subcommand};
use output::Format;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "matlabette")]
#[command(author, version, about = "matlabette - a tiny numeric array language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Parse one line and print its parse tree. / 解析一行并打印解析树。
    Parse {
        /// The line to parse. / 要解析的行。
        line: String,

        /// Output format. / 输出格式。
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Parse every line of a file. / 解析文件中的每一行。
    Check {
        /// The file to check. / 要检查的文件。
        file: String,
    },

    /// Print the tokens of one line. / 打印一行的 token。
    Tokens {
        /// The line to tokenize. / 要进行词法分析的行。
        line: String,

        /// Output format. / 输出格式。
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Start an interactive REPL. / 启动交互式 REPL。
    Repl {
        /// Initial output format. / 初始输出格式。
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Parse { line, format } => commands::parse::run(&line, format),
        Commands::Check { file } => commands::check::run(&file, cli.verbose, cli.quiet),
        Commands::Tokens { line, format } => commands::tokens::run(&line, format),
        Commands::Repl { format } => commands::repl::run(format),
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e);
        }
        std::process::exit(1);
    }
}
