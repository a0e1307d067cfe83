//! Diagnostic and error reporting for matlabette.
//! matlabette 的诊断和错误报告。
//!
//! Diagnostics are rendered with ariadne against the single input line
//! they were produced from.
//! 诊断信息使用 ariadne 针对产生它们的输入行进行渲染。

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label};

use ariadne::{ColorGenerator, Config, Label as AriadneLabel, Report, ReportKind, Source};

fn build_report<'a>(
    filename: &'a str,
    diagnostic: &Diagnostic,
    color: bool,
) -> Report<'a, (&'a str, std::ops::Range<usize>)> {
    let mut colors = ColorGenerator::new();
    let mut report = Report::build(ReportKind::Error, filename, diagnostic.span.start)
        .with_config(Config::default().with_color(color))
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        let ariadne_label = AriadneLabel::new((filename, label.span.range()))
            .with_message(&label.message)
            .with_color(colors.next());
        report = report.with_label(ariadne_label);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish()
}

/// Render a diagnostic to stderr.
/// 将诊断信息渲染到标准错误输出。
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) {
    let report = build_report(filename, diagnostic, true);
    if let Err(err) = report.eprint((filename, Source::from(source))) {
        log::warn!("failed to write diagnostic for {filename}: {err}");
    }
}

/// Render a diagnostic to a plain (uncolored) string.
/// 将诊断信息渲染为不带颜色的字符串。
pub fn render(source: &str, filename: &str, diagnostic: &Diagnostic) -> String {
    let report = build_report(filename, diagnostic, false);
    let mut out = Vec::new();
    if let Err(err) = report.write((filename, Source::from(source)), &mut out) {
        log::warn!("failed to render diagnostic for {filename}: {err}");
    }
    String::from_utf8_lossy(&out).into_owned()
}
